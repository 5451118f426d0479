// ABOUTME: Interactive terminal client for the anonboard server.
// ABOUTME: A menu loop over plain HTTP calls; connection failures are reported distinctly from server errors.

use std::io::{self, BufRead, Write};

use anonboard_core::Message;
use clap::Parser;
use reqwest::Client;

#[derive(Debug, Parser)]
#[command(name = "anonboard-client", about = "Anonymous message board client")]
struct Args {
    /// Base URL of the anonboard server
    #[arg(long, default_value = "http://127.0.0.1:7171")]
    server: String,
}

fn display_menu() {
    println!();
    println!("=== Anonymous Message Board ===");
    println!("1. View all messages");
    println!("2. Send a message");
    println!("3. Get message count");
    println!("4. Exit");
}

/// Read one trimmed line from stdin after printing a prompt.
fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn report_request_error(err: &reqwest::Error) {
    if err.is_connect() {
        println!("Cannot connect to the server.");
    } else {
        println!("Error communicating with the server.");
    }
}

async fn view_messages(client: &Client, base: &str) {
    match client.get(format!("{}/messages", base)).send().await {
        Ok(resp) if resp.status().is_success() => match resp.json::<Vec<Message>>().await {
            Ok(messages) => {
                println!();
                println!("--- All Messages ---");
                for msg in &messages {
                    println!("[{}] {}", msg.timestamp.to_rfc3339(), msg.text);
                }
            }
            Err(_) => println!("Error fetching messages."),
        },
        Ok(_) => println!("Error fetching messages."),
        Err(e) => report_request_error(&e),
    }
}

async fn send_message(client: &Client, base: &str) -> io::Result<()> {
    let text = prompt("Enter your message: ")?;
    let body = serde_json::json!({ "text": text });

    match client
        .post(format!("{}/messages", base))
        .json(&body)
        .send()
        .await
    {
        Ok(resp) if resp.status() == reqwest::StatusCode::CREATED => {
            println!("Message sent successfully.");
        }
        Ok(resp) if resp.status() == reqwest::StatusCode::BAD_REQUEST => {
            println!("The server rejected the message (empty text?).");
        }
        Ok(_) => println!("Error sending message."),
        Err(e) => report_request_error(&e),
    }

    Ok(())
}

async fn get_message_count(client: &Client, base: &str) {
    match client.get(format!("{}/messages/count", base)).send().await {
        Ok(resp) if resp.status().is_success() => {
            match resp.json::<serde_json::Value>().await {
                Ok(value) => match value["count"].as_u64() {
                    Some(count) => println!("Total messages: {}", count),
                    None => println!("Error fetching message count."),
                },
                Err(_) => println!("Error fetching message count."),
            }
        }
        Ok(_) => println!("Error fetching message count."),
        Err(e) => report_request_error(&e),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let base = args.server.trim_end_matches('/').to_string();
    let client = Client::new();

    loop {
        display_menu();
        let choice = prompt("Choose an option (1-4): ")?;
        match choice.trim() {
            "1" => view_messages(&client, &base).await,
            "2" => send_message(&client, &base).await?,
            "3" => get_message_count(&client, &base).await,
            "4" => {
                println!("Exiting.");
                break;
            }
            _ => println!("Invalid option. Please try again."),
        }
    }

    Ok(())
}
