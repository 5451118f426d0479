// ABOUTME: Core library for anonboard, containing the shared message data model.
// ABOUTME: This crate defines the types used across the store, server, and client.

pub mod message;

pub use message::Message;
