// ABOUTME: API module containing the HTTP handler functions for the anonboard REST API.
// ABOUTME: A single sub-module covers message submission, listing, and counting.

pub mod messages;
