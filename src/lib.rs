//! Library root for the `casino25_client` crate
//!
//! A JSON-RPC 2.0 client for the casino25 gaming-platform API. Parameters are
//! checked against each operation's declared fields before anything is sent.
//!
//! ```no_run
//! use casino25_client::{Client, ClientConfig, requests::Player};
//!
//! let client = Client::new(ClientConfig::new("https://api.example.com/jsonrpc"))?;
//! let player = client.create_player(Player::new("p1", "bg1"))?;
//! println!("{player}");
//! # Ok::<(), casino25_client::Casino25Error>(())
//! ```

// Core error handling
pub mod errors;

// Parameter validation and the operation catalog
pub mod operations;
pub mod param_validator;
pub mod requests;

// Wire protocol & transport
pub mod proto;
pub mod transport;

// Configuration & CLI
pub mod cli;
pub mod config;
pub mod config_loader;

// API facade
pub mod client;

#[cfg(test)]
mod tests {
    pub mod recording_transport;
    pub mod operation_catalog_test;
    pub mod client_validation_test;
}

pub use client::Client;
pub use config::ClientConfig;
pub use errors::{Casino25Error, Casino25Result};
pub use param_validator::{ParamType, Params};
pub use requests::IntoParams;
pub use transport::{HttpTransport, Transport};
