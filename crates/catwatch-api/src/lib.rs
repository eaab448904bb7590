// catwatch-api: Async Rust client for the Catalyst Center Intent API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod devices;
mod interfaces;

pub use client::IntentClient;
pub use error::Error;
pub use models::{Device, Interface, InterfaceErrors};
pub use transport::{TlsMode, TransportConfig};
