// exaroton-api: Async Rust client for the exaroton server hosting API

pub mod client;
pub mod config;
mod endpoints;
pub mod error;
pub mod models;
pub mod payload;
pub mod render;
pub mod transport;

pub use client::ExarotonClient;
pub use config::{ClientConfig, ConfigError};
pub use error::Error;
pub use models::{
    Account, CreditPool, CreditPoolMember, FileInfo, Logs, Players, Server, ServerStatus, Software,
};
pub use payload::{ContentKind, Payload};
pub use render::{Render, render, render_list};
pub use transport::{DEFAULT_BASE_URL, TransportConfig};
