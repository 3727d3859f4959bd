// ABOUTME: Server bootstrap and HTTP client for the listkeeper binary
// ABOUTME: Environment configuration, router layering, and a typed API client

pub mod client;
pub mod config;
pub mod server;

pub use client::{ChecklistClient, ClientError, ClientResult};
pub use config::{Config, ConfigError};
pub use server::{build_app, init_tracing, run_server, ServerError};
