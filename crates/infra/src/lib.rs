//! # Padron Infra
//!
//! Infrastructure adapters for the empadronamiento portal client:
//! - HTTP client with retry and timeout support
//! - Portal API adapter implementing the core port traits
//! - Bearer-token management with refresh-on-401
//! - Configuration loading from environment or file

pub mod api;
pub mod config;
pub mod http;

pub use api::{AccessTokenProvider, ApiError, PortalApi, PortalClient, SessionTokenProvider};
pub use config::PortalConfig;
pub use http::HttpClient;
