//! Portal API adapter
//!
//! [`PortalClient`] handles the transport concerns (bearer headers, status
//! classification, refresh-on-401); [`PortalApi`] maps the portal endpoints
//! onto the core port traits.

mod auth;
mod client;
mod errors;
mod portal;

pub use auth::{AccessTokenProvider, SessionTokenProvider};
pub use client::PortalClient;
pub use errors::{ApiError, ApiErrorCategory};
pub use portal::PortalApi;
