//! Login, role validation, and session construction

mod ports;
mod service;

pub use ports::AuthGateway;
pub use service::{LoginError, SessionService};
