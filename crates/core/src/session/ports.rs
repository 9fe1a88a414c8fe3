//! Port interface for authentication

use async_trait::async_trait;
use padron_domain::{LoginCredentials, LoginResponse, OperatorInfo, Result};

/// Trait for the portal's authentication endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a token pair and the user record.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse>;

    /// Extended operator record, joined with station and center data.
    async fn operator_info(&self, operator_id: i64) -> Result<OperatorInfo>;
}
