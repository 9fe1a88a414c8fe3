//! Port interface for the registration-center list

use async_trait::async_trait;
use padron_domain::{RegistrationCenter, Result};

/// Trait for fetching the registration-center list from the portal.
#[async_trait]
pub trait CenterDirectory: Send + Sync {
    async fn list_centers(&self) -> Result<Vec<RegistrationCenter>>;
}
