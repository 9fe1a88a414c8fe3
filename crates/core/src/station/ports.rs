//! Port interface for the station directory

use async_trait::async_trait;
use padron_domain::{Result, Station, StationNumber};

/// Trait for fetching the station directory from the portal.
#[async_trait]
pub trait StationDirectory: Send + Sync {
    /// The full station list. The directory changes rarely; adapters may
    /// cache one snapshot for the lifetime of a form.
    async fn list_stations(&self) -> Result<Vec<Station>>;

    /// Find one station by its 5-digit number. First match wins when the
    /// directory carries duplicates.
    async fn find_by_number(&self, number: &StationNumber) -> Result<Option<Station>> {
        let stations = self.list_stations().await?;
        Ok(stations.into_iter().find(|s| s.nro_estacion == number.as_numeric()))
    }
}
