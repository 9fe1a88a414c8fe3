//! Portal endpoint bindings for the core port traits

use async_trait::async_trait;
use padron_core::center::CenterDirectory;
use padron_core::report::ReportGateway;
use padron_core::session::AuthGateway;
use padron_core::station::StationDirectory;
use padron_domain::{
    DailyReport, LoginCredentials, LoginResponse, OperatorInfo, RegistrationCenter, Result,
    Station, SubmittedReport,
};
use tracing::{debug, info};

use super::client::PortalClient;

/// The portal API, seen through the core ports.
pub struct PortalApi {
    client: PortalClient,
}

impl PortalApi {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for PortalApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse> {
        debug!(username = %credentials.username, "login request");
        let response: LoginResponse =
            self.client.post_public("/api/token/", credentials).await?;
        Ok(response)
    }

    async fn operator_info(&self, operator_id: i64) -> Result<OperatorInfo> {
        let info: OperatorInfo =
            self.client.get(&format!("/info-operador/{operator_id}/")).await?;
        Ok(info)
    }
}

#[async_trait]
impl StationDirectory for PortalApi {
    async fn list_stations(&self) -> Result<Vec<Station>> {
        let stations: Vec<Station> = self.client.get("/lista-estaciones-llaves/").await?;
        debug!(count = stations.len(), "station directory fetched");
        Ok(stations)
    }
}

#[async_trait]
impl CenterDirectory for PortalApi {
    async fn list_centers(&self) -> Result<Vec<RegistrationCenter>> {
        let centers: Vec<RegistrationCenter> =
            self.client.get("/lista-centros-empadronamiento/").await?;
        debug!(count = centers.len(), "center list fetched");
        Ok(centers)
    }
}

#[async_trait]
impl ReportGateway for PortalApi {
    async fn submit(&self, report: &DailyReport) -> Result<()> {
        // The portal echoes the created record back; only acceptance matters
        // here, the caller already holds the payload.
        let _created: serde_json::Value =
            self.client.post("/api/reportesdiarios/", report).await?;
        info!(operador = report.operador, estacion = report.estacion, "daily report submitted");
        Ok(())
    }

    async fn reports_for_operator(&self, operator_id: i64) -> Result<Vec<SubmittedReport>> {
        let reports: Vec<SubmittedReport> =
            self.client.get(&format!("/api/reportesdiarios/?operador={operator_id}")).await?;
        Ok(reports)
    }
}
