//! Port interfaces for report submission and browsing
//!
//! These traits define the boundary between the report pipeline and the
//! portal API adapter.

use async_trait::async_trait;
use padron_domain::{DailyReport, Result, SubmittedReport};

/// Trait for sending reports to and reading them back from the portal.
#[async_trait]
pub trait ReportGateway: Send + Sync {
    /// Submit an assembled daily report. The server response body is opaque
    /// to the core; acceptance is success, rejection surfaces as an error
    /// carrying the server message when one is provided.
    async fn submit(&self, report: &DailyReport) -> Result<()>;

    /// Reports previously submitted by one operator, newest first.
    async fn reports_for_operator(&self, operator_id: i64) -> Result<Vec<SubmittedReport>>;
}
