//! Report submission service - orchestrates the pipeline

use std::sync::Arc;

use chrono::Utc;
use padron_domain::{DailyReport, PadronError, Result, Station, SubmittedReport};
use thiserror::Error;
use tracing::{info, warn};

use super::assembler::{assemble, ReportRefs};
use super::draft::ReportDraft;
use super::ports::ReportGateway;
use super::validator::{validate, ValidationErrors};

/// Why a submission did not go through.
///
/// `Validation` and `Resolution` are local and recoverable by editing;
/// `Api` carries the transport or server-side failure, with the draft left
/// untouched for correction and resubmission.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("report failed validation")]
    Validation(ValidationErrors),

    #[error("{0}")]
    Resolution(String),

    #[error(transparent)]
    Api(PadronError),
}

/// Validates, assembles, and submits daily reports.
pub struct ReportService {
    gateway: Arc<dyn ReportGateway>,
}

impl ReportService {
    pub fn new(gateway: Arc<dyn ReportGateway>) -> Self {
        Self { gateway }
    }

    /// Submit the draft.
    ///
    /// Requires a resolved station identity and a selected registration
    /// center, and refuses an untouched draft. On success returns the
    /// payload that was accepted; the caller then clears the draft and
    /// re-locks the station.
    pub async fn submit(
        &self,
        draft: &ReportDraft,
        station: Option<&Station>,
        center_id: Option<i64>,
        operator_id: i64,
    ) -> std::result::Result<DailyReport, SubmitError> {
        if !draft.is_dirty() {
            return Err(SubmitError::Resolution("the report has not been filled in".into()));
        }

        let validated = validate(draft).map_err(SubmitError::Validation)?;

        let station = station.ok_or_else(|| {
            SubmitError::Resolution("the station number has not been validated".into())
        })?;
        let center_id = center_id.ok_or_else(|| {
            SubmitError::Resolution("a registration center must be selected".into())
        })?;

        let refs =
            ReportRefs { operator_id, station_id: station.id, center_id };
        let payload = assemble(&validated, refs, Utc::now());

        match self.gateway.submit(&payload).await {
            Ok(()) => {
                info!(
                    operator_id,
                    station_id = station.id,
                    center_id,
                    registro_c = payload.registro_c,
                    registro_r = payload.registro_r,
                    "daily report accepted"
                );
                Ok(payload)
            }
            Err(err) => {
                warn!(operator_id, error = %err, "daily report rejected");
                Err(SubmitError::Api(err))
            }
        }
    }

    /// Browse an operator's submitted reports.
    pub async fn history(&self, operator_id: i64) -> Result<Vec<SubmittedReport>> {
        self.gateway.reports_for_operator(operator_id).await
    }
}
