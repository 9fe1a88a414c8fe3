//! Pure aggregation of submitted reports over the assigned-operator list
//!
//! The coordinator dashboard joins two fetches: the operators assigned to the
//! coordinator (part of the login record) and the submitted reports visible
//! to them. An operator counts as submitted when at least one of their
//! reports carries the requested date.

use chrono::NaiveDate;
use padron_domain::{AssignedOperator, SubmittedReport};

/// One operator's standing for the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorStatus {
    pub operator: AssignedOperator,
    pub submitted: bool,
    pub reports_today: usize,
}

/// Per-operator statuses plus the headline counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOverview {
    pub statuses: Vec<OperatorStatus>,
    pub submitted_count: usize,
    pub pending_count: usize,
}

/// Compute the completion overview for one day.
pub fn completion_overview(
    assigned: &[AssignedOperator],
    reports: &[SubmittedReport],
    date: NaiveDate,
) -> CompletionOverview {
    let statuses: Vec<OperatorStatus> = assigned
        .iter()
        .map(|op| {
            let reports_today = reports
                .iter()
                .filter(|r| r.operador == op.id_operador && r.fecha_reporte.date_naive() == date)
                .count();
            OperatorStatus {
                operator: op.clone(),
                submitted: reports_today > 0,
                reports_today,
            }
        })
        .collect();

    let submitted_count = statuses.iter().filter(|s| s.submitted).count();
    let pending_count = statuses.len() - submitted_count;
    CompletionOverview { statuses, submitted_count, pending_count }
}
