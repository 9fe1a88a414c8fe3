//! # Padron Core
//!
//! Business logic for the empadronamiento portal: the daily-report
//! computation and validation pipeline, the station lock/unlock resolver,
//! the registration-center cascade, and the session/coordinator services.
//!
//! Infrastructure is reached exclusively through the port traits defined in
//! each module's `ports.rs`; this crate performs no I/O of its own.

pub mod center;
pub mod coordinator;
pub mod report;
pub mod session;
pub mod station;

// Re-export the service entry points
pub use center::{CenterDirectory, CenterSelector};
pub use coordinator::{completion_overview, CompletionOverview, OperatorStatus};
pub use report::{ReportDraft, ReportGateway, ReportService, SubmitError};
pub use session::{AuthGateway, LoginError, SessionService};
pub use station::{LockState, StationDirectory, StationResolver};
