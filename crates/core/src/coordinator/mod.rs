//! Coordinator view of daily completion across assigned operators

mod service;

pub use service::{completion_overview, CompletionOverview, OperatorStatus};
