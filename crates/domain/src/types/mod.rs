//! Domain data types
//!
//! Wire-facing records keep the field names the portal API uses; the
//! validated value types live in [`report`].

pub mod center;
pub mod report;
pub mod station;
pub mod user;

pub use center::RegistrationCenter;
pub use report::{
    CounterKind, CounterValue, DailyReport, SkipCount, StationNumber, SubmittedReport,
    TransactionDigit,
};
pub use station::Station;
pub use user::{
    AssignedOperator, CoordinatorProfile, LoginCredentials, LoginResponse, OperatorDetails,
    OperatorInfo, OperatorProfile, Role, Route, Session, SessionTokens, User,
};
