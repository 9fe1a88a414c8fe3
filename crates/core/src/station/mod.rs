//! Station identity: directory port and the lock/unlock resolver

mod ports;
mod resolver;

pub use ports::StationDirectory;
pub use resolver::{
    LockState, LookupOutcome, LookupTicket, ResolutionError, StationResolver,
};
