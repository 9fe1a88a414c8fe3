//! Lock/unlock state machine for the station identity on the report form
//!
//! The form opens with the operator's assigned station locked in. Unlocking
//! lets the operator type another number; every keystroke that produces a
//! complete 5-digit number starts a directory lookup. Lookups resolve out of
//! order, so each edit bumps a generation counter and a result is applied
//! only if it still carries the latest generation. Re-locking restores the
//! assigned identity without touching the network.

use std::sync::Arc;

use padron_domain::{Result, Station, StationNumber};
use tracing::{debug, warn};

use super::ports::StationDirectory;

/// Whether the station field is editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Unlocked,
}

/// Why the typed station number did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The number is well formed but absent from the directory.
    NotFound(StationNumber),
    /// The directory fetch itself failed.
    Lookup(String),
}

impl ResolutionError {
    pub fn message(&self) -> String {
        match self {
            Self::NotFound(number) => {
                format!("station {number} does not exist in the directory")
            }
            Self::Lookup(msg) => msg.clone(),
        }
    }
}

/// Claim on the lookup slot for one edit of the station field.
///
/// Applying an outcome against a stale ticket is a no-op; only the newest
/// edit may publish its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    generation: u64,
    number: StationNumber,
}

impl LookupTicket {
    pub fn number(&self) -> &StationNumber {
        &self.number
    }
}

/// What a directory lookup produced for one ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Station),
    NotFound,
    Failed(String),
}

/// Resolves the station identity used by the report form.
pub struct StationResolver {
    directory: Arc<dyn StationDirectory>,
    assigned_number: StationNumber,
    assigned_station: Option<Station>,
    state: LockState,
    input: String,
    generation: u64,
    resolved: Option<Station>,
    error: Option<ResolutionError>,
}

impl StationResolver {
    /// A resolver locked onto the operator's assigned station number. The
    /// assigned record itself is fetched by [`StationResolver::initialize`].
    pub fn new(directory: Arc<dyn StationDirectory>, assigned_number: StationNumber) -> Self {
        let input = assigned_number.as_str().to_owned();
        Self {
            directory,
            assigned_number,
            assigned_station: None,
            state: LockState::Locked,
            input,
            generation: 0,
            resolved: None,
            error: None,
        }
    }

    /// Resolve the assigned station against the directory.
    ///
    /// Missing assignments are not fatal here; the operator can still unlock
    /// and pick another station, and submission is blocked until something
    /// resolves.
    pub async fn initialize(&mut self) -> Result<()> {
        match self.directory.find_by_number(&self.assigned_number).await? {
            Some(station) => {
                debug!(number = %self.assigned_number, station_id = station.id, "assigned station resolved");
                self.assigned_station = Some(station.clone());
                self.resolved = Some(station);
                self.error = None;
            }
            None => {
                warn!(number = %self.assigned_number, "assigned station missing from the directory");
                self.error = Some(ResolutionError::NotFound(self.assigned_number.clone()));
            }
        }
        Ok(())
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn assigned_number(&self) -> &StationNumber {
        &self.assigned_number
    }

    /// The currently resolved station, if any.
    pub fn station(&self) -> Option<&Station> {
        self.resolved.as_ref()
    }

    pub fn error(&self) -> Option<&ResolutionError> {
        self.error.as_ref()
    }

    /// Make the station field editable. `confirmed` is the operator's answer
    /// to the warning dialog; without it the field stays locked.
    pub fn unlock(&mut self, confirmed: bool) {
        if !confirmed || self.state == LockState::Unlocked {
            return;
        }
        self.state = LockState::Unlocked;
        self.input.clear();
        self.resolved = None;
        self.error = None;
        self.generation += 1;
    }

    /// Re-lock onto the assigned station. Restores the assigned identity
    /// from the snapshot taken at initialization; no network involved. Any
    /// in-flight lookup becomes stale.
    pub fn lock(&mut self) {
        self.state = LockState::Locked;
        self.input = self.assigned_number.as_str().to_owned();
        self.resolved = self.assigned_station.clone();
        self.error = if self.assigned_station.is_some() {
            None
        } else {
            Some(ResolutionError::NotFound(self.assigned_number.clone()))
        };
        self.generation += 1;
    }

    /// Record one edit of the station field.
    ///
    /// Returns a ticket when the input is a complete 5-digit number that
    /// should be looked up. Partial input clears the current resolution and
    /// returns nothing. Ignored while locked.
    pub fn set_input(&mut self, raw: &str) -> Option<LookupTicket> {
        if self.state == LockState::Locked {
            return None;
        }
        self.input = raw.to_owned();
        self.generation += 1;
        self.resolved = None;
        self.error = None;

        let number: StationNumber = raw.parse().ok()?;
        Some(LookupTicket { generation: self.generation, number })
    }

    /// Run the directory lookup for a ticket. Borrows the resolver
    /// immutably so edits stay possible while the lookup is in flight.
    pub async fn lookup(&self, ticket: &LookupTicket) -> LookupOutcome {
        match self.directory.find_by_number(&ticket.number).await {
            Ok(Some(station)) => LookupOutcome::Found(station),
            Ok(None) => LookupOutcome::NotFound,
            Err(err) => LookupOutcome::Failed(err.to_string()),
        }
    }

    /// Publish a lookup result. Returns false when the ticket is stale, in
    /// which case nothing changes.
    pub fn apply(&mut self, ticket: &LookupTicket, outcome: LookupOutcome) -> bool {
        if ticket.generation != self.generation {
            debug!(number = %ticket.number, "discarding stale station lookup");
            return false;
        }
        match outcome {
            LookupOutcome::Found(station) => {
                self.resolved = Some(station);
                self.error = None;
            }
            LookupOutcome::NotFound => {
                self.resolved = None;
                self.error = Some(ResolutionError::NotFound(ticket.number.clone()));
            }
            LookupOutcome::Failed(msg) => {
                self.resolved = None;
                self.error = Some(ResolutionError::Lookup(msg));
            }
        }
        true
    }

    /// Edit-lookup-apply in one step, for callers without concurrent edits.
    pub async fn resolve_input(&mut self, raw: &str) -> bool {
        let Some(ticket) = self.set_input(raw) else {
            return false;
        };
        let outcome = self.lookup(&ticket).await;
        self.apply(&ticket, outcome)
    }
}
