//! The in-progress daily report
//!
//! The draft holds raw form text; nothing here is validated beyond dirty
//! tracking. Derived values (codes, deltas) are recomputed from the current
//! fields on every [`ReportDraft::preview`] call so they can never go stale.

use chrono::NaiveDate;
use padron_domain::{CounterKind, CounterValue, SkipCount, StationNumber};

use super::delta::register_delta;
use super::format::counter_code_preview;

/// Identifies a draft field, both for edits and for validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ReportDate,
    StationNumber,
    CounterInitialC,
    CounterFinalC,
    CounterInitialR,
    CounterFinalR,
    TransactionDigitC,
    TransactionDigitR,
    SkipsC,
    SkipsR,
    Incidents,
    Observations,
}

/// Mutable state of the daily-report form for one operator session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    report_date: String,
    station_number: String,
    counter_initial_c: String,
    counter_final_c: String,
    counter_initial_r: String,
    counter_final_r: String,
    txn_digit_c: String,
    txn_digit_r: String,
    skips_c: String,
    skips_r: String,
    incidents: String,
    observations: String,
    dirty: bool,
}

impl ReportDraft {
    /// Fresh draft with today's date and the operator's assigned station.
    pub fn new(today: NaiveDate, assigned: &StationNumber) -> Self {
        Self {
            report_date: today.format("%Y-%m-%d").to_string(),
            station_number: assigned.as_str().to_owned(),
            counter_initial_c: String::new(),
            counter_final_c: String::new(),
            counter_initial_r: String::new(),
            counter_final_r: String::new(),
            txn_digit_c: "0".to_owned(),
            txn_digit_r: "0".to_owned(),
            skips_c: "0".to_owned(),
            skips_r: "0".to_owned(),
            incidents: String::new(),
            observations: String::new(),
            dirty: false,
        }
    }

    /// Overwrite one field with raw form text, marking the draft dirty.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
        self.dirty = true;
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ReportDate => &self.report_date,
            Field::StationNumber => &self.station_number,
            Field::CounterInitialC => &self.counter_initial_c,
            Field::CounterFinalC => &self.counter_final_c,
            Field::CounterInitialR => &self.counter_initial_r,
            Field::CounterFinalR => &self.counter_final_r,
            Field::TransactionDigitC => &self.txn_digit_c,
            Field::TransactionDigitR => &self.txn_digit_r,
            Field::SkipsC => &self.skips_c,
            Field::SkipsR => &self.skips_r,
            Field::Incidents => &self.incidents,
            Field::Observations => &self.observations,
        }
    }

    /// True once any field has been edited since creation or reset.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Restore all defaults; used after a successful submission or an
    /// explicit clear.
    pub fn reset(&mut self, today: NaiveDate, assigned: &StationNumber) {
        *self = Self::new(today, assigned);
    }

    /// Derived values for the current field contents.
    pub fn preview(&self) -> DraftPreview {
        DraftPreview {
            code_initial_c: self.code_preview(CounterKind::C, &self.counter_initial_c),
            code_final_c: self.code_preview(CounterKind::C, &self.counter_final_c),
            code_initial_r: self.code_preview(CounterKind::R, &self.counter_initial_r),
            code_final_r: self.code_preview(CounterKind::R, &self.counter_final_r),
            register_c: self.delta_preview(
                &self.counter_initial_c,
                &self.counter_final_c,
                &self.skips_c,
            ),
            register_r: self.delta_preview(
                &self.counter_initial_r,
                &self.counter_final_r,
                &self.skips_r,
            ),
        }
    }

    fn code_preview(&self, kind: CounterKind, counter: &str) -> String {
        let digit = match kind {
            CounterKind::C => &self.txn_digit_c,
            CounterKind::R => &self.txn_digit_r,
        };
        counter_code_preview(kind, &self.station_number, counter, digit)
    }

    fn delta_preview(&self, initial: &str, end: &str, skips: &str) -> u32 {
        let (Ok(initial), Ok(end)) =
            (initial.parse::<CounterValue>(), end.parse::<CounterValue>())
        else {
            return 0;
        };
        let skips = SkipCount::parse_or_zero(skips).unwrap_or(SkipCount::ZERO);
        register_delta(initial, end, skips)
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::ReportDate => &mut self.report_date,
            Field::StationNumber => &mut self.station_number,
            Field::CounterInitialC => &mut self.counter_initial_c,
            Field::CounterFinalC => &mut self.counter_final_c,
            Field::CounterInitialR => &mut self.counter_initial_r,
            Field::CounterFinalR => &mut self.counter_final_r,
            Field::TransactionDigitC => &mut self.txn_digit_c,
            Field::TransactionDigitR => &mut self.txn_digit_r,
            Field::SkipsC => &mut self.skips_c,
            Field::SkipsR => &mut self.skips_r,
            Field::Incidents => &mut self.incidents,
            Field::Observations => &mut self.observations,
        }
    }
}

/// Derived display values: four counter codes and both register counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPreview {
    pub code_initial_c: String,
    pub code_final_c: String,
    pub code_initial_r: String,
    pub code_final_r: String,
    pub register_c: u32,
    pub register_r: u32,
}
