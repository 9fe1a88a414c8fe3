//! Structural and cross-field validation of the report draft
//!
//! Validation never throws: it collects per-field messages into
//! [`ValidationErrors`] and blocks submission until the draft is corrected.

use chrono::NaiveDate;
use padron_domain::{CounterValue, SkipCount, StationNumber, TransactionDigit};

use super::draft::{Field, ReportDraft};

/// One validation failure attached to a specific field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// The collected validation failures for a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// First message attached to the given field, if any.
    pub fn for_field(&self, field: Field) -> Option<&str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError { field, message: message.into() });
    }
}

/// A draft whose fields all parsed; input to the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReport {
    pub report_date: NaiveDate,
    pub station_number: StationNumber,
    pub counter_initial_c: CounterValue,
    pub counter_final_c: CounterValue,
    pub counter_initial_r: CounterValue,
    pub counter_final_r: CounterValue,
    pub txn_digit_c: TransactionDigit,
    pub txn_digit_r: TransactionDigit,
    pub skips_c: SkipCount,
    pub skips_r: SkipCount,
    pub incidents: String,
    pub observations: String,
}

/// Validate the draft, collecting every failure rather than stopping at the
/// first one.
pub fn validate(draft: &ReportDraft) -> Result<ValidatedReport, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let report_date = parse_date(draft.get(Field::ReportDate), &mut errors);
    let station_number = parse_station(draft.get(Field::StationNumber), &mut errors);

    let counter_initial_c =
        parse_counter(draft, Field::CounterInitialC, "initial C counter", &mut errors);
    let counter_final_c = parse_counter(draft, Field::CounterFinalC, "final C counter", &mut errors);
    let counter_initial_r =
        parse_counter(draft, Field::CounterInitialR, "initial R counter", &mut errors);
    let counter_final_r = parse_counter(draft, Field::CounterFinalR, "final R counter", &mut errors);

    let txn_digit_c = parse_digit(draft, Field::TransactionDigitC, "transaction C", &mut errors);
    let txn_digit_r = parse_digit(draft, Field::TransactionDigitR, "transaction R", &mut errors);

    let skips_c = parse_skips(draft, Field::SkipsC, &mut errors);
    let skips_r = parse_skips(draft, Field::SkipsR, &mut errors);

    // Cross-field rules only make sense once both sides parsed.
    if let (Some(initial), Some(end)) = (counter_initial_c, counter_final_c) {
        if end < initial {
            errors.push(
                Field::CounterFinalC,
                "final C counter cannot be lower than the initial one",
            );
        }
    }
    if let (Some(initial), Some(end)) = (counter_initial_r, counter_final_r) {
        if end < initial {
            errors.push(
                Field::CounterFinalR,
                "final R counter cannot be lower than the initial one",
            );
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All fields parsed if we reached this point.
    match (
        report_date,
        station_number,
        counter_initial_c,
        counter_final_c,
        counter_initial_r,
        counter_final_r,
        txn_digit_c,
        txn_digit_r,
        skips_c,
        skips_r,
    ) {
        (
            Some(report_date),
            Some(station_number),
            Some(counter_initial_c),
            Some(counter_final_c),
            Some(counter_initial_r),
            Some(counter_final_r),
            Some(txn_digit_c),
            Some(txn_digit_r),
            Some(skips_c),
            Some(skips_r),
        ) => Ok(ValidatedReport {
            report_date,
            station_number,
            counter_initial_c,
            counter_final_c,
            counter_initial_r,
            counter_final_r,
            txn_digit_c,
            txn_digit_r,
            skips_c,
            skips_r,
            incidents: draft.get(Field::Incidents).to_owned(),
            observations: draft.get(Field::Observations).to_owned(),
        }),
        _ => Err(errors),
    }
}

fn parse_date(raw: &str, errors: &mut ValidationErrors) -> Option<NaiveDate> {
    if raw.is_empty() {
        errors.push(Field::ReportDate, "report date is required");
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(Field::ReportDate, "report date must be YYYY-MM-DD");
            None
        }
    }
}

fn parse_station(raw: &str, errors: &mut ValidationErrors) -> Option<StationNumber> {
    if raw.is_empty() {
        errors.push(Field::StationNumber, "station number is required");
        return None;
    }
    match raw.parse() {
        Ok(number) => Some(number),
        Err(_) => {
            errors.push(Field::StationNumber, "station number must be exactly 5 digits");
            None
        }
    }
}

fn parse_counter(
    draft: &ReportDraft,
    field: Field,
    label: &str,
    errors: &mut ValidationErrors,
) -> Option<CounterValue> {
    let raw = draft.get(field);
    if raw.is_empty() {
        errors.push(field, format!("{label} is required"));
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(field, format!("{label} must be a number of up to 4 digits"));
            None
        }
    }
}

fn parse_digit(
    draft: &ReportDraft,
    field: Field,
    label: &str,
    errors: &mut ValidationErrors,
) -> Option<TransactionDigit> {
    let raw = draft.get(field);
    if raw.is_empty() {
        errors.push(field, format!("{label} number is required"));
        return None;
    }
    match raw.parse() {
        Ok(digit) => Some(digit),
        Err(_) => {
            errors.push(field, format!("{label} number must be a single digit"));
            None
        }
    }
}

fn parse_skips(draft: &ReportDraft, field: Field, errors: &mut ValidationErrors) -> Option<SkipCount> {
    match SkipCount::parse_or_zero(draft.get(field)) {
        Ok(skips) => Some(skips),
        Err(_) => {
            errors.push(field, "skip count must be a non-negative number");
            None
        }
    }
}
