//! Counter code formatting
//!
//! A counter code is `{K}-{station}-{counter:04}-{digit}` with K being `C`
//! or `R`. [`counter_code`] is the strict encoder used for submission;
//! [`counter_code_preview`] is the lenient variant for live display, which
//! falls back to a placeholder while inputs are incomplete.

use padron_domain::constants::CODE_PLACEHOLDER;
use padron_domain::{CounterKind, CounterValue, StationNumber, TransactionDigit};

/// Encode a counter code from validated parts. Pure and deterministic.
pub fn counter_code(
    kind: CounterKind,
    station: &StationNumber,
    counter: CounterValue,
    digit: TransactionDigit,
) -> String {
    format!("{}-{}-{}-{}", kind.letter(), station.as_str(), counter.padded(), digit)
}

/// Preview a counter code from raw form text.
///
/// Returns the `"-----"` placeholder while any piece is missing. Display
/// only; submission always goes through [`counter_code`].
pub fn counter_code_preview(kind: CounterKind, station: &str, counter: &str, digit: &str) -> String {
    if station.is_empty() || counter.is_empty() || digit.is_empty() {
        return CODE_PLACEHOLDER.to_owned();
    }
    format!("{}-{}-{:0>4}-{}", kind.letter(), station, counter, digit)
}
