//! Domain constants shared across the pipeline

/// Status label stamped on every submitted daily report.
pub const REPORT_SUBMITTED_STATUS: &str = "ENVIO REPORTE";

/// Display placeholder shown while a counter code cannot be formed yet.
pub const CODE_PLACEHOLDER: &str = "-----";

/// Value stored for the incidents field when the operator leaves it blank.
pub const EMPTY_INCIDENTS: &str = "0";

/// Station numbers are exactly this many digits, zero-padded.
pub const STATION_NUMBER_DIGITS: usize = 5;

/// Counter values are rendered zero-padded to this width inside codes.
pub const COUNTER_CODE_DIGITS: usize = 4;

/// Upper bound for a counter value (inclusive).
pub const COUNTER_MAX: u16 = 9999;
