//! Validated value types for the daily-report pipeline and the report wire
//! records.
//!
//! The portal backend owns the wire contract; field names stay as the API
//! expects them (`contador_inicial_c`, `registro_r`, ...). The value types
//! (`StationNumber`, `CounterValue`, `TransactionDigit`, `SkipCount`) carry
//! their invariants in the constructor so downstream code never re-checks
//! digit patterns.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{COUNTER_MAX, STATION_NUMBER_DIGITS};
use crate::errors::PadronError;

/// Which counter a code belongs to: `C` (changes) or `R` (new registers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterKind {
    C,
    R,
}

impl CounterKind {
    /// The single-letter prefix used in counter codes.
    pub fn letter(self) -> char {
        match self {
            Self::C => 'C',
            Self::R => 'R',
        }
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A station number: exactly 5 ASCII digits, zero-padded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationNumber(String);

impl StationNumber {
    /// Build from a raw numeric id, zero-padding to 5 digits.
    pub fn from_numeric(n: u32) -> Result<Self, PadronError> {
        if n > 99_999 {
            return Err(PadronError::InvalidInput(format!(
                "station number {n} does not fit in 5 digits"
            )));
        }
        Ok(Self(format!("{n:05}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, for equality checks against directory records.
    pub fn as_numeric(&self) -> u32 {
        // Invariant: the string is exactly 5 ASCII digits.
        self.0.parse().unwrap_or(0)
    }
}

impl FromStr for StationNumber {
    type Err = PadronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == STATION_NUMBER_DIGITS && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_owned()))
        } else {
            Err(PadronError::InvalidInput(format!(
                "station number must be exactly {STATION_NUMBER_DIGITS} digits, got {s:?}"
            )))
        }
    }
}

impl fmt::Display for StationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A counter reading in `[0, 9999]`, accepted from 1-4 digit strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterValue(u16);

impl CounterValue {
    pub fn new(value: u16) -> Result<Self, PadronError> {
        if value > COUNTER_MAX {
            return Err(PadronError::InvalidInput(format!(
                "counter value {value} exceeds {COUNTER_MAX}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// Rendered zero-padded to 4 digits, as counter codes require.
    pub fn padded(self) -> String {
        format!("{:04}", self.0)
    }
}

impl FromStr for CounterValue {
    type Err = PadronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = (1..=4).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
        if !valid {
            return Err(PadronError::InvalidInput(format!(
                "counter must be 1 to 4 digits, got {s:?}"
            )));
        }
        // Length <= 4 digits, so this cannot overflow u16.
        let value: u16 = s.parse().map_err(|_| {
            PadronError::InvalidInput(format!("counter {s:?} is not a number"))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for CounterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single transaction digit, `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionDigit(u8);

impl TransactionDigit {
    pub fn new(digit: u8) -> Result<Self, PadronError> {
        if digit > 9 {
            return Err(PadronError::InvalidInput(format!(
                "transaction digit must be 0-9, got {digit}"
            )));
        }
        Ok(Self(digit))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for TransactionDigit {
    type Err = PadronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [b] if b.is_ascii_digit() => Ok(Self(b - b'0')),
            _ => Err(PadronError::InvalidInput(format!(
                "transaction digit must be a single digit, got {s:?}"
            ))),
        }
    }
}

impl fmt::Display for TransactionDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of skipped counter positions; blank input means zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipCount(u32);

impl SkipCount {
    pub const ZERO: Self = Self(0);

    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Parse from the form field, treating blank as zero.
    pub fn parse_or_zero(s: &str) -> Result<Self, PadronError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }
        trimmed
            .parse()
            .map(Self)
            .map_err(|_| PadronError::InvalidInput(format!("skip count {s:?} is not a number")))
    }
}

/// The daily-report submission payload, exactly as the portal API expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub fecha_reporte: DateTime<Utc>,
    pub contador_inicial_c: String,
    pub contador_final_c: String,
    pub registro_c: u32,
    pub contador_inicial_r: String,
    pub contador_final_r: String,
    pub registro_r: u32,
    pub incidencias: String,
    pub observaciones: String,
    pub fecha_registro: DateTime<Utc>,
    pub sincronizar: bool,
    pub estado: String,
    pub operador: i64,
    pub estacion: i64,
    pub centro_empadronamiento: i64,
}

/// A report as returned by the portal when browsing history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedReport {
    pub id: i64,
    pub fecha_reporte: DateTime<Utc>,
    pub contador_inicial_c: String,
    pub contador_final_c: String,
    pub registro_c: u32,
    pub contador_inicial_r: String,
    pub contador_final_r: String,
    pub registro_r: u32,
    #[serde(default)]
    pub incidencias: String,
    #[serde(default)]
    pub observaciones: String,
    pub fecha_registro: DateTime<Utc>,
    pub estado: String,
    pub operador: i64,
    pub estacion: i64,
    pub centro_empadronamiento: i64,
}
