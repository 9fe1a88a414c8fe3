//! Assembles the wire payload from a validated draft
//!
//! Counter codes and register counts are recomputed here from the validated
//! values; nothing derived is carried over from the form state.

use chrono::{DateTime, NaiveTime, Utc};
use padron_domain::constants::{EMPTY_INCIDENTS, REPORT_SUBMITTED_STATUS};
use padron_domain::{CounterKind, DailyReport};

use super::delta::register_delta;
use super::format::counter_code;
use super::validator::ValidatedReport;

/// Foreign references attached to every submitted report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRefs {
    pub operator_id: i64,
    pub station_id: i64,
    pub center_id: i64,
}

/// Build the submission payload.
///
/// Blank incidents become `"0"`; blank observations stay empty, matching the
/// backend's asymmetric defaults. `submitted_at` becomes `fecha_registro`.
pub fn assemble(report: &ValidatedReport, refs: ReportRefs, submitted_at: DateTime<Utc>) -> DailyReport {
    let station = &report.station_number;

    let incidents = if report.incidents.trim().is_empty() {
        EMPTY_INCIDENTS.to_owned()
    } else {
        report.incidents.clone()
    };

    DailyReport {
        fecha_reporte: report.report_date.and_time(NaiveTime::MIN).and_utc(),
        contador_inicial_c: counter_code(
            CounterKind::C,
            station,
            report.counter_initial_c,
            report.txn_digit_c,
        ),
        contador_final_c: counter_code(
            CounterKind::C,
            station,
            report.counter_final_c,
            report.txn_digit_c,
        ),
        registro_c: register_delta(report.counter_initial_c, report.counter_final_c, report.skips_c),
        contador_inicial_r: counter_code(
            CounterKind::R,
            station,
            report.counter_initial_r,
            report.txn_digit_r,
        ),
        contador_final_r: counter_code(
            CounterKind::R,
            station,
            report.counter_final_r,
            report.txn_digit_r,
        ),
        registro_r: register_delta(report.counter_initial_r, report.counter_final_r, report.skips_r),
        incidencias: incidents,
        observaciones: report.observations.clone(),
        fecha_registro: submitted_at,
        sincronizar: true,
        estado: REPORT_SUBMITTED_STATUS.to_owned(),
        operador: refs.operator_id,
        estacion: refs.station_id,
        centro_empadronamiento: refs.center_id,
    }
}
