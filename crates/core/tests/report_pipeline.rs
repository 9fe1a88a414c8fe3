//! End-to-end run of the daily-report pipeline against in-memory ports:
//! resolve the station, pick a center, fill the draft, submit, and check
//! the exact payload handed to the gateway.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use padron_core::report::{Field, ReportDraft, ReportGateway, ReportService};
use padron_core::station::{LockState, StationDirectory, StationResolver};
use padron_core::CenterSelector;
use padron_domain::{
    DailyReport, RegistrationCenter, Result, Station, StationNumber, SubmittedReport,
};
use tokio::sync::Mutex;

struct InMemoryPortal {
    stations: Vec<Station>,
    submitted: Mutex<Vec<DailyReport>>,
}

#[async_trait]
impl StationDirectory for InMemoryPortal {
    async fn list_stations(&self) -> Result<Vec<Station>> {
        Ok(self.stations.clone())
    }
}

#[async_trait]
impl ReportGateway for InMemoryPortal {
    async fn submit(&self, report: &DailyReport) -> Result<()> {
        self.submitted.lock().await.push(report.clone());
        Ok(())
    }

    async fn reports_for_operator(&self, _operator_id: i64) -> Result<Vec<SubmittedReport>> {
        Ok(self
            .submitted
            .lock()
            .await
            .iter()
            .enumerate()
            .map(|(i, r)| SubmittedReport {
                id: i as i64 + 1,
                fecha_reporte: r.fecha_reporte,
                contador_inicial_c: r.contador_inicial_c.clone(),
                contador_final_c: r.contador_final_c.clone(),
                registro_c: r.registro_c,
                contador_inicial_r: r.contador_inicial_r.clone(),
                contador_final_r: r.contador_final_r.clone(),
                registro_r: r.registro_r,
                incidencias: r.incidencias.clone(),
                observaciones: r.observaciones.clone(),
                fecha_registro: r.fecha_registro,
                estado: r.estado.clone(),
                operador: r.operador,
                estacion: r.estacion,
                centro_empadronamiento: r.centro_empadronamiento,
            })
            .collect())
    }
}

fn portal() -> Arc<InMemoryPortal> {
    Arc::new(InMemoryPortal {
        stations: vec![Station {
            id: 21,
            codigo_equipo: "EQ-100".to_owned(),
            tipo_estacion: "FIJA".to_owned(),
            id_llave: 5,
            nro_estacion: 10795,
            contador_r: 0,
            contador_c: 0,
        }],
        submitted: Mutex::new(Vec::new()),
    })
}

fn centers() -> Vec<RegistrationCenter> {
    vec![RegistrationCenter {
        id: 99,
        provincia: "MURILLO".to_owned(),
        municipio: "LA PAZ".to_owned(),
        punto_de_empadronamiento: "ESCUELA CENTRAL".to_owned(),
        id_ruta: 1,
        nombre_ruta: "RUTA 1".to_owned(),
    }]
}

#[tokio::test]
async fn full_pipeline_produces_the_expected_payload() {
    let portal = portal();
    let assigned: StationNumber = "10795".parse().expect("station number");

    // Station identity opens locked onto the assignment.
    let mut resolver = StationResolver::new(portal.clone(), assigned.clone());
    resolver.initialize().await.expect("directory reachable");
    assert_eq!(resolver.state(), LockState::Locked);
    let station = resolver.station().cloned().expect("assigned station resolved");

    // Center cascade down to one registration point.
    let mut selector = CenterSelector::new(centers());
    selector.select_province("MURILLO");
    selector.select_municipality("LA PAZ");
    assert!(selector.select_point(99));

    // Fill the form the way an operator would.
    let today = NaiveDate::from_ymd_opt(2026, 8, 31).expect("date");
    let mut draft = ReportDraft::new(today, &assigned);
    draft.set(Field::CounterInitialC, "0100");
    draft.set(Field::CounterFinalC, "0150");
    draft.set(Field::CounterInitialR, "0200");
    draft.set(Field::CounterFinalR, "0260");
    draft.set(Field::TransactionDigitC, "3");
    draft.set(Field::TransactionDigitR, "4");

    // The live preview already shows the derived values.
    let preview = draft.preview();
    assert_eq!(preview.code_initial_c, "C-10795-0100-3");
    assert_eq!(preview.register_c, 50);

    let service = ReportService::new(portal.clone());
    let payload = service
        .submit(&draft, Some(&station), selector.selected_id(), 7)
        .await
        .expect("submission accepted");

    assert_eq!(payload.contador_inicial_c, "C-10795-0100-3");
    assert_eq!(payload.contador_final_c, "C-10795-0150-3");
    assert_eq!(payload.contador_inicial_r, "R-10795-0200-4");
    assert_eq!(payload.contador_final_r, "R-10795-0260-4");
    assert_eq!(payload.registro_c, 50);
    assert_eq!(payload.registro_r, 60);
    assert_eq!(payload.incidencias, "0");
    assert!(payload.sincronizar);
    assert_eq!(payload.estado, "ENVIO REPORTE");
    assert_eq!(payload.operador, 7);
    assert_eq!(payload.estacion, 21);
    assert_eq!(payload.centro_empadronamiento, 99);

    let history = service.history(7).await.expect("history readable");
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn switching_station_mid_form_changes_the_submitted_reference() {
    let portal = Arc::new(InMemoryPortal {
        stations: vec![
            Station {
                id: 21,
                codigo_equipo: "EQ-100".to_owned(),
                tipo_estacion: "FIJA".to_owned(),
                id_llave: 5,
                nro_estacion: 10795,
                contador_r: 0,
                contador_c: 0,
            },
            Station {
                id: 34,
                codigo_equipo: "EQ-200".to_owned(),
                tipo_estacion: "MOVIL".to_owned(),
                id_llave: 6,
                nro_estacion: 20001,
                contador_r: 0,
                contador_c: 0,
            },
        ],
        submitted: Mutex::new(Vec::new()),
    });

    let assigned: StationNumber = "10795".parse().expect("station number");
    let mut resolver = StationResolver::new(portal.clone(), assigned.clone());
    resolver.initialize().await.expect("directory reachable");

    resolver.unlock(true);
    assert!(resolver.resolve_input("20001").await);
    let station = resolver.station().cloned().expect("replacement resolved");

    let today = NaiveDate::from_ymd_opt(2026, 8, 31).expect("date");
    let mut draft = ReportDraft::new(today, &assigned);
    draft.set(Field::StationNumber, "20001");
    draft.set(Field::CounterInitialC, "0010");
    draft.set(Field::CounterFinalC, "0020");
    draft.set(Field::CounterInitialR, "0030");
    draft.set(Field::CounterFinalR, "0040");
    draft.set(Field::TransactionDigitC, "1");
    draft.set(Field::TransactionDigitR, "2");

    let service = ReportService::new(portal.clone());
    let payload = service
        .submit(&draft, Some(&station), Some(99), 7)
        .await
        .expect("submission accepted");

    assert_eq!(payload.estacion, 34);
    assert_eq!(payload.contador_inicial_c, "C-20001-0010-1");
}
