//! Station directory records

use serde::{Deserialize, Serialize};

/// A registration station as listed by the portal directory.
///
/// The directory is an immutable snapshot for the lifetime of a form; lookup
/// is by `nro_estacion`, first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub codigo_equipo: String,
    pub tipo_estacion: String,
    pub id_llave: i64,
    pub nro_estacion: u32,
    pub contador_r: u32,
    pub contador_c: u32,
}
