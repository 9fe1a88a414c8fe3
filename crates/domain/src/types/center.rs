//! Registration-center records

use serde::{Deserialize, Serialize};

/// A registration center ("punto de empadronamiento").
///
/// The portal returns a flat list; selection narrows it through the
/// province → municipality → point cascade down to a single id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationCenter {
    pub id: i64,
    pub provincia: String,
    pub municipio: String,
    pub punto_de_empadronamiento: String,
    pub id_ruta: i64,
    pub nombre_ruta: String,
}
