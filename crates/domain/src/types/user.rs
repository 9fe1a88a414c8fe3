//! User, role, and session types
//!
//! The session is an explicit value created at login and passed to every
//! operation that needs credentials; there is no ambient session store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two portal roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Operador,
    Coordinador,
}

impl Role {
    /// Group name the backend uses for this role.
    pub fn group_name(self) -> &'static str {
        match self {
            Self::Operador => "Operador",
            Self::Coordinador => "Coordinador",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_name())
    }
}

/// Login request body plus the role the user selected in the form.
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
    #[serde(skip)]
    pub role: Role,
}

/// A route an operator is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: i64,
    pub nombre: String,
}

/// Operator-specific profile attached to a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorProfile {
    pub id_operador: i64,
    pub ruta: Route,
    pub id_estacion: i64,
    pub nro_estacion: u32,
    pub tipo_operador: String,
}

/// Coordinator-specific profile attached to a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatorProfile {
    pub id: i64,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: Option<String>,
    pub celular: Option<String>,
    pub cantidad_operadores: u32,
}

/// One operator under a coordinator's supervision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedOperator {
    pub id: i64,
    pub id_operador: i64,
    pub tipo_operador: String,
    pub ruta: String,
    pub nro_estacion: u32,
    pub username: String,
    pub email: String,
}

/// The user record returned at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub groups: Vec<String>,
    #[serde(default)]
    pub operador: Option<OperatorProfile>,
    #[serde(default)]
    pub coordinador: Option<CoordinatorProfile>,
    #[serde(default)]
    pub operadores_asignados: Vec<AssignedOperator>,
}

/// Raw login response from `POST /api/token/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub refresh: String,
    pub access: String,
    pub user: User,
}

/// Bearer token pair for an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access: String,
    pub refresh: String,
}

/// An authenticated session: created on login, destroyed on logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub role: Role,
    pub tokens: SessionTokens,
}

/// Extended operator record from `GET /info-operador/{id}/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorInfo {
    pub success: bool,
    pub operador_id: i64,
    pub data: OperatorDetails,
}

/// The payload inside [`OperatorInfo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorDetails {
    pub nombre: String,
    pub apellido_paterno: String,
    #[serde(default)]
    pub apellido_materno: String,
    #[serde(default)]
    pub celular: String,
    #[serde(default)]
    pub carnet: String,
    pub tipo_operador: String,
    #[serde(default)]
    pub nombre_coordinador: Option<String>,
    pub id_estacion: i64,
    pub codigo_equipo: String,
    pub modelo_estacion: String,
    pub tipo_estacion: String,
    pub nro_estacion: u32,
    pub contador_r: u32,
    pub contador_c: u32,
    pub punto_de_empadronamiento: String,
    pub municipio: String,
    pub provincia: String,
    pub departamento: String,
    pub nombre_ruta: String,
}
