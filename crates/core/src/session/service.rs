//! Builds and validates sessions
//!
//! The backend authenticates any valid credentials regardless of the role
//! picked in the form, so the role check happens here: the user's first
//! group must match the selected role, and an operator must carry a usable
//! station assignment before the report form can open.

use std::sync::Arc;

use padron_domain::{
    LoginCredentials, OperatorInfo, PadronError, Result, Role, Session, SessionTokens,
    StationNumber,
};
use thiserror::Error;
use tracing::{info, warn};

use super::ports::AuthGateway;

/// Why a login was refused after the backend accepted the credentials.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("the account does not belong to the {0} role")]
    WrongRole(Role),

    #[error("the operator has no station assigned")]
    NoAssignment,

    #[error(transparent)]
    Api(PadronError),
}

/// Authenticates users and produces [`Session`] values.
pub struct SessionService {
    gateway: Arc<dyn AuthGateway>,
}

impl SessionService {
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway }
    }

    /// Log in and validate the selected role against the account.
    pub async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> std::result::Result<Session, LoginError> {
        let response = self.gateway.login(credentials).await.map_err(LoginError::Api)?;
        let user = response.user;

        let in_group = user.groups.first().is_some_and(|g| g == credentials.role.group_name());
        if !in_group {
            warn!(username = %user.username, role = %credentials.role, "role mismatch at login");
            return Err(LoginError::WrongRole(credentials.role));
        }

        match credentials.role {
            Role::Operador => {
                let usable = user
                    .operador
                    .as_ref()
                    .is_some_and(|op| op.id_estacion != 0 && op.nro_estacion != 0);
                if !usable {
                    warn!(username = %user.username, "operator account without station assignment");
                    return Err(LoginError::NoAssignment);
                }
            }
            Role::Coordinador => {
                if user.coordinador.is_none() {
                    warn!(username = %user.username, "coordinator account without profile");
                    return Err(LoginError::WrongRole(Role::Coordinador));
                }
            }
        }

        info!(username = %user.username, role = %credentials.role, "login accepted");
        Ok(Session {
            user,
            role: credentials.role,
            tokens: SessionTokens { access: response.access, refresh: response.refresh },
        })
    }

    /// The assigned station number for an operator session.
    pub fn assigned_station(&self, session: &Session) -> Result<StationNumber> {
        let profile = session.user.operador.as_ref().ok_or_else(|| {
            PadronError::Auth("the session does not belong to an operator".to_owned())
        })?;
        StationNumber::from_numeric(profile.nro_estacion)
    }

    /// Extended operator record for the profile view.
    pub async fn operator_info(&self, operator_id: i64) -> Result<OperatorInfo> {
        self.gateway.operator_info(operator_id).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use padron_domain::{
        CoordinatorProfile, LoginResponse, OperatorProfile, Route, User,
    };

    use super::*;

    struct FixedAuth {
        user: User,
    }

    #[async_trait]
    impl AuthGateway for FixedAuth {
        async fn login(&self, _credentials: &LoginCredentials) -> Result<LoginResponse> {
            Ok(LoginResponse {
                refresh: "refresh-token".to_owned(),
                access: "access-token".to_owned(),
                user: self.user.clone(),
            })
        }

        async fn operator_info(&self, operator_id: i64) -> Result<OperatorInfo> {
            Err(PadronError::NotFound(format!("operator {operator_id}")))
        }
    }

    fn operator_user() -> User {
        User {
            id: 1,
            username: "operador1".to_owned(),
            email: String::new(),
            groups: vec!["Operador".to_owned()],
            operador: Some(OperatorProfile {
                id_operador: 7,
                ruta: Route { id: 1, nombre: "RUTA 1".to_owned() },
                id_estacion: 21,
                nro_estacion: 10795,
                tipo_operador: "FIJO".to_owned(),
            }),
            coordinador: None,
            operadores_asignados: Vec::new(),
        }
    }

    fn coordinator_user() -> User {
        User {
            id: 2,
            username: "coord1".to_owned(),
            email: String::new(),
            groups: vec!["Coordinador".to_owned()],
            operador: None,
            coordinador: Some(CoordinatorProfile {
                id: 3,
                nombre: "ANA".to_owned(),
                apellido_paterno: "MAMANI".to_owned(),
                apellido_materno: None,
                celular: None,
                cantidad_operadores: 4,
            }),
            operadores_asignados: Vec::new(),
        }
    }

    fn credentials(role: Role) -> LoginCredentials {
        LoginCredentials {
            username: "user".to_owned(),
            password: "secret".to_owned(),
            role,
        }
    }

    #[tokio::test]
    async fn operator_login_builds_a_session() {
        let service = SessionService::new(Arc::new(FixedAuth { user: operator_user() }));
        let session = service.login(&credentials(Role::Operador)).await.expect("login ok");
        assert_eq!(session.role, Role::Operador);
        assert_eq!(session.tokens.access, "access-token");

        let number = service.assigned_station(&session).expect("assignment present");
        assert_eq!(number.as_str(), "10795");
    }

    #[tokio::test]
    async fn operator_credentials_are_refused_on_the_coordinator_form() {
        let service = SessionService::new(Arc::new(FixedAuth { user: operator_user() }));
        let err = service.login(&credentials(Role::Coordinador)).await.unwrap_err();
        assert!(matches!(err, LoginError::WrongRole(Role::Coordinador)));
    }

    #[tokio::test]
    async fn operator_without_assignment_cannot_log_in() {
        let mut user = operator_user();
        if let Some(op) = user.operador.as_mut() {
            op.id_estacion = 0;
            op.nro_estacion = 0;
        }
        let service = SessionService::new(Arc::new(FixedAuth { user }));
        let err = service.login(&credentials(Role::Operador)).await.unwrap_err();
        assert!(matches!(err, LoginError::NoAssignment));
    }

    #[tokio::test]
    async fn coordinator_login_builds_a_session() {
        let service = SessionService::new(Arc::new(FixedAuth { user: coordinator_user() }));
        let session = service.login(&credentials(Role::Coordinador)).await.expect("login ok");
        assert_eq!(session.role, Role::Coordinador);
        assert!(service.assigned_station(&session).is_err());
    }
}
