//! Session principal helpers.

use salvo::{
    prelude::{Depot, StatusError},
    session::{Session, SessionDepotExt},
};
use tracing::warn;

use tailor_app::domain::access::principal::Principal;

/// Session entry holding the serialized principal.
pub(crate) const PRINCIPAL_SESSION_KEY: &str = "principal";

/// Read and write the request principal through the session.
///
/// A session holds at most one principal, so storing a tenant replaces an
/// admin and vice versa.
pub(crate) trait PrincipalSessionExt {
    /// The principal bound to this session, `Anonymous` when none is.
    fn principal(&self) -> Principal;

    fn set_principal(&mut self, principal: &Principal) -> Result<(), StatusError>;

    fn clear_principal(&mut self);
}

impl PrincipalSessionExt for Depot {
    fn principal(&self) -> Principal {
        self.session()
            .and_then(|session| session.get::<Principal>(PRINCIPAL_SESSION_KEY))
            .unwrap_or_default()
    }

    fn set_principal(&mut self, principal: &Principal) -> Result<(), StatusError> {
        if self.session_mut().is_none() {
            self.set_session(Session::new());
        }

        let Some(session) = self.session_mut() else {
            return Err(StatusError::internal_server_error());
        };

        session
            .insert(PRINCIPAL_SESSION_KEY, principal)
            .map_err(|error| {
                warn!("failed to store session principal: {error}");

                StatusError::internal_server_error()
            })
    }

    fn clear_principal(&mut self) {
        if let Some(session) = self.session_mut() {
            session.remove(PRINCIPAL_SESSION_KEY);
        }
    }
}
