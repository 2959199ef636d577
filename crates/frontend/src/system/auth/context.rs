use contracts::system::auth::{authorize_login, Session, UserInfo};
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::http;

/// Session gate shared by the whole console.
///
/// The only writer of the persisted session; screens read the user and the
/// token through this handle.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// Restore the persisted session. Only sessions whose stored role is
    /// `Admin` or `SuperAdmin` count as authenticated.
    pub fn restore() -> Self {
        let session = storage::load_session().filter(|s| {
            let ok = s.is_admin();
            if !ok {
                log::warn!("Stored session is not an admin session, ignoring it");
            }
            ok
        });
        Self {
            session: RwSignal::new(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    /// Signs every API request; see [`http::install_signer`].
    pub fn bearer_header(&self) -> Option<String> {
        self.session.with_untracked(|s| s.as_ref().map(Session::bearer))
    }

    /// Authenticate against `POST /auth/login` and keep the session only for
    /// admin roles.
    pub async fn login(&self, email: String, password: String) -> Result<(), String> {
        let response = api::login(email.clone(), password).await?;
        let session = authorize_login(&email, response).map_err(|e| {
            log::warn!("Login rejected for non-admin account");
            e.to_string()
        })?;
        storage::save_session(&session);
        log::info!("Admin session started");
        self.session.set(Some(session));
        Ok(())
    }

    pub fn logout(&self) {
        storage::clear_session();
        self.session.set(None);
        log::info!("Admin session ended");
    }
}

/// Provides [`AuthContext`] to its children.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::restore();
    http::install_signer(move || auth.bearer_header());
    provide_context(auth);
    children()
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
