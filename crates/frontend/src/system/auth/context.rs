use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::storage;

/// Process-wide session state: restored on load, replaced on login, cleared
/// on logout.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

/// Injected session service owning the one `Session` signal for the app.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<Session>,
}

impl SessionContext {
    /// Restores the persisted token, if any. User identity is only known
    /// after a fresh login; pages that need more re-fetch it themselves.
    pub fn load() -> Self {
        let token = storage::get_token();
        Self {
            state: RwSignal::new(Session { token, user: None }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|session| session.token.is_some())
    }

    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|session| session.token.clone())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|session| session.user.clone())
    }

    pub fn login(&self, token: String, user: UserInfo) {
        leptos::logging::log!("session: login, user id {}", user.id);
        storage::save_token(&token);
        self.state.set(Session {
            token: Some(token),
            user: Some(user),
        });
    }

    pub fn logout(&self) {
        leptos::logging::log!("session: logout");
        storage::clear_token();
        self.state.set(Session::default());
    }
}

/// Hook to access the session service
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
