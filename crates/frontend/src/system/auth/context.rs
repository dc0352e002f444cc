use contracts::system::auth::{SessaoAberta, UsuarioSessao};
use leptos::prelude::*;

use super::storage;

/// Token and identity of the logged-in user. Owned by this module alone:
/// set at login, cleared at logout or on the first 401/403.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UsuarioSessao>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin()).unwrap_or(false)
    }
}

/// Session context provider component. Restores a stored session on mount;
/// the token is trusted until the backend answers 401/403.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let initial = match storage::load_session() {
        Some((token, user)) => SessionState {
            token: Some(token),
            user: Some(user),
        },
        None => SessionState::default(),
    };
    let (session, set_session) = signal(initial);

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session state.
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    (session, set_session)
}

/// Store a freshly opened session.
pub fn open_session(set_session: &WriteSignal<SessionState>, sessao: SessaoAberta) {
    storage::save_session(&sessao.token, &sessao.user);
    set_session.set(SessionState {
        token: Some(sessao.token),
        user: Some(sessao.user),
    });
}

/// Explicit logout.
pub fn close_session(set_session: &WriteSignal<SessionState>) {
    storage::clear_session();
    set_session.set(SessionState::default());
}

/// The single 401/403 path: clear credentials and fall back to the login
/// screen. Screens call this on `LoadOutcome::Reauthenticate`.
pub fn expire_session(set_session: &WriteSignal<SessionState>) {
    log::warn!("sessão rejeitada pelo backend, redirecionando para login");
    close_session(set_session);
}
