use contracts::system::auth::UsuarioSessao;
use web_sys::window;

const TOKEN_KEY: &str = "jwtToken";
const USER_KEY: &str = "userData";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session after a successful login.
pub fn save_session(token: &str, user: &UsuarioSessao) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Restore a previously stored session, if both halves are present.
pub fn load_session() -> Option<(String, UsuarioSessao)> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let user_json = storage.get_item(USER_KEY).ok()??;
    let user = serde_json::from_str(&user_json).ok()?;
    Some((token, user))
}

/// Drop the stored credentials (logout or session expiry).
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
