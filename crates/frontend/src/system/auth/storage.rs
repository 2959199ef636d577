use contracts::system::auth::{Session, UserInfo};
use web_sys::window;

const TOKEN_KEY: &str = "adminToken";
const REFRESH_TOKEN_KEY: &str = "adminRefreshToken";
const USER_KEY: &str = "adminUser";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist token, refresh token and user record.
pub fn save_session(session: &Session) {
    let Some(storage) = get_local_storage() else {
        log::warn!("localStorage unavailable, session not persisted");
        return;
    };
    let _ = storage.set_item(TOKEN_KEY, &session.token);
    match &session.refresh_token {
        Some(refresh) => {
            let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
        }
        None => {
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
    match serde_json::to_string(&session.user) {
        Ok(json) => {
            let _ = storage.set_item(USER_KEY, &json);
        }
        Err(e) => log::error!("Failed to serialize user record: {}", e),
    }
}

/// Bearer token of the stored session, if any.
fn load_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Stored session; `None` unless both the token and a parseable user
/// record are present.
pub fn load_session() -> Option<Session> {
    let storage = get_local_storage()?;
    let token = load_token()?;
    let user_json = storage.get_item(USER_KEY).ok()??;
    let user: UserInfo = match serde_json::from_str(&user_json) {
        Ok(user) => user,
        Err(e) => {
            log::warn!("Stored user record is unreadable: {}", e);
            return None;
        }
    };
    let refresh_token = storage.get_item(REFRESH_TOKEN_KEY).ok().flatten();
    Some(Session {
        token,
        refresh_token,
        user,
    })
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
