//! Current login, persisted in browser storage by the auth flow

use serde::{Deserialize, Serialize};
use web_sys::window;

const LOGIN_KEY: &str = "session_login";

/// Login record the backend hands out on authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Login {
    pub username: String,
    pub role: String,
    /// Set for operator users; admins have none
    pub operator_id: Option<i64>,
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Currently logged in user, if any
pub fn get() -> Option<Login> {
    let raw = local_storage()?.get_item(LOGIN_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn set(login: &Login) {
    if let Some(storage) = local_storage() {
        if let Ok(raw) = serde_json::to_string(login) {
            let _ = storage.set_item(LOGIN_KEY, &raw);
        }
    }
}

pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(LOGIN_KEY);
    }
}
