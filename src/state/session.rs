//! Session Store
//!
//! The authenticated-user context: token plus cached profile, persisted in
//! `localStorage` and mirrored into signals so route guards re-run when the
//! session changes.

use leptos::*;

use crate::state::global::User;

/// Storage key for the session token
pub const AUTH_TOKEN_KEY: &str = "AuthToken";
/// Storage key for the cached user profile
pub const AUTH_USER_KEY: &str = "AuthUser";

/// Session context object. `establish` and `clear` are the only writers of
/// the storage keys; lifecycle is login → dashboard reads → logout or 401.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
    user: RwSignal<Option<User>>,
}

impl Session {
    /// Read the persisted session at app init
    pub fn load() -> Self {
        let token = read_key(AUTH_TOKEN_KEY);
        let user = read_key(AUTH_USER_KEY).as_deref().and_then(parse_cached_user);
        Self {
            token: create_rw_signal(token),
            user: create_rw_signal(user),
        }
    }

    /// Persist a fresh session after a successful login
    pub fn establish(&self, token: &str, user: Option<User>) {
        write_key(AUTH_TOKEN_KEY, token);
        self.token.set(Some(token.to_string()));
        if let Some(user) = user {
            self.cache_user(user);
        }
    }

    /// Refresh the cached profile after a profile fetch
    pub fn cache_user(&self, user: User) {
        if let Ok(raw) = serde_json::to_string(&user) {
            write_key(AUTH_USER_KEY, &raw);
        }
        self.user.set(Some(user));
    }

    /// Tear the session down: explicit logout, or a 401 from any
    /// authenticated API call
    pub fn clear(&self) {
        remove_key(AUTH_TOKEN_KEY);
        remove_key(AUTH_USER_KEY);
        self.token.set(None);
        self.user.set(None);
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn user(&self) -> Option<User> {
        self.user.get()
    }
}

/// A malformed cached profile is treated as absent, never an error.
fn parse_cached_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_key(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

fn write_key(key: &str, value: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, value);
    }
}

fn remove_key(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_cached_user_is_discarded() {
        assert!(parse_cached_user("{not json").is_none());
        assert!(parse_cached_user("").is_none());
    }

    #[test]
    fn cached_user_round_trips() {
        let user = User {
            id: "u1".to_string(),
            name: Some("Ana".to_string()),
            email: "ana@mail.com".to_string(),
        };
        let raw = serde_json::to_string(&user).unwrap();
        assert_eq!(parse_cached_user(&raw), Some(user));
    }
}
