//! Session Repository
//!
//! Typed access to the login session the login page leaves in
//! persistent key/value storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;
use thiserror::Error;

use crate::config::StorageKeys;
use crate::models::{Role, User};

/// Value the login page writes under the flag key
pub const LOGGED_IN: &str = "true";

/// Minimal string key/value store (`localStorage` in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no active session")]
    NotLoggedIn,
    #[error("stored user is unreadable: {0}")]
    Corrupt(String),
}

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Clone)]
pub struct SessionRepository {
    store: Rc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl SessionRepository {
    pub fn new(store: Rc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Read and validate the stored session.
    ///
    /// The flag must be exactly `"true"` and the user blob must be a JSON
    /// object. A missing, empty or `"undefined"` blob counts as logged out.
    pub fn load(&self) -> SessionResult<User> {
        let flag = self.store.get(&self.keys.logged_in);
        if flag.as_deref() != Some(LOGGED_IN) {
            return Err(SessionError::NotLoggedIn);
        }

        let blob = match self.store.get(&self.keys.user) {
            Some(blob) if !blob.is_empty() && blob != "undefined" => blob,
            _ => return Err(SessionError::NotLoggedIn),
        };

        parse_user(&blob)
    }

    /// Remove both session keys
    pub fn clear(&self) {
        self.store.remove(&self.keys.user);
        self.store.remove(&self.keys.logged_in);
    }
}

/// Any JSON object is a session; mistyped fields fall back field by field.
fn parse_user(blob: &str) -> SessionResult<User> {
    let value: Value =
        serde_json::from_str(blob).map_err(|e| SessionError::Corrupt(e.to_string()))?;
    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(SessionError::Corrupt(format!("expected an object, got {}", other)))
        }
    };

    Ok(User {
        username: fields.get("username").and_then(scalar_text).unwrap_or_default(),
        role: fields
            .get("role")
            .and_then(scalar_text)
            .map(Role::from)
            .unwrap_or_default(),
        user_id: fields.get("user_id").and_then(|id| match id {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }),
        real_name: fields.get("real_name").and_then(scalar_text),
    })
}

/// String form of a string, number or bool; `None` for null and containers
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// In-memory store for non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn repo(flag: Option<&str>, user: Option<&str>) -> (Rc<MemoryStore>, SessionRepository) {
        let store = Rc::new(MemoryStore::new());
        if let Some(flag) = flag {
            store.insert("isLoggedIn", flag);
        }
        if let Some(user) = user {
            store.insert("user", user);
        }
        let repo = SessionRepository::new(store.clone(), StorageKeys::default());
        (store, repo)
    }

    #[test]
    fn test_load_valid_session() {
        let (_, repo) = repo(Some("true"), Some(r#"{"username":"bob","role":"staff"}"#));
        let user = repo.load().unwrap();
        assert_eq!(user.username, "bob");
        assert_eq!(user.role, Role::Staff);
    }

    #[test]
    fn test_missing_or_wrong_flag() {
        let blob = Some(r#"{"username":"bob","role":"staff"}"#);
        for flag in [None, Some(""), Some("false"), Some("TRUE"), Some("1")] {
            let (_, repo) = repo(flag, blob);
            assert_eq!(repo.load(), Err(SessionError::NotLoggedIn), "flag {:?}", flag);
        }
    }

    #[test]
    fn test_missing_user_blob() {
        for user in [None, Some(""), Some("undefined")] {
            let (_, repo) = repo(Some("true"), user);
            assert_eq!(repo.load(), Err(SessionError::NotLoggedIn), "user {:?}", user);
        }
    }

    #[test]
    fn test_unparseable_blob_is_corrupt() {
        for user in ["{oops", "null", "42", "[\"bob\",\"staff\"]"] {
            let (_, repo) = repo(Some("true"), Some(user));
            assert!(matches!(repo.load(), Err(SessionError::Corrupt(_))), "user {}", user);
        }
    }

    #[test]
    fn test_empty_object_is_a_session() {
        let (_, repo) = repo(Some("true"), Some("{}"));
        let user = repo.load().unwrap();
        assert_eq!(user.username, "");
        assert_eq!(user.role, Role::Unset);
    }

    #[test]
    fn test_mistyped_fields_still_load() {
        let (_, repo) = repo(
            Some("true"),
            Some(r#"{"username": 5, "role": null, "user_id": "3", "real_name": 5}"#),
        );
        let user = repo.load().unwrap();
        assert_eq!(user.username, "5");
        assert_eq!(user.role, Role::Unset);
        assert_eq!(user.user_id, Some(3));
        assert_eq!(user.real_name.as_deref(), Some("5"));

        let (_, repo) = self::repo(Some("true"), Some(r#"{"username": ["x"], "role": 7}"#));
        let user = repo.load().unwrap();
        assert_eq!(user.username, "");
        assert_eq!(user.role, Role::Other("7".to_string()));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let (store, repo) = repo(Some("true"), Some("{}"));
        store.insert("cart", "[]");
        repo.clear();
        assert!(!store.contains("isLoggedIn"));
        assert!(!store.contains("user"));
        assert!(store.contains("cart"));
    }
}
