//! Доступ по паролю
//!
//! Пока чат не ввел пароль, все сообщения кроме /start отклоняются.
//! Список авторизованных чатов хранится во внедряемом `SessionStore`,
//! глобального состояния нет.

use chrono::{DateTime, Local};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::info;

/// Идентификатор чата
pub type ChatId = i64;

/// Хранилище авторизованных чатов
pub trait SessionStore: Send + Sync {
    fn is_authorized(&self, chat: ChatId) -> bool;
    fn authorize(&self, chat: ChatId);
    fn revoke(&self, chat: ChatId) -> bool;
}

/// Хранилище в памяти процесса
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<ChatId, DateTime<Local>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Время авторизации чата
    pub fn authorized_since(&self, chat: ChatId) -> Option<DateTime<Local>> {
        self.lock().get(&chat).copied()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ChatId, DateTime<Local>>> {
        // Отравленный мьютекс не делает карту некорректной
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn is_authorized(&self, chat: ChatId) -> bool {
        self.lock().contains_key(&chat)
    }

    fn authorize(&self, chat: ChatId) {
        self.lock().entry(chat).or_insert_with(Local::now);
    }

    fn revoke(&self, chat: ChatId) -> bool {
        self.lock().remove(&chat).is_some()
    }
}

/// SHA-256 пароля в hex
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Решение по входящему сообщению
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Чат уже авторизован, сообщение обрабатывается
    Authorized,
    /// Нужен пароль
    RejectedNeedsPassword,
    /// Введен верный пароль, само сообщение не обрабатывается
    JustAuthorized,
}

/// Проверка пароля
pub struct SessionGate<S> {
    store: S,
    password_hash: String,
}

impl<S: SessionStore> SessionGate<S> {
    /// `password_hash` — результат [`hash_password`]
    pub fn new(store: S, password_hash: impl Into<String>) -> Self {
        Self {
            store,
            password_hash: password_hash.into().to_lowercase(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Проверить сообщение чата
    ///
    /// Верный пароль авторизует чат даже если он уже авторизован.
    pub fn check(&self, chat: ChatId, text: &str) -> GateDecision {
        let is_password = hash_password(text) == self.password_hash;

        if is_password {
            self.store.authorize(chat);
            info!(chat, "пароль принят");
            return GateDecision::JustAuthorized;
        }

        if !self.store.is_authorized(chat) {
            info!(chat, "кто-то не может ввести пароль");
            return GateDecision::RejectedNeedsPassword;
        }

        GateDecision::Authorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_is_hex_sha256() {
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_store_authorize_and_revoke() {
        let store = MemorySessionStore::new();
        assert!(!store.is_authorized(1));

        store.authorize(1);
        assert!(store.is_authorized(1));
        assert!(store.authorized_since(1).is_some());
        assert_eq!(store.len(), 1);

        assert!(store.revoke(1));
        assert!(!store.revoke(1));
        assert!(store.is_empty());
    }

    #[test]
    fn test_reauthorize_keeps_first_time() {
        let store = MemorySessionStore::new();
        store.authorize(5);
        let first = store.authorized_since(5);
        store.authorize(5);
        assert_eq!(store.authorized_since(5), first);
    }
}
