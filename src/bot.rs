//! Обработка входящих сообщений чата
//!
//! ## История изменений
//! - Проверка пароля вынесена во внедряемый `SessionGate`
//! - Выгрузка таблицы выполняется в отдельном потоке (`spawn_blocking`)

use crate::messages::{
    HELP_MESSAGE, NOTHING_FOUND, PASSWORD_ACCEPTED, PASSWORD_REQUEST, START_MESSAGE, TOO_LARGE,
};
use crate::session::{ChatId, GateDecision, SessionGate, SessionStore};
use crate::source::{AccessError, TableSource};
use crate::transport::{deliver, Transport};
use parts_lookup_common::{run_lookup, EngineConfig, LookupOutcome};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Входящее сообщение
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    Start,
    Help,
    Text(String),
}

impl Update {
    /// Разобрать строку ввода: команды /start и /help, остальное — запрос
    pub fn parse(line: &str) -> Self {
        let command = line.trim();
        match command.split_whitespace().next() {
            Some("/start") => Update::Start,
            Some("/help") => Update::Help,
            _ => Update::Text(line.to_string()),
        }
    }
}

/// Чем закончилась обработка сообщения
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Started,
    Help,
    PasswordRequested,
    PasswordAccepted,
    Found { records: usize },
    NothingFound,
    TooLarge { length: usize, limit: usize },
    AccessFailed(AccessError),
}

pub struct Bot<S, T, G> {
    source: Arc<S>,
    transport: T,
    gate: SessionGate<G>,
    engine: EngineConfig,
}

impl<S, T, G> Bot<S, T, G>
where
    S: TableSource + 'static,
    T: Transport,
    G: SessionStore,
{
    pub fn new(source: S, transport: T, gate: SessionGate<G>, engine: EngineConfig) -> Self {
        Self {
            source: Arc::new(source),
            transport,
            gate,
            engine,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn gate(&self) -> &SessionGate<G> {
        &self.gate
    }

    /// Обработать одно сообщение чата
    pub async fn handle(&self, chat: ChatId, update: Update) -> Reply {
        match update {
            Update::Start => {
                deliver(&self.transport, chat, START_MESSAGE);
                Reply::Started
            }
            Update::Help => match self.admit(chat, "/help") {
                Some(reply) => reply,
                None => {
                    deliver(&self.transport, chat, HELP_MESSAGE);
                    Reply::Help
                }
            },
            Update::Text(text) => match self.admit(chat, &text) {
                Some(reply) => reply,
                None => self.search(chat, &text).await,
            },
        }
    }

    /// Проверить доступ; `None` — можно обрабатывать сообщение
    fn admit(&self, chat: ChatId, text: &str) -> Option<Reply> {
        match self.gate.check(chat, text) {
            GateDecision::Authorized => None,
            GateDecision::RejectedNeedsPassword => {
                deliver(&self.transport, chat, PASSWORD_REQUEST);
                Some(Reply::PasswordRequested)
            }
            GateDecision::JustAuthorized => {
                deliver(&self.transport, chat, PASSWORD_ACCEPTED);
                Some(Reply::PasswordAccepted)
            }
        }
    }

    async fn search(&self, chat: ChatId, query: &str) -> Reply {
        let snapshot = match fetch_snapshot(Arc::clone(&self.source)).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(chat, "{}", e);
                deliver(&self.transport, chat, &e.to_string());
                return Reply::AccessFailed(e);
            }
        };
        debug!(chat, rows = snapshot.row_count(), "таблица выгружена");

        match run_lookup(&snapshot, query, &self.engine) {
            LookupOutcome::NothingFound => {
                info!(chat, query, "по запросу ничего не найдено");
                deliver(&self.transport, chat, NOTHING_FOUND);
                Reply::NothingFound
            }
            LookupOutcome::TooLarge { length, limit } => {
                info!(chat, query, length, limit, "найдено слишком много данных");
                deliver(&self.transport, chat, TOO_LARGE);
                Reply::TooLarge { length, limit }
            }
            LookupOutcome::Delivered { text, records } => {
                info!(chat, query, records = records.len(), "найдены запчасти");
                deliver(&self.transport, chat, &text);
                Reply::Found {
                    records: records.len(),
                }
            }
        }
    }
}

/// Выгрузить снимок, не блокируя рантайм
pub async fn fetch_snapshot<S>(
    source: Arc<S>,
) -> Result<parts_lookup_common::TableSnapshot, AccessError>
where
    S: TableSource + 'static,
{
    tokio::task::spawn_blocking(move || source.fetch())
        .await
        .unwrap_or_else(|e| {
            Err(AccessError::Read {
                reason: e.to_string(),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Update::parse("/start"), Update::Start);
        assert_eq!(Update::parse("  /help  "), Update::Help);
        assert_eq!(Update::parse("болт М8"), Update::Text("болт М8".into()));
        assert_eq!(Update::parse(""), Update::Text(String::new()));
    }
}
