//! Доставка сообщений в чат

use crate::session::ChatId;
use std::io::Write;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
#[error("Сбой доставки сообщения в чат {chat}: {reason}")]
pub struct TransportError {
    pub chat: ChatId,
    pub reason: String,
}

/// Канал доставки
pub trait Transport: Send + Sync {
    fn send(&self, chat: ChatId, text: &str) -> Result<(), TransportError>;
}

/// Отправить сообщение и записать результат в лог
///
/// Ошибка доставки только логируется.
pub fn deliver<T: Transport + ?Sized>(transport: &T, chat: ChatId, text: &str) -> bool {
    match transport.send(chat, text) {
        Ok(()) => {
            info!(chat, "сообщение отправлено в чат {}", chat);
            true
        }
        Err(e) => {
            error!(chat, "{}", e);
            false
        }
    }
}

/// Вывод сообщений в консоль (или любой другой `Write`)
pub struct ConsoleTransport<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleTransport<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleTransport<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Transport for ConsoleTransport<W> {
    fn send(&self, chat: ChatId, text: &str) -> Result<(), TransportError> {
        let mut out = self.out.lock().map_err(|e| TransportError {
            chat,
            reason: e.to_string(),
        })?;

        writeln!(out, "[{}] {}", chat, text)
            .and_then(|_| out.flush())
            .map_err(|e| TransportError {
                chat,
                reason: e.to_string(),
            })
    }
}
