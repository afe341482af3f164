//! Поиск запчастей по складской таблице
//!
//! Движок поиска находится в `parts-lookup-common`; здесь собраны
//! внешние части: чтение книги, проверка пароля, доставка сообщений,
//! настройки и логирование.

pub mod bot;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod messages;
pub mod session;
pub mod source;
pub mod transport;
