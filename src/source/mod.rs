//! Источник снимков складской таблицы
//!
//! Каждый запрос получает свежий снимок; кэша нет, повторов при ошибке
//! тоже нет: ошибка сообщается пользователю вызывающей стороной.

mod workbook;

pub use workbook::{cell_text, WorkbookSource, DEFAULT_COLUMNS};

use parts_lookup_common::TableSnapshot;
use std::path::PathBuf;
use thiserror::Error;

/// Таблица недоступна
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("Не удается открыть файл с базой данных запчастей {path}. Ошибка: {reason}")]
    Open { path: PathBuf, reason: String },

    #[error("Не удается открыть рабочий лист {name}. Ошибка: {reason}")]
    Worksheet { name: String, reason: String },

    #[error("Не удается получить данные с рабочего листа. Ошибка: {reason}")]
    Read { reason: String },
}

/// Поставщик снимков таблицы
pub trait TableSource: Send + Sync {
    fn fetch(&self) -> Result<TableSnapshot, AccessError>;
}

/// Снимок в памяти, удобен для тестов и разовых проверок
impl TableSource for TableSnapshot {
    fn fetch(&self) -> Result<TableSnapshot, AccessError> {
        Ok(self.clone())
    }
}
