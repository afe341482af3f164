//! Роли столбцов, заголовки полей и ограничение размера сообщения

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Максимальная длина сообщения (лимит сообщения в чате)
pub const DEFAULT_MAX_SYMBOLS: usize = 4096;

/// Заглушка для пустого поля
pub const EMPTY_PLACEHOLDER: &str = "-";

/// Смысловая роль поля записи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    Name,
    PartNumber,
    Quantity,
    Instruction,
    Remark,
    /// Вычисляемое поле, из таблицы не читается
    Location,
}

impl FieldRole {
    /// Порядок вывода полей
    pub const ALL: [FieldRole; 6] = [
        FieldRole::Name,
        FieldRole::PartNumber,
        FieldRole::Quantity,
        FieldRole::Instruction,
        FieldRole::Remark,
        FieldRole::Location,
    ];

    /// Поля, читаемые из столбцов таблицы
    pub const READABLE: [FieldRole; 5] = [
        FieldRole::Name,
        FieldRole::PartNumber,
        FieldRole::Quantity,
        FieldRole::Instruction,
        FieldRole::Remark,
    ];
}

/// Номера столбцов для каждого читаемого поля (с нуля)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub name: usize,
    pub part_number: usize,
    pub quantity: usize,
    pub instruction: usize,
    pub remark: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            name: 0,
            part_number: 1,
            quantity: 2,
            instruction: 3,
            remark: 4,
        }
    }
}

impl ColumnMap {
    /// Столбец поля; для места хранения столбца нет
    pub fn column(&self, role: FieldRole) -> Option<usize> {
        match role {
            FieldRole::Name => Some(self.name),
            FieldRole::PartNumber => Some(self.part_number),
            FieldRole::Quantity => Some(self.quantity),
            FieldRole::Instruction => Some(self.instruction),
            FieldRole::Remark => Some(self.remark),
            FieldRole::Location => None,
        }
    }
}

/// Отображаемые заголовки полей
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTitles {
    pub name: String,
    pub part_number: String,
    pub quantity: String,
    pub instruction: String,
    pub remark: String,
    pub location: String,
}

impl Default for FieldTitles {
    fn default() -> Self {
        Self {
            name: "Наименование".into(),
            part_number: "Номер материала".into(),
            quantity: "Количество".into(),
            instruction: "Инструкция".into(),
            remark: "Примечание".into(),
            location: "Место хранения".into(),
        }
    }
}

impl FieldTitles {
    pub fn title(&self, role: FieldRole) -> &str {
        match role {
            FieldRole::Name => &self.name,
            FieldRole::PartNumber => &self.part_number,
            FieldRole::Quantity => &self.quantity,
            FieldRole::Instruction => &self.instruction,
            FieldRole::Remark => &self.remark,
            FieldRole::Location => &self.location,
        }
    }
}

/// Настройки движка поиска
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub columns: ColumnMap,
    pub titles: FieldTitles,
    /// Максимальная длина итогового сообщения в символах
    pub max_symbols: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMap::default(),
            titles: FieldTitles::default(),
            max_symbols: DEFAULT_MAX_SYMBOLS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_symbols == 0 {
            return Err(Error::Config("max_symbols должен быть больше нуля".into()));
        }
        Ok(())
    }

    /// Сколько столбцов нужно прочитать из листа
    pub fn required_columns(&self) -> usize {
        FieldRole::READABLE
            .iter()
            .filter_map(|&role| self.columns.column(role))
            .max()
            .map_or(0, |max| max + 1)
    }
}
