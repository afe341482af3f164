//! Сборка записей результата
//!
//! Порядок обработки важен: сначала отбрасываются записи без
//! информативных полей (место хранения не учитывается), и только потом
//! пустые поля заменяются прочерком. Иначе запись, у которой заполнено
//! одно место хранения, попала бы в результат.

use crate::fields::{EngineConfig, FieldRole, EMPTY_PLACEHOLDER};
use crate::formatter::format_message;
use crate::location::resolve_location;
use crate::matcher::MatchSet;
use crate::snapshot::TableSnapshot;
use serde::{Deserialize, Serialize};

/// Запись о найденной запчасти
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultRecord {
    pub name: String,
    pub part_number: String,
    pub quantity: String,
    pub instruction: String,
    pub remark: String,
    pub location: String,
}

impl ResultRecord {
    pub fn value(&self, role: FieldRole) -> &str {
        match role {
            FieldRole::Name => &self.name,
            FieldRole::PartNumber => &self.part_number,
            FieldRole::Quantity => &self.quantity,
            FieldRole::Instruction => &self.instruction,
            FieldRole::Remark => &self.remark,
            FieldRole::Location => &self.location,
        }
    }

    fn value_mut(&mut self, role: FieldRole) -> &mut String {
        match role {
            FieldRole::Name => &mut self.name,
            FieldRole::PartNumber => &mut self.part_number,
            FieldRole::Quantity => &mut self.quantity,
            FieldRole::Instruction => &mut self.instruction,
            FieldRole::Remark => &mut self.remark,
            FieldRole::Location => &mut self.location,
        }
    }

    /// Поля в порядке вывода
    pub fn fields(&self) -> impl Iterator<Item = (FieldRole, &str)> {
        FieldRole::ALL.into_iter().map(move |role| (role, self.value(role)))
    }

    /// Есть ли хотя бы одно непустое поле, кроме места хранения
    pub fn is_informative(&self) -> bool {
        FieldRole::READABLE
            .iter()
            .any(|&role| !self.value(role).is_empty())
    }

    /// Заменить пустые поля прочерком
    pub fn fill_placeholders(&mut self) {
        for role in FieldRole::ALL {
            let value = self.value_mut(role);
            if value.is_empty() {
                *value = EMPTY_PLACEHOLDER.to_string();
            }
        }
    }
}

/// Результат превышает допустимый размер сообщения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooLarge {
    pub length: usize,
    pub limit: usize,
}

/// Прочитать запись строки `row` без фильтрации и замены
pub fn read_record(snapshot: &TableSnapshot, row: usize, config: &EngineConfig) -> ResultRecord {
    let mut record = ResultRecord::default();
    for role in FieldRole::READABLE {
        if let Some(col) = config.columns.column(role) {
            *record.value_mut(role) = snapshot.cell(row, col).to_string();
        }
    }
    record.location = resolve_location(snapshot, row);
    record
}

/// Собрать записи для найденных строк
pub fn assemble(
    snapshot: &TableSnapshot,
    matches: &MatchSet,
    config: &EngineConfig,
) -> Vec<ResultRecord> {
    matches
        .iter()
        .map(|row| read_record(snapshot, row, config))
        .filter(ResultRecord::is_informative)
        .map(|mut record| {
            record.fill_placeholders();
            record
        })
        .collect()
}

/// Отформатировать записи с проверкой длины сообщения
pub fn bound(records: &[ResultRecord], config: &EngineConfig) -> Result<String, TooLarge> {
    let text = format_message(records, &config.titles);
    let length = text.chars().count();

    if length > config.max_symbols {
        return Err(TooLarge {
            length,
            limit: config.max_symbols,
        });
    }

    Ok(text)
}
