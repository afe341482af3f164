//! Конвейер поиска запчастей
//!
//! Поиск строк → определение мест хранения → сборка записей →
//! форматирование. Каждый исход возвращается значением, ошибок нет.

use crate::assembler::{assemble, bound, ResultRecord, TooLarge};
use crate::fields::EngineConfig;
use crate::matcher::find_rows;
use crate::snapshot::TableSnapshot;
use serde::Serialize;

/// Итог поиска
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// Готовое сообщение и записи, из которых оно собрано
    Delivered {
        text: String,
        records: Vec<ResultRecord>,
    },
    /// Ни одна строка не содержит запрос
    NothingFound,
    /// Сообщение длиннее допустимого, запрос нужно уточнить
    TooLarge { length: usize, limit: usize },
}

/// Выполнить поиск по снимку таблицы
pub fn run_lookup(snapshot: &TableSnapshot, query: &str, config: &EngineConfig) -> LookupOutcome {
    let matches = find_rows(snapshot, query);
    if matches.is_empty() {
        return LookupOutcome::NothingFound;
    }

    let records = assemble(snapshot, &matches, config);

    match bound(&records, config) {
        Ok(text) => LookupOutcome::Delivered { text, records },
        Err(TooLarge { length, limit }) => LookupOutcome::TooLarge { length, limit },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_scenario_cabinet_header() {
        let snapshot = TableSnapshot::from_rows(vec![
            row(&["3 шкаф", "", "", "", "", ""]),
            row(&["bolt", "B-1", "4", "", "", ""]),
        ]);

        match run_lookup(&snapshot, "bolt", &EngineConfig::default()) {
            LookupOutcome::Delivered { records, text } => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].location, "3 шкаф, ");
                assert!(text.contains("Место хранения: 3 шкаф, \n"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_scenario_nothing_found() {
        let snapshot = TableSnapshot::from_rows(vec![row(&["bolt", "B-1"])]);
        assert_eq!(
            run_lookup(&snapshot, "zzz", &EngineConfig::default()),
            LookupOutcome::NothingFound
        );
    }

    #[test]
    fn test_scenario_too_large() {
        let rows = (0..200)
            .map(|i| row(&[&format!("Болт {}", i), "A-100", "1", "", "", ""]))
            .collect();
        let snapshot = TableSnapshot::from_rows(rows);

        match run_lookup(&snapshot, "болт", &EngineConfig::default()) {
            LookupOutcome::TooLarge { length, limit } => {
                assert_eq!(limit, 4096);
                assert!(length > limit);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_scenario_major_override() {
        let snapshot = TableSnapshot::from_rows(vec![
            row(&["Major Overhaul Section", ""]),
            row(&["5 шкаф", ""]),
            row(&["valve", "V-7"]),
        ]);

        match run_lookup(&snapshot, "valve", &EngineConfig::default()) {
            LookupOutcome::Delivered { records, .. } => {
                assert_eq!(records[0].location, "Major Overhaul Section");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_all_records_dropped_delivers_empty_text() {
        let snapshot = TableSnapshot::from_rows(vec![row(&["", "", "", "", "", "bolt"])]);

        assert_eq!(
            run_lookup(&snapshot, "bolt", &EngineConfig::default()),
            LookupOutcome::Delivered {
                text: String::new(),
                records: Vec::new()
            }
        );
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let json = serde_json::to_value(LookupOutcome::NothingFound).unwrap();
        assert_eq!(json["outcome"], "nothing_found");
    }
}
