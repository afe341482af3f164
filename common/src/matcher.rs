//! Поиск строк, содержащих запрос
//!
//! Регистронезависимый поиск подстроки по всем ячейкам снимка.
//! Ранжирования нет: результат сохраняет порядок строк таблицы.

use crate::snapshot::TableSnapshot;

/// Номера найденных строк в порядке следования, без повторов
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet(Vec<usize>);

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

/// Найти строки, в которых хотя бы одна ячейка содержит запрос
///
/// Пустой запрос совпадает с любой строкой.
pub fn find_rows(snapshot: &TableSnapshot, query: &str) -> MatchSet {
    let needle = query.to_lowercase();

    let rows = snapshot
        .rows()
        .enumerate()
        .filter(|(_, cells)| cells.iter().any(|cell| cell.to_lowercase().contains(&needle)))
        .map(|(index, _)| index)
        .collect();

    MatchSet(rows)
}
