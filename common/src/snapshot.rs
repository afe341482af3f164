//! Снимок таблицы склада
//!
//! Неизменяемая прямоугольная сетка текстовых ячеек, полученная за одну
//! выгрузку рабочего листа. Порядок строк значим: строка-заголовок
//! (шкаф/полка) предшествует строкам запчастей, к которым относится.

use serde::{Deserialize, Serialize};

/// Снимок рабочего листа
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl TableSnapshot {
    /// Создать снимок из строк; короткие строки дополняются пустыми ячейками
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self { rows, width }
    }

    /// Количество строк
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Количество столбцов
    pub fn column_count(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Значение ячейки; за пределами таблицы — пустая строка
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Все ячейки строки
    pub fn row(&self, row: usize) -> &[String] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Итератор по строкам в исходном порядке
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl<S: Into<String>> FromIterator<Vec<S>> for TableSnapshot {
    fn from_iter<I: IntoIterator<Item = Vec<S>>>(iter: I) -> Self {
        Self::from_rows(
            iter.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}
