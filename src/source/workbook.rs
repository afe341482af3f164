//! Чтение рабочего листа из файла книги (xlsx/xls/xlsb/ods)

use super::{AccessError, TableSource};
use calamine::{open_workbook_auto, Data, Range, Reader};
use parts_lookup_common::TableSnapshot;
use std::path::{Path, PathBuf};

/// Читаются столбцы A..F
pub const DEFAULT_COLUMNS: usize = 6;

/// Книга на диске
#[derive(Debug, Clone)]
pub struct WorkbookSource {
    path: PathBuf,
    worksheet: Option<String>,
    columns: usize,
}

impl WorkbookSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            worksheet: None,
            columns: DEFAULT_COLUMNS,
        }
    }

    /// Имя листа; по умолчанию берется первый лист
    pub fn with_worksheet(mut self, name: Option<String>) -> Self {
        self.worksheet = name;
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for WorkbookSource {
    fn fetch(&self) -> Result<TableSnapshot, AccessError> {
        if !self.path.exists() {
            return Err(AccessError::Open {
                path: self.path.clone(),
                reason: "файл не найден".into(),
            });
        }

        let mut workbook = open_workbook_auto(&self.path).map_err(|e| AccessError::Open {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let sheet_names = workbook.sheet_names();
        let name = match &self.worksheet {
            Some(name) if sheet_names.contains(name) => name.clone(),
            Some(name) => {
                return Err(AccessError::Worksheet {
                    name: name.clone(),
                    reason: "лист не найден".into(),
                })
            }
            None => sheet_names.first().cloned().ok_or_else(|| AccessError::Worksheet {
                name: String::new(),
                reason: "в книге нет листов".into(),
            })?,
        };

        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| AccessError::Read {
                reason: e.to_string(),
            })?;

        Ok(range_to_snapshot(&range, self.columns))
    }
}

/// Текст ячейки; пустые и ошибочные ячейки дают пустую строку
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        // 12.0 выводится как "12"
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Перенести диапазон в снимок, начиная с A1
///
/// Диапазон calamine начинается с первой непустой ячейки, поэтому строки
/// и столбцы до нее восстанавливаются пустыми.
fn range_to_snapshot(range: &Range<Data>, columns: usize) -> TableSnapshot {
    let (start_row, start_col) = match range.start() {
        Some((row, col)) => (row as usize, col as usize),
        None => return TableSnapshot::from_rows(Vec::new()),
    };

    let mut rows = vec![vec![String::new(); columns]; start_row];

    for cells in range.rows() {
        let mut row = vec![String::new(); start_col.min(columns)];
        row.extend(cells.iter().map(cell_text));
        row.resize(columns, String::new());
        rows.push(row);
    }

    TableSnapshot::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::Float(12.0)), "12");
        assert_eq!(cell_text(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_text(&Data::Int(7)), "7");
        assert_eq!(cell_text(&Data::String("3 шкаф".into())), "3 шкаф");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_range_offset_is_restored() {
        let mut range = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("шкаф".into()));
        range.set_value((2, 2), Data::Float(3.0));

        let snapshot = range_to_snapshot(&range, 4);
        assert_eq!(snapshot.row_count(), 3);
        assert_eq!(snapshot.column_count(), 4);
        assert_eq!(snapshot.cell(1, 1), "шкаф");
        assert_eq!(snapshot.cell(2, 2), "3");
        assert_eq!(snapshot.cell(0, 0), "");
    }

    #[test]
    fn test_extra_columns_are_cut() {
        let mut range = Range::new((0, 0), (0, 7));
        range.set_value((0, 7), Data::String("H".into()));
        range.set_value((0, 0), Data::String("A".into()));

        let snapshot = range_to_snapshot(&range, DEFAULT_COLUMNS);
        assert_eq!(snapshot.column_count(), DEFAULT_COLUMNS);
        assert_eq!(snapshot.cell(0, 0), "A");
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let source = WorkbookSource::new("/nonexistent/parts.xlsx");
        assert!(matches!(source.fetch(), Err(AccessError::Open { .. })));
    }
}
