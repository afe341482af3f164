//! Чтение книги xlsx и поиск по ней
//!
//! Книги создаются через rust_xlsxwriter во временном каталоге.

use parts_lookup::source::{AccessError, TableSource, WorkbookSource, DEFAULT_COLUMNS};
use parts_lookup_common::{run_lookup, EngineConfig, LookupOutcome};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::tempdir;

fn write_inventory(path: &Path) {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Склад").unwrap();
    sheet.write_string(0, 0, "3 шкаф").unwrap();
    sheet.write_string(1, 0, "Полка 2").unwrap();
    sheet.write_string(2, 0, "Болт M8").unwrap();
    sheet.write_string(2, 1, "A-100").unwrap();
    sheet.write_number(2, 2, 12.0).unwrap();
    sheet.write_string(2, 7, "лишний столбец").unwrap();
    sheet.write_string(3, 0, "Major Overhaul Section").unwrap();
    sheet.write_string(4, 0, "Клапан").unwrap();
    sheet.write_number(4, 2, 1.5).unwrap();

    let other = workbook.add_worksheet();
    other.set_name("Архив").unwrap();
    other.write_string(1, 1, "старый болт").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_first_sheet_is_read() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("parts.xlsx");
    write_inventory(&path);

    let snapshot = WorkbookSource::new(&path).fetch().expect("таблица не прочитана");

    assert_eq!(snapshot.row_count(), 5);
    assert_eq!(snapshot.column_count(), DEFAULT_COLUMNS);
    assert_eq!(snapshot.cell(0, 0), "3 шкаф");
    assert_eq!(snapshot.cell(2, 2), "12");
    assert_eq!(snapshot.cell(4, 2), "1.5");
    assert_eq!(snapshot.cell(2, 5), "");
}

#[test]
fn test_named_sheet_with_offset() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("parts.xlsx");
    write_inventory(&path);

    let snapshot = WorkbookSource::new(&path)
        .with_worksheet(Some("Архив".into()))
        .fetch()
        .unwrap();

    assert_eq!(snapshot.row_count(), 2);
    assert_eq!(snapshot.cell(0, 0), "");
    assert_eq!(snapshot.cell(1, 1), "старый болт");
}

#[test]
fn test_unknown_sheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("parts.xlsx");
    write_inventory(&path);

    let result = WorkbookSource::new(&path)
        .with_worksheet(Some("Нет такого".into()))
        .fetch();
    assert!(matches!(result, Err(AccessError::Worksheet { .. })));
}

#[test]
fn test_not_a_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("parts.xlsx");
    std::fs::write(&path, "not a zip").unwrap();

    let result = WorkbookSource::new(&path).fetch();
    assert!(matches!(result, Err(AccessError::Open { .. })));
}

#[test]
fn test_lookup_over_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("parts.xlsx");
    write_inventory(&path);

    let snapshot = WorkbookSource::new(&path).fetch().unwrap();
    let config = EngineConfig::default();

    match run_lookup(&snapshot, "болт", &config) {
        LookupOutcome::Delivered { records, .. } => {
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].quantity, "12");
            assert_eq!(records[0].location, "3 шкаф, полка 2");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    match run_lookup(&snapshot, "клапан", &config) {
        LookupOutcome::Delivered { records, .. } => {
            assert_eq!(records[0].location, "Major Overhaul Section");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}
