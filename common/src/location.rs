//! Определение места хранения
//!
//! Для найденной строки просматриваются строки вверх до начала таблицы
//! (включая саму строку), читается только первый столбец. Заголовки
//! вида "3 шкаф" задают шкаф, "полка ..." задают полку, а строка с
//! меткой "major" целиком заменяет шкаф.
//!
//! Просмотр не останавливается на первом совпадении: строка выше может
//! заполнить второй слот или перекрыть шкаф меткой "major".

use crate::snapshot::TableSnapshot;

const CABINET_MARK: &str = "шкаф";
const SHELF_MARK: &str = "полка";
const MAJOR_MARK: &str = "major";

/// Вычислить место хранения для строки `row`
pub fn resolve_location(snapshot: &TableSnapshot, row: usize) -> String {
    if snapshot.is_empty() {
        return String::new();
    }

    let start = row.min(snapshot.row_count() - 1);
    let mut cabinet = String::new();
    let mut shelf = String::new();

    for index in (0..=start).rev() {
        let cell = snapshot.cell(index, 0);
        let lowered = cell.to_lowercase();

        if lowered.contains(CABINET_MARK) && cabinet.is_empty() {
            let number = cell.split(' ').next().unwrap_or("");
            cabinet = format!("{} шкаф, ", number);
        }

        if lowered.contains(MAJOR_MARK) {
            cabinet = cell.to_string();
        }

        // Полка учитывается только пока шкаф не найден
        if lowered.contains(SHELF_MARK) && shelf.is_empty() && cabinet.is_empty() {
            shelf = cell.to_string();
        }
    }

    cabinet + &shelf.to_lowercase()
}
