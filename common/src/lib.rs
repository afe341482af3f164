//! Spare parts lookup engine
//!
//! Поиск запчастей по снимку складской таблицы: совпадение строк,
//! определение места хранения по заголовкам шкафов и полок, сборка и
//! ограничение результата. Чистые вычисления без ввода-вывода.

pub mod error;
pub mod fields;
pub mod snapshot;
pub mod matcher;
pub mod location;
pub mod assembler;
pub mod formatter;
pub mod pipeline;

pub use error::{Error, Result};
pub use fields::{ColumnMap, EngineConfig, FieldRole, FieldTitles, DEFAULT_MAX_SYMBOLS};
pub use snapshot::TableSnapshot;
pub use matcher::{find_rows, MatchSet};
pub use location::resolve_location;
pub use assembler::{assemble, bound, ResultRecord, TooLarge};
pub use formatter::format_message;
pub use pipeline::{run_lookup, LookupOutcome};
