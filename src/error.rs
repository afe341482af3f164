use crate::source::AccessError;
use crate::transport::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Ошибка настроек: {0}")]
    Config(String),

    #[error("Пароль не задан. Задайте его командой `parts-lookup config --set-password` или переменной BOT_PASSWORD")]
    MissingPassword,

    #[error("Файл таблицы не задан. Укажите --sheet, `parts-lookup config --set-sheet` или переменную SPREADSHEET_NAME")]
    MissingSpreadsheet,

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Ошибка ввода: {0}")]
    Prompt(String),

    #[error("Ошибка разбора JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] parts_lookup_common::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;
