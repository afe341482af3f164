//! Ошибки общей библиотеки
//!
//! Исходы поиска (ничего не найдено, слишком длинный ответ) ошибками не
//! являются и возвращаются как `LookupOutcome`.

use thiserror::Error;

/// Общий тип ошибки
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),
}

/// Псевдоним Result
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("max_symbols должен быть больше нуля".to_string());
        assert_eq!(
            format!("{}", error),
            "Config error: max_symbols должен быть больше нуля"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Config("тест".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Config"));
        assert!(debug.contains("тест"));
    }
}
