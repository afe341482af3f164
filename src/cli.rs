use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parts-lookup")]
#[command(about = "Поиск запчастей и мест их хранения по складской таблице", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Подробный лог в консоли
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Разовый поиск без проверки пароля
    Search {
        /// Искомая строка (регистр не важен)
        #[arg(required = true)]
        query: String,

        /// Файл книги (xlsx/xls/ods)
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// Имя листа (по умолчанию первый)
        #[arg(short, long)]
        worksheet: Option<String>,

        /// Формат вывода (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Диалог в консоли: каждая строка ввода — сообщение в чат
    Chat {
        /// Файл книги (xlsx/xls/ods)
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// Идентификатор чата
        #[arg(short, long, default_value = "1")]
        chat_id: i64,
    },

    /// Показать/изменить настройки
    Config {
        /// Показать настройки
        #[arg(long)]
        show: bool,

        /// Файл книги по умолчанию
        #[arg(long)]
        set_sheet: Option<PathBuf>,

        /// Задать пароль (без значения — запросить)
        #[arg(long, num_args = 0..=1, default_missing_value = "")]
        set_password: Option<String>,

        /// Максимальная длина ответа в символах
        #[arg(long)]
        set_max_symbols: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Неизвестный формат: {}. Используйте text или json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from(["parts-lookup", "search", "болт", "--format", "json"]);
        match cli.command {
            Commands::Search { query, format, sheet, .. } => {
                assert_eq!(query, "болт");
                assert_eq!(format, OutputFormat::Json);
                assert!(sheet.is_none());
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_parse_set_password_without_value() {
        let cli = Cli::parse_from(["parts-lookup", "config", "--set-password"]);
        match cli.command {
            Commands::Config { set_password, .. } => assert_eq!(set_password, Some(String::new())),
            _ => panic!("expected config"),
        }
    }
}
