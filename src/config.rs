use crate::error::{LookupError, Result};
use crate::logging::LogConfig;
use crate::session::hash_password;
use crate::source::{WorkbookSource, DEFAULT_COLUMNS};
use parts_lookup_common::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Файл книги со складской таблицей
    pub spreadsheet_path: Option<PathBuf>,
    /// Имя листа (по умолчанию первый лист)
    pub worksheet: Option<String>,
    /// SHA-256 пароля в hex
    pub password_hash: Option<String>,
    pub engine: EngineConfig,
    pub log: LogConfig,
}

impl Config {
    /// Загрузить настройки из файла и применить переменные окружения
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Загрузить настройки из файла; если файла нет — настройки по умолчанию
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.engine.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LookupError::Config("домашний каталог не найден".into()))?;
        Ok(home.join(".config").join("parts-lookup").join("config.json"))
    }

    /// Переопределения из окружения (в том числе из .env)
    ///
    /// - `SPREADSHEET_NAME` — путь к книге
    /// - `WORKSHEET_NAME` — имя листа
    /// - `BOT_PASSWORD` — пароль открытым текстом
    /// - `MAX_SYMBOLS` — максимальная длина ответа
    pub fn apply_env<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = var("SPREADSHEET_NAME") {
            self.spreadsheet_path = Some(PathBuf::from(path));
        }
        if let Some(name) = var("WORKSHEET_NAME") {
            self.worksheet = Some(name);
        }
        if let Some(password) = var("BOT_PASSWORD") {
            self.password_hash = Some(hash_password(&password));
        }
        if let Some(max) = var("MAX_SYMBOLS") {
            self.engine.max_symbols = max
                .trim()
                .parse()
                .map_err(|_| LookupError::Config(format!("MAX_SYMBOLS не является числом: {}", max)))?;
            self.engine.validate()?;
        }
        Ok(())
    }

    pub fn set_password(&mut self, password: &str) -> Result<()> {
        self.password_hash = Some(hash_password(password));
        self.save()
    }

    pub fn password_hash(&self) -> Result<&str> {
        self.password_hash
            .as_deref()
            .ok_or(LookupError::MissingPassword)
    }

    /// Источник таблицы; `sheet` из командной строки важнее настроек
    pub fn workbook_source(&self, sheet: Option<&Path>) -> Result<WorkbookSource> {
        let path = sheet
            .map(Path::to_path_buf)
            .or_else(|| self.spreadsheet_path.clone())
            .ok_or(LookupError::MissingSpreadsheet)?;

        let columns = self.engine.required_columns().max(DEFAULT_COLUMNS);

        Ok(WorkbookSource::new(path)
            .with_worksheet(self.worksheet.clone())
            .with_columns(columns))
    }
}
