//! Логирование
//!
//! Консоль (stderr) и файл с ротацией по размеру через logroller.
//! Запись в файл идет через неблокирующий писатель tracing-appender;
//! возвращаемый `WorkerGuard` нужно держать до конца работы процесса.

use logroller::{LogRoller, LogRollerBuilder, Rotation, RotationSize};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Формат времени в файле лога: `2024-01-31 12:00:00,123`
const FILE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub file: PathBuf,
    /// Размер файла в МБ до ротации
    pub max_size_mb: u64,
    /// Сколько файлов хранить
    pub backups: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from("SWAbot.log"),
            max_size_mb: 50,
            backups: 5,
        }
    }
}

fn build_log_roller(config: &LogConfig) -> io::Result<LogRoller> {
    let parent = config
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let filename = config
        .file
        .file_name()
        .map(Path::new)
        .unwrap_or_else(|| Path::new("SWAbot.log"));

    std::fs::create_dir_all(parent)?;

    LogRollerBuilder::new(parent, filename)
        .rotation(Rotation::SizeBased(RotationSize::MB(config.max_size_mb)))
        .max_keep_files(config.backups)
        .build()
        .map_err(|e| io::Error::other(format!("не удалось открыть файл лога: {}", e)))
}

/// Инициализировать глобальный подписчик tracing
///
/// `RUST_LOG` переопределяет уровень консоли. В файл пишутся время,
/// уровень, сообщение и источник записи.
pub fn init(config: &LogConfig, verbose: bool) -> io::Result<Option<WorkerGuard>> {
    let default_level = if verbose { "debug" } else { "info" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let (file, guard) = if config.enabled {
        let roller = build_log_roller(config)?;
        let (writer, guard) = tracing_appender::non_blocking(roller);
        let layer = fmt::layer()
            .with_ansi(false)
            .with_timer(ChronoLocal::new(FILE_TIME_FORMAT.to_string()))
            .with_target(true)
            .with_writer(writer)
            .with_filter(EnvFilter::new("info"));
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    // Повторная инициализация (например, в тестах) не считается ошибкой
    let _ = tracing_subscriber::registry().with(console).with(file).try_init();
    Ok(guard)
}
