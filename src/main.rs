use anyhow::Context;
use clap::Parser;
use parts_lookup::bot::{fetch_snapshot, Bot, Update};
use parts_lookup::cli::{Cli, Commands, OutputFormat};
use parts_lookup::config::Config;
use parts_lookup::error::LookupError;
use parts_lookup::messages::{NOTHING_FOUND, TOO_LARGE};
use parts_lookup::session::{MemorySessionStore, SessionGate};
use parts_lookup::transport::ConsoleTransport;
use parts_lookup::logging;
use parts_lookup_common::{run_lookup, LookupOutcome};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    match cli.command {
        Commands::Search { query, sheet, worksheet, format } => {
            let config = Config::load().context("не удалось загрузить настройки")?;
            let _log_guard = logging::init(&config.log, cli.verbose).context("не удалось открыть файл лога")?;

            let mut source = config.workbook_source(sheet.as_deref())?;
            if worksheet.is_some() {
                source = source.with_worksheet(worksheet);
            }
            tracing::debug!(path = %source.path().display(), "чтение таблицы");

            let snapshot = fetch_snapshot(Arc::new(source))
                .await
                .map_err(LookupError::from)?;
            let outcome = run_lookup(&snapshot, &query, &config.engine);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
                OutputFormat::Text => match outcome {
                    LookupOutcome::Delivered { text, .. } => print!("{}", text),
                    LookupOutcome::NothingFound => println!("{}", NOTHING_FOUND),
                    LookupOutcome::TooLarge { .. } => println!("{}", TOO_LARGE),
                },
            }
        }

        Commands::Chat { sheet, chat_id } => {
            let config = Config::load().context("не удалось загрузить настройки")?;
            let _log_guard = logging::init(&config.log, cli.verbose).context("не удалось открыть файл лога")?;

            let source = config.workbook_source(sheet.as_deref())?;
            tracing::info!(chat_id, path = %source.path().display(), "источник таблицы");
            let gate = SessionGate::new(MemorySessionStore::new(), config.password_hash()?);
            let bot = Bot::new(source, ConsoleTransport::stdout(), gate, config.engine.clone());

            tracing::info!(chat_id, "диалог запущен");
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                bot.handle(chat_id, Update::parse(&line)).await;
            }
            tracing::info!(chat_id, "диалог завершен");
        }

        Commands::Config { show, set_sheet, set_password, set_max_symbols } => {
            let path = Config::config_path()?;
            let mut config = Config::load_from(&path)?;
            let mut changed = false;

            if let Some(sheet) = set_sheet {
                config.spreadsheet_path = Some(sheet);
                changed = true;
            }

            if let Some(max) = set_max_symbols {
                config.engine.max_symbols = max;
                config.engine.validate()?;
                changed = true;
            }

            if let Some(password) = set_password {
                let password = if password.is_empty() {
                    dialoguer::Password::new()
                        .with_prompt("Новый пароль")
                        .with_confirmation("Повторите пароль", "Пароли не совпадают")
                        .interact()
                        .map_err(|e| LookupError::Prompt(e.to_string()))?
                } else {
                    password
                };
                config.set_password(&password)?;
                println!("✔ Пароль сохранен");
            }

            if changed {
                config.save_to(&path)?;
                println!("✔ Настройки сохранены: {}", path.display());
            }

            if show {
                println!("Настройки ({}):", path.display());
                println!(
                    "  Таблица: {}",
                    config
                        .spreadsheet_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "не задана".into())
                );
                println!("  Лист: {}", config.worksheet.as_deref().unwrap_or("первый"));
                println!("  Пароль: {}", if config.password_hash.is_some() { "задан" } else { "не задан" });
                println!("  Максимальная длина ответа: {}", config.engine.max_symbols);
                println!("  Файл лога: {}", config.log.file.display());
            }
        }
    }

    Ok(())
}
