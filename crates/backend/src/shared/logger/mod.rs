//! Настройка логирования сервера
//!
//! Консоль плюс текстовый файл `<log_dir>/backend.log`. Уровень задаётся
//! через `RUST_LOG`, по умолчанию `info`.

use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=warn";

/// Инициализация tracing
pub fn init(log_dir: &Path) -> anyhow::Result<()> {
    // Создаем директорию для логов
    std::fs::create_dir_all(log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// Логирование события с категорией
///
/// # Примеры
/// ```ignore
/// logger::log("startup", "Сервер запущен");
/// ```
pub fn log(category: &str, message: &str) {
    tracing::info!(category, "{}", message);
}
