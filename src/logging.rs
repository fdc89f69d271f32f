// Centralized logging setup: console on stderr, optional structured JSON file output
use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock; // For global file guard
use tracing_subscriber::{
    fmt,
    EnvFilter,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

const CRATE_TARGET: &str = "trade_journal";

pub fn init_logging(bin_name: String) -> eyre::Result<()> {
    // Console defaults to warn so the dashboard output stays readable
    let console_log_level = env::var("CONSOLE_LOG_LEVEL").unwrap_or_else(|_| "WARN".to_string());
    let file_log_level = env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string());
    let log_to_file = env::var("LOG_TO_FILE").unwrap_or_else(|_| "false".to_string()) == "true";

    // Filter dependencies to "warn", our own crate (library and binary) to the configured level
    let env_filter_console = build_filter(&bin_name, &console_log_level);
    let env_filter_file = build_filter(&bin_name, &file_log_level);

    let console_layer = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter_console);

    if log_to_file {
        let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
        let log_dir = Path::new("logs");
        fs::create_dir_all(log_dir)?;
        let log_file_name = format!("{}_{}.log", bin_name, timestamp);

        let file_appender = tracing_appender::rolling::never(log_dir, log_file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        FILE_GUARD.set(guard).ok();

        let file_layer = fmt::Layer::new()
            .json()
            .with_writer(non_blocking)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_filter(env_filter_file);

        tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(console_layer)
            .try_init()?;
    }

    Ok(())
}

fn build_filter(bin_name: &str, level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("warn,{}={},{}={}", CRATE_TARGET, level, bin_name, level))
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=warn", CRATE_TARGET)))
}
