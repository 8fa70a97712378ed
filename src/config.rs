//! Build-time settings. Override with `EXPENSE_API_URL` / `EXPENSE_LOG_LEVEL`
//! when running `trunk build`.

use log::Level;

pub const API_BASE_URL: &str = match option_env!("EXPENSE_API_URL") {
    Some(url) => url,
    None => "https://e-tracker-backend-1.onrender.com",
};

const LOG_LEVEL: Option<&str> = option_env!("EXPENSE_LOG_LEVEL");

pub fn log_level() -> Level {
    parse_log_level(LOG_LEVEL.unwrap_or("info"))
}

fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Level::Error,
        "warn" => Level::Warn,
        "debug" => Level::Debug,
        "trace" => Level::Trace,
        _ => Level::Info,
    }
}
