use std::env;

pub const DEFAULT_TITLE: &str = "Trade Journal";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_SYNC_STATUS: &str = "Disconnected";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    pub currency_symbol: String,
    pub sync_status: String,
}

impl Config {
    /// Reads presentation settings from the environment. Call `dotenv()` first if a .env file should apply.
    pub fn load() -> Self {
        let title = env::var("JOURNAL_TITLE").unwrap_or_else(|_| DEFAULT_TITLE.to_string());
        let currency_symbol = env::var("JOURNAL_CURRENCY_SYMBOL").unwrap_or_else(|_| DEFAULT_CURRENCY_SYMBOL.to_string());
        let sync_status = env::var("JOURNAL_SYNC_STATUS").unwrap_or_else(|_| DEFAULT_SYNC_STATUS.to_string());

        Config {
            title,
            currency_symbol,
            sync_status,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            sync_status: DEFAULT_SYNC_STATUS.to_string(),
        }
    }
}
