pub mod config;
pub mod history;

pub use config::AppConfig;
pub use history::HistorySettings;
