mod app;

pub use app::{AppConfig, AppConfigError, DisplayConfig, GeneralConfig, LoggingConfig};
