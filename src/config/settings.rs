//! User settings for the finance tracker
//!
//! Display preferences and the window sizes used by the dashboard.

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;

/// User settings, persisted as `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Trailing window, in days, of the recent-transactions feed
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: i64,

    /// Maximum number of entries in the recent-transactions feed
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Descriptions longer than this are shortened in the feed
    #[serde(default = "default_description_width")]
    pub description_width: usize,

    /// Trailing window, in days, of the daily expense trend
    #[serde(default = "default_trend_days")]
    pub trend_days: i64,

    /// Report period used when none is given on the command line
    #[serde(default = "default_report_period")]
    pub default_report_period: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_window_days() -> i64 {
    30
}

fn default_recent_limit() -> usize {
    10
}

fn default_description_width() -> usize {
    30
}

fn default_trend_days() -> i64 {
    30
}

fn default_report_period() -> String {
    "Last 30 days".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_window_days: default_recent_window_days(),
            recent_limit: default_recent_limit(),
            description_width: default_description_width(),
            trend_days: default_trend_days(),
            default_report_period: default_report_period(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.recent_window_days, 30);
        assert_eq!(settings.recent_limit, 10);
        assert_eq!(settings.description_width, 30);
        assert_eq!(settings.default_report_period, "Last 30 days");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.recent_limit = 25;
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.recent_limit, 25);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"recent_limit": 5}"#).unwrap();
        assert_eq!(settings.recent_limit, 5);
        assert_eq!(settings.trend_days, 30);
        assert_eq!(settings.currency_symbol, "$");
    }
}
