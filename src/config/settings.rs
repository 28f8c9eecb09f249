//! User settings for finance-dashboard
//!
//! Display preferences (currency symbol, date format, labels) and the knobs
//! of the dashboard (how many recent transactions to show, the placeholder
//! for unknown categories).

use std::fmt::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::storage::write_json_atomic;
use crate::models::TransactionKind;

/// Language used for month and kind labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// Brazilian Portuguese labels (Jan, Fev, ... / Receita, Despesa)
    #[default]
    PtBr,
    /// English labels (Jan, Feb, ... / Income, Expense)
    En,
}

const MONTHS_PT_BR: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Locale {
    /// Three-letter month labels, January first
    pub fn month_labels(&self) -> &'static [&'static str; 12] {
        match self {
            Self::PtBr => &MONTHS_PT_BR,
            Self::En => &MONTHS_EN,
        }
    }

    pub fn kind_label(&self, kind: TransactionKind) -> &'static str {
        match (self, kind) {
            (Self::PtBr, TransactionKind::Income) => "Receita",
            (Self::PtBr, TransactionKind::Expense) => "Despesa",
            (Self::En, TransactionKind::Income) => "Income",
            (Self::En, TransactionKind::Expense) => "Expense",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en" | "en-us" => Ok(Self::En),
            other => Err(format!("Unknown locale '{}' (expected pt-br or en)", other)),
        }
    }
}

/// User settings for finance-dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Language for month and kind labels
    #[serde(default)]
    pub locale: Locale,

    /// How many transactions the recent view shows
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Label shown when a transaction's category cannot be found
    #[serde(default = "default_fallback_label")]
    pub fallback_category_label: String,

    /// Default tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Snapshot file to load instead of the demo data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_recent_limit() -> usize {
    10
}

fn default_fallback_label() -> String {
    "N/A".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            locale: Locale::default(),
            recent_limit: default_recent_limit(),
            fallback_category_label: default_fallback_label(),
            log_level: default_log_level(),
            data_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        write_json_atomic(paths.settings_file(), self)
    }

    pub fn validate(&self) -> Result<(), FinanceError> {
        if self.recent_limit == 0 {
            return Err(FinanceError::Config(
                "recent_limit must be at least 1".into(),
            ));
        }

        if self.date_format.trim().is_empty() {
            return Err(FinanceError::Config("date_format cannot be empty".into()));
        }

        // Unknown specifiers and time fields fail to render against a bare date
        let mut rendered = String::new();
        if write!(rendered, "{}", NaiveDate::MIN.format(&self.date_format)).is_err() {
            return Err(FinanceError::Config(format!(
                "Invalid date_format '{}': it must only use date fields",
                self.date_format
            )));
        }

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
        assert_eq!(settings.currency_symbol, "R$");
        assert_eq!(settings.recent_limit, 10);
        assert_eq!(settings.fallback_category_label, "N/A");
        assert_eq!(settings.locale, Locale::PtBr);
        assert!(settings.data_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.locale = Locale::En;
        settings.recent_limit = 5;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.locale, Locale::En);
        assert_eq!(loaded.recent_limit, 5);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().join("absent"));
        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.recent_limit, 10);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"locale":"en"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.currency_symbol, "R$");
    }

    #[test]
    fn test_rejects_zero_recent_limit() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"recent_limit":0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinanceError::Config(_)));
    }

    #[test]
    fn test_rejects_unrenderable_date_format() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        for format in ["%Q", "%H:%M"] {
            let contents = serde_json::json!({ "date_format": format }).to_string();
            std::fs::write(paths.settings_file(), contents).unwrap();

            let err = Settings::load_or_create(&paths).unwrap_err();
            assert!(matches!(err, FinanceError::Config(ref msg) if msg.contains("date_format")));
        }

        std::fs::write(paths.settings_file(), r#"{"date_format":"%Y-%m-%d (%a)"}"#).unwrap();
        assert!(Settings::load_or_create(&paths).is_ok());
    }

    #[test]
    fn test_locale_labels() {
        assert_eq!(Locale::PtBr.month_labels()[1], "Fev");
        assert_eq!(Locale::En.month_labels()[1], "Feb");
        assert_eq!(Locale::PtBr.kind_label(TransactionKind::Income), "Receita");
        assert_eq!(Locale::En.kind_label(TransactionKind::Expense), "Expense");
        assert_eq!("pt_BR".parse::<Locale>(), Ok(Locale::PtBr));
    }
}
