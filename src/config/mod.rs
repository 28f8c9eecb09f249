//! Configuration module for finance-dashboard
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - Display preferences

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::{Locale, Settings};
