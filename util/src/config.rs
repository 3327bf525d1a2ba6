//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.
//!
//! Every value has a default, so loading never fails. An empty `GEMINI_API_KEY`
//! is allowed: the reviewer treats it as a backend failure and answers with its
//! fallback feedback.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_TIMEOUT_SECONDS: u64 = 60;

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub gemini_timeout_seconds: u64,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars()
    }

    /// Loads `.env`-style variables from `path` first, then reads the environment.
    ///
    /// Variables already present in the process environment take precedence
    /// over the file.
    pub fn from_env_file(path: &str) -> Self {
        dotenvy::from_filename(path).ok();
        Self::from_vars()
    }

    fn from_vars() -> Self {
        Self {
            env: var_or("APP_ENV", "development"),
            project_name: var_or("PROJECT_NAME", "lesson-review"),
            log_level: var_or("LOG_LEVEL", "reviewer=info,lesson_review=info"),
            log_file: var_or("LOG_FILE", "lesson-review.log"),
            log_to_stdout: var_or("LOG_TO_STDOUT", "false").trim() == "true",
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: var_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_api_base: var_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            gemini_timeout_seconds: parsed_or(
                "GEMINI_TIMEOUT_SECONDS",
                DEFAULT_GEMINI_TIMEOUT_SECONDS,
            ),
        }
    }

    fn lock() -> &'static RwLock<AppConfig> {
        CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()))
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// A poisoned lock is recovered rather than propagated; the configuration
    /// is plain data and stays consistent after a panicking writer.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        Self::lock()
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replaces the global configuration wholesale.
    pub fn install(config: AppConfig) {
        AppConfig::set_field(|cfg| *cfg = config);
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        AppConfig::install(AppConfig::from_env());
    }

    /// Generic internal setter for any field in the config.
    ///
    /// Used by public per-field setter methods.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut guard = Self::lock()
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_gemini_api_key(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.gemini_api_key = value.into());
    }

    pub fn set_gemini_model(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.gemini_model = value.into());
    }

    pub fn set_gemini_api_base(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.gemini_api_base = value.into());
    }

    pub fn set_gemini_timeout_seconds(value: u64) {
        AppConfig::set_field(|cfg| cfg.gemini_timeout_seconds = value);
    }
}

// --- Free accessors ---

pub fn app_env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn gemini_api_key() -> String {
    AppConfig::global().gemini_api_key.clone()
}

pub fn gemini_model() -> String {
    AppConfig::global().gemini_model.clone()
}

pub fn gemini_api_base() -> String {
    AppConfig::global().gemini_api_base.clone()
}

pub fn gemini_timeout_seconds() -> u64 {
    AppConfig::global().gemini_timeout_seconds
}
