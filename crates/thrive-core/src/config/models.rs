use serde::Deserialize;

/// High-level runtime configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_site_name")]
    pub site_name: String,
    #[serde(default = "crate::config::defaults::default_scroll_threshold_px")]
    pub scroll_threshold_px: f64,
    #[serde(default = "crate::config::defaults::default_navbar_scrolled_after_px")]
    pub navbar_scrolled_after_px: f64,
    #[serde(default = "crate::config::defaults::default_smooth_scroll")]
    pub smooth_scroll: bool,
    #[serde(default = "crate::config::defaults::default_location")]
    pub default_location: String,
    #[serde(default = "crate::config::defaults::default_empty_query_message")]
    pub empty_query_message: String,
    #[serde(default = "crate::config::defaults::default_language")]
    pub language: String,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            site_name: crate::config::defaults::default_site_name(),
            scroll_threshold_px: crate::config::defaults::default_scroll_threshold_px(),
            navbar_scrolled_after_px: crate::config::defaults::default_navbar_scrolled_after_px(),
            smooth_scroll: crate::config::defaults::default_smooth_scroll(),
            default_location: crate::config::defaults::default_location(),
            empty_query_message: crate::config::defaults::default_empty_query_message(),
            language: crate::config::defaults::default_language(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// Message shown when the language selector is used.
    pub fn language_notice(&self) -> String {
        format!(
            "Language selection: Currently {}. Spanish translation coming soon!",
            self.language
        )
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
