use super::defaults;
use super::models::{AppConfig, LogLevel};
use serde::Deserialize;

/// On-disk layout of `config.toml`, grouped by concern.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    site: SiteConfig,
    #[serde(default)]
    navigation: NavigationConfig,
    #[serde(default)]
    search: SearchConfig,
    #[serde(default)]
    locale: LocaleConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            site_name: tables.site.name,
            scroll_threshold_px: tables.navigation.scroll_threshold_px,
            navbar_scrolled_after_px: tables.navigation.navbar_scrolled_after_px,
            smooth_scroll: tables.navigation.smooth_scroll,
            default_location: tables.search.default_location,
            empty_query_message: tables.search.empty_query_message,
            language: tables.locale.language,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            site: SiteConfig {
                name: config.site_name.clone(),
            },
            navigation: NavigationConfig {
                scroll_threshold_px: config.scroll_threshold_px,
                navbar_scrolled_after_px: config.navbar_scrolled_after_px,
                smooth_scroll: config.smooth_scroll,
            },
            search: SearchConfig {
                default_location: config.default_location.clone(),
                empty_query_message: config.empty_query_message.clone(),
            },
            locale: LocaleConfig {
                language: config.language.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct SiteConfig {
    #[serde(default = "defaults::default_site_name")]
    name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            name: defaults::default_site_name(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct NavigationConfig {
    #[serde(default = "defaults::default_scroll_threshold_px")]
    scroll_threshold_px: f64,
    #[serde(default = "defaults::default_navbar_scrolled_after_px")]
    navbar_scrolled_after_px: f64,
    #[serde(default = "defaults::default_smooth_scroll")]
    smooth_scroll: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            scroll_threshold_px: defaults::default_scroll_threshold_px(),
            navbar_scrolled_after_px: defaults::default_navbar_scrolled_after_px(),
            smooth_scroll: defaults::default_smooth_scroll(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct SearchConfig {
    #[serde(default = "defaults::default_location")]
    default_location: String,
    #[serde(default = "defaults::default_empty_query_message")]
    empty_query_message: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            default_location: defaults::default_location(),
            empty_query_message: defaults::default_empty_query_message(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LocaleConfig {
    #[serde(default = "defaults::default_language")]
    language: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        LocaleConfig {
            language: defaults::default_language(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
