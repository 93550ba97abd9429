pub(crate) fn default_site_name() -> String {
    "Thrive Island County".to_string()
}

pub(crate) fn default_scroll_threshold_px() -> f64 {
    200.0
}

pub(crate) fn default_navbar_scrolled_after_px() -> f64 {
    20.0
}

pub(crate) fn default_smooth_scroll() -> bool {
    true
}

pub(crate) fn default_location() -> String {
    "All Locations".to_string()
}

pub(crate) fn default_empty_query_message() -> String {
    "Please enter a search query".to_string()
}

pub(crate) fn default_language() -> String {
    "English".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}
