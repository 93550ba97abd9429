//! Small string helpers used by the directory pages.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());
static US_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{3})(\d{3})(\d{4})$").unwrap());
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Render a ten-digit number as `(555) 123-4567`. Anything else is returned
/// untouched.
pub fn format_phone_number(phone: &str) -> String {
    let digits = NON_DIGIT.replace_all(phone, "");
    match US_PHONE.captures(&digits) {
        Some(caps) => format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]),
        None => phone.to_string(),
    }
}

pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
