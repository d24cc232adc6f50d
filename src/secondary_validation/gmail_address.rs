use crate::secondary_validation::{is_browser_whitespace, Validator};
use lazy_static::lazy_static;
use regex::Regex;

pub struct GmailAddress;

lazy_static! {
    static ref GMAIL_ADDRESS: Regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@gmail\.com$").unwrap();
}

impl Validator for GmailAddress {
    /// Surrounding whitespace is ignored the way a browser trims form input,
    /// the domain must be exactly `gmail.com`.
    fn is_valid_match(&self, regex_match: &str) -> bool {
        GMAIL_ADDRESS.is_match(regex_match.trim_matches(is_browser_whitespace))
    }
}
