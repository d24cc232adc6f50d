use crate::secondary_validation::{Validator, BROWSER_WHITESPACE};
use lazy_static::lazy_static;
use regex::Regex;

/// Russian phone number, with or without the `+7`/`7`/`8` prefix and with optional
/// separators between digit groups, e.g. `+7(999)123-45-67` or `8 912 345 67 89`.
pub struct RussianPhoneNumber;

lazy_static! {
    // Area codes start with 3-9. Digits are ASCII only, separators may be any
    // whitespace a browser `\s` accepts.
    static ref RUSSIAN_PHONE_NUMBER: Regex = Regex::new(&format!(
        r"^(?:\+?7|8|7)?[{ws}\-\(\)\.]?[3-9](?-u:\d){{2}}[{ws}\-\)\.]?(?-u:\d){{3}}[{ws}\-\(]?(?-u:\d){{2}}[{ws}\-\)]?(?-u:\d){{2}}$",
        ws = BROWSER_WHITESPACE
    ))
    .unwrap();
}

impl Validator for RussianPhoneNumber {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        RUSSIAN_PHONE_NUMBER.is_match(regex_match)
    }
}
