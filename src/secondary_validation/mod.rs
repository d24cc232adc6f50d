mod gmail_address;
mod iin_checksum;
mod kyrgyz_phone_number;
mod russian_phone_number;

pub use crate::secondary_validation::gmail_address::GmailAddress;
pub use crate::secondary_validation::iin_checksum::{checksum_pass, ChecksumPass, IinChecksum};
pub use crate::secondary_validation::kyrgyz_phone_number::KyrgyzPhoneNumber;
pub use crate::secondary_validation::russian_phone_number::RussianPhoneNumber;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[serde(tag = "type")]
#[strum(serialize_all = "snake_case")]
pub enum SecondaryValidator {
    IinChecksum,
    RussianPhoneNumber,
    KyrgyzPhoneNumber,
    GmailAddress,
}

impl SecondaryValidator {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

// Browser `\s` and `String.prototype.trim` whitespace: tab, vertical tab, form feed,
// line terminators, the Zs space separators and the byte order mark. Unlike
// `char::is_whitespace` this excludes U+0085 and includes U+FEFF.
const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

fn is_browser_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Sum of each digit multiplied by the weight at the same position
#[inline]
fn weighted_sum(digits: &[u8], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| *digit as u32 * weight)
        .sum()
}

impl Validator for SecondaryValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            SecondaryValidator::IinChecksum => IinChecksum.is_valid_match(regex_match),
            SecondaryValidator::RussianPhoneNumber => {
                RussianPhoneNumber.is_valid_match(regex_match)
            }
            SecondaryValidator::KyrgyzPhoneNumber => KyrgyzPhoneNumber.is_valid_match(regex_match),
            SecondaryValidator::GmailAddress => GmailAddress.is_valid_match(regex_match),
        }
    }
}
