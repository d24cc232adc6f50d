use crate::identifier::{Identifier, IDENTIFIER_LENGTH};
use crate::secondary_validation::{weighted_sum, Validator};
use crate::validation::validate;

/// Full IIN validation: format, birth date plausibility, region and checksum.
pub struct IinChecksum;

const PRIMARY_WEIGHTS: &[u32; IDENTIFIER_LENGTH] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
const SECONDARY_WEIGHTS: &[u32; IDENTIFIER_LENGTH] = &[3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

/// Which weighted pass accepted an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumPass {
    Primary,
    Secondary,
}

/// Runs the primary pass and, only when it fails, the secondary pass.
/// Returns `None` when neither weighted sum is divisible by 11.
pub fn checksum_pass(identifier: &Identifier) -> Option<ChecksumPass> {
    let digits = identifier.digits();
    if weighted_sum(digits, PRIMARY_WEIGHTS) % 11 == 0 {
        return Some(ChecksumPass::Primary);
    }
    if weighted_sum(digits, SECONDARY_WEIGHTS) % 11 == 0 {
        return Some(ChecksumPass::Secondary);
    }
    None
}

impl Validator for IinChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        validate(regex_match)
    }
}
