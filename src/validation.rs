use crate::identifier::Identifier;
use crate::secondary_validation::checksum_pass;
use std::ops::RangeInclusive;
use strum::IntoStaticStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum IdentifierValidationError {
    #[error("An identifier must be exactly 12 ASCII digits")]
    BadLength,

    #[error("The month component must be between 01 and 12")]
    BadMonth,

    #[error("The day component must be between 01 and 31")]
    BadDay,

    #[error("The region code must be between 00 and 99")]
    BadRegion,

    #[error("Neither weighted checksum pass is divisible by 11")]
    ChecksumMismatch,
}

impl IdentifierValidationError {
    /// Stable snake_case name, used as a metric label.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl From<IdentifierValidationError> for i64 {
    fn from(value: IdentifierValidationError) -> i64 {
        match value {
            IdentifierValidationError::BadLength => -1,
            IdentifierValidationError::BadMonth => -2,
            IdentifierValidationError::BadDay => -3,
            IdentifierValidationError::BadRegion => -4,
            IdentifierValidationError::ChecksumMismatch => -5,
        }
    }
}

const MONTH_RANGE: RangeInclusive<u8> = 1..=12;
// No per-month day counts and no leap years.
const DAY_RANGE: RangeInclusive<u8> = 1..=31;
// Every two digit value is in range, so this stage never rejects. It is kept
// so that a stricter region table only has to change this constant.
const REGION_RANGE: RangeInclusive<u8> = 0..=99;

/// Checks that an identifier is 12 digits with a plausible month, day and region,
/// and that one of the two weighted checksum passes succeeds.
///
/// The input is not trimmed or normalized. Stages run in order and the first
/// failing stage is reported.
pub fn validate_identifier(input: &str) -> Result<(), IdentifierValidationError> {
    let identifier = Identifier::parse(input)?;
    check_month(&identifier)?;
    check_day(&identifier)?;
    check_region(&identifier)?;
    check_checksum(&identifier)
}

/// Boolean form of [validate_identifier].
pub fn validate(input: &str) -> bool {
    validate_identifier(input).is_ok()
}

fn check_month(identifier: &Identifier) -> Result<(), IdentifierValidationError> {
    if MONTH_RANGE.contains(&identifier.month()) {
        Ok(())
    } else {
        Err(IdentifierValidationError::BadMonth)
    }
}

fn check_day(identifier: &Identifier) -> Result<(), IdentifierValidationError> {
    if DAY_RANGE.contains(&identifier.day()) {
        Ok(())
    } else {
        Err(IdentifierValidationError::BadDay)
    }
}

fn check_region(identifier: &Identifier) -> Result<(), IdentifierValidationError> {
    if REGION_RANGE.contains(&identifier.region()) {
        Ok(())
    } else {
        Err(IdentifierValidationError::BadRegion)
    }
}

fn check_checksum(identifier: &Identifier) -> Result<(), IdentifierValidationError> {
    match checksum_pass(identifier) {
        Some(_) => Ok(()),
        None => Err(IdentifierValidationError::ChecksumMismatch),
    }
}
