use crate::validation::IdentifierValidationError;
use std::fmt;

pub const IDENTIFIER_LENGTH: usize = 12;

/// A 12 digit identification number that passed the format check.
///
/// Positions 2-3 hold the birth month, 4-5 the birth day and 6-7 the region code.
/// Nothing beyond the format is guaranteed by this type; the date, region and
/// checksum stages are applied by [crate::validate_identifier].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier {
    digits: [u8; IDENTIFIER_LENGTH],
}

impl Identifier {
    /// Parses exactly 12 ASCII decimal digits. Signs, whitespace, separators and
    /// non-ASCII digits are all rejected with [IdentifierValidationError::BadLength].
    pub fn parse(input: &str) -> Result<Self, IdentifierValidationError> {
        let bytes = input.as_bytes();
        if bytes.len() != IDENTIFIER_LENGTH {
            return Err(IdentifierValidationError::BadLength);
        }

        let mut digits = [0u8; IDENTIFIER_LENGTH];
        for (digit, byte) in digits.iter_mut().zip(bytes) {
            if !byte.is_ascii_digit() {
                return Err(IdentifierValidationError::BadLength);
            }
            *digit = byte - b'0';
        }
        Ok(Identifier { digits })
    }

    pub fn digits(&self) -> &[u8; IDENTIFIER_LENGTH] {
        &self.digits
    }

    pub fn month(&self) -> u8 {
        self.two_digit_field(2)
    }

    pub fn day(&self) -> u8 {
        self.two_digit_field(4)
    }

    pub fn region(&self) -> u8 {
        self.two_digit_field(6)
    }

    fn two_digit_field(&self, start: usize) -> u8 {
        self.digits[start] * 10 + self.digits[start + 1]
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
