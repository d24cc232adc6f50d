// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checker;
mod identifier;
mod observability;
mod secondary_validation;
mod stats;
mod validation;

// This is the public API of the validator library
pub use checker::{config::CheckerConfig, Checker};
pub use identifier::{Identifier, IDENTIFIER_LENGTH};
pub use observability::labels::Labels;
pub use secondary_validation::{
    checksum_pass, ChecksumPass, GmailAddress, IinChecksum, KyrgyzPhoneNumber,
    RussianPhoneNumber, SecondaryValidator, Validator,
};
pub use validation::{validate, validate_identifier, IdentifierValidationError};
