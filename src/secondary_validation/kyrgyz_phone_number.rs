use crate::secondary_validation::Validator;
use lazy_static::lazy_static;
use regex::Regex;

/// Kyrgyz mobile number written as `+996 XXX XX-XX-XX`, operator code starting with 2, 5, 7 or 9.
pub struct KyrgyzPhoneNumber;

lazy_static! {
    static ref KYRGYZ_PHONE_NUMBER: Regex =
        Regex::new(r"^\+996 [2579][0-9]{2} [0-9]{2}-[0-9]{2}-[0-9]{2}$").unwrap();
}

impl Validator for KyrgyzPhoneNumber {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        KYRGYZ_PHONE_NUMBER.is_match(regex_match)
    }
}

#[cfg(test)]
mod test {
    use crate::secondary_validation::*;

    #[test]
    fn test_valid_kyrgyz_phone_numbers() {
        let valid_numbers = vec![
            "+996 550 64-47-72",
            "+996 222 00-00-00",
            "+996 700 12-34-56",
            "+996 999 99-99-99",
        ];
        for number in valid_numbers {
            assert!(
                KyrgyzPhoneNumber.is_valid_match(number),
                "Expected {number} to be valid"
            );
        }
    }

    #[test]
    fn test_invalid_kyrgyz_phone_numbers() {
        let invalid_numbers = vec![
            // the layout is strict
            "+996550644772",
            "+996 550 644772",
            "996 550 64-47-72",
            // operator code
            "+996 350 64-47-72",
            "+996 850 64-47-72",
            // surrounding whitespace
            " +996 550 64-47-72",
            "+996 550 64-47-72 ",
        ];
        for number in invalid_numbers {
            assert!(
                !KyrgyzPhoneNumber.is_valid_match(number),
                "Expected {number} to be invalid"
            );
        }
    }
}
