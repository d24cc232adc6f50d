use afl::fuzz;
use iin_validator::{
    checksum_pass, validate, validate_identifier, Identifier, IdentifierValidationError,
    IDENTIFIER_LENGTH,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    check_invariants(input_str);

    let mut rng = StdRng::seed_from_u64(rng_seed);
    check_invariants(&gen_identifier(&mut rng));

    Some(())
}

// Random 12 digit strings reach the date and checksum stages far more often
// than raw fuzz input does.
fn gen_identifier(rng: &mut StdRng) -> String {
    (0..IDENTIFIER_LENGTH)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn check_invariants(input: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    let result = validate_identifier(input);

    #[cfg(feature = "manual_test")]
    println!("Result: {:?}", result);

    assert_eq!(validate(input), result.is_ok());
    assert_eq!(validate_identifier(input), result);
    assert_ne!(result, Err(IdentifierValidationError::BadRegion));

    let is_twelve_digits =
        input.len() == IDENTIFIER_LENGTH && input.bytes().all(|b| b.is_ascii_digit());
    if !is_twelve_digits {
        assert_eq!(result, Err(IdentifierValidationError::BadLength));
        return;
    }

    let identifier = Identifier::parse(input).unwrap();
    assert_eq!(identifier.to_string(), input);
    if result.is_ok() {
        assert!(checksum_pass(&identifier).is_some());
    }
}
