use afl::fuzz;
use checkmate::{
    CheckDigitCalculator, IdentifierKind, IdentifierValidator, InputError, IsbnValidator,
    JmbgChecksum, JmbgValidator,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const KINDS: [IdentifierKind; 5] = [
    IdentifierKind::CreditCard,
    IdentifierKind::Iban,
    IdentifierKind::Isbn,
    IdentifierKind::Jmbg,
    IdentifierKind::Email,
];

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

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    for kind in KINDS {
        let result = kind.is_valid(input);
        #[cfg(feature = "manual_test")]
        println!("{:?}: {:?}", kind, result);

        // blank input must be rejected before anything else happens
        if input.trim().is_empty() {
            assert_eq!(result, Err(InputError::empty(kind)));
        }
    }

    if input.trim().is_empty() {
        return;
    }

    // a repaired identifier always validates
    if let Ok(Some(repaired)) = IsbnValidator.validate_isbn10(input) {
        assert_eq!(IsbnValidator.is_valid_isbn10(repaired.as_str()), Ok(true));
    }
    if let Ok(Some(repaired)) = IsbnValidator.validate_isbn13(input) {
        assert_eq!(IsbnValidator.is_valid_isbn13(repaired.as_str()), Ok(true));
    }
    if let Ok(Some(repaired)) = JmbgValidator.validate(input) {
        assert_eq!(JmbgValidator.is_valid(repaired.as_str()), Ok(true));
    }

    // a computed JMBG with in-range date fields always validates
    let body = format!(
        "{:02}{:02}{:08}",
        rng.gen_range(1..=31),
        rng.gen_range(1..=12),
        rng.gen_range(0..100_000_000)
    );
    if let Some(jmbg) = JmbgChecksum.calculate(&body) {
        assert_eq!(JmbgValidator.is_valid(jmbg.as_str()), Ok(true));
    }
}
