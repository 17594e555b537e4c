use afl::fuzz;
use iban_check::{check_iban, is_valid_iban, split_iban, IbanChecker, Validator};
use rand::{rngs::StdRng, Rng, SeedableRng};

const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\u{a0}', '\u{2003}'];

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
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn insert_whitespace(input: &str, rng: &mut StdRng) -> String {
    let mut spaced = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        if rng.gen_bool(0.25) {
            spaced.push(WHITESPACE[rng.gen_range(0..WHITESPACE.len())]);
        }
        spaced.push(c);
    }
    spaced
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let is_valid = is_valid_iban(input);
    let spaced = insert_whitespace(input, &mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Spaced input: {:?}", spaced);
        println!("Split: {:?}", split_iban(input));
        println!("Result: {:?}", check_iban(input));
    }

    assert_eq!(check_iban(input).is_ok(), is_valid);
    assert_eq!(IbanChecker::default().is_valid_match(input), is_valid);
    assert_eq!(is_valid_iban(&spaced), is_valid);
    assert_eq!(split_iban(&spaced), split_iban(input));
}
