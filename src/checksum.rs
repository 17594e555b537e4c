use crate::translator::NumericString;

const MODULUS: u64 = 97;

/// A check value is valid when its remainder modulo 97 is 1 (ISO 7064 MOD 97-10).
pub const EXPECTED_REMAINDER: u32 = 1;

// acc < 97, so acc * 10^9 + 999_999_999 stays far below u64::MAX.
const DIGITS_PER_STEP: usize = 9;

/// Remainder of the (arbitrarily large) decimal number `digits` divided by 97.
///
/// The number is never materialised: the digits are folded left to right, keeping only the
/// running remainder. The empty string is 0.
pub fn mod97(digits: &NumericString) -> u32 {
    let remainder = digits
        .as_str()
        .as_bytes()
        .chunks(DIGITS_PER_STEP)
        .fold(0u64, |acc, chunk| {
            let (value, scale) = chunk.iter().fold((0u64, 1u64), |(value, scale), b| {
                (value * 10 + u64::from(b - b'0'), scale * 10)
            });
            (acc * scale + value) % MODULUS
        });
    remainder as u32
}

/// True if the number written by `digits` passes the MOD 97-10 check.
pub fn is_valid_check_value(digits: &NumericString) -> bool {
    mod97(digits) == EXPECTED_REMAINDER
}

/// Check digits that make `base + check digits` pass the MOD 97-10 check, given `base`
/// already followed by two zero placeholders.
pub(crate) fn check_digits_for(base_with_placeholder: &NumericString) -> u32 {
    MODULUS as u32 + EXPECTED_REMAINDER - mod97(base_with_placeholder)
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    fn numeric(digits: &str) -> NumericString {
        NumericString::from_digits(digits).unwrap()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(mod97(&numeric("")), 0);
        assert_eq!(mod97(&numeric("0")), 0);
        assert_eq!(mod97(&numeric("96")), 96);
        assert_eq!(mod97(&numeric("97")), 0);
        assert_eq!(mod97(&numeric("98")), 1);
        assert_eq!(mod97(&numeric("000098")), 1);
    }

    #[test]
    fn matches_u128_arithmetic() {
        let inputs = [
            "12345678901234567890123456789",
            "99999999999999999999999999999999999999",
            "11111111111111111111111111111111111111",
            "100000000000000000000",
            "3704004405320130001314",
        ];
        for input in inputs {
            let expected = input.parse::<u128>().unwrap() % 97;
            assert_eq!(mod97(&numeric(input)) as u128, expected, "input {}", input);
        }
    }

    #[test]
    fn iban_check_value() {
        // GB29 NWBK 6016 1331 9268 19
        let check_value = numeric("2332112060161331926819161129");
        assert!(is_valid_check_value(&check_value));
    }

    #[test]
    fn beyond_128_bits() {
        assert_eq!(mod97(&numeric(&"9".repeat(70))), 71);
        assert_eq!(
            mod97(&numeric(&"3214282912345698765432161182".repeat(3))),
            13
        );
    }

    #[test]
    fn check_digits_make_value_valid() {
        // DE, BBAN 370400440532013000
        let base = numeric("3704004405320130001314");
        let base_with_placeholder = numeric("370400440532013000131400");
        assert_eq!(check_digits_for(&base_with_placeholder), 89);

        let with_check_digits = NumericString::concat(&[&base, &numeric("89")]);
        assert!(is_valid_check_value(&with_check_digits));
    }
}
