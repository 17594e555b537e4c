use ahash::AHashMap;
use lazy_static::lazy_static;

/// Every character allowed in an IBAN, ordered so that the index of a character is its
/// numeric value (`'0'..='9'` are 0 to 9, `'A'..='Z'` are 10 to 35).
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

lazy_static! {
    static ref NUMERIC_VALUES: AHashMap<char, String> = ALPHABET
        .chars()
        .enumerate()
        .map(|(value, c)| (c, value.to_string()))
        .collect();
}

/// Decimal representation of `c`, or `None` if `c` is not part of the alphabet.
/// Lookups are case-sensitive: only upper-case ASCII letters are mapped.
pub fn numeric_value(c: char) -> Option<&'static str> {
    let values: &'static AHashMap<char, String> = &NUMERIC_VALUES;
    values.get(&c).map(String::as_str)
}
