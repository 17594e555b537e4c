use crate::alphabet::numeric_value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("character {0:?} is not a digit or an upper-case ASCII letter")]
    UnmappableCharacter(char),
}

/// A string made only of ASCII decimal digits: the translated form of an alphanumeric input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NumericString(String);

impl NumericString {
    /// Wraps `digits` if it is made only of ASCII decimal digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(NumericString(digits.to_owned()))
        } else {
            None
        }
    }

    /// `count` zeros, used as placeholder check digits.
    pub fn zeros(count: usize) -> Self {
        NumericString("0".repeat(count))
    }

    /// Concatenates `parts` in order. Leading zeros of each part are kept.
    pub fn concat(parts: &[&NumericString]) -> Self {
        let mut digits = String::with_capacity(parts.iter().map(|part| part.len()).sum());
        for part in parts {
            digits.push_str(&part.0);
        }
        NumericString(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NumericString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric representation of a single character: digits map to themselves, `'A'..='Z'`
/// map to `"10"..="35"`.
pub fn translate_char(c: char) -> Result<&'static str, TranslationError> {
    numeric_value(c).ok_or(TranslationError::UnmappableCharacter(c))
}

/// Translates every character of `input` and concatenates the results. Stops at the first
/// character that can't be translated.
pub fn translate_to_numeric(input: &str) -> Result<NumericString, TranslationError> {
    let mut digits = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        digits.push_str(translate_char(c)?);
    }
    Ok(NumericString(digits))
}
