use std::fmt;

/// Inputs with fewer non-whitespace characters than this can't be split.
pub const MIN_IBAN_LENGTH: usize = 5;

const COUNTRY_CODE_LENGTH: usize = 2;
const CHECK_SUM_LENGTH: usize = 2;

/// An IBAN candidate split into its three segments. No character-set validation has been
/// applied to any of them.
///
/// All three segments are empty when the input was too short to split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IbanParts {
    pub country_code: String,
    pub check_sum: String,
    pub bban: String,
}

impl IbanParts {
    /// True for the "too short to split" result.
    pub fn is_empty(&self) -> bool {
        self.country_code.is_empty() && self.check_sum.is_empty() && self.bban.is_empty()
    }

    pub fn as_tuple(&self) -> (&str, &str, &str) {
        (&self.country_code, &self.check_sum, &self.bban)
    }

    pub(crate) fn to_ascii_uppercase(&self) -> IbanParts {
        IbanParts {
            country_code: self.country_code.to_ascii_uppercase(),
            check_sum: self.check_sum.to_ascii_uppercase(),
            bban: self.bban.to_ascii_uppercase(),
        }
    }
}

/// Electronic format: the segments concatenated with no separators.
impl fmt::Display for IbanParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.country_code, self.check_sum, self.bban)
    }
}

/// Removes all whitespace (including the grouping spaces of the print format) and splits the
/// rest into country code, check sum and BBAN.
pub fn split_iban(raw: &str) -> IbanParts {
    split_iban_with(raw, char::is_whitespace)
}

/// Same as [split_iban], with the set of removed characters given by `is_separator`.
pub(crate) fn split_iban_with(raw: &str, is_separator: impl Fn(char) -> bool) -> IbanParts {
    let stripped: Vec<char> = raw.chars().filter(|c| !is_separator(*c)).collect();
    if stripped.len() < MIN_IBAN_LENGTH {
        return IbanParts::default();
    }

    let (country_code, rest) = stripped.split_at(COUNTRY_CODE_LENGTH);
    let (check_sum, bban) = rest.split_at(CHECK_SUM_LENGTH);
    IbanParts {
        country_code: country_code.iter().collect(),
        check_sum: check_sum.iter().collect(),
        bban: bban.iter().collect(),
    }
}
