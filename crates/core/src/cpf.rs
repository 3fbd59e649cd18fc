//! CPF value object and checksum validation.
//!
//! A CPF (Cadastro de Pessoas Físicas) is the Brazilian individual taxpayer
//! registry number: 11 decimal digits, the last two of which are check digits
//! derived from weighted sums modulo 11.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A structurally valid CPF.
///
/// Compared by value. Constructing one via [`Cpf::parse`] (or `FromStr`)
/// guarantees the invariant: exactly 11 ASCII digits, not all identical, and
/// both check digits consistent with the weighted mod-11 relations.
///
/// The stored form is the normalized 11-digit string; formatting characters
/// (`.` and `-`) present in the input are stripped during parsing.
///
/// Serializes as the bare string; deserialization goes through
/// [`Cpf::parse`], so a decoded `Cpf` upholds the same invariant as a
/// parsed one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parse and validate a raw CPF string.
    ///
    /// Accepts formatted input (`"752.230.557-80"`) as well as the bare
    /// 11-digit form. Rejects anything that fails [`is_valid`].
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if is_valid_digits(&digits) {
            Ok(Self(digits))
        } else {
            Err(DomainError::invalid_id("cpf failed structural validation"))
        }
    }

    /// The normalized 11-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked form safe for logs: first three digits kept, rest redacted.
    ///
    /// A full CPF is personally identifying data and must not appear in
    /// plain logs.
    pub fn masked(&self) -> String {
        format!("{}********", &self.0[..3])
    }
}

impl core::fmt::Display for Cpf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cpf {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Validate a raw CPF string.
///
/// Pure and total: arbitrary text (empty, letters, wrong length) yields
/// `false`, never a panic.
pub fn is_valid(raw: &str) -> bool {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    is_valid_digits(&digits)
}

/// Validation over an already digit-only string.
///
/// Steps, in order:
/// 1. length must be exactly 11 (checked before any indexing);
/// 2. all-identical sequences are rejected (they satisfy the checksum but
///    are not assignable CPFs, e.g. `"00000000000"`);
/// 3. digit 9 must equal the first check digit (weights 10..=2 over
///    digits 0..=8);
/// 4. digit 10 must equal the second check digit (weights 11..=2 over
///    digits 0..=9).
fn is_valid_digits(digits: &str) -> bool {
    if digits.len() != 11 {
        return false;
    }

    let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    if d.len() != 11 {
        return false;
    }

    if d.iter().all(|&x| x == d[0]) {
        return false;
    }

    d[9] == check_digit(&d[..9], 10) && d[10] == check_digit(&d[..10], 11)
}

/// Weighted mod-11 check digit over a digit prefix.
///
/// `first_weight` is the weight of the leading digit; weights decrease by
/// one per position. Remainders below 2 map to 0, otherwise to
/// `11 - remainder`.
fn check_digit(prefix: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &digit)| digit * (first_weight - i as u32))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_known_valid_cpf() {
        assert!(is_valid("75223055780"));
    }

    #[test]
    fn accepts_formatted_cpf() {
        assert!(is_valid("752.230.557-80"));
        assert_eq!(Cpf::parse("752.230.557-80").unwrap().as_str(), "75223055780");
    }

    #[test]
    fn rejects_bad_check_digits() {
        assert!(!is_valid("12345678901"));
    }

    #[test]
    fn rejects_repeated_digit_sequences() {
        assert!(!is_valid("11111111111"));
        assert!(!is_valid("00000000000"));
    }

    #[test]
    fn rejects_wrong_length_after_stripping() {
        // Nine digits once letters are stripped, so rejected before checksum.
        assert!(!is_valid("abc123456789"));
        assert!(!is_valid(""));
        assert!(!is_valid("7522305578"));
        assert!(!is_valid("752230557800"));
    }

    #[test]
    fn parse_rejects_invalid_input() {
        assert!(Cpf::parse("12345678901").is_err());
        assert!(Cpf::parse("not a cpf").is_err());
    }

    #[test]
    fn masked_redacts_most_digits() {
        let cpf = Cpf::parse("75223055780").unwrap();
        assert_eq!(cpf.masked(), "752********");
        assert!(!cpf.masked().contains("55780"));
    }

    #[test]
    fn deserialization_runs_validation() {
        // Decoding must uphold the same invariant as parsing; a short
        // string slipping through would break `masked()`'s slicing.
        assert!(serde_json::from_str::<Cpf>("\"xx\"").is_err());
        assert!(serde_json::from_str::<Cpf>("\"12345678901\"").is_err());

        let cpf: Cpf = serde_json::from_str("\"75223055780\"").unwrap();
        assert_eq!(cpf.as_str(), "75223055780");
        assert_eq!(cpf.masked(), "752********");
    }

    #[test]
    fn serializes_as_bare_string() {
        let cpf = Cpf::parse("75223055780").unwrap();
        assert_eq!(serde_json::to_string(&cpf).unwrap(), "\"75223055780\"");
    }

    #[test]
    fn display_is_normalized_form() {
        let cpf: Cpf = "752.230.557-80".parse().unwrap();
        assert_eq!(cpf.to_string(), "75223055780");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: validation is total over arbitrary text.
        #[test]
        fn never_panics_on_arbitrary_input(s in ".*") {
            let _ = is_valid(&s);
        }

        /// Property: any string of 11 identical digits is rejected.
        #[test]
        fn rejects_all_identical_digits(digit in 0u32..10) {
            let s: String = std::char::from_digit(digit, 10).unwrap().to_string().repeat(11);
            prop_assert!(!is_valid(&s));
        }

        /// Property: digit strings with length other than 11 are rejected.
        #[test]
        fn rejects_non_eleven_digit_strings(s in "[0-9]{0,10}|[0-9]{12,20}") {
            prop_assert!(!is_valid(&s));
        }

        /// Property: corrupting the final check digit invalidates a valid CPF.
        #[test]
        fn rejects_corrupted_check_digit(delta in 1u32..10) {
            let base = "75223055780";
            let last = base.chars().last().unwrap().to_digit(10).unwrap();
            let corrupted = format!("{}{}", &base[..10], (last + delta) % 10);
            prop_assert!(!is_valid(&corrupted));
        }
    }
}
