//! NIP (Polish tax identification number) parsing and checksum validation.

use std::fmt;

use super::countries::is_known_vat_prefix;

/// Country whose registry this crate queries.
pub const HOME_COUNTRY: &str = "PL";

/// Weights applied to the first nine NIP digits.
const NIP_WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

/// Why a tax identifier was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum VatIdErrorKind {
    /// Nothing left after stripping separators.
    Empty,
    /// Wrong number of characters for the detected country.
    Length,
    /// Characters not allowed for the detected country.
    Format,
    /// Check digit does not match.
    Checksum,
    /// No validation rule for the detected country.
    UnsupportedCountry,
    /// Well-formed, but issued by a country other than the expected one.
    ForeignCountry,
}

/// Error returned when a tax identifier fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VatIdError {
    /// The rejected input, as given.
    pub value: String,
    pub kind: VatIdErrorKind,
    /// Human-readable reason.
    pub reason: String,
}

impl VatIdError {
    fn new(value: &str, kind: VatIdErrorKind, reason: impl Into<String>) -> Self {
        Self {
            value: value.trim().to_string(),
            kind,
            reason: reason.into(),
        }
    }

    pub(crate) fn foreign(value: &str, country: &str, expected: &str) -> Self {
        Self::new(
            value,
            VatIdErrorKind::ForeignCountry,
            format!("country {country} does not match expected {expected}"),
        )
    }
}

impl fmt::Display for VatIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid VAT ID '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for VatIdError {}

type NumberValidator = fn(&str) -> Result<(), (VatIdErrorKind, String)>;

/// Countries with a number validator. Anything else is unsupported.
const VALIDATORS: &[(&str, NumberValidator)] = &[(HOME_COUNTRY, check_pl)];

/// Split a raw tax identifier into `(country, number)` and validate it.
///
/// Separators and other non-alphanumeric noise are dropped
/// ("PL 123-456-32-18" and "pl1234563218" are the same identifier). A
/// leading two-letter prefix is taken as the country code; without one,
/// `default_country` applies. The returned number holds digits only.
///
/// # Errors
///
/// Returns [`VatIdError`] when the input is empty, the length or checksum
/// is wrong for the detected country, or the country has no validation
/// rule.
pub fn resolve_vat_id(raw: &str, default_country: &str) -> Result<(String, String), VatIdError> {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if cleaned.is_empty() {
        return Err(VatIdError::new(
            raw,
            VatIdErrorKind::Empty,
            "no identifier characters",
        ));
    }

    let bytes = cleaned.as_bytes();
    let prefixed =
        bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_alphabetic();
    let (country, number) = if prefixed {
        (cleaned[..2].to_ascii_uppercase(), &cleaned[2..])
    } else {
        (default_country.trim().to_ascii_uppercase(), cleaned.as_str())
    };

    let Some(&(_, validator)) = VALIDATORS.iter().find(|(code, _)| *code == country) else {
        let reason = if is_known_vat_prefix(&country) {
            format!("unsupported country '{country}'")
        } else {
            format!("unknown country code '{country}'")
        };
        return Err(VatIdError::new(
            raw,
            VatIdErrorKind::UnsupportedCountry,
            reason,
        ));
    };

    validator(number).map_err(|(kind, reason)| VatIdError::new(raw, kind, reason))?;
    Ok((country, number.to_string()))
}

/// Validate a bare NIP (10 digits, no prefix or separators).
pub fn validate_nip(number: &str) -> Result<(), VatIdError> {
    check_pl(number).map_err(|(kind, reason)| VatIdError::new(number, kind, reason))
}

fn check_pl(number: &str) -> Result<(), (VatIdErrorKind, String)> {
    if number.len() != 10 {
        return Err((
            VatIdErrorKind::Length,
            format!("expected 10 digits, got {}", number.len()),
        ));
    }
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err((VatIdErrorKind::Format, "must contain only digits".into()));
    }

    let digits: Vec<u32> = number.bytes().map(|b| u32::from(b - b'0')).collect();
    let sum: u32 = digits.iter().zip(NIP_WEIGHTS).map(|(d, w)| d * w).sum();
    let check = sum % 11;

    // A remainder of 10 cannot be written as one digit; such numbers are never issued.
    if check == 10 || check != digits[9] {
        return Err((VatIdErrorKind::Checksum, "checksum mismatch".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_noisy_prefixed_id() {
        let (cc, num) = resolve_vat_id("PL 123-456-32-18", "PL").unwrap();
        assert_eq!(cc, "PL");
        assert_eq!(num, "1234563218");
    }

    #[test]
    fn lowercase_prefix_uppercased() {
        let (cc, _) = resolve_vat_id("pl1234563218", "PL").unwrap();
        assert_eq!(cc, "PL");
    }

    #[test]
    fn default_country_applied() {
        let (cc, num) = resolve_vat_id("123-45-63-218", "pl").unwrap();
        assert_eq!(cc, "PL");
        assert_eq!(num, "1234563218");
    }

    #[test]
    fn checksum_mismatch() {
        let err = resolve_vat_id("1234563219", "PL").unwrap_err();
        assert_eq!(err.kind, VatIdErrorKind::Checksum);
    }

    #[test]
    fn remainder_ten_rejected() {
        // 1*6 + 2*5 + 3*7 + 4*2 + 5*3 + 6*4 + 7*5 + 8*6 + 0*7 = 167, 167 % 11 = 2
        assert!(validate_nip("1234567802").is_ok());
        // 0*6 + 0*5 + 0*7 + 0*2 + 0*3 + 0*4 + 0*5 + 0*6 + 3*7 = 21, 21 % 11 = 10
        for last in 0..=9 {
            let nip = format!("000000003{last}");
            assert_eq!(
                validate_nip(&nip).unwrap_err().kind,
                VatIdErrorKind::Checksum
            );
        }
    }

    #[test]
    fn wrong_length() {
        let err = resolve_vat_id("PL123456321", "PL").unwrap_err();
        assert_eq!(err.kind, VatIdErrorKind::Length);
        let err = resolve_vat_id("PL12345632180", "PL").unwrap_err();
        assert_eq!(err.kind, VatIdErrorKind::Length);
    }

    #[test]
    fn letters_in_number() {
        let err = resolve_vat_id("PL12345A3218", "PL").unwrap_err();
        assert_eq!(err.kind, VatIdErrorKind::Format);
    }

    #[test]
    fn unsupported_country() {
        let err = resolve_vat_id("DE123456789", "PL").unwrap_err();
        assert_eq!(err.kind, VatIdErrorKind::UnsupportedCountry);
        assert!(err.reason.contains("unsupported"));

        let err = resolve_vat_id("XX1234563218", "PL").unwrap_err();
        assert_eq!(err.kind, VatIdErrorKind::UnsupportedCountry);
        assert!(err.reason.contains("unknown"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            resolve_vat_id(" -- ", "PL").unwrap_err().kind,
            VatIdErrorKind::Empty
        );
    }

    #[test]
    fn error_display_contains_input() {
        let err = resolve_vat_id("  PL 999  ", "PL").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'PL 999'"));
        assert!(msg.contains("invalid"));
    }
}
