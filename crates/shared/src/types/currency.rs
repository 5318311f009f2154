//! Currency code normalization.
//!
//! Wallets are keyed by (account, currency); the currency half of the key is
//! always the upper-cased code, regardless of how the caller spelled it.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A normalized ISO 4217-style currency code (e.g. "USD").
///
/// The catalog of valid currencies lives in the database; this type only
/// guarantees the code is non-empty and upper-cased so lookups and keys are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses and normalizes a currency code.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the code is empty or blank.
    pub fn parse(code: &str) -> Result<Self, AppError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("CurrencyCode is required.".into()));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Returns the normalized code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the code, returning the normalized string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("usd", "USD")]
    #[case("USD", "USD")]
    #[case("  eur ", "EUR")]
    #[case("jPy", "JPY")]
    fn test_parse_normalizes_to_uppercase(#[case] input: &str, #[case] expected: &str) {
        let code = CurrencyCode::parse(input).unwrap();
        assert_eq!(code.as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_parse_rejects_blank(#[case] input: &str) {
        let err = CurrencyCode::parse(input).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_display_and_eq_use_normalized_form() {
        let a = CurrencyCode::parse("usd").unwrap();
        let b = CurrencyCode::parse("USD").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "USD");
    }
}
