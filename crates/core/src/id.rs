//! Strongly-typed identifiers used across the catalog domain.
//!
//! Catalog entities are addressed by human-entered codes (a product SKU, a
//! family code) rather than surrogate keys, so these newtypes validate their
//! content instead of wrapping a UUID.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product (the SKU column of an import).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductIdentifier(String);

/// Code of a family (named catalog grouping).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyCode(String);

macro_rules! impl_code_newtype {
    ($t:ty, $name:literal, $max:literal) => {
        impl $t {
            /// Create a new identifier, validating shape and length.
            pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
                let code = code.into();
                if code.is_empty() {
                    return Err(DomainError::invalid_identifier(concat!(
                        $name,
                        " cannot be empty"
                    )));
                }
                if code.len() > $max {
                    return Err(DomainError::invalid_identifier(format!(
                        "{} exceeds {} characters",
                        $name, $max
                    )));
                }
                if !code
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
                {
                    return Err(DomainError::invalid_identifier(format!(
                        "{} may only contain letters, numbers, underscores and dashes, \"{}\" provided",
                        $name, code
                    )));
                }
                Ok(Self(code))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_code_newtype!(ProductIdentifier, "ProductIdentifier", 255);
impl_code_newtype!(FamilyCode, "FamilyCode", 100);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_codes() {
        assert!(ProductIdentifier::new("SKU-001_a").is_ok());
        assert!(FamilyCode::new("camcorders").is_ok());
    }

    #[test]
    fn rejects_empty_code() {
        let err = ProductIdentifier::new("").unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier(_)));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(FamilyCode::new("cam corders").is_err());
        assert!(ProductIdentifier::new("sku/1").is_err());
    }

    #[test]
    fn rejects_oversized_code() {
        let long = "a".repeat(256);
        assert!(ProductIdentifier::new(long.clone()).is_err());
        assert!(FamilyCode::new(long).is_err());
    }
}
