//! Product validation: constraint violations and the standard validator.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// A single validation failure: message plus the property path it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    pub message: String,
    pub path: String,
}

impl ConstraintViolation {
    pub fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
        }
    }
}

impl core::fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Ordered collection of violations, consumed immediately to decide skip/keep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationList(Vec<ConstraintViolation>);

impl ViolationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: ConstraintViolation) {
        self.0.push(violation);
    }

    pub fn add(&mut self, message: impl Into<String>, path: impl Into<String>) {
        self.push(ConstraintViolation::new(message, path));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ConstraintViolation> {
        self.0.iter()
    }

    /// All messages, in violation order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|v| v.message.clone()).collect()
    }
}

impl IntoIterator for ViolationList {
    type Item = ConstraintViolation;
    type IntoIter = std::vec::IntoIter<ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ViolationList {
    type Item = &'a ConstraintViolation;
    type IntoIter = core::slice::Iter<'a, ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validates an object, returning every violation at once.
pub trait Validator<T>: Send + Sync {
    fn validate(&self, object: &T) -> ViolationList;
}

/// Standard product validator.
///
/// Checks the parts of a product that are plain strings past the typed
/// identifiers: classification codes, value locales/scopes, duplicate value
/// slots and oversized text data.
#[derive(Debug, Clone)]
pub struct ProductValidator {
    max_text_length: usize,
}

impl ProductValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_text_length(max_text_length: usize) -> Self {
        Self { max_text_length }
    }

    fn valid_code(code: &str) -> bool {
        !code.is_empty()
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    fn valid_locale(locale: &str) -> bool {
        let bytes = locale.as_bytes();
        bytes.len() == 5
            && bytes[0].is_ascii_lowercase()
            && bytes[1].is_ascii_lowercase()
            && bytes[2] == b'_'
            && bytes[3].is_ascii_uppercase()
            && bytes[4].is_ascii_uppercase()
    }
}

impl Default for ProductValidator {
    fn default() -> Self {
        Self {
            max_text_length: 65_535,
        }
    }
}

impl Validator<Product> for ProductValidator {
    fn validate(&self, product: &Product) -> ViolationList {
        let mut violations = ViolationList::new();

        for code in product.categories() {
            if !Self::valid_code(code) {
                violations.add(
                    format!("The category code \"{code}\" is not valid"),
                    "categories",
                );
            }
        }

        for code in product.groups() {
            if !Self::valid_code(code) {
                violations.add(format!("The group code \"{code}\" is not valid"), "groups");
            }
        }

        for (attribute, descriptors) in product.values() {
            let path = format!("values[{attribute}]");
            let mut seen_slots = Vec::new();

            for descriptor in descriptors {
                if let Some(locale) = &descriptor.locale {
                    if !Self::valid_locale(locale) {
                        violations.add(format!("The locale \"{locale}\" does not exist"), &path);
                    }
                }
                if let Some(scope) = &descriptor.scope {
                    if !Self::valid_code(scope) {
                        violations
                            .add(format!("The channel code \"{scope}\" is not valid"), &path);
                    }
                }

                let slot = (descriptor.locale.clone(), descriptor.scope.clone());
                if seen_slots.contains(&slot) {
                    violations.add(
                        format!("The attribute \"{attribute}\" has duplicated values"),
                        &path,
                    );
                } else {
                    seen_slots.push(slot);
                }

                if let Some(text) = descriptor.data.as_text() {
                    if text.chars().count() > self.max_text_length {
                        violations.add(
                            format!(
                                "The value of attribute \"{attribute}\" is too long (maximum {} characters)",
                                self.max_text_length
                            ),
                            &path,
                        );
                    }
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ValueData, ValueDescriptor};
    use cataloom_core::ProductIdentifier;

    fn product() -> Product {
        Product::new(ProductIdentifier::new("SKU-1").unwrap(), None, true)
    }

    #[test]
    fn clean_product_has_no_violations() {
        let mut product = product();
        product.set_categories(vec!["summer".into()]);
        product.set_value(
            "name",
            vec![ValueDescriptor::new(
                Some("en_US".into()),
                Some("ecommerce".into()),
                ValueData::Text("Runner".into()),
            )],
        );

        assert!(ProductValidator::new().validate(&product).is_empty());
    }

    #[test]
    fn malformed_category_code_is_reported() {
        let mut product = product();
        product.set_categories(vec!["not a code".into()]);

        let violations = ProductValidator::new().validate(&product);
        assert_eq!(violations.len(), 1);
        assert!(violations.messages()[0].contains("category code"));
    }

    #[test]
    fn unknown_locale_is_reported() {
        let mut product = product();
        product.set_value(
            "name",
            vec![ValueDescriptor::new(
                Some("english".into()),
                None,
                ValueData::Text("Runner".into()),
            )],
        );

        let violations = ProductValidator::new().validate(&product);
        assert_eq!(
            violations.messages(),
            vec!["The locale \"english\" does not exist"]
        );
    }

    #[test]
    fn duplicated_value_slot_is_reported() {
        let mut product = product();
        product.set_value(
            "name",
            vec![ValueDescriptor::text("Runner"), ValueDescriptor::text("Racer")],
        );

        let violations = ProductValidator::new().validate(&product);
        assert_eq!(violations.len(), 1);
        assert!(violations.messages()[0].contains("duplicated"));
    }

    #[test]
    fn oversized_text_is_reported() {
        let mut product = product();
        product.set_value(
            "description",
            vec![ValueDescriptor::text("x".repeat(11))],
        );

        let violations = ProductValidator::with_max_text_length(10).validate(&product);
        assert_eq!(violations.len(), 1);
        assert!(violations.messages()[0].contains("too long"));
    }

    #[test]
    fn all_violations_are_collected_at_once() {
        let mut product = product();
        product.set_categories(vec!["bad cat".into()]);
        product.set_groups(vec!["bad group".into()]);

        let violations = ProductValidator::new().validate(&product);
        assert_eq!(violations.len(), 2);
    }
}
