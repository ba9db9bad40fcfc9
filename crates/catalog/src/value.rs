//! Canonicalized field data.
//!
//! A converted import row is a mapping from canonical field keys (family,
//! categories, groups, enabled, plus one key per attribute column) to field
//! values. The same shape is used to project a product's current state for
//! comparison.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cataloom_core::ValueObject;

/// Canonical field keys shared by the converter, updater and comparator.
pub mod fields {
    pub const FAMILY: &str = "family";
    pub const CATEGORIES: &str = "categories";
    pub const GROUPS: &str = "groups";
    pub const ENABLED: &str = "enabled";
    pub const ASSOCIATIONS: &str = "associations";
}

/// Raw data carried by one attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueData {
    Text(String),
    Boolean(bool),
    Multi(Vec<String>),
    /// An intentionally empty cell (erases the value on update).
    Empty,
}

impl ValueData {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ValueData::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ValueData::Empty)
    }
}

/// One attribute value: data qualified by optional locale and scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDescriptor {
    pub locale: Option<String>,
    pub scope: Option<String>,
    pub data: ValueData,
}

impl ValueDescriptor {
    pub fn new(locale: Option<String>, scope: Option<String>, data: ValueData) -> Self {
        Self {
            locale,
            scope,
            data,
        }
    }

    /// A plain, unqualified text value.
    pub fn text(data: impl Into<String>) -> Self {
        Self::new(None, None, ValueData::Text(data.into()))
    }
}

impl ValueObject for ValueDescriptor {}

/// Value of one canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// A single nullable code (family).
    Code(Option<String>),
    /// A list of codes (categories, groups).
    Codes(Vec<String>),
    /// A boolean switch (enabled).
    Flag(bool),
    /// Attribute values, one descriptor per locale/scope combination.
    Values(Vec<ValueDescriptor>),
}

impl FieldValue {
    pub fn as_code(&self) -> Option<&str> {
        match self {
            FieldValue::Code(code) => code.as_deref(),
            _ => None,
        }
    }

    pub fn as_values(&self) -> Option<&[ValueDescriptor]> {
        match self {
            FieldValue::Values(values) => Some(values),
            _ => None,
        }
    }

    /// Text data of the first descriptor, for identifier-style columns.
    pub fn first_text(&self) -> Option<&str> {
        self.as_values()
            .and_then(|values| values.first())
            .and_then(|value| value.data.as_text())
    }
}

/// A converted item: canonical field key → field value.
pub type FieldValues = BTreeMap<String, FieldValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_reads_the_leading_descriptor() {
        let field = FieldValue::Values(vec![
            ValueDescriptor::text("SKU-1"),
            ValueDescriptor::text("ignored"),
        ]);
        assert_eq!(field.first_text(), Some("SKU-1"));
    }

    #[test]
    fn first_text_is_none_for_non_value_fields() {
        assert_eq!(FieldValue::Flag(true).first_text(), None);
        assert_eq!(FieldValue::Code(Some("shoes".into())).first_text(), None);
    }
}
