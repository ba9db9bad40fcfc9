//! Product entity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cataloom_core::{Entity, FamilyCode, ProductIdentifier};
use cataloom_storage::Identifiable;

use crate::value::{FieldValue, FieldValues, ValueDescriptor, fields};

/// A product: identifier, optional family, classification and attribute values.
///
/// Mutated in place by the updater during imports; persistence is a downstream
/// writer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    identifier: ProductIdentifier,
    family: Option<FamilyCode>,
    enabled: bool,
    categories: Vec<String>,
    groups: Vec<String>,
    values: BTreeMap<String, Vec<ValueDescriptor>>,
}

impl Product {
    pub fn new(identifier: ProductIdentifier, family: Option<FamilyCode>, enabled: bool) -> Self {
        Self {
            identifier,
            family,
            enabled,
            categories: Vec::new(),
            groups: Vec::new(),
            values: BTreeMap::new(),
        }
    }

    pub fn identifier(&self) -> &ProductIdentifier {
        &self.identifier
    }

    pub fn family(&self) -> Option<&FamilyCode> {
        self.family.as_ref()
    }

    pub fn set_family(&mut self, family: Option<FamilyCode>) {
        self.family = family;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.categories = categories;
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn set_groups(&mut self, groups: Vec<String>) {
        self.groups = groups;
    }

    pub fn value(&self, attribute: &str) -> Option<&[ValueDescriptor]> {
        self.values.get(attribute).map(Vec::as_slice)
    }

    pub fn set_value(&mut self, attribute: impl Into<String>, descriptors: Vec<ValueDescriptor>) {
        self.values.insert(attribute.into(), descriptors);
    }

    pub fn values(&self) -> &BTreeMap<String, Vec<ValueDescriptor>> {
        &self.values
    }

    /// Project the current state as canonical field data.
    ///
    /// Same shape as a converted row, which is what makes the identical-data
    /// comparison a plain field-by-field diff.
    pub fn field_values(&self) -> FieldValues {
        let mut projection = FieldValues::new();
        projection.insert(
            fields::FAMILY.to_string(),
            FieldValue::Code(self.family.as_ref().map(|f| f.as_str().to_string())),
        );
        projection.insert(
            fields::CATEGORIES.to_string(),
            FieldValue::Codes(self.categories.clone()),
        );
        projection.insert(
            fields::GROUPS.to_string(),
            FieldValue::Codes(self.groups.clone()),
        );
        projection.insert(fields::ENABLED.to_string(), FieldValue::Flag(self.enabled));
        for (attribute, descriptors) in &self.values {
            projection.insert(attribute.clone(), FieldValue::Values(descriptors.clone()));
        }
        projection
    }
}

impl Entity for Product {
    type Id = ProductIdentifier;

    fn id(&self) -> &Self::Id {
        &self.identifier
    }
}

impl Identifiable for Product {
    fn identifier_property() -> &'static str {
        "sku"
    }

    fn identifier(&self) -> &str {
        self.identifier.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueData;

    fn product() -> Product {
        Product::new(
            ProductIdentifier::new("SKU-1").unwrap(),
            Some(FamilyCode::new("shoes").unwrap()),
            true,
        )
    }

    #[test]
    fn projection_covers_classification_and_values() {
        let mut product = product();
        product.set_categories(vec!["summer".into()]);
        product.set_value("name", vec![ValueDescriptor::text("Runner")]);

        let projection = product.field_values();
        assert_eq!(
            projection.get(fields::FAMILY),
            Some(&FieldValue::Code(Some("shoes".into())))
        );
        assert_eq!(
            projection.get(fields::CATEGORIES),
            Some(&FieldValue::Codes(vec!["summer".into()]))
        );
        assert_eq!(projection.get(fields::ENABLED), Some(&FieldValue::Flag(true)));
        assert_eq!(
            projection.get("name").and_then(FieldValue::first_text),
            Some("Runner")
        );
    }

    #[test]
    fn identifier_property_is_the_sku_column() {
        assert_eq!(<Product as Identifiable>::identifier_property(), "sku");
        assert_eq!(Identifiable::identifier(&product()), "SKU-1");
    }

    #[test]
    fn value_data_empty_marker() {
        assert!(ValueData::Empty.is_empty());
        assert!(!ValueData::Text("x".into()).is_empty());
    }
}
