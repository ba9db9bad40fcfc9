//! Identical-data comparison.
//!
//! Before updating an existing product, the import pipeline drops every
//! incoming field equal to the product's current state. An empty result means
//! the row carries nothing new and the product is skipped silently.

use crate::product::Product;
use crate::value::{FieldValue, FieldValues, ValueDescriptor};

/// Computes the subset of incoming fields that differ from a product.
pub trait ProductFilter: Send + Sync {
    fn filter(&self, product: &Product, fields: &FieldValues) -> FieldValues;
}

/// Field-by-field comparison against the product's canonical projection.
///
/// Code lists compare order-insensitively; attribute values compare per
/// locale/scope combination.
#[derive(Debug, Clone, Default)]
pub struct IdenticalDataFilter;

impl IdenticalDataFilter {
    pub fn new() -> Self {
        Self
    }

    fn same_codes(left: &[String], right: &[String]) -> bool {
        if left.len() != right.len() {
            return false;
        }
        let mut left = left.to_vec();
        let mut right = right.to_vec();
        left.sort();
        right.sort();
        left == right
    }

    fn same_values(left: &[ValueDescriptor], right: &[ValueDescriptor]) -> bool {
        if left.len() != right.len() {
            return false;
        }
        let key = |v: &ValueDescriptor| (v.locale.clone(), v.scope.clone());
        let mut left = left.to_vec();
        let mut right = right.to_vec();
        left.sort_by_key(key);
        right.sort_by_key(key);
        left == right
    }

    fn identical(current: &FieldValue, incoming: &FieldValue) -> bool {
        match (current, incoming) {
            (FieldValue::Codes(current), FieldValue::Codes(incoming)) => {
                Self::same_codes(current, incoming)
            }
            (FieldValue::Values(current), FieldValue::Values(incoming)) => {
                Self::same_values(current, incoming)
            }
            (current, incoming) => current == incoming,
        }
    }
}

impl ProductFilter for IdenticalDataFilter {
    fn filter(&self, product: &Product, fields: &FieldValues) -> FieldValues {
        let current = product.field_values();

        fields
            .iter()
            .filter(|(field, incoming)| match current.get(*field) {
                Some(existing) => !Self::identical(existing, incoming),
                // The product has no state for this field yet: always new data.
                None => true,
            })
            .map(|(field, incoming)| (field.clone(), incoming.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ValueData, fields};
    use cataloom_core::{FamilyCode, ProductIdentifier};
    use proptest::prelude::*;

    fn product() -> Product {
        let mut product = Product::new(
            ProductIdentifier::new("SKU-1").unwrap(),
            Some(FamilyCode::new("shoes").unwrap()),
            true,
        );
        product.set_categories(vec!["summer".into(), "sale".into()]);
        product.set_value("name", vec![ValueDescriptor::text("Runner")]);
        product
    }

    #[test]
    fn identical_projection_filters_to_nothing() {
        let product = product();
        let diff = IdenticalDataFilter::new().filter(&product, &product.field_values());
        assert!(diff.is_empty());
    }

    #[test]
    fn differing_field_survives_the_filter() {
        let product = product();
        let mut incoming = product.field_values();
        incoming.insert(fields::ENABLED.to_string(), FieldValue::Flag(false));

        let diff = IdenticalDataFilter::new().filter(&product, &incoming);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff.get(fields::ENABLED), Some(&FieldValue::Flag(false)));
    }

    #[test]
    fn code_order_does_not_count_as_a_difference() {
        let product = product();
        let mut incoming = FieldValues::new();
        incoming.insert(
            fields::CATEGORIES.to_string(),
            FieldValue::Codes(vec!["sale".into(), "summer".into()]),
        );

        assert!(IdenticalDataFilter::new().filter(&product, &incoming).is_empty());
    }

    #[test]
    fn unknown_attribute_is_always_new_data() {
        let product = product();
        let mut incoming = FieldValues::new();
        incoming.insert(
            "description".to_string(),
            FieldValue::Values(vec![ValueDescriptor::text("Light trail runner")]),
        );

        let diff = IdenticalDataFilter::new().filter(&product, &incoming);
        assert_eq!(diff.len(), 1);
    }

    proptest! {
        #[test]
        fn own_projection_always_filters_empty(
            categories in proptest::collection::vec("[a-z]{1,8}", 0..5),
            groups in proptest::collection::vec("[a-z]{1,8}", 0..5),
            enabled in any::<bool>(),
            name in "[a-zA-Z ]{0,20}",
        ) {
            let mut product = Product::new(
                ProductIdentifier::new("SKU-1").unwrap(),
                None,
                enabled,
            );
            product.set_categories(categories);
            product.set_groups(groups);
            product.set_value("name", vec![ValueDescriptor::new(None, None, ValueData::Text(name))]);

            let diff = IdenticalDataFilter::new().filter(&product, &product.field_values());
            prop_assert!(diff.is_empty());
        }

        #[test]
        fn filtered_fields_are_a_subset_of_incoming(
            incoming_categories in proptest::collection::vec("[a-z]{1,8}", 0..5),
        ) {
            let product = product();
            let mut incoming = FieldValues::new();
            incoming.insert(
                fields::CATEGORIES.to_string(),
                FieldValue::Codes(incoming_categories),
            );

            let diff = IdenticalDataFilter::new().filter(&product, &incoming);
            prop_assert!(diff.len() <= incoming.len());
            for key in diff.keys() {
                prop_assert!(incoming.contains_key(key));
            }
        }
    }
}
