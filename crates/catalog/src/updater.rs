//! Product updater: applies canonical field data to a product in place.

use cataloom_core::{DomainError, DomainResult, FamilyCode};
use cataloom_storage::ObjectUpdater;

use crate::product::Product;
use crate::value::{FieldValue, FieldValues, fields};

/// Standard product updater.
///
/// Shape mismatches and unparseable codes fail with
/// [`DomainError::InvalidArgument`]; the processor turns those into per-row
/// skips instead of aborting the batch.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdater;

impl ProductUpdater {
    pub fn new() -> Self {
        Self
    }

    fn apply_field(product: &mut Product, field: &str, value: &FieldValue) -> DomainResult<()> {
        match (field, value) {
            (fields::FAMILY, FieldValue::Code(Some(code))) => {
                let family = FamilyCode::new(code.as_str()).map_err(|_| {
                    DomainError::invalid_argument(format!(
                        "Property \"family\" expects a valid family code, \"{code}\" given"
                    ))
                })?;
                product.set_family(Some(family));
            }
            (fields::FAMILY, FieldValue::Code(None)) => product.set_family(None),
            (fields::CATEGORIES, FieldValue::Codes(codes)) => {
                product.set_categories(codes.clone());
            }
            (fields::GROUPS, FieldValue::Codes(codes)) => {
                product.set_groups(codes.clone());
            }
            (fields::ENABLED, FieldValue::Flag(enabled)) => product.set_enabled(*enabled),
            (fields::ASSOCIATIONS, _) => {
                return Err(DomainError::invalid_argument(
                    "Property \"associations\" is handled by the association processor",
                ));
            }
            (attribute, FieldValue::Values(descriptors)) => {
                product.set_value(attribute, descriptors.clone());
            }
            (field, _) => {
                return Err(DomainError::invalid_argument(format!(
                    "Property \"{field}\" received data of an unexpected shape"
                )));
            }
        }

        Ok(())
    }
}

impl ObjectUpdater<Product> for ProductUpdater {
    type Data = FieldValues;

    fn update(&self, product: &mut Product, data: &Self::Data) -> DomainResult<()> {
        for (field, value) in data {
            Self::apply_field(product, field, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueDescriptor;
    use cataloom_core::ProductIdentifier;

    fn product() -> Product {
        Product::new(ProductIdentifier::new("SKU-1").unwrap(), None, false)
    }

    fn data(entries: Vec<(&str, FieldValue)>) -> FieldValues {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn applies_classification_and_values() {
        let mut product = product();
        let updater = ProductUpdater::new();

        updater
            .update(
                &mut product,
                &data(vec![
                    ("family", FieldValue::Code(Some("shoes".into()))),
                    ("categories", FieldValue::Codes(vec!["summer".into()])),
                    ("enabled", FieldValue::Flag(true)),
                    (
                        "name",
                        FieldValue::Values(vec![ValueDescriptor::text("Runner")]),
                    ),
                ]),
            )
            .unwrap();

        assert_eq!(product.family().map(|f| f.as_str()), Some("shoes"));
        assert_eq!(product.categories(), ["summer"]);
        assert!(product.is_enabled());
        assert!(product.value("name").is_some());
    }

    #[test]
    fn clearing_the_family_resets_it() {
        let mut product = product();
        let updater = ProductUpdater::new();
        updater
            .update(
                &mut product,
                &data(vec![("family", FieldValue::Code(Some("shoes".into())))]),
            )
            .unwrap();

        updater
            .update(&mut product, &data(vec![("family", FieldValue::Code(None))]))
            .unwrap();
        assert!(product.family().is_none());
    }

    #[test]
    fn rejects_malformed_family_code() {
        let mut product = product();
        let err = ProductUpdater::new()
            .update(
                &mut product,
                &data(vec![("family", FieldValue::Code(Some("not valid!".into())))]),
            )
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert!(err.to_string().contains("family"));
    }

    #[test]
    fn rejects_mismatched_field_shape() {
        let mut product = product();
        let err = ProductUpdater::new()
            .update(&mut product, &data(vec![("enabled", FieldValue::Code(None))]))
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_association_data() {
        let mut product = product();
        let err = ProductUpdater::new()
            .update(
                &mut product,
                &data(vec![("associations", FieldValue::Codes(vec![]))]),
            )
            .unwrap_err();

        assert!(err.to_string().contains("association"));
    }
}
