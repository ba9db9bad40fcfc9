//! Product import processor.
//!
//! Turns one raw row into a validated in-memory product, or reports it
//! skipped. Creation/update, identical-data skipping, updater rejection and
//! validation all happen here; writing the product is a downstream concern.

use std::sync::Arc;

use tracing::debug;

use cataloom_catalog::{
    FieldValue, FieldValues, Product, ProductBuilder, ProductFilter, Validator, fields,
};
use cataloom_core::{FamilyCode, ProductIdentifier};
use cataloom_storage::{IdentifiableObjectRepository, ObjectDetacher, ObjectUpdater};

use crate::converter::{ArrayConverter, ConverterOptions};
use crate::item::{InvalidItem, RawItem};
use crate::summary::ExecutionSummary;

/// Counter incremented when a row is silently skipped for carrying no change.
pub const SKIPPED_NO_DIFF: &str = "product_skipped_no_diff";

/// Per-row transform step of an import pipeline.
///
/// `Ok(Some(_))` keeps the output, `Ok(None)` is a silent success-skip, and
/// `Err(_)` records the row as skipped with reasons.
pub trait ItemProcessor {
    type Input;
    type Output;

    fn process(&mut self, item: &Self::Input) -> Result<Option<Self::Output>, InvalidItem>;
}

/// Product import processor: create/update, compare, validate, skip-or-keep.
pub struct ProductProcessor {
    converter: Arc<dyn ArrayConverter>,
    repository: Arc<dyn IdentifiableObjectRepository<Product>>,
    builder: Arc<dyn ProductBuilder>,
    updater: Arc<dyn ObjectUpdater<Product, Data = FieldValues>>,
    validator: Arc<dyn Validator<Product>>,
    detacher: Arc<dyn ObjectDetacher<Product>>,
    filter: Arc<dyn ProductFilter>,
    summary: ExecutionSummary,

    enabled: bool,
    categories_column: String,
    family_column: String,
    groups_column: String,
    enabled_comparison: bool,
}

impl ProductProcessor {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        converter: Arc<dyn ArrayConverter>,
        repository: Arc<dyn IdentifiableObjectRepository<Product>>,
        builder: Arc<dyn ProductBuilder>,
        updater: Arc<dyn ObjectUpdater<Product, Data = FieldValues>>,
        validator: Arc<dyn Validator<Product>>,
        detacher: Arc<dyn ObjectDetacher<Product>>,
        filter: Arc<dyn ProductFilter>,
    ) -> Self {
        Self {
            converter,
            repository,
            builder,
            updater,
            validator,
            detacher,
            filter,
            summary: ExecutionSummary::new(),
            enabled: true,
            categories_column: fields::CATEGORIES.to_string(),
            family_column: fields::FAMILY.to_string(),
            groups_column: fields::GROUPS.to_string(),
            enabled_comparison: true,
        }
    }

    /// Whether created products start enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn categories_column(&self) -> &str {
        &self.categories_column
    }

    pub fn set_categories_column(&mut self, column: impl Into<String>) {
        self.categories_column = column.into();
    }

    pub fn family_column(&self) -> &str {
        &self.family_column
    }

    pub fn set_family_column(&mut self, column: impl Into<String>) {
        self.family_column = column.into();
    }

    pub fn groups_column(&self) -> &str {
        &self.groups_column
    }

    pub fn set_groups_column(&mut self, column: impl Into<String>) {
        self.groups_column = column.into();
    }

    /// Whether identical incoming data is compared away before updating.
    pub fn is_enabled_comparison(&self) -> bool {
        self.enabled_comparison
    }

    pub fn set_enabled_comparison(&mut self, enabled_comparison: bool) {
        self.enabled_comparison = enabled_comparison;
    }

    /// Counters accumulated so far.
    pub fn summary(&self) -> &ExecutionSummary {
        &self.summary
    }

    fn converter_options(&self) -> ConverterOptions {
        let mut options = ConverterOptions::default();
        options
            .mapping
            .insert(self.family_column.clone(), fields::FAMILY.to_string());
        options
            .mapping
            .insert(self.categories_column.clone(), fields::CATEGORIES.to_string());
        options
            .mapping
            .insert(self.groups_column.clone(), fields::GROUPS.to_string());
        options
            .default_values
            .insert(fields::ENABLED.to_string(), FieldValue::Flag(self.enabled));
        options.with_associations = false;
        options
    }

    fn identifier_of(&self, converted: &FieldValues) -> Option<String> {
        converted
            .get(self.repository.identifier_property())
            .and_then(FieldValue::first_text)
            .map(String::from)
    }

    fn family_code_of(converted: &FieldValues) -> Option<String> {
        converted
            .get(fields::FAMILY)
            .and_then(FieldValue::as_code)
            .map(String::from)
    }

    /// Associations are imported by a dedicated processor once all products
    /// exist, so their data never reaches the updater from here.
    fn filter_item_data(&self, mut converted: FieldValues) -> FieldValues {
        converted.remove(self.repository.identifier_property());
        converted.remove(fields::ASSOCIATIONS);
        converted
    }

    /// Locate the product or build a fresh one; the flag tells the caller
    /// whether the product pre-existed (comparison only makes sense then).
    fn find_or_create(
        &self,
        identifier: &str,
        family_code: Option<&str>,
    ) -> Result<(Product, bool), String> {
        if let Some(existing) = self.repository.find_one_by_identifier(identifier) {
            return Ok((existing, true));
        }

        let identifier = ProductIdentifier::new(identifier).map_err(|err| err.to_string())?;
        let family = family_code
            .map(FamilyCode::new)
            .transpose()
            .map_err(|err| err.to_string())?;

        Ok((self.builder.create_product(identifier, family), false))
    }
}

impl ItemProcessor for ProductProcessor {
    type Input = RawItem;
    type Output = Product;

    fn process(&mut self, item: &Self::Input) -> Result<Option<Product>, InvalidItem> {
        let converted = self
            .converter
            .convert(item, &self.converter_options())
            .map_err(|err| InvalidItem::with_message(item.clone(), err.to_string()))?;

        let Some(identifier) = self.identifier_of(&converted) else {
            return Err(InvalidItem::with_message(
                item.clone(),
                "The identifier must be filled",
            ));
        };

        let family_code = Self::family_code_of(&converted);
        let mut filtered = self.filter_item_data(converted);

        let (mut product, existed) = self
            .find_or_create(&identifier, family_code.as_deref())
            .map_err(|message| InvalidItem::with_message(item.clone(), message))?;

        if self.enabled_comparison && existed {
            filtered = self.filter.filter(&product, &filtered);

            if filtered.is_empty() {
                debug!(identifier = %identifier, "row carries no change, skipping");
                self.summary.increment(SKIPPED_NO_DIFF);
                return Ok(None);
            }
        }

        if let Err(err) = self.updater.update(&mut product, &filtered) {
            self.detacher.detach(&product);
            return Err(InvalidItem::with_message(item.clone(), err.to_string()));
        }

        let violations = self.validator.validate(&product);
        if !violations.is_empty() {
            self.detacher.detach(&product);
            return Err(InvalidItem::with_violations(item.clone(), &violations));
        }

        debug!(identifier = %identifier, "row processed");
        Ok(Some(product))
    }
}
