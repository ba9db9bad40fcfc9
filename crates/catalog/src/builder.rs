//! Product construction.

use cataloom_core::{DomainResult, FamilyCode, ProductIdentifier};

use crate::product::Product;
use crate::value::ValueDescriptor;

/// Creates fresh products for rows whose identifier is not in the catalog yet.
pub trait ProductBuilder: Send + Sync {
    fn create_product(&self, identifier: ProductIdentifier, family: Option<FamilyCode>) -> Product;
}

/// Standard builder: new products take the configured default enabled flag.
#[derive(Debug, Clone)]
pub struct DefaultProductBuilder {
    enabled_by_default: bool,
}

impl DefaultProductBuilder {
    pub fn new(enabled_by_default: bool) -> Self {
        Self { enabled_by_default }
    }
}

impl Default for DefaultProductBuilder {
    fn default() -> Self {
        Self {
            enabled_by_default: true,
        }
    }
}

impl ProductBuilder for DefaultProductBuilder {
    fn create_product(&self, identifier: ProductIdentifier, family: Option<FamilyCode>) -> Product {
        Product::new(identifier, family, self.enabled_by_default)
    }
}

/// Fluent draft for assembling products in tests and fixtures.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    identifier: String,
    family: Option<String>,
    enabled: bool,
    values: Vec<(String, Vec<ValueDescriptor>)>,
}

impl ProductDraft {
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_value(
        mut self,
        attribute: impl Into<String>,
        descriptors: Vec<ValueDescriptor>,
    ) -> Self {
        self.values.push((attribute.into(), descriptors));
        self
    }

    pub fn build(self) -> DomainResult<Product> {
        let identifier = ProductIdentifier::new(self.identifier)?;
        let family = self.family.map(FamilyCode::new).transpose()?;
        let mut product = Product::new(identifier, family, self.enabled);
        for (attribute, descriptors) in self.values {
            product.set_value(attribute, descriptors);
        }
        Ok(product)
    }
}
