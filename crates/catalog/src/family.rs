//! Family entity: a named catalog grouping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cataloom_core::{DomainError, DomainResult, Entity, FamilyCode};

/// A family groups products sharing the same attribute structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    code: FamilyCode,
    labels: BTreeMap<String, String>,
    attributes: Vec<String>,
    attribute_as_label: Option<String>,
}

impl Family {
    pub fn new(code: FamilyCode) -> Self {
        Self {
            code,
            labels: BTreeMap::new(),
            attributes: Vec::new(),
            attribute_as_label: None,
        }
    }

    /// Build a family from a raw code string.
    pub fn try_new(code: &str) -> DomainResult<Self> {
        Ok(Self::new(FamilyCode::new(code)?))
    }

    pub fn code(&self) -> &FamilyCode {
        &self.code
    }

    pub fn label(&self, locale: &str) -> Option<&str> {
        self.labels.get(locale).map(String::as_str)
    }

    pub fn set_label(&mut self, locale: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(locale.into(), label.into());
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn add_attribute(&mut self, attribute: impl Into<String>) {
        let attribute = attribute.into();
        if !self.attributes.contains(&attribute) {
            self.attributes.push(attribute);
        }
    }

    pub fn attribute_as_label(&self) -> Option<&str> {
        self.attribute_as_label.as_deref()
    }

    pub fn set_attribute_as_label(&mut self, attribute: impl Into<String>) {
        self.attribute_as_label = Some(attribute.into());
    }

    /// Argument-level validity, re-checked by the saver before staging.
    ///
    /// The code is valid by construction ([`FamilyCode`]); what can drift
    /// after construction is the attribute list and the label attribute.
    pub fn ensure_valid(&self) -> DomainResult<()> {
        for attribute in &self.attributes {
            if attribute.is_empty()
                || !attribute
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                return Err(DomainError::invalid_argument(format!(
                    "Family \"{}\" has a malformed attribute code \"{}\"",
                    self.code, attribute
                )));
            }
        }

        if let Some(label_attribute) = &self.attribute_as_label {
            if !self.attributes.contains(label_attribute) {
                return Err(DomainError::invalid_argument(format!(
                    "Family \"{}\" uses \"{}\" as label but does not contain it",
                    self.code, label_attribute
                )));
            }
        }

        Ok(())
    }
}

impl Entity for Family {
    type Id = FamilyCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}
