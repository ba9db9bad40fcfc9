//! Row-to-canonical-form conversion.
//!
//! The converter turns one raw row into canonical field data: configured
//! columns are renamed to their canonical keys, list cells are split, the
//! enabled switch is parsed, and every remaining column is treated as an
//! attribute value column of the form `attribute[-locale][-scope]`.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use thiserror::Error;

use cataloom_catalog::{FieldValue, FieldValues, ValueData, ValueDescriptor, fields};

use crate::item::RawItem;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConverterError {
    #[error("Column \"{column}\" contains an invalid boolean value \"{value}\"")]
    InvalidBoolean { column: String, value: String },

    #[error("Column \"{column}\" is malformed")]
    MalformedColumn { column: String },
}

/// Options driving one conversion: column mapping, defaults, association flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Source column name → canonical key (e.g. a custom family column).
    pub mapping: BTreeMap<String, String>,

    /// Canonical keys inserted when the row does not provide them.
    pub default_values: FieldValues,

    /// Keep association columns instead of dropping them.
    pub with_associations: bool,
}

/// Converts one raw row into canonical field data.
pub trait ArrayConverter: Send + Sync {
    fn convert(&self, item: &RawItem, options: &ConverterOptions)
    -> Result<FieldValues, ConverterError>;
}

/// Standard flat-row converter.
#[derive(Debug, Clone, Default)]
pub struct StandardRowConverter;

impl StandardRowConverter {
    pub fn new() -> Self {
        Self
    }

    fn split_codes(cell: &str) -> Vec<String> {
        cell.split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(String::from)
            .collect()
    }

    fn parse_flag(column: &str, cell: &str) -> Result<bool, ConverterError> {
        match cell.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "y" => Ok(true),
            "0" | "false" | "no" | "n" => Ok(false),
            _ => Err(ConverterError::InvalidBoolean {
                column: column.to_string(),
                value: cell.to_string(),
            }),
        }
    }

    fn looks_like_locale(segment: &str) -> bool {
        let bytes = segment.as_bytes();
        bytes.len() == 5
            && bytes[0].is_ascii_lowercase()
            && bytes[1].is_ascii_lowercase()
            && bytes[2] == b'_'
            && bytes[3].is_ascii_uppercase()
            && bytes[4].is_ascii_uppercase()
    }

    /// Split a value column into attribute, locale and scope.
    ///
    /// Attribute codes may themselves contain dashes, so the locale segment
    /// (shaped `xx_XX`) is the anchor: everything before it is the attribute,
    /// everything after it is the scope.
    fn parse_value_column(column: &str) -> Result<(String, Option<String>, Option<String>), ConverterError> {
        let segments: Vec<&str> = column.split('-').collect();
        let locale_index = segments.iter().position(|s| Self::looks_like_locale(s));

        let (attribute, locale, scope) = match locale_index {
            Some(index) => {
                let attribute = segments[..index].join("-");
                let scope = segments[index + 1..].join("-");
                (
                    attribute,
                    Some(segments[index].to_string()),
                    (!scope.is_empty()).then_some(scope),
                )
            }
            None => (column.to_string(), None, None),
        };

        if attribute.is_empty() {
            return Err(ConverterError::MalformedColumn {
                column: column.to_string(),
            });
        }

        Ok((attribute, locale, scope))
    }

    fn is_association_column(key: &str) -> bool {
        key == fields::ASSOCIATIONS || key.ends_with("-products") || key.ends_with("-groups")
    }
}

impl ArrayConverter for StandardRowConverter {
    fn convert(
        &self,
        item: &RawItem,
        options: &ConverterOptions,
    ) -> Result<FieldValues, ConverterError> {
        let mut converted = FieldValues::new();

        for (column, cell) in item {
            let key = options
                .mapping
                .get(column)
                .cloned()
                .unwrap_or_else(|| column.clone());

            match key.as_str() {
                fields::FAMILY => {
                    let code = cell.trim();
                    let code = (!code.is_empty()).then(|| code.to_string());
                    converted.insert(fields::FAMILY.to_string(), FieldValue::Code(code));
                }
                fields::CATEGORIES | fields::GROUPS => {
                    converted.insert(key.clone(), FieldValue::Codes(Self::split_codes(cell)));
                }
                fields::ENABLED => {
                    // An empty switch cell falls back to the default value.
                    if !cell.trim().is_empty() {
                        converted.insert(
                            fields::ENABLED.to_string(),
                            FieldValue::Flag(Self::parse_flag(column, cell)?),
                        );
                    }
                }
                key if !options.with_associations && Self::is_association_column(key) => {}
                key if options.with_associations && Self::is_association_column(key) => {
                    converted.insert(key.to_string(), FieldValue::Codes(Self::split_codes(cell)));
                }
                _ => {
                    let (attribute, locale, scope) = Self::parse_value_column(&key)?;
                    let data = if cell.trim().is_empty() {
                        ValueData::Empty
                    } else {
                        ValueData::Text(cell.clone())
                    };
                    let descriptor = ValueDescriptor::new(locale, scope, data);

                    match converted.entry(attribute) {
                        Entry::Occupied(mut entry) => match entry.get_mut() {
                            FieldValue::Values(descriptors) => descriptors.push(descriptor),
                            _ => {
                                return Err(ConverterError::MalformedColumn {
                                    column: column.clone(),
                                });
                            }
                        },
                        Entry::Vacant(entry) => {
                            entry.insert(FieldValue::Values(vec![descriptor]));
                        }
                    }
                }
            }
        }

        for (key, value) in &options.default_values {
            if !converted.contains_key(key) {
                converted.insert(key.clone(), value.clone());
            }
        }

        Ok(converted)
    }
}
