//! Import rows and per-row skip reports.

use std::collections::BTreeMap;

use cataloom_catalog::ViolationList;

/// One raw import row: column name → cell content, as read from the source.
pub type RawItem = BTreeMap<String, String>;

/// Skip report for one row: the offending item plus every reason.
///
/// This is the soft failure channel of the pipeline — the driver records it
/// against the row and moves on to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidItem {
    item: RawItem,
    reasons: Vec<String>,
}

impl InvalidItem {
    pub fn with_message(item: RawItem, message: impl Into<String>) -> Self {
        Self {
            item,
            reasons: vec![message.into()],
        }
    }

    pub fn with_violations(item: RawItem, violations: &ViolationList) -> Self {
        Self {
            item,
            reasons: violations.messages(),
        }
    }

    /// The raw row the skip concerns.
    pub fn item(&self) -> &RawItem {
        &self.item
    }

    /// All skip reasons, in detection order.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

impl core::fmt::Display for InvalidItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "item skipped: {}", self.reasons.join("; "))
    }
}

impl std::error::Error for InvalidItem {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_all_reasons() {
        let skip = InvalidItem {
            item: RawItem::new(),
            reasons: vec!["first".into(), "second".into()],
        };
        assert_eq!(skip.to_string(), "item skipped: first; second");
    }
}
