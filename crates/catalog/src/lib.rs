//! `cataloom-catalog` — catalog domain: families, products and the services
//! that mutate them.
//!
//! Everything here is deterministic domain logic. Persistence, event delivery
//! and row conversion live behind the seams of `cataloom-storage`,
//! `cataloom-events` and `cataloom-connector`.

pub mod builder;
pub mod comparator;
pub mod family;
pub mod product;
pub mod saver;
pub mod updater;
pub mod validation;
pub mod value;

pub use builder::{DefaultProductBuilder, ProductBuilder, ProductDraft};
pub use comparator::{IdenticalDataFilter, ProductFilter};
pub use family::Family;
pub use product::Product;
pub use saver::{FamilySaver, SaverError};
pub use updater::ProductUpdater;
pub use validation::{ConstraintViolation, ProductValidator, Validator, ViolationList};
pub use value::{FieldValue, FieldValues, ValueData, ValueDescriptor, fields};
