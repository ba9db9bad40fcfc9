//! `cataloom-connector` — batch import pipeline for the catalog.
//!
//! A raw row goes through a fixed sequence: convert to canonical field data,
//! locate or create the product, drop identical data, update, validate, then
//! keep or skip. Hard failures abort the import; per-row problems are recorded
//! as skips and the batch continues.

pub mod converter;
pub mod item;
pub mod processor;
pub mod summary;

pub use converter::{ArrayConverter, ConverterError, ConverterOptions, StandardRowConverter};
pub use item::{InvalidItem, RawItem};
pub use processor::{ItemProcessor, ProductProcessor, SKIPPED_NO_DIFF};
pub use summary::ExecutionSummary;
