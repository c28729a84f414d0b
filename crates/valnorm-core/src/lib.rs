//! Typed-value normalization.
//!
//! Turns raw text into canonical values for a fixed set of semantic types
//! and renders canonical values back into display text or colors.
//!
//! # Overview
//!
//! This crate provides:
//! - **Criteria**: one [`Criteria`] per type (color, date, distance,
//!   duration, element, letter, mass, number) with `sanitize` and `present`
//! - **Registry**: [`CriteriaRegistry`] keyed by type name, plus a cached
//!   [`default_registry`]
//! - **Normalizer**: [`normalize_records`] rewrites record fields whose name
//!   is a registered type
//! - **Conversion helpers**: unit tables, RGB/HSL, time units
//!
//! # Example
//!
//! ```ignore
//! use valnorm_core::{default_registry, normalize_records, NormalizeSettings, Record, Value};
//!
//! let mut record = Record::new();
//! record.insert("distance".into(), Value::from("1.5km"));
//!
//! let report = normalize_records(
//!     std::slice::from_mut(&mut record),
//!     default_registry(),
//!     &NormalizeSettings::default(),
//! )?;
//! assert_eq!(record["distance"], Value::Number(1500.0));
//! ```

mod error;
mod normalizer;
mod registry;
mod render;
mod settings;
mod value;

pub mod conversion;
pub mod criteria;

// Core types
pub use criteria::Criteria;
pub use render::{RenderTarget, Rendered};
pub use value::{Record, Value};

// Error types
pub use error::{CriteriaError, NormalizeError, Result, SettingsError};

// Registry
pub use registry::{CriteriaRegistry, default_registry};

// Normalization
pub use normalizer::{
    FieldFailure, NormalizeReport, Presentation, normalize_record, normalize_records,
    present_record,
};
pub use settings::{DEFAULT_DATE_FORMAT, ErrorPolicy, NormalizeSettings};
