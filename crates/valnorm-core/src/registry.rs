//! Criteria registry.
//!
//! The [`CriteriaRegistry`] maps a type name to its [`Criteria`]. The
//! default registry with the built-in types is built once and cached in a
//! [`OnceLock`]; callers that need different settings (a fixed clock, a
//! different date format) build their own with
//! [`CriteriaRegistry::with_defaults`].
//!
//! # Example
//!
//! ```ignore
//! use valnorm_core::{default_registry, Rendered};
//!
//! let registry = default_registry();
//! let meters = registry.sanitize("distance", "1.5km")?;
//! let mut rendered = Rendered::new();
//! registry.present("distance", &meters, &mut rendered)?;
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::criteria::{
    ColorCriteria, Criteria, DateCriteria, DistanceCriteria, DurationCriteria, ElementCriteria,
    LetterCriteria, MassCriteria, NumberCriteria,
};
use crate::error::{CriteriaError, Result};
use crate::render::{RenderTarget, Rendered};
use crate::settings::NormalizeSettings;
use crate::value::Value;

/// Registry of criteria indexed by type name.
///
/// # Thread Safety
///
/// Criteria are `Send + Sync` and never mutated after registration, so a
/// registry can be shared freely once built.
pub struct CriteriaRegistry {
    criteria: HashMap<&'static str, Box<dyn Criteria>>,
}

impl CriteriaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            criteria: HashMap::new(),
        }
    }

    /// Creates a registry with all built-in types.
    pub fn with_defaults(settings: &NormalizeSettings) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ColorCriteria));
        registry.register(Box::new(
            DateCriteria::new().with_format(settings.date_format.clone()),
        ));
        registry.register(Box::new(DistanceCriteria));
        registry.register(Box::new(DurationCriteria));
        registry.register(Box::new(ElementCriteria));
        registry.register(Box::new(LetterCriteria));
        registry.register(Box::new(MassCriteria));
        registry.register(Box::new(NumberCriteria));
        registry
    }

    /// Registers a criteria under its type name.
    ///
    /// If a criteria with that name is already registered, it is replaced.
    pub fn register(&mut self, criteria: Box<dyn Criteria>) {
        self.criteria.insert(criteria.type_name(), criteria);
    }

    /// Gets the criteria for a type name. Lookup is case-sensitive.
    pub fn get(&self, type_name: &str) -> Option<&dyn Criteria> {
        self.criteria.get(type_name).map(|c| c.as_ref())
    }

    /// Returns the number of registered criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Returns true if no criteria are registered.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Registered type names in sorted order.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.criteria.keys().copied().collect();
        names.sort_unstable();
        names
    }

    fn require(&self, type_name: &str) -> Result<&dyn Criteria> {
        self.get(type_name).ok_or_else(|| CriteriaError::UnknownType {
            type_name: type_name.to_string(),
        })
    }

    /// Sanitize `raw` as `type_name`.
    pub fn sanitize(&self, type_name: &str, raw: &str) -> Result<Value> {
        self.require(type_name)?.sanitize(raw)
    }

    /// Present `value` as `type_name` onto `target`.
    pub fn present(
        &self,
        type_name: &str,
        value: &Value,
        target: &mut dyn RenderTarget,
    ) -> Result<()> {
        self.require(type_name)?.present(value, target)
    }

    /// Present `value` as `type_name` into a fresh [`Rendered`].
    pub fn render(&self, type_name: &str, value: &Value) -> Result<Rendered> {
        let mut rendered = Rendered::new();
        self.present(type_name, value, &mut rendered)?;
        Ok(rendered)
    }
}

impl Default for CriteriaRegistry {
    fn default() -> Self {
        Self::with_defaults(&NormalizeSettings::default())
    }
}

/// Cached default registry with all built-in criteria.
static DEFAULT_REGISTRY: OnceLock<CriteriaRegistry> = OnceLock::new();

/// Returns the default criteria registry.
///
/// The registry is built on first access with default settings.
///
/// # Registered Types
///
/// color, date, distance, duration, element, letter, mass, number
pub fn default_registry() -> &'static CriteriaRegistry {
    DEFAULT_REGISTRY.get_or_init(CriteriaRegistry::default)
}
