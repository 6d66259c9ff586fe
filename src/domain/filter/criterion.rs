// SPDX-License-Identifier: MPL-2.0
//! Filter criteria derived from form controls.
//!
//! A criterion pairs a logical field name with the value currently selected
//! in its control. An empty value means "any": the criterion is inactive and
//! always satisfied. A criterion whose field is absent from an item is
//! skipped for that item instead of rejecting it.

use super::duration::DurationBucket;
use super::item::ItemMetadata;
use std::fmt;
use std::sync::Arc;

/// Custom predicate signature.
///
/// Receives the item metadata and the control value. Returns `None` when the
/// field the predicate needs is absent, which skips the criterion.
pub type PredicateFn = dyn Fn(&ItemMetadata, &str) -> Option<bool> + Send + Sync;

/// How a criterion compares its value with item metadata.
#[derive(Clone)]
pub enum Predicate {
    /// Case-insensitive equality with a text field.
    Equals,
    /// Case-insensitive substring match on a text field.
    Contains,
    /// The item's tag list contains the value.
    HasTag,
    /// A numeric field (minutes) falls in the bucket named by the value.
    Duration,
    /// Caller-supplied predicate.
    Custom(Arc<PredicateFn>),
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals => write!(f, "Equals"),
            Self::Contains => write!(f, "Contains"),
            Self::HasTag => write!(f, "HasTag"),
            Self::Duration => write!(f, "Duration"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// A single named filter constraint.
#[derive(Debug, Clone)]
pub struct FilterCriterion {
    field: &'static str,
    value: String,
    predicate: Predicate,
}

impl FilterCriterion {
    /// Creates a criterion. `value` is trimmed; an empty result is inactive.
    pub fn new(field: &'static str, value: impl Into<String>, predicate: Predicate) -> Self {
        let value = value.into();
        Self {
            field,
            value: value.trim().to_string(),
            predicate,
        }
    }

    /// Case-insensitive equality on a text field.
    pub fn equals(field: &'static str, value: impl Into<String>) -> Self {
        Self::new(field, value, Predicate::Equals)
    }

    /// Case-insensitive substring on a text field.
    pub fn contains(field: &'static str, value: impl Into<String>) -> Self {
        Self::new(field, value, Predicate::Contains)
    }

    /// Tag membership. The field name is informational; tags are matched
    /// against the item's tag list.
    pub fn has_tag(field: &'static str, value: impl Into<String>) -> Self {
        Self::new(field, value, Predicate::HasTag)
    }

    /// Duration bucket on a numeric minutes field.
    pub fn duration(field: &'static str, value: impl Into<String>) -> Self {
        Self::new(field, value, Predicate::Duration)
    }

    /// Caller-supplied predicate.
    pub fn custom<F>(field: &'static str, value: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&ItemMetadata, &str) -> Option<bool> + Send + Sync + 'static,
    {
        Self::new(field, value, Predicate::Custom(Arc::new(predicate)))
    }

    /// Returns the logical field name.
    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the control value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` when the control holds a value.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.value.is_empty()
    }

    /// Evaluates the criterion against one item.
    ///
    /// Inactive criteria, absent fields and unknown duration tokens all pass.
    #[must_use]
    pub fn matches(&self, meta: &ItemMetadata) -> bool {
        if !self.is_active() {
            return true;
        }
        self.evaluate(meta).unwrap_or(true)
    }

    fn evaluate(&self, meta: &ItemMetadata) -> Option<bool> {
        match &self.predicate {
            Predicate::Equals => meta
                .text_field(self.field)
                .map(|text| text.trim().to_lowercase() == self.value.to_lowercase()),
            Predicate::Contains => meta
                .text_field(self.field)
                .map(|text| text.to_lowercase().contains(&self.value.to_lowercase())),
            Predicate::HasTag => meta.has_tag(&self.value),
            Predicate::Duration => {
                let bucket = DurationBucket::from_token(&self.value)?;
                meta.number_field(self.field)
                    .map(|minutes| bucket.contains(minutes))
            }
            Predicate::Custom(predicate) => predicate(meta, &self.value),
        }
    }
}
