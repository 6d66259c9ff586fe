// SPDX-License-Identifier: MPL-2.0
//! Filterable items and the metadata they expose to criteria.
//!
//! Metadata is extracted from an item on every filter pass through
//! [`FilterableItem::metadata`]. Nothing is cached between passes, so the
//! filter decision always reflects what the item currently holds.

/// A single metadata value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    /// Free text (position label, status, sport...).
    Text(String),
    /// Whole number (duration in minutes, age...).
    Number(u32),
    /// Boolean flag (favorite, archived...).
    Flag(bool),
}

/// Metadata record extracted from a rendered item.
///
/// Fields are keyed by logical name. A field that was never set is
/// *absent*, which criteria treat as "skip" rather than "mismatch".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMetadata {
    fields: Vec<(&'static str, MetaValue)>,
    tags: Option<Vec<String>>,
    searchable: Vec<String>,
}

impl ItemMetadata {
    /// Creates an empty metadata record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text field.
    #[must_use]
    pub fn text(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.set(field, MetaValue::Text(value.into()));
        self
    }

    /// Adds a numeric field.
    #[must_use]
    pub fn number(mut self, field: &'static str, value: u32) -> Self {
        self.set(field, MetaValue::Number(value));
        self
    }

    /// Adds a boolean flag.
    #[must_use]
    pub fn flag(mut self, field: &'static str, value: bool) -> Self {
        self.set(field, MetaValue::Flag(value));
        self
    }

    /// Sets the tag list. Tags are compared case-insensitively.
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a piece of text that free-text search looks into.
    #[must_use]
    pub fn searchable(mut self, text: impl Into<String>) -> Self {
        self.searchable.push(text.into());
        self
    }

    fn set(&mut self, field: &'static str, value: MetaValue) {
        if let Some(slot) = self.fields.iter_mut().find(|(name, _)| *name == field) {
            slot.1 = value;
        } else {
            self.fields.push((field, value));
        }
    }

    /// Returns the raw value of a field, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&MetaValue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    /// Returns a text field, if present and textual.
    #[must_use]
    pub fn text_field(&self, field: &str) -> Option<&str> {
        match self.get(field) {
            Some(MetaValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a numeric field, if present and numeric.
    #[must_use]
    pub fn number_field(&self, field: &str) -> Option<u32> {
        match self.get(field) {
            Some(MetaValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns a flag, if present.
    #[must_use]
    pub fn flag_field(&self, field: &str) -> Option<bool> {
        match self.get(field) {
            Some(MetaValue::Flag(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns `Some(true)` if the item carries the tag (case-insensitive),
    /// `None` if the item has no tag list.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> Option<bool> {
        self.tags
            .as_ref()
            .map(|tags| {
                let tag = tag.to_lowercase();
                tags.iter().any(|t| t.to_lowercase() == tag)
            })
    }

    /// Returns `true` if any searchable text or tag contains `needle`.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn search_matches(&self, needle: &str) -> bool {
        self.searchable
            .iter()
            .chain(self.tags.iter().flatten())
            .any(|text| text.to_lowercase().contains(needle))
    }
}

/// Something that can be shown or hidden by the filter engine.
pub trait FilterableItem {
    /// Extracts the metadata used for predicate evaluation.
    fn metadata(&self) -> ItemMetadata;
}

impl FilterableItem for ItemMetadata {
    fn metadata(&self) -> ItemMetadata {
        self.clone()
    }
}
