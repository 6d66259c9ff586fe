// SPDX-License-Identifier: MPL-2.0
//! Required-field validation for dialog forms.
//!
//! All fields are checked in a single pass so the user sees every problem at
//! once. Callers render the per-field messages inline and raise one
//! aggregate error toast ([`SUMMARY_MESSAGE`]) when validation fails.

use std::collections::BTreeMap;

/// Inline message for an empty required field.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Inline message for a numeric field that is not a positive integer.
pub const POSITIVE_INTEGER_MESSAGE: &str = "Enter a whole number greater than zero";

/// Toast shown once per failed submission.
pub const SUMMARY_MESSAGE: &str = "Please fill in all required fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Required,
    PositiveInteger,
}

/// Per-field error messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Drops the error of one field (the user edited it).
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// Declarative list of field rules.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    rules: Vec<(&'static str, Rule)>,
}

impl FormValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must contain non-whitespace text.
    #[must_use]
    pub fn required(mut self, field: &'static str) -> Self {
        self.rules.push((field, Rule::Required));
        self
    }

    /// The field must be present and parse as an integer above zero.
    #[must_use]
    pub fn positive_integer(mut self, field: &'static str) -> Self {
        self.rules.push((field, Rule::PositiveInteger));
        self
    }

    /// Checks every field. `value_of` returns the current text of a field;
    /// unknown fields count as empty.
    pub fn validate<'v, F>(&self, value_of: F) -> Result<(), FieldErrors>
    where
        F: Fn(&str) -> Option<&'v str>,
    {
        let mut errors = FieldErrors::default();

        for &(field, rule) in &self.rules {
            if errors.0.contains_key(field) {
                continue;
            }
            let value = value_of(field).map(str::trim).unwrap_or_default();
            let message = if value.is_empty() {
                Some(REQUIRED_MESSAGE)
            } else {
                match rule {
                    Rule::Required => None,
                    Rule::PositiveInteger => match value.parse::<u32>() {
                        Ok(n) if n > 0 => None,
                        _ => Some(POSITIVE_INTEGER_MESSAGE),
                    },
                }
            };
            if let Some(message) = message {
                errors.0.insert(field, message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drill_form() -> FormValidator {
        FormValidator::new()
            .required("title")
            .positive_integer("minutes")
            .required("sport")
    }

    #[test]
    fn reports_every_missing_field_in_one_pass() {
        let errors = drill_form()
            .validate(|_| None)
            .expect_err("empty form must fail");
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("title"), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.get("minutes"), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.get("sport"), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let errors = drill_form()
            .validate(|field| match field {
                "title" => Some("   "),
                "minutes" => Some("20"),
                "sport" => Some("football"),
                _ => None,
            })
            .expect_err("blank title");
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["title"]);
    }

    #[test]
    fn minutes_must_be_positive_integer() {
        for bad in ["0", "-5", "ten", "12.5"] {
            let errors = drill_form()
                .validate(|field| match field {
                    "minutes" => Some(bad),
                    _ => Some("x"),
                })
                .expect_err(bad);
            assert_eq!(errors.get("minutes"), Some(POSITIVE_INTEGER_MESSAGE));
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(drill_form()
            .validate(|field| match field {
                "minutes" => Some("25"),
                _ => Some("value"),
            })
            .is_ok());
    }

    #[test]
    fn clear_field_removes_one_error() {
        let mut errors = drill_form().validate(|_| None).expect_err("empty");
        errors.clear_field("title");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("title"), None);
    }
}
