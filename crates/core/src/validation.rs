//! Field-level validation failures.
//!
//! [`FieldErrors`] is what the API reports back as a 422 body, one entry per
//! offending field and rule. It can be built by hand or converted from the
//! `validator` crate's error map.

use std::fmt;

use serde::Serialize;

/// A single rule violation on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    /// Machine-readable rule name, e.g. `required` or `length`.
    pub code: String,
    pub message: String,
}

/// An ordered collection of [`FieldError`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.0.push(FieldError {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        });
    }

    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Whether any error was recorded against `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                out.push(field.to_string(), err.code.to_string(), message);
            }
        }
        // The validator map is unordered.
        out.0.sort_by(|a, b| a.field.cmp(&b.field));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn display_joins_entries() {
        let mut errors = FieldErrors::new();
        errors.push("title", "required", "title is required");
        errors.push("author", "length", "author is too long");
        assert_eq!(
            errors.to_string(),
            "title: title is required; author: author is too long"
        );
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut errors = FieldErrors::new();
        errors.push("title", "required", "title is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json[0]["field"], "title");
        assert_eq!(json[0]["code"], "required");
    }

    #[test]
    fn converts_validator_errors_sorted_by_field() {
        let mut raw = validator::ValidationErrors::new();
        raw.add("title", validator::ValidationError::new("length"));
        raw.add("author", validator::ValidationError::new("length"));

        let errors = FieldErrors::from(raw);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["author", "title"]);
        assert!(errors.iter().all(|e| e.code == "length"));
        assert_eq!(errors.iter().next().unwrap().message, "author is invalid");
    }
}
