//! Article field rules.
//!
//! One field set drives every payload shape. [`ArticleInput`] is what arrives
//! over the wire, [`ArticleFields`] is the validated set with the length
//! rules, and [`Presence`] decides whether a missing field is an error
//! (create) or simply left alone (update).

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::patch::Patch;
use crate::validation::FieldErrors;

/// Entity name used in not-found messages.
pub const ENTITY: &str = "Article";

/// Maximum title length, in characters.
pub const TITLE_MAX_LEN: u64 = 100;

/// Maximum author length, in characters.
pub const AUTHOR_MAX_LEN: u64 = 50;

/// Whether each field must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Every field must be present and non-null (create).
    Required,
    /// Any subset of fields may be present (partial update).
    Optional,
}

/// Raw article payload as deserialized from a request body.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleInput {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub content: Patch<String>,
    #[serde(default)]
    pub author: Patch<String>,
}

/// The validated article field set. `None` means "not supplied".
///
/// Postgres text columns cannot hold U+0000, so it is rejected here rather
/// than failing at insert time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ArticleFields {
    #[validate(
        length(min = 1, max = TITLE_MAX_LEN, message = "title must be between 1 and 100 characters"),
        custom(function = "reject_nul", message = "title must not contain NUL characters")
    )]
    pub title: Option<String>,
    #[validate(
        length(min = 1, message = "content must not be empty"),
        custom(function = "reject_nul", message = "content must not contain NUL characters")
    )]
    pub content: Option<String>,
    #[validate(
        length(min = 1, max = AUTHOR_MAX_LEN, message = "author must be between 1 and 50 characters"),
        custom(function = "reject_nul", message = "author must not contain NUL characters")
    )]
    pub author: Option<String>,
}

fn reject_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("invalid_character"));
    }
    Ok(())
}

impl ArticleInput {
    /// Apply presence and length rules, collecting every violation.
    ///
    /// Explicit `null` is always rejected since no article column is
    /// nullable.
    pub fn into_fields(self, presence: Presence) -> Result<ArticleFields, CoreError> {
        let mut errors = FieldErrors::new();

        let fields = ArticleFields {
            title: take("title", self.title, presence, &mut errors),
            content: take("content", self.content, presence, &mut errors),
            author: take("author", self.author, presence, &mut errors),
        };

        if let Err(e) = fields.validate() {
            errors.extend(FieldErrors::from(e));
        }

        errors.into_result()?;
        Ok(fields)
    }
}

fn take(
    field: &'static str,
    value: Patch<String>,
    presence: Presence,
    errors: &mut FieldErrors,
) -> Option<String> {
    match value {
        Patch::Value(v) => Some(v),
        Patch::Null => {
            errors.push(field, "null", format!("{field} must not be null"));
            None
        }
        Patch::Missing => {
            if presence == Presence::Required {
                errors.push(field, "required", format!("{field} is required"));
            }
            None
        }
    }
}
