//! Article row model and DTOs.

use blog_core::article::{ArticleFields, ArticleInput, Presence};
use blog_core::error::CoreError;
use blog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new article. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateArticle {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// DTO for a partial update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl TryFrom<ArticleInput> for CreateArticle {
    type Error = CoreError;

    fn try_from(input: ArticleInput) -> Result<Self, Self::Error> {
        match input.into_fields(Presence::Required)? {
            ArticleFields {
                title: Some(title),
                content: Some(content),
                author: Some(author),
            } => Ok(CreateArticle {
                title,
                content,
                author,
            }),
            _ => Err(CoreError::Internal(
                "required article field missing after validation".into(),
            )),
        }
    }
}

impl TryFrom<ArticleInput> for UpdateArticle {
    type Error = CoreError;

    fn try_from(input: ArticleInput) -> Result<Self, Self::Error> {
        let fields = input.into_fields(Presence::Optional)?;
        Ok(UpdateArticle {
            title: fields.title,
            content: fields.content,
            author: fields.author,
        })
    }
}
