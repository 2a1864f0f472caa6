use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::PostId;
use crate::model::search::Searchable;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PostError {
    #[error("post title cannot be empty")]
    EmptyTitle,

    #[error("unknown post category: {0}")]
    UnknownCategory(String),

    #[error("invalid publication date {raw:?}: {reason}")]
    InvalidDate { raw: String, reason: String },
}

/// Editorial category of a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogCategory {
    Alert,
    Tip,
    News,
    Guide,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 4] = [
        BlogCategory::Alert,
        BlogCategory::Tip,
        BlogCategory::News,
        BlogCategory::Guide,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BlogCategory::Alert => "alert",
            BlogCategory::Tip => "tip",
            BlogCategory::News => "news",
            BlogCategory::Guide => "guide",
        }
    }
}

impl fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlogCategory {
    type Err = PostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alert" => Ok(Self::Alert),
            "tip" => Ok(Self::Tip),
            "news" => Ok(Self::News),
            "guide" => Ok(Self::Guide),
            _ => Err(PostError::UnknownCategory(s.to_string())),
        }
    }
}

/// Blog article. `content` is markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    id: PostId,
    title: String,
    excerpt: String,
    content: String,
    category: BlogCategory,
    published_on: NaiveDate,
    read_time: String,
    featured: bool,
}

impl BlogPost {
    /// Builds a post from content-table fields; `date` is `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns `PostError` for a blank title or an unparseable date.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PostId,
        title: impl Into<String>,
        excerpt: impl Into<String>,
        content: impl Into<String>,
        category: BlogCategory,
        date: &str,
        read_time: impl Into<String>,
        featured: bool,
    ) -> Result<Self, PostError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(PostError::EmptyTitle);
        }
        let published_on =
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| PostError::InvalidDate {
                raw: date.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            id,
            title,
            excerpt: excerpt.into(),
            content: content.into().trim().to_string(),
            category,
            published_on,
            read_time: read_time.into(),
            featured,
        })
    }

    #[must_use]
    pub fn id(&self) -> &PostId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn category(&self) -> BlogCategory {
        self.category
    }

    #[must_use]
    pub fn published_on(&self) -> NaiveDate {
        self.published_on
    }

    #[must_use]
    pub fn read_time(&self) -> &str {
        &self.read_time
    }

    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Searchable for BlogPost {
    type Facet = BlogCategory;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str()]
    }

    fn facet(&self) -> &BlogCategory {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_parses_publication_date() {
        let post = BlogPost::new(
            PostId::new("p").unwrap(),
            "Title",
            "Excerpt",
            "  body  ",
            BlogCategory::Tip,
            "2024-01-05",
            "4 min",
            false,
        )
        .unwrap();
        assert_eq!(post.published_on(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(post.content(), "body");
    }

    #[test]
    fn post_rejects_bad_date() {
        let err = BlogPost::new(
            PostId::new("p").unwrap(),
            "Title",
            "",
            "",
            BlogCategory::News,
            "January 5",
            "",
            false,
        )
        .unwrap_err();
        assert!(matches!(err, PostError::InvalidDate { .. }));
    }

    #[test]
    fn category_round_trips_through_label() {
        for category in BlogCategory::ALL {
            assert_eq!(category.as_str().parse::<BlogCategory>().unwrap(), category);
        }
    }
}
