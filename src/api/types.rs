//! Knowledge-base payloads as served by the CRM API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier for an article, tag or attachment.
///
/// The API serves both numeric and string ids; both are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct RecordId(String);

pub type ArticleId = RecordId;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for RecordId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => Self(text),
            RawId::Number(n) => Self(n.to_string()),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: RecordId,
    pub name: String,
    /// Download location of the file.
    #[serde(default, deserialize_with = "null_as_default")]
    pub file: String,
    #[serde(default, alias = "size", deserialize_with = "null_as_default")]
    pub file_size: u64,
}

/// Lightweight summary used for "related articles" links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedArticle {
    pub id: ArticleId,
    pub title: String,
    #[serde(default, alias = "category_name", deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub view_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub article_number: String,
    pub title: String,
    /// Raw, untrusted HTML body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, alias = "category_name", deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    #[serde(default, alias = "author_name")]
    pub author: Option<String>,
    #[serde(default)]
    pub author_username: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub published_at: Option<String>,
    pub updated_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub helpful_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub not_helpful_count: u64,
    #[serde(default)]
    pub helpfulness_ratio: Option<f64>,
    #[serde(default)]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default)]
    pub related_articles: Option<Vec<RelatedArticle>>,
}

impl Article {
    /// Author display name, falling back to the username.
    pub fn author_display(&self) -> &str {
        [self.author.as_deref(), self.author_username.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or("Unknown author")
    }

    /// Upstream ratio clamped to [0, 1]; zero when missing or nobody has voted.
    pub fn helpfulness_ratio(&self) -> f64 {
        if self.helpful_count.saturating_add(self.not_helpful_count) == 0 {
            return 0.0;
        }
        match self.helpfulness_ratio {
            Some(ratio) if ratio.is_finite() => ratio.clamp(0.0, 1.0),
            _ => 0.0,
        }
    }

    pub fn attachments(&self) -> &[Attachment] {
        self.attachments.as_deref().unwrap_or_default()
    }

    pub fn related_articles(&self) -> &[RelatedArticle] {
        self.related_articles.as_deref().unwrap_or_default()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r##"{
        "id": 42,
        "article_number": "KB-0042",
        "title": "Resetting your password",
        "content": "<p>Open settings.</p>",
        "category_name": "Accounts",
        "tags": [{"id": 1, "name": "login", "color": "#22c55e"}],
        "author_name": null,
        "author_username": "jdoe",
        "created_at": "2024-01-05T10:00:00Z",
        "published_at": null,
        "updated_at": "2024-02-01T08:30:00Z",
        "view_count": 120,
        "helpful_count": 3,
        "not_helpful_count": 1,
        "helpfulness_ratio": 0.75,
        "attachments": [{"id": "a1", "name": "guide.pdf", "file": "/media/guide.pdf", "file_size": 1536}],
        "related_articles": [{"id": 7, "title": "Two-factor setup", "category": null, "view_count": 9}]
    }"##;

    #[test]
    fn deserializes_api_payload() {
        let article: Article = serde_json::from_str(PAYLOAD).unwrap();

        assert_eq!(article.id.as_str(), "42");
        assert_eq!(article.category, "Accounts");
        assert_eq!(article.author_display(), "jdoe");
        assert_eq!(article.tags[0].color.as_deref(), Some("#22c55e"));
        assert_eq!(article.attachments()[0].file_size, 1536);
        assert_eq!(article.related_articles()[0].id.as_str(), "7");
        assert_eq!(article.related_articles()[0].category, "");
        assert!(article.published_at.is_none());
    }

    #[test]
    fn ratio_is_zero_without_votes() {
        let mut article: Article = serde_json::from_str(PAYLOAD).unwrap();
        article.helpful_count = 0;
        article.not_helpful_count = 0;
        article.helpfulness_ratio = None;
        assert_eq!(article.helpfulness_ratio(), 0.0);
    }

    #[test]
    fn huge_counts_keep_upstream_ratio() {
        let mut article: Article = serde_json::from_str(PAYLOAD).unwrap();
        article.helpful_count = u64::MAX;
        article.not_helpful_count = 1;
        article.helpfulness_ratio = Some(0.5);
        assert_eq!(article.helpfulness_ratio(), 0.5);
    }

    #[test]
    fn missing_ratio_is_zero() {
        let mut article: Article = serde_json::from_str(PAYLOAD).unwrap();
        article.helpfulness_ratio = None;
        assert_eq!(article.helpfulness_ratio(), 0.0);
    }

    #[test]
    fn missing_optional_sections_are_empty() {
        let article: Article = serde_json::from_str(
            r#"{"id": "x", "title": "t", "created_at": "c", "updated_at": "u"}"#,
        )
        .unwrap();
        assert!(article.attachments().is_empty());
        assert!(article.related_articles().is_empty());
        assert_eq!(article.author_display(), "Unknown author");
    }
}
