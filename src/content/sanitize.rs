//! Allow-list HTML sanitization for untrusted article bodies.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Tags whose content is dropped along with the tag; never allowed.
pub const CONTENT_STRIPPED_TAGS: &[&str] = &["script", "style"];

/// Strips disallowed markup from untrusted HTML.
pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, html: &str) -> String;
}

/// Tags and attributes permitted in rendered article bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizerConfig {
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
    #[serde(default = "default_attributes")]
    pub attributes: Vec<String>,
}

fn default_tags() -> Vec<String> {
    [
        "p", "br", "strong", "em", "b", "i", "u", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol",
        "li", "table", "thead", "tbody", "tr", "th", "td", "a", "img", "code", "pre",
        "blockquote", "hr",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_attributes() -> Vec<String> {
    ["href", "src", "alt", "title", "class", "id"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            tags: default_tags(),
            attributes: default_attributes(),
        }
    }
}

/// [`Sanitizer`] backed by `ammonia` with an explicit allow-list.
///
/// Attributes are allowed on every permitted tag; nothing is tag-specific.
/// Links are emitted as-is (no `rel` injection) and relative URLs pass through.
#[derive(Debug, Clone)]
pub struct AllowListSanitizer {
    config: SanitizerConfig,
}

impl AllowListSanitizer {
    pub fn new(config: SanitizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }
}

impl Default for AllowListSanitizer {
    fn default() -> Self {
        Self::new(SanitizerConfig::default())
    }
}

impl Sanitizer for AllowListSanitizer {
    fn sanitize(&self, html: &str) -> String {
        // ammonia asserts that allowed tags and content-stripped tags are disjoint
        let tags: HashSet<&str> = self
            .config
            .tags
            .iter()
            .map(String::as_str)
            .filter(|tag| !CONTENT_STRIPPED_TAGS.contains(tag))
            .collect();
        let attributes: HashSet<&str> = self.config.attributes.iter().map(String::as_str).collect();

        let mut builder = ammonia::Builder::default();
        builder
            .tags(tags)
            .tag_attributes(HashMap::new())
            .generic_attributes(attributes)
            .link_rel(None);
        builder.clean(html).to_string()
    }
}
