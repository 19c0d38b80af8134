//! Display-ready fields computed once per loaded article.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::Article;
use crate::content::{format_date, format_file_size, html_to_lines, Sanitizer};

#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentDisplay {
    pub name: String,
    pub size: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDisplay {
    pub author: String,
    pub created: String,
    pub published: Option<String>,
    pub updated: String,
    /// Article body after allow-list sanitization.
    pub body_html: String,
    pub attachments: Vec<AttachmentDisplay>,
    /// Upstream helpfulness ratio as a whole percentage.
    pub helpfulness_percent: u64,
    wrapped_body: WrappedBody,
}

impl ArticleDisplay {
    pub fn build(article: &Article, sanitizer: &dyn Sanitizer) -> Self {
        Self {
            author: article.author_display().to_string(),
            created: format_date(&article.created_at),
            published: article.published_at.as_deref().map(format_date),
            updated: format_date(&article.updated_at),
            body_html: sanitizer.sanitize(&article.content),
            attachments: article
                .attachments()
                .iter()
                .map(|a| AttachmentDisplay {
                    name: a.name.clone(),
                    size: format_file_size(a.file_size),
                    location: a.file.clone(),
                })
                .collect(),
            helpfulness_percent: (article.helpfulness_ratio() * 100.0).round() as u64,
            wrapped_body: WrappedBody::default(),
        }
    }

    /// The body as terminal lines for `width`, converted once per width.
    pub fn body_lines(&self, width: usize) -> Arc<[String]> {
        let mut cache = self.wrapped_body.0.lock();
        if let Some((cached_width, lines)) = cache.as_ref() {
            if *cached_width == width {
                return Arc::clone(lines);
            }
        }
        let lines: Arc<[String]> = html_to_lines(&self.body_html, width).into();
        *cache = Some((width, Arc::clone(&lines)));
        lines
    }
}

/// Last wrapping of the body; not part of the display's identity.
#[derive(Default)]
struct WrappedBody(Mutex<Option<(usize, Arc<[String]>)>>);

impl Clone for WrappedBody {
    fn clone(&self) -> Self {
        Self(Mutex::new(self.0.lock().clone()))
    }
}

impl PartialEq for WrappedBody {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl fmt::Debug for WrappedBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.0.lock().as_ref().map(|(width, _)| *width);
        f.debug_tuple("WrappedBody").field(&width).finish()
    }
}
