//! Client-side template filtering.
//!
//! Filtering is pure: it derives a subset of an already-cached list and
//! never contacts the backend or mutates the underlying cache.

use crate::models::TemplateMeta;

/// Free-text and tag constraints applied to the cached template list
///
/// Both constraints apply conjunctively. An empty text filter and an empty
/// tag set mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    /// Case-insensitive substring matched against name, subject, and tags
    pub text: String,
    /// Tags that must all be present on a template (set containment)
    pub tags: Vec<String>,
}

impl TemplateFilter {
    /// Creates an unconstrained filter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text constraint
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the required-tag constraint
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Returns true if neither constraint is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.tags.is_empty()
    }

    /// Returns true if the template passes both constraints
    #[must_use]
    pub fn matches(&self, meta: &TemplateMeta) -> bool {
        self.matches_text(meta) && self.matches_tags(meta)
    }

    /// Case-insensitive substring match over name, subject, and joined tags
    fn matches_text(&self, meta: &TemplateMeta) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        let haystack = format!(
            "{} {} {}",
            meta.name,
            meta.subject,
            meta.tags.join(" ")
        )
        .to_lowercase();
        haystack.contains(&needle)
    }

    /// Every required tag must be present on the template
    fn matches_tags(&self, meta: &TemplateMeta) -> bool {
        self.tags
            .iter()
            .all(|required| meta.tags.iter().any(|t| t == required))
    }
}
