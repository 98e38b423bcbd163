//! Blog post tags.
//!
//! Posts created through the create form store whatever the author typed,
//! while edited posts store a list, so the backend may return either shape.

use serde::{Deserialize, Serialize};

/// Tags as returned by the backend: a list or a single raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    /// A list of tags.
    List(Vec<String>),
    /// The raw comma-separated text as typed into the create form.
    Text(String),
}

impl Tags {
    /// Render the tags as the comma-separated text shown in the edit form.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::List(tags) => join_tags(tags),
            Self::Text(text) => text.clone(),
        }
    }

    /// The individual tags, splitting raw text on commas.
    #[must_use]
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::List(tags) => tags.clone(),
            Self::Text(text) => split_tags(text),
        }
    }
}

impl Default for Tags {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// Split comma-separated tag text into trimmed, non-empty tags.
///
/// ```
/// use possystem_core::split_tags;
///
/// assert_eq!(split_tags("a, b, c"), vec!["a", "b", "c"]);
/// assert_eq!(split_tags(" , a,,b "), vec!["a", "b"]);
/// ```
#[must_use]
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Join tags into the `", "`-separated text used by the edit form.
#[must_use]
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags_empty() {
        assert!(split_tags("").is_empty());
        assert!(split_tags(" ,  , ").is_empty());
    }

    #[test]
    fn test_tags_deserialize_list() {
        let tags: Tags = serde_json::from_str(r#"["pos","retail"]"#).unwrap();
        assert_eq!(tags.to_text(), "pos, retail");
    }

    #[test]
    fn test_tags_deserialize_text() {
        let tags: Tags = serde_json::from_str(r#""pos, retail""#).unwrap();
        assert_eq!(tags, Tags::Text("pos, retail".to_string()));
        assert_eq!(tags.to_list(), vec!["pos", "retail"]);
    }
}
