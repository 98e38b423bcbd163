//! Blog post records and the payloads sent to create or update them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::PostId;
use super::tags::Tags;
use super::timestamp::parse_timestamp;

/// Category used when a post has none.
pub const DEFAULT_CATEGORY: &str = "General";

/// Categories offered by the admin blog forms.
pub const CATEGORIES: [&str; 5] = ["Technology", "Analytics", "Security", "General", "Other"];

/// Twitter card type for a post's social preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCardType {
    #[default]
    Summary,
    SummaryLargeImage,
    App,
    Player,
}

impl TwitterCardType {
    /// All card types, in the order the forms list them.
    pub const ALL: [Self; 4] = [
        Self::Summary,
        Self::SummaryLargeImage,
        Self::App,
        Self::Player,
    ];

    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
            Self::App => "app",
            Self::Player => "player",
        }
    }

    /// Label shown in the form's select box.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::SummaryLargeImage => "Summary Large Image",
            Self::App => "App",
            Self::Player => "Player",
        }
    }

    /// Parse a wire value. Returns `None` for unknown values.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|card| card.as_str() == value)
    }
}

impl std::fmt::Display for TwitterCardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post author reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
}

/// SEO metadata as stored on a post. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub og_title: Option<String>,
    #[serde(default)]
    pub og_description: Option<String>,
    #[serde(default)]
    pub og_image: Option<String>,
    /// Kept raw so an unknown card type does not fail the whole post.
    #[serde(default)]
    pub twitter_card_type: Option<String>,
}

impl Seo {
    /// The card type, falling back to [`TwitterCardType::Summary`].
    #[must_use]
    pub fn card_type(&self) -> TwitterCardType {
        self.twitter_card_type
            .as_deref()
            .and_then(TwitterCardType::parse)
            .unwrap_or_default()
    }
}

/// A blog post as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// HTML body.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Tags>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub comments_enabled: Option<bool>,
    #[serde(default)]
    pub seo: Option<Seo>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl BlogPost {
    /// The post's category, or [`DEFAULT_CATEGORY`] when unset or blank.
    #[must_use]
    pub fn category_or_default(&self) -> &str {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    /// The author's display name, or `"Anonymous"`.
    #[must_use]
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Anonymous")
    }

    /// Parsed creation time, if present and well-formed.
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// Whether the post is publicly visible. Posts without the flag are.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.published.unwrap_or(true)
    }

    /// Featured image URL, when one is set.
    #[must_use]
    pub fn featured_image(&self) -> Option<&str> {
        self.featured_image
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Stock image for the post's category, used when there is no featured
    /// image. Returns the image stem without an extension.
    #[must_use]
    pub fn category_image(&self) -> &'static str {
        match self
            .category
            .as_deref()
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("technology") => "hotel",
            Some("analytics") => "inventory",
            Some("security") => "payroll",
            _ => "pos-mockup",
        }
    }
}

/// SEO metadata as sent by the admin forms. Every field is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoPayload {
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card_type: TwitterCardType,
}

impl From<&Seo> for SeoPayload {
    fn from(seo: &Seo) -> Self {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        Self {
            meta_title: text(&seo.meta_title),
            meta_description: text(&seo.meta_description),
            meta_keywords: text(&seo.meta_keywords),
            og_title: text(&seo.og_title),
            og_description: text(&seo.og_description),
            og_image: text(&seo.og_image),
            twitter_card_type: seo.card_type(),
        }
    }
}

/// Body of `POST /api/blog/dashboard/blog`.
///
/// Tags go out as the raw text the author typed. There is no comments flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostPayload {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: String,
    pub featured_image: String,
    pub published: bool,
    pub seo: SeoPayload,
}

/// Body of `PUT /api/blog/posts/{id}`. Tags go out as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostPayload {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub featured_image: String,
    pub published: bool,
    pub comments_enabled: bool,
    pub seo: SeoPayload,
}
