//! Form submissions accepted by the site.
//!
//! The blog editor posts flat field names such as `title` or `seo.metaTitle`.
//! Those names are parsed into [`BlogField`] once, and [`BlogPostForm::set`]
//! assigns through the typed field instead of walking string paths.

use serde::Deserialize;

use possystem_core::{
    BlogPost, CATEGORIES, ContactSubmission, CreatePostPayload, DEFAULT_CATEGORY, Email,
    LoginRequest, RegisterRequest, Seo, SeoPayload, TwitterCardType, UpdatePostPayload,
    split_tags,
};

/// SEO sub-fields of the blog editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeoField {
    MetaTitle,
    MetaDescription,
    MetaKeywords,
    OgTitle,
    OgDescription,
    OgImage,
    TwitterCardType,
}

impl SeoField {
    /// Parse the part after `seo.`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "metaTitle" => Self::MetaTitle,
            "metaDescription" => Self::MetaDescription,
            "metaKeywords" => Self::MetaKeywords,
            "ogTitle" => Self::OgTitle,
            "ogDescription" => Self::OgDescription,
            "ogImage" => Self::OgImage,
            "twitterCardType" => Self::TwitterCardType,
            _ => return None,
        })
    }
}

/// Fields of the blog editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogField {
    Title,
    Excerpt,
    Content,
    Category,
    Tags,
    FeaturedImage,
    Published,
    CommentsEnabled,
    Seo(SeoField),
}

impl BlogField {
    /// Parse a form field name. Unknown names return `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        if let Some(seo) = name.strip_prefix("seo.") {
            return SeoField::parse(seo).map(Self::Seo);
        }
        Some(match name {
            "title" => Self::Title,
            "excerpt" => Self::Excerpt,
            "content" => Self::Content,
            "category" => Self::Category,
            "tags" => Self::Tags,
            "featuredImage" => Self::FeaturedImage,
            "published" => Self::Published,
            "commentsEnabled" => Self::CommentsEnabled,
            _ => return None,
        })
    }
}

/// Editable SEO values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoForm {
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card_type: TwitterCardType,
}

impl SeoForm {
    fn set(&mut self, field: SeoField, value: String) {
        match field {
            SeoField::MetaTitle => self.meta_title = value,
            SeoField::MetaDescription => self.meta_description = value,
            SeoField::MetaKeywords => self.meta_keywords = value,
            SeoField::OgTitle => self.og_title = value,
            SeoField::OgDescription => self.og_description = value,
            SeoField::OgImage => self.og_image = value,
            SeoField::TwitterCardType => {
                if let Some(card) = TwitterCardType::parse(&value) {
                    self.twitter_card_type = card;
                }
            }
        }
    }

    fn to_payload(&self) -> SeoPayload {
        SeoPayload {
            meta_title: self.meta_title.clone(),
            meta_description: self.meta_description.clone(),
            meta_keywords: self.meta_keywords.clone(),
            og_title: self.og_title.clone(),
            og_description: self.og_description.clone(),
            og_image: self.og_image.clone(),
            twitter_card_type: self.twitter_card_type,
        }
    }
}

impl From<&Seo> for SeoForm {
    fn from(seo: &Seo) -> Self {
        let payload = SeoPayload::from(seo);
        Self {
            meta_title: payload.meta_title,
            meta_description: payload.meta_description,
            meta_keywords: payload.meta_keywords,
            og_title: payload.og_title,
            og_description: payload.og_description,
            og_image: payload.og_image,
            twitter_card_type: payload.twitter_card_type,
        }
    }
}

/// An `<option>` in a select box.
#[derive(Debug, Clone, Copy)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// State of the blog editor, used by both create and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostForm {
    pub title: String,
    pub excerpt: String,
    /// HTML body.
    pub content: String,
    pub category: String,
    /// Comma-separated, as typed.
    pub tags: String,
    pub featured_image: String,
    pub published: bool,
    pub comments_enabled: bool,
    pub seo: SeoForm,
}

impl Default for BlogPostForm {
    /// A blank editor: category "General", published, comments on.
    fn default() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            tags: String::new(),
            featured_image: String::new(),
            published: true,
            comments_enabled: true,
            seo: SeoForm::default(),
        }
    }
}

impl BlogPostForm {
    /// Decode a submitted editor form.
    ///
    /// Checkboxes are absent from the submission when unticked, so both flags
    /// start off and are switched on by their field. Unknown field names are
    /// ignored.
    #[must_use]
    pub fn from_submission(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self {
            published: false,
            comments_enabled: false,
            ..Self::default()
        };
        for (name, value) in pairs {
            match BlogField::parse(&name) {
                Some(field) => form.set(field, value),
                None => tracing::debug!(field = %name, "Ignoring unknown blog form field"),
            }
        }
        form
    }

    /// Assign one field.
    pub fn set(&mut self, field: BlogField, value: String) {
        match field {
            BlogField::Title => self.title = value,
            BlogField::Excerpt => self.excerpt = value,
            BlogField::Content => self.content = value,
            BlogField::Category => self.category = value,
            BlogField::Tags => self.tags = value,
            BlogField::FeaturedImage => self.featured_image = value,
            BlogField::Published => self.published = is_checked(&value),
            BlogField::CommentsEnabled => self.comments_enabled = is_checked(&value),
            BlogField::Seo(seo) => self.seo.set(seo, value),
        }
    }

    /// Body for `POST /api/blog/dashboard/blog`. Tags go out as typed.
    #[must_use]
    pub fn to_create_payload(&self) -> CreatePostPayload {
        CreatePostPayload {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            featured_image: self.featured_image.clone(),
            published: self.published,
            seo: self.seo.to_payload(),
        }
    }

    /// Body for `PUT /api/blog/posts/{id}`. Tags are split on commas.
    #[must_use]
    pub fn to_update_payload(&self) -> UpdatePostPayload {
        UpdatePostPayload {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            tags: split_tags(&self.tags),
            featured_image: self.featured_image.clone(),
            published: self.published,
            comments_enabled: self.comments_enabled,
            seo: self.seo.to_payload(),
        }
    }

    /// Category choices with the current one selected.
    #[must_use]
    pub fn category_options(&self) -> Vec<SelectOption> {
        CATEGORIES
            .iter()
            .map(|&category| SelectOption {
                value: category,
                label: category,
                selected: category == self.category,
            })
            .collect()
    }

    /// Twitter card choices with the current one selected.
    #[must_use]
    pub fn card_options(&self) -> Vec<SelectOption> {
        TwitterCardType::ALL
            .iter()
            .map(|&card| SelectOption {
                value: card.as_str(),
                label: card.label(),
                selected: card == self.seo.twitter_card_type,
            })
            .collect()
    }
}

impl From<&BlogPost> for BlogPostForm {
    /// Pre-fill the editor from a stored post. Missing values take the
    /// blank-editor defaults.
    fn from(post: &BlogPost) -> Self {
        let defaults = Self::default();
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        Self {
            title: post.title.clone(),
            excerpt: text(&post.excerpt),
            content: text(&post.content),
            category: post
                .category
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or(defaults.category),
            tags: post.tags.as_ref().map(|t| t.to_text()).unwrap_or_default(),
            featured_image: text(&post.featured_image),
            published: post.published.unwrap_or(defaults.published),
            comments_enabled: post.comments_enabled.unwrap_or(defaults.comments_enabled),
            seo: post.seo.as_ref().map(SeoForm::from).unwrap_or_default(),
        }
    }
}

/// HTML checkbox semantics: present means ticked unless explicitly false.
fn is_checked(value: &str) -> bool {
    !matches!(value.trim(), "false" | "off" | "0")
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    /// Validate and convert into the backend request.
    ///
    /// # Errors
    ///
    /// Returns the message to show when a field is missing.
    pub fn to_request(&self) -> Result<LoginRequest, &'static str> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err("Email and password are required.");
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterForm {
    /// Validate and convert into the backend request.
    ///
    /// # Errors
    ///
    /// Returns the message to show when a field is missing.
    pub fn to_request(&self) -> Result<RegisterRequest, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err("Name, email and password are required.");
        }
        Ok(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Public contact form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Validate and convert into the backend submission.
    ///
    /// # Errors
    ///
    /// Returns the message to show for the first invalid field.
    pub fn to_submission(&self) -> Result<ContactSubmission, &'static str> {
        if [&self.name, &self.subject, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err("Please fill in all fields.");
        }
        let email =
            Email::parse(&self.email).map_err(|_| "Please enter a valid email address.")?;

        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: email.into_inner(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use possystem_core::Tags;

    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_field_names() {
        assert_eq!(BlogField::parse("title"), Some(BlogField::Title));
        assert_eq!(
            BlogField::parse("seo.ogImage"),
            Some(BlogField::Seo(SeoField::OgImage))
        );
        assert_eq!(BlogField::parse("seo.unknown"), None);
        assert_eq!(BlogField::parse("author"), None);
    }

    #[test]
    fn test_submission_sets_nested_seo() {
        let form = BlogPostForm::from_submission(pairs(&[
            ("title", "Hello"),
            ("seo.metaTitle", "Meta"),
            ("seo.twitterCardType", "player"),
            ("published", "on"),
        ]));
        assert_eq!(form.title, "Hello");
        assert_eq!(form.seo.meta_title, "Meta");
        assert_eq!(form.seo.twitter_card_type, TwitterCardType::Player);
        assert!(form.published);
        assert!(!form.comments_enabled);
    }

    #[test]
    fn test_invalid_card_type_keeps_default() {
        let form = BlogPostForm::from_submission(pairs(&[("seo.twitterCardType", "gallery")]));
        assert_eq!(form.seo.twitter_card_type, TwitterCardType::Summary);
    }

    #[test]
    fn test_create_payload_keeps_raw_tags() {
        let form = BlogPostForm::from_submission(pairs(&[("tags", "a, b, c")]));
        assert_eq!(form.to_create_payload().tags, "a, b, c");
    }

    #[test]
    fn test_update_payload_splits_tags() {
        let form = BlogPostForm::from_submission(pairs(&[("tags", "a, b, c")]));
        assert_eq!(form.to_update_payload().tags, vec!["a", "b", "c"]);

        let form = BlogPostForm::from_submission(pairs(&[("tags", " , x ,, ")]));
        assert_eq!(form.to_update_payload().tags, vec!["x"]);
    }

    #[test]
    fn test_prefill_defaults() {
        let post = BlogPost {
            title: "T".to_string(),
            ..BlogPost::default()
        };
        let form = BlogPostForm::from(&post);
        assert_eq!(form.category, "General");
        assert!(form.published);
        assert!(form.comments_enabled);
        assert_eq!(form.seo.twitter_card_type, TwitterCardType::Summary);
        assert_eq!(form.tags, "");
    }

    #[test]
    fn test_prefill_joins_tag_list() {
        let post = BlogPost {
            tags: Some(Tags::List(vec!["a".to_string(), "b".to_string()])),
            published: Some(false),
            ..BlogPost::default()
        };
        let form = BlogPostForm::from(&post);
        assert_eq!(form.tags, "a, b");
        assert!(!form.published);
    }

    #[test]
    fn test_prefill_keeps_tag_text() {
        let post = BlogPost {
            tags: Some(Tags::Text("x,y".to_string())),
            ..BlogPost::default()
        };
        assert_eq!(BlogPostForm::from(&post).tags, "x,y");
    }

    #[test]
    fn test_category_options_mark_selected() {
        let form = BlogPostForm {
            category: "Security".to_string(),
            ..BlogPostForm::default()
        };
        let selected: Vec<_> = form
            .category_options()
            .into_iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, vec!["Security"]);
    }

    #[test]
    fn test_contact_validation() {
        let mut form = ContactForm {
            name: "Ann".to_string(),
            email: "Ann@Example.com".to_string(),
            subject: "Demo".to_string(),
            message: "Hi".to_string(),
        };
        assert_eq!(form.to_submission().unwrap().email, "ann@example.com");

        form.email = "nope".to_string();
        assert_eq!(
            form.to_submission().unwrap_err(),
            "Please enter a valid email address."
        );

        form.subject = "  ".to_string();
        assert_eq!(form.to_submission().unwrap_err(), "Please fill in all fields.");
    }

    #[test]
    fn test_login_requires_fields() {
        let form = LoginForm {
            email: " ".to_string(),
            password: "pw".to_string(),
        };
        assert!(form.to_request().is_err());
    }
}
