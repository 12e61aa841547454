use serde::Serialize;
use validator::Validate;
use crate::entities::{post, tag, user};
use crate::utils::form_data::{FormData, FromFormData};
use crate::utils::validator_utils::validate_required;

/// Submitted by the new-post and edit-post forms. `tags` checkboxes carry tag ids.
#[derive(Debug, Clone, Validate)]
pub struct PostForm {
    #[validate(custom(function = "validate_required"))]
    pub title: String,

    #[validate(custom(function = "validate_required"))]
    pub content: String,

    pub tag_ids: Vec<i32>,
}

impl FromFormData for PostForm {
    fn from_form_data(form: &FormData) -> Self {
        Self {
            title: form.text("title"),
            content: form.raw("content").unwrap_or_default().to_string(),
            tag_ids: form.ids("tags"),
        }
    }
}

/// A post as listed on pages, with its display date.
#[derive(Debug, Serialize)]
pub struct PostSummary {
    #[serde(flatten)]
    pub post: post::Model,
    pub friendly_date: String,
}

impl From<post::Model> for PostSummary {
    fn from(post: post::Model) -> Self {
        Self {
            friendly_date: post.friendly_date(),
            post,
        }
    }
}

/// Homepage entry.
#[derive(Debug, Serialize)]
pub struct RecentPost {
    #[serde(flatten)]
    pub summary: PostSummary,
    pub author: user::Model,
}

#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub summary: PostSummary,
    pub author: user::Model,
    pub tags: Vec<tag::Model>,
}

impl PostDetail {
    pub fn tag_ids(&self) -> Vec<i32> {
        self.tags.iter().map(|t| t.id).collect()
    }
}
