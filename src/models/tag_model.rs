use serde::Serialize;
use validator::Validate;
use crate::entities::{post, tag};
use crate::models::post_model::PostSummary;
use crate::utils::form_data::{FormData, FromFormData};
use crate::utils::validator_utils::validate_required;

/// Submitted by the new-tag and edit-tag forms. `posts` checkboxes carry post ids.
#[derive(Debug, Clone, Validate)]
pub struct TagForm {
    #[validate(custom(function = "validate_required"))]
    pub name: String,

    pub post_ids: Vec<i32>,
}

impl FromFormData for TagForm {
    fn from_form_data(form: &FormData) -> Self {
        Self {
            name: form.text("name"),
            post_ids: form.ids("posts"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TagDetail {
    pub tag: tag::Model,
    pub posts: Vec<PostSummary>,
}

impl TagDetail {
    pub fn new(tag: tag::Model, posts: Vec<post::Model>) -> Self {
        Self {
            tag,
            posts: posts.into_iter().map(PostSummary::from).collect(),
        }
    }

    pub fn post_ids(&self) -> Vec<i32> {
        self.posts.iter().map(|p| p.post.id).collect()
    }
}
