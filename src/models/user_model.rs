use serde::Serialize;
use validator::Validate;
use crate::entities::{post, user};
use crate::models::post_model::PostSummary;
use crate::utils::form_data::{FormData, FromFormData};
use crate::utils::validator_utils::validate_required;

/// Submitted by both the new-user and edit-user forms.
#[derive(Debug, Clone, Validate)]
pub struct UserForm {
    #[validate(
        custom(function = "validate_required"),
        length(max = 25, message = "First name must be at most 25 characters")
    )]
    pub first_name: String,

    #[validate(
        custom(function = "validate_required"),
        length(max = 30, message = "Last name must be at most 30 characters")
    )]
    pub last_name: String,

    pub image_url: Option<String>,
}

impl FromFormData for UserForm {
    fn from_form_data(form: &FormData) -> Self {
        Self {
            first_name: form.text("first_name"),
            last_name: form.text("last_name"),
            image_url: form.optional_text("image_url"),
        }
    }
}

#[derive(Serialize)]
pub struct UserDetail {
    pub user: user::Model,
    pub full_name: String,
    pub posts: Vec<PostSummary>,
}

impl UserDetail {
    pub fn new(user: user::Model, posts: Vec<post::Model>) -> Self {
        Self {
            full_name: user.full_name(),
            posts: posts.into_iter().map(PostSummary::from).collect(),
            user,
        }
    }
}
