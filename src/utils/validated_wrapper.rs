use axum::{
    extract::{Form, FromRequest, Request},
    response::IntoResponse,
};
use validator::{Validate, ValidationErrors};
use crate::utils::app_error::{AppError, ValidationErrorDetail};
use crate::utils::form_data::{FormData, FromFormData};

pub struct ValidatedForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: FromFormData + Validate,
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = FormPayload::<T>::from_request(req, state).await?;
        payload
            .validated()
            .map(ValidatedForm)
            .map_err(IntoResponse::into_response)
    }
}

/// A decoded but not yet validated form, for handlers that must find the
/// target row before judging the submission.
pub struct FormPayload<T>(pub T);

impl<T, S> FromRequest<S> for FormPayload<T>
where
    T: FromFormData,
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|err| err.into_response())?;

        Ok(FormPayload(T::from_form_data(&FormData::new(pairs))))
    }
}

impl<T: Validate> FormPayload<T> {
    pub fn validated(self) -> Result<T, AppError> {
        self.0
            .validate()
            .map_err(|e| AppError::Validation(map_validation_errors(e)))?;
        Ok(self.0)
    }
}

// Convert validator errors to our custom struct list
pub fn map_validation_errors(errors: ValidationErrors) -> Vec<ValidationErrorDetail> {
    let mut details = Vec::new();

    for (field, error_kind) in errors.field_errors() {
        for err in error_kind {
            details.push(ValidationErrorDetail {
                field: field.to_string(),
                title: err.code.to_string(),
                message: err.message.clone().map(|m| m.to_string()).unwrap_or_else(|| "Invalid value".to_string()),
            });
        }
    }

    details.sort_by(|a, b| a.field.cmp(&b.field));
    details
}
