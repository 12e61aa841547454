pub mod app_error;
pub mod entity_id;
pub mod flash;
pub mod form_data;
pub mod html_response;
pub mod templates;
pub mod validated_wrapper;
pub mod validator_utils;
