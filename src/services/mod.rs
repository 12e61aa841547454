pub mod post_service;
pub mod tag_service;
pub mod user_service;
