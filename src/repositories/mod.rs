pub mod post_tag_repository;
