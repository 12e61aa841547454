use sea_orm::*;
use crate::entities::{post, tag, tag::Entity as Tag};
use crate::models::tag_model::{TagDetail, TagForm};
use crate::repositories::post_tag_repository::PostTagRepository;
use crate::utils::app_error::AppError;

pub struct TagService;

impl TagService {
    pub async fn list_tags(db: &DatabaseConnection) -> Result<Vec<tag::Model>, AppError> {
        let tags = Tag::find().order_by_asc(tag::Column::Name).all(db).await?;
        Ok(tags)
    }

    pub async fn get_tag<C>(db: &C, id: i32) -> Result<tag::Model, AppError>
    where C: ConnectionTrait {
        Tag::find_by_id(id)
            .one(db)
            .await?
            .ok_or(AppError::not_found("Tag", id))
    }

    pub async fn get_tag_detail(db: &DatabaseConnection, id: i32) -> Result<TagDetail, AppError> {
        let tag = Self::get_tag(db, id).await?;
        let posts = tag
            .find_related(post::Entity)
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(db)
            .await?;
        Ok(TagDetail::new(tag, posts))
    }

    pub async fn create_tag(db: &DatabaseConnection, payload: TagForm) -> Result<tag::Model, AppError> {
        let txn = db.begin().await?;

        Self::ensure_unique_name(&txn, &payload.name, None).await?;
        let post_ids = PostTagRepository::resolve_post_ids(&txn, &payload.post_ids).await?;

        let new_tag = tag::ActiveModel {
            id: NotSet,
            name: Set(payload.name),
        };
        let saved = new_tag.insert(&txn).await?;

        PostTagRepository::replace_posts_for_tag(&txn, saved.id, &post_ids).await?;

        txn.commit().await?;

        tracing::info!("Created tag {} ('{}') on posts {:?}", saved.id, saved.name, post_ids);
        Ok(saved)
    }

    pub async fn update_tag(db: &DatabaseConnection, id: i32, payload: TagForm) -> Result<tag::Model, AppError> {
        let txn = db.begin().await?;

        let tag = Self::get_tag(&txn, id).await?;
        Self::ensure_unique_name(&txn, &payload.name, Some(tag.id)).await?;
        let post_ids = PostTagRepository::resolve_post_ids(&txn, &payload.post_ids).await?;

        let mut active: tag::ActiveModel = tag.into();
        active.name = Set(payload.name);
        let updated = active.update(&txn).await?;

        let diff = PostTagRepository::replace_posts_for_tag(&txn, updated.id, &post_ids).await?;

        txn.commit().await?;

        tracing::info!(
            "Updated tag {} (posts added {:?}, removed {:?})",
            updated.id,
            diff.added,
            diff.removed
        );
        Ok(updated)
    }

    /// Removes the tag and its post links; posts stay.
    pub async fn delete_tag(db: &DatabaseConnection, id: i32) -> Result<tag::Model, AppError> {
        let txn = db.begin().await?;

        let tag = Self::get_tag(&txn, id).await?;
        PostTagRepository::delete_for_tag(&txn, tag.id).await?;
        Tag::delete_by_id(tag.id).exec(&txn).await?;

        txn.commit().await?;

        tracing::info!("Deleted tag {} ('{}')", tag.id, tag.name);
        Ok(tag)
    }

    async fn ensure_unique_name<C>(db: &C, name: &str, except_id: Option<i32>) -> Result<(), AppError>
    where C: ConnectionTrait {
        let mut query = Tag::find().filter(tag::Column::Name.eq(name));
        if let Some(id) = except_id {
            query = query.filter(tag::Column::Id.ne(id));
        }

        if query.one(db).await?.is_some() {
            return Err(AppError::ConstraintViolation(format!("Tag '{}' already exists", name)));
        }
        Ok(())
    }
}
