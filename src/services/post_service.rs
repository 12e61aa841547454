use chrono::Utc;
use sea_orm::*;
use crate::entities::{post, post::Entity as Post, tag, user};
use crate::models::post_model::{PostDetail, PostForm, PostSummary, RecentPost};
use crate::repositories::post_tag_repository::PostTagRepository;
use crate::services::user_service::UserService;
use crate::utils::app_error::AppError;

pub const HOMEPAGE_POST_LIMIT: u64 = 5;

pub struct PostService;

impl PostService {
    /// Newest first; posts created in the same instant fall back to id order.
    pub async fn recent_posts(db: &DatabaseConnection, limit: u64) -> Result<Vec<RecentPost>, AppError> {
        let rows = Post::find()
            .find_also_related(user::Entity)
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .limit(limit)
            .all(db)
            .await?;

        let mut data = Vec::with_capacity(rows.len());
        for (post, author_opt) in rows {
            let author = author_opt.ok_or_else(|| {
                AppError::Database(DbErr::RecordNotFound(format!("Post {} has no author", post.id)))
            })?;
            data.push(RecentPost {
                summary: PostSummary::from(post),
                author,
            });
        }
        Ok(data)
    }

    pub async fn list_posts(db: &DatabaseConnection) -> Result<Vec<post::Model>, AppError> {
        let posts = Post::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(db)
            .await?;
        Ok(posts)
    }

    pub async fn get_post<C>(db: &C, id: i32) -> Result<post::Model, AppError>
    where C: ConnectionTrait {
        Post::find_by_id(id)
            .one(db)
            .await?
            .ok_or(AppError::not_found("Post", id))
    }

    pub async fn get_post_detail(db: &DatabaseConnection, id: i32) -> Result<PostDetail, AppError> {
        let post = Self::get_post(db, id).await?;
        let author = UserService::get_user(db, post.user_id).await?;
        let tags = post
            .find_related(tag::Entity)
            .order_by_asc(tag::Column::Name)
            .all(db)
            .await?;

        Ok(PostDetail {
            summary: PostSummary::from(post),
            author,
            tags,
        })
    }

    pub async fn create_post(
        db: &DatabaseConnection,
        user_id: i32,
        payload: PostForm,
    ) -> Result<post::Model, AppError> {
        let txn = db.begin().await?;

        let owner = UserService::get_user(&txn, user_id).await?;
        let tag_ids = PostTagRepository::resolve_tag_ids(&txn, &payload.tag_ids).await?;

        let new_post = post::ActiveModel {
            id: NotSet,
            title: Set(payload.title),
            content: Set(payload.content),
            created_at: Set(Utc::now()),
            user_id: Set(owner.id),
        };
        let saved = new_post.insert(&txn).await?;

        PostTagRepository::replace_tags_for_post(&txn, saved.id, &tag_ids).await?;

        txn.commit().await?;

        tracing::info!("Created post {} for user {} with tags {:?}", saved.id, owner.id, tag_ids);
        Ok(saved)
    }

    /// Title and content are overwritten and the tag set becomes exactly the
    /// submitted ids that exist.
    pub async fn update_post(db: &DatabaseConnection, id: i32, payload: PostForm) -> Result<post::Model, AppError> {
        let txn = db.begin().await?;

        let post = Self::get_post(&txn, id).await?;
        let tag_ids = PostTagRepository::resolve_tag_ids(&txn, &payload.tag_ids).await?;

        let mut active: post::ActiveModel = post.into();
        active.title = Set(payload.title);
        active.content = Set(payload.content);
        let updated = active.update(&txn).await?;

        let diff = PostTagRepository::replace_tags_for_post(&txn, updated.id, &tag_ids).await?;

        txn.commit().await?;

        tracing::info!(
            "Updated post {} (tags added {:?}, removed {:?})",
            updated.id,
            diff.added,
            diff.removed
        );
        Ok(updated)
    }

    /// Removes the post and its tag links; the owning user stays.
    pub async fn delete_post(db: &DatabaseConnection, id: i32) -> Result<post::Model, AppError> {
        let txn = db.begin().await?;

        let post = Self::get_post(&txn, id).await?;
        PostTagRepository::delete_for_posts(&txn, &[post.id]).await?;
        Post::delete_by_id(post.id).exec(&txn).await?;

        txn.commit().await?;

        tracing::info!("Deleted post {}", post.id);
        Ok(post)
    }
}
