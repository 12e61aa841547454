use sea_orm::*;
use crate::entities::{post, user, user::Entity as User};
use crate::models::user_model::{UserDetail, UserForm};
use crate::repositories::post_tag_repository::PostTagRepository;
use crate::utils::app_error::AppError;

pub struct UserService;

impl UserService {
    pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, AppError> {
        let users = User::find()
            .order_by_asc(user::Column::LastName)
            .order_by_asc(user::Column::FirstName)
            .order_by_asc(user::Column::Id)
            .all(db)
            .await?;
        Ok(users)
    }

    pub async fn get_user<C>(db: &C, id: i32) -> Result<user::Model, AppError>
    where C: ConnectionTrait {
        User::find_by_id(id)
            .one(db)
            .await?
            .ok_or(AppError::not_found("User", id))
    }

    pub async fn get_user_detail(db: &DatabaseConnection, id: i32) -> Result<UserDetail, AppError> {
        let user = Self::get_user(db, id).await?;
        let posts = user
            .find_related(post::Entity)
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(db)
            .await?;
        Ok(UserDetail::new(user, posts))
    }

    pub async fn create_user(db: &DatabaseConnection, payload: UserForm) -> Result<user::Model, AppError> {
        let new_user = user::ActiveModel {
            id: NotSet,
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            image_url: Set(user::image_url_or_default(payload.image_url)),
        };

        let saved = new_user.insert(db).await?;
        tracing::info!("Created user {} ({})", saved.id, saved.full_name());
        Ok(saved)
    }

    /// Full replacement: the edit form's image url is stored as submitted,
    /// including an empty value.
    pub async fn update_user(db: &DatabaseConnection, id: i32, payload: UserForm) -> Result<user::Model, AppError> {
        let txn = db.begin().await?;

        let user = Self::get_user(&txn, id).await?;
        let mut active: user::ActiveModel = user.into();
        active.first_name = Set(payload.first_name);
        active.last_name = Set(payload.last_name);
        active.image_url = Set(payload.image_url.unwrap_or_default());

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        tracing::info!("Updated user {} ({})", updated.id, updated.full_name());
        Ok(updated)
    }

    /// Deletes the user's post/tag links, then its posts, then the user, in one transaction.
    pub async fn delete_user(db: &DatabaseConnection, id: i32) -> Result<user::Model, AppError> {
        let txn = db.begin().await?;

        let user = Self::get_user(&txn, id).await?;

        let post_ids: Vec<i32> = post::Entity::find()
            .filter(post::Column::UserId.eq(user.id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        let links = PostTagRepository::delete_for_posts(&txn, &post_ids).await?;
        let posts = post::Entity::delete_many()
            .filter(post::Column::UserId.eq(user.id))
            .exec(&txn)
            .await?;
        User::delete_by_id(user.id).exec(&txn).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted user {} with {} posts and {} tag links",
            user.id,
            posts.rows_affected,
            links
        );
        Ok(user)
    }
}
