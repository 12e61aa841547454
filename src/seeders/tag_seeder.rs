use sea_orm::{DatabaseConnection, EntityTrait, ActiveValue::Set, ActiveModelTrait, QueryFilter, ColumnTrait};
use crate::entities::tag;
use crate::utils::app_error::AppError;

pub const STARTER_TAGS: [&str; 5] = ["Fun", "Even More", "Bloop", "Zope", "Rust"];

/// Inserts any missing starter tag; safe to run on every start.
pub async fn seed_tags(db: &DatabaseConnection) -> Result<usize, AppError> {
    let mut created = 0;

    for name in STARTER_TAGS {
        let exists = tag::Entity::find()
            .filter(tag::Column::Name.eq(name))
            .one(db)
            .await?;

        if exists.is_none() {
            let new_tag = tag::ActiveModel {
                name: Set(name.to_string()),
                ..Default::default()
            };
            new_tag.insert(db).await?;
            created += 1;
            tracing::info!("Seeded tag: {}", name);
        }
    }

    Ok(created)
}
