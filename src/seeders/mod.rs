pub mod tag_seeder;

use sea_orm::DatabaseConnection;
use crate::utils::app_error::AppError;

pub async fn run_seeders(db: &DatabaseConnection) -> Result<(), AppError> {
    // Starter tags for a fresh install
    tag_seeder::seed_tags(db).await?;

    Ok(())
}
