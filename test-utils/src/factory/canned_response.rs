//! Canned response factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a canned response.
pub async fn create_canned_response(
    db: &DatabaseConnection,
    response: &str,
) -> Result<entity::canned_response::Model, DbErr> {
    entity::canned_response::ActiveModel {
        id: ActiveValue::NotSet,
        response: ActiveValue::Set(response.to_string()),
    }
    .insert(db)
    .await
}
