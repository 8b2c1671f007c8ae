//! Canned response repository.

use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect,
};

pub struct CannedResponseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CannedResponseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Picks a stored response uniformly at random.
    ///
    /// Counts the rows, then loads the row at a random offset, which works the same on
    /// every backend.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - A random response
    /// - `Ok(None)` - The table is empty
    /// - `Err(DbErr)` - Database error
    pub async fn random(&self) -> Result<Option<String>, DbErr> {
        let count = entity::prelude::CannedResponse::find().count(self.db).await?;
        if count == 0 {
            return Ok(None);
        }

        let offset = rand::rng().random_range(0..count);

        let entity = entity::prelude::CannedResponse::find()
            .order_by_asc(entity::canned_response::Column::Id)
            .offset(offset)
            .limit(1)
            .one(self.db)
            .await?;

        Ok(entity.map(|model| model.response))
    }

    pub async fn create(&self, response: &str) -> Result<i32, DbErr> {
        let entity = entity::canned_response::ActiveModel {
            id: ActiveValue::NotSet,
            response: ActiveValue::Set(response.to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }
}
