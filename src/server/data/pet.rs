use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::pet::CreatePetParams;

pub struct PetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new pet and returns it with its generated id
    pub async fn create(&self, params: CreatePetParams) -> Result<entity::pet::Model, DbErr> {
        entity::pet::ActiveModel {
            name: ActiveValue::Set(params.name),
            breed: ActiveValue::Set(params.breed),
            pet_type: ActiveValue::Set(params.pet_type.as_str().to_string()),
            birth_date: ActiveValue::Set(params.birth_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::pet::Model>, DbErr> {
        entity::prelude::Pet::find_by_id(id).one(self.db).await
    }

    /// Gets all pets ordered by id
    pub async fn get_all(&self) -> Result<Vec<entity::pet::Model>, DbErr> {
        entity::prelude::Pet::find()
            .order_by_asc(entity::pet::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every pet, returning the number of removed rows
    #[cfg(test)]
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Pet::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
