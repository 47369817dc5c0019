use sea_orm::DatabaseConnection;

use crate::server::{
    data::pet::PetRepository,
    error::AppError,
    model::pet::{CreatePetParams, Pet},
};

pub struct PetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a validated pet with a single insert
    pub async fn create(&self, params: CreatePetParams) -> Result<Pet, AppError> {
        let repo = PetRepository::new(self.db);

        let pet = repo.create(params).await?;

        Ok(Pet::from_entity(pet)?)
    }

    /// Gets every registered pet ordered by id
    pub async fn get_all(&self) -> Result<Vec<Pet>, AppError> {
        let repo = PetRepository::new(self.db);

        let pets: Result<Vec<_>, _> = repo
            .get_all()
            .await?
            .into_iter()
            .map(Pet::from_entity)
            .collect();

        Ok(pets?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Pet>, AppError> {
        let repo = PetRepository::new(self.db);

        let result = repo.get_by_id(id).await?;

        result
            .map(Pet::from_entity)
            .transpose()
            .map_err(Into::into)
    }
}
