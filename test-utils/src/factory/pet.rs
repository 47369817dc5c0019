//! Pet factory for creating test pet entities.
//!
//! This module provides factory methods for creating pet entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::pet::PetFactory;
///
/// let pet = PetFactory::new(&db)
///     .name("Bob")
///     .breed("Poodle")
///     .build()
///     .await?;
/// ```
pub struct PetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    breed: String,
    pet_type: String,
    birth_date: NaiveDate,
}

impl<'a> PetFactory<'a> {
    /// Creates a new PetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pet {id}"` where id is auto-incremented
    /// - breed: `"Poodle"`
    /// - pet_type: `"CAO"`
    /// - birth_date: `2020-04-03`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PetFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Pet {}", id),
            breed: "Poodle".to_string(),
            pet_type: "CAO".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2020, 4, 3).unwrap_or_default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    /// Sets the stored type name, e.g. `"CAO"` or `"GATO"`.
    ///
    /// Any string is accepted so tests can seed rows the domain model refuses to load.
    pub fn pet_type(mut self, pet_type: impl Into<String>) -> Self {
        self.pet_type = pet_type.into();
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    /// Builds and inserts the pet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pet::Model)` - Created pet entity with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pet::Model, DbErr> {
        entity::pet::ActiveModel {
            name: ActiveValue::Set(self.name),
            breed: ActiveValue::Set(self.breed),
            pet_type: ActiveValue::Set(self.pet_type),
            birth_date: ActiveValue::Set(self.birth_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pet with default values.
///
/// Shorthand for `PetFactory::new(db).build().await`.
///
/// # Returns
/// - `Ok(entity::pet::Model)` - Created pet entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_pet(db: &DatabaseConnection) -> Result<entity::pet::Model, DbErr> {
    PetFactory::new(db).build().await
}

/// Creates `count` pets with default values.
pub async fn create_pets(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::pet::Model>, DbErr> {
    let mut pets = Vec::with_capacity(count);
    for _ in 0..count {
        pets.push(create_pet(db).await?);
    }
    Ok(pets)
}
