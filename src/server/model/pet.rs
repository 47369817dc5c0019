//! Pet domain models, creation parameters and request validation.
//!
//! `validate_create_pet` is a pure function over the incoming DTO and the current
//! calendar date. It evaluates every rule and returns all violations in field order,
//! so multi-field mistakes are reported together and the rules can be tested without
//! an HTTP layer.

use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::{
    model::pet::{CreatePetDto, PetDto, PetType},
    server::model::validation::{FieldViolation, MessageKey},
};

/// A registered pet as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub breed: String,
    pub pet_type: PetType,
    pub birth_date: NaiveDate,
}

impl Pet {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The pet entity from the database
    ///
    /// # Returns
    /// - `Ok(Pet)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored type name is not a known `PetType`
    pub fn from_entity(entity: entity::pet::Model) -> Result<Self, DbErr> {
        let pet_type = PetType::parse(&entity.pet_type).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown pet type '{}' for pet {}",
                entity.pet_type, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            breed: entity.breed,
            pet_type,
            birth_date: entity.birth_date,
        })
    }

    pub fn into_dto(self) -> PetDto {
        PetDto {
            id: self.id,
            name: self.name,
            breed: self.breed,
            pet_type: self.pet_type,
            birth_date: self.birth_date,
        }
    }
}

/// Validated parameters for registering a pet.
///
/// Can only be obtained through `from_dto`, which guarantees every field passed
/// validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePetParams {
    pub name: String,
    pub breed: String,
    pub pet_type: PetType,
    pub birth_date: NaiveDate,
}

impl CreatePetParams {
    /// Validates a registration DTO and converts it to creation parameters.
    ///
    /// # Arguments
    /// - `dto` - Unvalidated request payload
    /// - `today` - Current calendar date; `birth_date` must be strictly before it
    ///
    /// # Returns
    /// - `Ok(CreatePetParams)` - Every rule passed
    /// - `Err(Vec<FieldViolation>)` - One entry per violated rule, never empty
    pub fn from_dto(dto: CreatePetDto, today: NaiveDate) -> Result<Self, Vec<FieldViolation>> {
        let violations = validate_create_pet(&dto, today);

        match (dto.name, dto.breed, dto.pet_type, dto.birth_date) {
            (Some(name), Some(breed), Some(pet_type), Some(birth_date))
                if violations.is_empty() =>
            {
                Ok(Self {
                    name,
                    breed,
                    pet_type,
                    birth_date,
                })
            }
            _ => Err(violations),
        }
    }
}

/// Evaluates every registration rule against `dto`.
///
/// Rules, in reporting order:
/// 1. `name` must not be blank
/// 2. `breed` must not be blank
/// 3. `type` must not be null
/// 4. `birthDate` must be present and strictly before `today`
pub fn validate_create_pet(dto: &CreatePetDto, today: NaiveDate) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if is_blank(dto.name.as_deref()) {
        violations.push(FieldViolation::new("name", MessageKey::NameNotBlank));
    }

    if is_blank(dto.breed.as_deref()) {
        violations.push(FieldViolation::new("breed", MessageKey::BreedNotBlank));
    }

    if dto.pet_type.is_none() {
        violations.push(FieldViolation::new("type", MessageKey::TypeNotNull));
    }

    if !dto.birth_date.is_some_and(|date| date < today) {
        violations.push(FieldViolation::new("birthDate", MessageKey::BirthDatePast));
    }

    violations
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
