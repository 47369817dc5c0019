use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of animal being registered.
///
/// Serialized with the Portuguese wire names used by existing clients; the English
/// names are accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PetType {
    #[serde(rename = "CAO", alias = "DOG")]
    Dog,
    #[serde(rename = "GATO", alias = "CAT")]
    Cat,
}

impl PetType {
    /// Wire and storage name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "CAO",
            Self::Cat => "GATO",
        }
    }

    /// Parses a stored type name, accepting the English aliases.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CAO" | "DOG" => Some(Self::Dog),
            "GATO" | "CAT" => Some(Self::Cat),
            _ => None,
        }
    }
}

/// Unvalidated registration payload for `POST /pets`.
///
/// Every field is optional so that missing or `null` values surface as field
/// errors instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default, rename = "type")]
    pub pet_type: Option<PetType>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetDto {
    pub id: i32,
    pub name: String,
    pub breed: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub birth_date: NaiveDate,
}
