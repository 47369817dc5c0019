//! Field-level validation primitives.
//!
//! A `FieldViolation` names the offending field and carries a `MessageKey` rather than
//! rendered text. Messages are resolved against a `Locale` only when the violation is
//! turned into a response, so validation itself stays language independent.

use crate::{model::api::FieldErrorDto, server::util::locale::Locale};

/// Identifies a validation message independently of its translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    NameNotBlank,
    BreedNotBlank,
    TypeNotNull,
    BirthDatePast,
}

impl MessageKey {
    /// Resolves the message text for the given locale.
    pub fn resolve(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::NameNotBlank, Locale::En) => "name must not be blank",
            (Self::NameNotBlank, Locale::PtBr) => "O campo nome não deve estar em branco",
            (Self::BreedNotBlank, Locale::En) => "breed must not be blank",
            (Self::BreedNotBlank, Locale::PtBr) => "O campo raca não deve estar em branco",
            (Self::TypeNotNull, Locale::En) => "type must not be null",
            (Self::TypeNotNull, Locale::PtBr) => "O campo tipo não deve ser nulo",
            (Self::BirthDatePast, Locale::En) => "birthDate must be a past date",
            (Self::BirthDatePast, Locale::PtBr) => {
                "O campo dataNascimento deve ser uma data passada"
            }
        }
    }
}

/// A single violated rule on a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field name as it appears in the request body.
    pub field: &'static str,
    pub key: MessageKey,
}

impl FieldViolation {
    pub fn new(field: &'static str, key: MessageKey) -> Self {
        Self { field, key }
    }

    /// Converts the violation to a DTO with its message rendered for `locale`.
    pub fn into_dto(self, locale: Locale) -> FieldErrorDto {
        FieldErrorDto {
            field: self.field.to_string(),
            message: self.key.resolve(locale).to_string(),
        }
    }
}
