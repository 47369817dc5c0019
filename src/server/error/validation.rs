use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::FieldErrorsDto,
    server::{model::validation::FieldViolation, util::locale::Locale},
};

/// Rejected request payload.
///
/// Carries every violated rule together with the locale the caller asked for, so the
/// response can be rendered without any ambient language state.
#[derive(Error, Debug)]
#[error("Request failed validation with {} violation(s)", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
    pub locale: Locale,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>, locale: Locale) -> Self {
        Self { violations, locale }
    }
}

/// Converts validation errors into a 400 Bad Request response.
///
/// The body lists one `{field, message}` entry per violation, in the order the rules
/// were evaluated, with messages resolved for the request locale.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let locale = self.locale;
        let errors = self
            .violations
            .into_iter()
            .map(|violation| violation.into_dto(locale))
            .collect();

        (StatusCode::BAD_REQUEST, Json(FieldErrorsDto { errors })).into_response()
    }
}
