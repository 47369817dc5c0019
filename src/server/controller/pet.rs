use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Local;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorsDto},
        pet::{CreatePetDto, PetDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::pet::CreatePetParams,
        service::pet::PetService,
        state::AppState,
        util::locale::Locale,
    },
};

/// Tag for grouping pet endpoints in OpenAPI documentation
pub static PET_TAG: &str = "pet";

/// Register a new pet.
///
/// Validates the payload against every field rule before touching the database. A
/// rejected payload produces one localized error per violated rule and no write; an
/// accepted one is inserted once and its location is returned.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers; `Accept-Language` selects the error message language
/// - `payload` - Registration data (name, breed, type, birth date)
///
/// # Returns
/// - `201 Created` - Pet stored, `Location` header points at the new resource
/// - `400 Bad Request` - Field errors, or a body that is not valid JSON
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/pets",
    tag = PET_TAG,
    params(
        ("Accept-Language" = Option<String>, Header, description = "Language for error messages, e.g. pt-br")
    ),
    request_body = CreatePetDto,
    responses(
        (status = 201, description = "Successfully registered pet",
            headers(("Location" = String, description = "URL of the new pet"))),
        (status = 400, description = "Invalid pet data", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreatePetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let locale = Locale::from_headers(&headers);
    let today = Local::now().date_naive();

    let params = CreatePetParams::from_dto(payload, today).map_err(|violations| {
        tracing::debug!("Rejected pet registration with {} violation(s)", violations.len());
        ValidationError::new(violations, locale)
    })?;

    let service = PetService::new(&state.db);
    let pet = service.create(params).await?;

    tracing::info!("Registered pet {}", pet.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, state.pet_location(pet.id))],
    ))
}

/// List every registered pet.
///
/// # Returns
/// - `200 OK` - All pets ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/pets",
    tag = PET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved pets", body = Vec<PetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PetService::new(&state.db);

    let pets: Vec<PetDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|p| p.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(pets)))
}

/// Get a registered pet by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Pet ID from the `Location` header of a registration
///
/// # Returns
/// - `200 OK` - Pet details
/// - `404 Not Found` - No pet with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/pets/{id}",
    tag = PET_TAG,
    params(
        ("id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved pet", body = PetDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PetService::new(&state.db);

    let pet = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet not found".to_string()))?;

    Ok((StatusCode::OK, Json(pet.into_dto())))
}
