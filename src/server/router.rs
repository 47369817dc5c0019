use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::pet::*, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Pet Manager API"),
    tags((name = "pet", description = "Pet registration"))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(create_pet, list_pets))
        .routes(routes!(get_pet))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
