use axum::{
    body::Body,
    http::{
        header::{ACCEPT_LANGUAGE, CONTENT_TYPE, LOCATION},
        Request, Response, StatusCode,
    },
    Router,
};
use chrono::{Days, Local, NaiveDate};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use url::Url;

use crate::server::{router::router, state::AppState};

mod get_pet;
mod list_pets;

/// Builds the application router over a fresh in-memory database.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_pet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let state = AppState::new(db, Url::parse("http://localhost").unwrap());

    (test, router().with_state(state))
}

fn post_pet(body: Value, accept_language: Option<&str>) -> Request<Body> {
    post_raw(body.to_string(), accept_language)
}

fn post_raw(body: String, accept_language: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/pets")
        .header(CONTENT_TYPE, "application/json");

    if let Some(language) = accept_language {
        builder = builder.header(ACCEPT_LANGUAGE, language);
    }

    builder.body(Body::from(body)).unwrap()
}

async fn read_body(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn read_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&read_body(response).await).unwrap()
}

/// Collects the `(field, message)` pairs of a field error response.
fn field_errors(body: &Value) -> Vec<(String, String)> {
    body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["field"].as_str().unwrap().to_string(),
                e["message"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

async fn pet_count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::Pet::find().count(db).await
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn distant_past() -> NaiveDate {
    NaiveDate::from_ymd_opt(200, 4, 3).unwrap()
}
