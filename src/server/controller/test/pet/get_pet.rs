use super::*;

#[tokio::test]
async fn returns_stored_pet() -> Result<(), DbErr> {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let pet = factory::pet::PetFactory::new(db)
        .name("Mimi")
        .breed("Siamese")
        .pet_type("GATO")
        .birth_date(NaiveDate::from_ymd_opt(2019, 5, 20).unwrap())
        .build()
        .await?;

    let request = Request::builder()
        .uri(format!("/pets/{}", pet.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(
        body,
        json!({
            "id": pet.id,
            "name": "Mimi",
            "breed": "Siamese",
            "type": "GATO",
            "birthDate": "2019-05-20"
        })
    );

    Ok(())
}

#[tokio::test]
async fn returns_not_found_for_missing_pet() {
    let (_test, app) = setup().await;

    let request = Request::builder()
        .uri("/pets/12345")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = read_json(response).await;
    assert_eq!(body["error"], "Pet not found");
}

/// Tests that the `Location` of a registration resolves to the new pet.
///
/// Expected: 201 Created followed by 200 OK for the returned location
#[tokio::test]
async fn location_of_registered_pet_resolves() {
    let (_test, app) = setup().await;

    let response = app
        .clone()
        .oneshot(post_pet(
            json!({"name": "Bob", "breed": "Poodle", "type": "DOG", "birthDate": distant_past()}),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response.headers().get(LOCATION).unwrap().to_str().unwrap();
    let path = location.strip_prefix("http://localhost").unwrap().to_string();

    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["name"], "Bob");
    assert_eq!(body["type"], "CAO");
    assert_eq!(body["birthDate"], "0200-04-03");
}
