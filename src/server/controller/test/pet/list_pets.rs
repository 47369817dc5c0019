use super::*;

fn get_pets() -> Request<Body> {
    Request::builder().uri("/pets").body(Body::empty()).unwrap()
}

#[tokio::test]
async fn returns_empty_list_without_pets() {
    let (_test, app) = setup().await;

    let response = app.oneshot(get_pets()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!([]));
}

/// Tests listing pets after registrations and rejections.
///
/// Expected: 200 OK listing only the accepted registration
#[tokio::test]
async fn lists_only_accepted_registrations() {
    let (_test, app) = setup().await;

    let accepted = app
        .clone()
        .oneshot(post_pet(
            json!({"name": "Bob", "breed": "Poodle", "type": "CAO", "birthDate": distant_past()}),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(accepted.status(), StatusCode::CREATED);

    let rejected = app
        .clone()
        .oneshot(post_pet(
            json!({"name": "Bod", "breed": " ", "type": null, "birthDate": today()}),
            Some("pt-br"),
        ))
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get_pets()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    let pets = body.as_array().unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0]["name"], "Bob");
}
