use crate::helpers::spawn_app;

#[tokio::test]
async fn an_unknown_route_returns_the_fixed_404_payload() {
    let app = spawn_app().await;

    let response = app.get("/nonexistent").await;

    assert_eq!(404, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Endpoint not found.");
}

#[tokio::test]
async fn an_unsupported_method_on_a_known_path_returns_the_404_payload() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}
