use crate::helpers::spawn_app_with;

#[tokio::test]
async fn requests_beyond_the_per_window_ceiling_are_rejected() {
    // Same fixed-window policy as production, with a ceiling small enough
    // to exercise in a test.
    let app = spawn_app_with(|config| {
        config.rate_limit.max_requests = 5;
    })
    .await;

    for i in 0..5 {
        let response = app.get("/health").await;
        assert_eq!(
            200,
            response.status().as_u16(),
            "request {} within the window was rejected",
            i + 1
        );
    }

    let response = app.get("/health").await;
    assert_eq!(429, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("Too many requests"));
}

#[tokio::test]
async fn the_rejection_applies_to_every_route() {
    let app = spawn_app_with(|config| {
        config.rate_limit.max_requests = 1;
    })
    .await;

    assert_eq!(200, app.get("/health").await.status().as_u16());
    assert_eq!(429, app.get("/resume").await.status().as_u16());
}
