use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_reports_ok_with_timestamp_and_uptime() {
    let app = spawn_app().await;

    let response = app.get("/health").await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "OK");
    assert!(
        chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok(),
        "timestamp was not RFC 3339: {}",
        body["timestamp"]
    );
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn health_check_reports_ok_even_when_the_mail_provider_is_down() {
    let app = spawn_app().await;

    // The mock mail server answers 404 to everything that is not mounted,
    // so the startup self-check has already failed by now.
    let response = app.get("/health").await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "OK");
}
