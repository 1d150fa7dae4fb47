use crate::helpers::{spawn_app, spawn_app_with};

#[tokio::test]
async fn every_response_carries_the_security_headers() {
    let app = spawn_app().await;

    for path in ["/health", "/nonexistent"] {
        let response = app.get(path).await;
        let headers = response.headers();

        let csp = headers
            .get("content-security-policy")
            .unwrap_or_else(|| panic!("No CSP header on {path}"))
            .to_str()
            .unwrap();
        assert!(csp.contains("default-src 'self'"));
        assert!(csp.contains("https://fonts.googleapis.com"));

        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    }
}

#[tokio::test]
async fn a_rate_limited_response_still_carries_the_security_headers() {
    let app = spawn_app_with(|config| {
        config.rate_limit.max_requests = 1;
    })
    .await;

    assert_eq!(200, app.get("/health").await.status().as_u16());

    let response = app
        .api_client
        .get(format!("{}/health", app.address))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(429, response.status().as_u16());
    let headers = response.headers();
    assert!(
        headers
            .get("content-security-policy")
            .expect("No CSP header on the 429 response")
            .to_str()
            .unwrap()
            .contains("default-src 'self'")
    );
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("No CORS header on the 429 response")
            .to_str()
            .unwrap(),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn an_allowed_origin_is_echoed_back() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(format!("{}/health", app.address))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("No CORS header for an allowed origin.")
            .to_str()
            .unwrap(),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn a_disallowed_origin_gets_no_cors_header() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(format!("{}/health", app.address))
        .header("Origin", "https://evil.example")
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}
