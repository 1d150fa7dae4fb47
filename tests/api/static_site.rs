use crate::helpers::spawn_app;

#[tokio::test]
async fn the_landing_route_serves_the_index_page() {
    let app = spawn_app().await;

    let response = app.get("/").await;

    assert_eq!(200, response.status().as_u16());
    assert!(
        response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let body = response.text().await.unwrap();
    assert!(body.contains("Jane Doe"));
}

#[tokio::test]
async fn assets_are_served_from_the_static_root() {
    let app = spawn_app().await;

    let response = app.get("/assets/style.css").await;

    assert_eq!(200, response.status().as_u16());
    let body = response.text().await.unwrap();
    assert!(body.contains("font-family"));
}
