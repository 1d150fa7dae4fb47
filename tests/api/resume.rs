use crate::helpers::{spawn_app, spawn_app_with};

#[tokio::test]
async fn resume_downloads_the_file_under_the_fixed_filename() {
    let app = spawn_app().await;

    let response = app.get("/resume").await;

    assert_eq!(200, response.status().as_u16());
    let disposition = response
        .headers()
        .get("content-disposition")
        .expect("No Content-Disposition header.")
        .to_str()
        .unwrap()
        .to_owned();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("Jane_Doe_Resume.pdf"));

    let expected = std::fs::read("static/resume_latest.pdf").unwrap();
    let body = response.bytes().await.unwrap();
    assert_eq!(expected, body.to_vec());
}

#[tokio::test]
async fn resume_returns_a_structured_404_when_the_file_is_missing() {
    let app = spawn_app_with(|config| {
        config.static_files.resume_file = "static/definitely-not-there.pdf".into();
    })
    .await;

    let response = app.get("/resume").await;

    assert_eq!(404, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("not found"));
}
