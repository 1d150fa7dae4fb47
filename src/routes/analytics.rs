use actix_web::{HttpResponse, web};

#[derive(serde::Deserialize)]
pub struct AnalyticsEvent {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Acknowledges the event without storing it. Forwarding to an external
/// analytics provider is out of scope; the log line is all that remains.
#[tracing::instrument(name = "Recording an analytics event", skip(event), fields(event_name = %event.event))]
pub async fn record_event(event: web::Json<AnalyticsEvent>) -> HttpResponse {
    tracing::info!(payload = %event.data, "Analytics event received");
    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}
