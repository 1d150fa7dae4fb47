use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::startup::ApplicationStart;

#[derive(serde::Serialize)]
pub struct HealthStatus {
    status: &'static str,
    timestamp: String,
    uptime: f64,
}

/// Liveness probe. Reports regardless of the state of any other subsystem.
pub async fn health_check(started_at: web::Data<ApplicationStart>) -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "OK",
        timestamp: Utc::now().to_rfc3339(),
        uptime: started_at.0.elapsed().as_secs_f64(),
    })
}
