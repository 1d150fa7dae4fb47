use actix_web::HttpResponse;

use super::helpers::ApiResponse;

/// Terminal handler for any method/path no route claims.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::failure("Endpoint not found."))
}
