use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{HttpResponse, web};

use crate::configuration::RateLimitSettings;
use crate::routes::ApiResponse;

struct Window {
    started_at: Instant,
    count: u32,
}

/// Fixed-window request counter, keyed by client address. Shared across
/// every route; injected as app state instead of living in a global.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(settings: &RateLimitSettings) -> Self {
        Self {
            max_requests: settings.max_requests,
            window: settings.window(),
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn try_acquire(&self, client: &str) -> bool {
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");
        let now = Instant::now();

        // One-off clients would otherwise pile up for the lifetime of the
        // process; anything whose window has lapsed carries no state worth
        // keeping.
        windows.retain(|_, window| now.duration_since(window.started_at) < self.window);

        let window = windows.entry(client.to_owned()).or_insert(Window {
            started_at: now,
            count: 0,
        });

        if now.duration_since(window.started_at) >= self.window {
            window.started_at = now;
            window.count = 0;
        }

        if window.count < self.max_requests {
            window.count += 1;
            true
        } else {
            false
        }
    }
}

pub async fn enforce_rate_limit(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, actix_web::Error> {
    if let Some(limiter) = req.app_data::<web::Data<RateLimiter>>().cloned() {
        let client = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_owned();

        if !limiter.try_acquire(&client) {
            tracing::warn!(%client, "Rate limit exceeded");
            let response = HttpResponse::TooManyRequests().json(ApiResponse::failure(
                "Too many requests from this IP, please try again later.",
            ));
            return Ok(req.into_response(response).map_into_boxed_body());
        }
    }

    next.call(req)
        .await
        .map(ServiceResponse::map_into_boxed_body)
}
