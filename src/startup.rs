use std::net::TcpListener;
use std::time::Instant;

use actix_files::Files;
use actix_web::dev::Server;
use actix_web::middleware::from_fn;
use actix_web::{App, HttpResponse, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::configuration::{CorsSettings, RateLimitSettings, Settings, StaticFilesSettings};
use crate::email_client::EmailClient;
use crate::middleware::{RateLimiter, build_cors, enforce_rate_limit, security_headers};
use crate::routes::{
    ApiResponse, download_resume, health_check, home, not_found, record_event, submit_contact,
};

pub struct Application {
    port: u16,
    server: Server,
}

/// Process start time, used by the health check to report uptime.
pub struct ApplicationStart(pub Instant);

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let email_client = config.email_client.client();

        // Misconfigured mail credentials should be loud in the logs but
        // must not keep the rest of the site from serving.
        if let Err(e) = email_client.verify().await {
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Mail transport self-check failed; contact submissions will not be delivered"
            );
        }

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            email_client,
            config.static_files,
            config.rate_limit,
            config.cors,
        )?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    static_files: StaticFilesSettings,
    rate_limit: RateLimitSettings,
    cors: CorsSettings,
) -> Result<Server, anyhow::Error> {
    let email_client = web::Data::new(email_client);
    let rate_limiter = web::Data::new(RateLimiter::new(&rate_limit));
    let started_at = web::Data::new(ApplicationStart(Instant::now()));
    let static_files = web::Data::new(static_files);

    let server = HttpServer::new(move || {
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ApiResponse::failure("Invalid request body.")),
            )
            .into()
        });

        // Registered inside-out: the rate limiter sits innermost so its
        // rejections still pass back through the CORS and security-header
        // layers on the way to the client.
        App::new()
            .wrap(from_fn(enforce_rate_limit))
            .wrap(build_cors(&cors))
            .wrap(security_headers())
            .wrap(TracingLogger::default())
            // Unmatched methods on known paths share the endpoint-not-found
            // payload instead of actix's bare 405.
            .service(
                web::resource("/health")
                    .route(web::get().to(health_check))
                    .default_service(web::route().to(not_found)),
            )
            .service(
                web::resource("/contact")
                    .route(web::post().to(submit_contact))
                    .default_service(web::route().to(not_found)),
            )
            .service(
                web::resource("/analytics")
                    .route(web::post().to(record_event))
                    .default_service(web::route().to(not_found)),
            )
            .service(
                web::resource("/resume")
                    .route(web::get().to(download_resume))
                    .default_service(web::route().to(not_found)),
            )
            .service(
                web::resource("/")
                    .route(web::get().to(home))
                    .default_service(web::route().to(not_found)),
            )
            .service(Files::new("/assets", static_files.root.clone()))
            .default_service(web::route().to(not_found))
            .app_data(json_config)
            .app_data(email_client.clone())
            .app_data(rate_limiter.clone())
            .app_data(started_at.clone())
            .app_data(static_files.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
