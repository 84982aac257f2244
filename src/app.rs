use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};

use tracing_actix_web::TracingLogger;

use crate::controller::services::ServiceCatalog;
use crate::controller::site::ServerStart;
use crate::controller::{contact, services, site};
use crate::error::RestError;
use crate::notify::SubmissionNotifier;
use crate::rate_limit::FixedWindowLimiter;
use crate::settings::Settings;

// Matches the body-parser cap the site has always shipped with
const JSON_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Extractor configuration for JSON bodies: size cap, plus rendering of
/// parse failures as the standard error envelope. The raw serde detail is
/// only echoed back outside prod.
fn json_config(expose_errors: bool) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(move |err, _req| {
            let message = if expose_errors {
                err.to_string()
            } else {
                "Invalid request body".to_string()
            };
            RestError::validation(message).into()
        })
}

/// Run the application on a specified TCP listener
pub fn run(
    listener: TcpListener,
    settings: Settings,
    notifier: Arc<dyn SubmissionNotifier>,
) -> anyhow::Result<Server> {
    // Process-wide state, constructed once and shared across workers
    let limiter = web::Data::new(FixedWindowLimiter::new(
        settings.contact.rate_limit_quota(),
        settings.contact.rate_limit_window(),
    ));
    let catalog = web::Data::new(ServiceCatalog::standard());
    let start = web::Data::new(ServerStart::now());
    let notifier: web::Data<dyn SubmissionNotifier> = web::Data::from(notifier);
    let expose_errors = settings.app.expose_errors();
    let settings = web::Data::new(settings);

    // Start the server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config(expose_errors))
            .app_data(settings.clone())
            .app_data(limiter.clone())
            .app_data(catalog.clone())
            .app_data(start.clone())
            .app_data(notifier.clone())
            .service(site::scope())
            .service(contact::scope())
            .service(services::scope())
            .default_service(web::route().to(site::not_found))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
