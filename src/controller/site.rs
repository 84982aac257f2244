use std::time::Instant;

use actix_web::dev::HttpServiceFactory;
use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

use chrono::Utc;

use serde::Serialize;

use crate::error::{RestError, RestResult};
use crate::settings::Settings;

/// Marks when the server came up, for uptime reporting
#[derive(Debug, Clone, Copy)]
pub struct ServerStart(Instant);

impl ServerStart {
    pub fn now() -> Self {
        Self(Instant::now())
    }

    fn uptime_seconds(&self) -> u64 {
        self.0.elapsed().as_secs()
    }
}

/// Landing page
#[tracing::instrument(name = "Serve landing page", skip(settings))]
#[get("/")]
async fn index(settings: web::Data<Settings>) -> RestResult<impl Responder> {
    let path = settings.app.static_dir().join("index.html");

    let html = tokio::fs::read_to_string(&path).await.map_err(|err| {
        tracing::error!("Failed to read landing page {}: {}", path.display(), err);
        RestError::internal(
            format!("Failed to serve landing page: {}", err),
            settings.app.expose_errors(),
        )
    })?;

    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

#[derive(Debug, Serialize)]
struct HealthCheck<'a> {
    status: &'static str,
    timestamp: String,
    uptime: u64,
    environment: &'a str,
    version: &'static str,
    pid: u32,
}

/// Health check endpoint
#[tracing::instrument(name = "Health check", skip(settings, start))]
#[get("/health")]
async fn health(settings: web::Data<Settings>, start: web::Data<ServerStart>) -> impl Responder {
    HttpResponse::Ok().json(HealthCheck {
        status: "OK",
        timestamp: Utc::now().to_rfc3339(),
        uptime: start.uptime_seconds(),
        environment: settings.app.environment(),
        version: env!("CARGO_PKG_VERSION"),
        pid: std::process::id(),
    })
}

/// Sitemap for crawlers, built against the requesting host
#[tracing::instrument(name = "Serve sitemap", skip(req))]
#[get("/sitemap.xml")]
async fn sitemap(req: HttpRequest) -> impl Responder {
    let conn = req.connection_info();
    let base = format!("{}://{}", conn.scheme(), conn.host());
    let today = Utc::now().format("%Y-%m-%d");

    let entries = [
        ("", "weekly", "1.0"),
        ("#about", "monthly", "0.8"),
        ("#services", "monthly", "0.9"),
        ("#projects", "weekly", "0.8"),
    ];

    let urls: String = entries
        .iter()
        .map(|(fragment, changefreq, priority)| {
            format!(
                "  <url>\n    <loc>{base}/{fragment}</loc>\n    <lastmod>{today}</lastmod>\n    <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n"
            )
        })
        .collect();

    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}</urlset>"
    );

    HttpResponse::Ok().content_type("text/xml").body(body)
}

/// Robots policy: crawl the site, stay out of the API
#[tracing::instrument(name = "Serve robots.txt", skip(req))]
#[get("/robots.txt")]
async fn robots(req: HttpRequest) -> impl Responder {
    let conn = req.connection_info();
    let base = format!("{}://{}", conn.scheme(), conn.host());

    let body = format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\nDisallow: /health\n\nSitemap: {base}/sitemap.xml\n"
    );

    HttpResponse::Ok().content_type(ContentType::plaintext()).body(body)
}

#[derive(Debug, Serialize)]
struct NotFoundBody {
    success: bool,
    error: &'static str,
    message: &'static str,
    code: &'static str,
}

/// Catch-all for unmatched routes
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(NotFoundBody {
        success: false,
        error: "Page not found",
        message: "The requested resource does not exist",
        code: "NOT_FOUND",
    })
}

/// Site-level endpoints: landing page, health, and crawler metadata
pub fn scope() -> impl HttpServiceFactory {
    (index, health, sitemap, robots)
}
