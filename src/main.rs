use std::net::TcpListener;
use std::sync::Arc;

use anyhow::Context;

use agency_site::app;
use agency_site::notify::NoopNotifier;
use agency_site::settings::Settings;
use agency_site::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::create_subscriber("info", std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let settings = Settings::load().context("Failed to load settings")?;

    let listener = TcpListener::bind(settings.app.addr())?;
    tracing::info!(
        environment = settings.app.environment(),
        "Listening on {}",
        listener.local_addr()?
    );

    app::run(listener, settings, Arc::new(NoopNotifier))?
        .await
        .context("Failed to run app")
}
