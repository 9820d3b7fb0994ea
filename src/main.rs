use std::net::TcpListener;

use anyhow::Context as _;
use restaurant_api::config;
use restaurant_api::metrics::AppMetrics;
use restaurant_api::server::{self, Context};
use restaurant_api::{database, telemetry};

#[actix::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("Failed to load configuration")?;

    telemetry::init(&config.observability);

    ::tracing::info!(
        name = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        "Starting application"
    );

    let db = database::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    if config.database.run_migrations {
        database::migrate(&db)
            .await
            .context("Failed to apply migrations")?;
    }

    let metrics = AppMetrics::with_config(Some(&config));
    let context = Context::new(db, metrics).with_api(config.api.clone());

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;

    server::serve(context, listener, &config, true)?.await?;

    ::tracing::info!("Server stopped");

    Ok(())
}
