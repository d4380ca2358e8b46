//! Entry point for the `quota-gateway` HTTP server.

use quota_gateway::{
    error::GatewayError,
    routes::{create_router, AppState},
    settings::GatewaySettings,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "quota-gateway stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), GatewayError> {
    let settings = GatewaySettings::from_env()?;
    let app = create_router(AppState::from_settings(&settings)?);

    let listener = match tokio::net::TcpListener::bind(&settings.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %settings.listen_addr, error = %e, "failed to bind");
            return Err(e.into());
        }
    };

    info!(
        addr = %settings.listen_addr,
        siliconflow = %settings.siliconflow.upstream_url,
        balance = %settings.balance.upstream_url,
        balance_cors = %settings.balance.cors,
        "quota-gateway listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
