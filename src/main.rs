use std::env;
use std::error::Error;

use salary_inflation::api::{AppState, create_router};
use salary_inflation::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/cpi_u";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config_dir =
        env::var("SALARY_INFLATION_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        env::var("SALARY_INFLATION_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        series_id = %config.resolver().series_id,
        cache_path = %config.resolver().cache_path.display(),
        "Loaded configuration"
    );

    let router = create_router(AppState::from_config(&config));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
