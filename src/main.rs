use std::env;
use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use payroll_engine::api::{create_router, AppState};
use payroll_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/payroll";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("payroll_engine=info"));
    fmt().with_env_filter(filter).init();

    let config_dir = env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        company = %config.company().name,
        employees = config.employees().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::from_config(&config));
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(bind_addr = %bind_addr, "Payroll engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
