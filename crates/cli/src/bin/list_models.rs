use anyhow::Result;
use catalog::run_catalog_export;
use catalog_core::config::Config;
use catalog_core::{logging, timing};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let config = Config::load_from_env()?;

    let path = timing::framed("list_models", run_catalog_export(&config)).await?;
    info!("active model catalog written to {}", path.display());
    Ok(())
}
