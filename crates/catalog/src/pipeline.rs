use crate::client::build_catalog_client;
use crate::fetch::{fetch_foundation_models, CatalogQuery};
use crate::filter::active_text_on_demand;
use crate::normalize::normalize;
use crate::sink::write_csv;
use anyhow::Result;
use catalog_core::config::Config;
use catalog_core::StageTimer;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runs the catalog export end to end: client factory, one fetch, flatten,
/// filter, CSV sink. A fault in any stage terminates the run before the sink
/// executes, so a failed fetch never leaves an output file behind.
pub async fn run_catalog_export(config: &Config) -> Result<PathBuf> {
    let catalog_config = config.catalog.with_env_overrides();

    let client = {
        let _timer = StageTimer::start("create_client");
        build_catalog_client(&catalog_config).await?
    };

    let summaries = {
        let _timer = StageTimer::start("get_foundational_models");
        fetch_foundation_models(&client, &CatalogQuery::default()).await?
    };

    let table = {
        let _timer = StageTimer::start("clean_table");
        info!("flattening the catalog response");
        normalize(&summaries)
    };

    let filtered = {
        let _timer = StageTimer::start("query_table");
        info!("filtering for active models with text output and on-demand inference");
        table.filter(&active_text_on_demand())
    };
    info!(
        "{} of {} flattened rows matched the filter",
        filtered.len(),
        table.len()
    );

    let _timer = StageTimer::start("write_csv");
    write_csv(&filtered, Path::new(&catalog_config.output_path))
}
