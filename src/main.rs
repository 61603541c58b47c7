use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use botx_sim::config::SimConfig;
use botx_sim::sim::SimController;
use botx_sim::sinks::ConsoleSink;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("botx-sim starting up...");

    let config = SimConfig::from_env();
    let sink = Arc::new(ConsoleSink);
    let controller = SimController::new(config, sink.clone(), sink.clone(), sink);

    controller.prime_display().await;
    controller.prime_charts().await;
    controller.start_simulation().await?;

    // Demo scenario: raise an emergency shortly after startup so a bare run
    // shows the full alert path.
    let demo = controller.clone();
    let auto_emergency = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(10)).await;
        if demo.is_demo_mode().await && !demo.simulate_emergency().await {
            warn!("auto emergency skipped; already in emergency");
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("shutting down");

    auto_emergency.abort();
    controller.destroy().await;
    Ok(())
}
