//! Quick backend connectivity check: probes /health and /features and
//! prints what the prediction service reports. Useful when the desktop
//! app only says the backend is unreachable.

use anyhow::Result;
use stress_monitor_lib::config::BackendConfig;
use stress_monitor_lib::prediction::PredictionClient;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = BackendConfig::load()?;
    println!("Checking prediction backend at {}", config.base_url);
    let client = PredictionClient::new(config.base_url.clone());

    match client.check_health().await {
        Ok(health) => {
            println!(
                "Health: status={} model_loaded={:?} features_count={:?}",
                health.status, health.model_loaded, health.features_count
            );
            if !health.is_healthy() {
                println!("Backend responded but does not report itself healthy.");
            }
        }
        Err(e) => {
            println!("Health check failed: {}", e.user_message());
            return Ok(());
        }
    }

    match client.fetch_features().await {
        Ok(features) => {
            println!("Backend expects {} feature columns:", features.features.len());
            for name in &features.features {
                match features.feature_descriptions.get(name) {
                    Some(description) => println!("  {} - {}", name, description),
                    None => println!("  {}", name),
                }
            }
        }
        Err(e) => println!("Feature listing failed: {}", e.user_message()),
    }

    Ok(())
}
