//! Policy Sim - Main Entry Point
//!
//! Desktop simulator for AI policy trade-offs

use policy_sim::app::application::run_app;
use policy_sim::logging;
use policy_sim::utils::config_store::load_app_config;

fn main() {
    let (config, source) = load_app_config();

    // Initialize tracing for logging
    let _guard = logging::init(&config.logging);
    source.log();

    tracing::info!("Starting Policy Sim...");

    // Run the GPUI application
    run_app(config, source);
}
