//! Serve command implementation
//!
//! Runs the HTTP API until a shutdown signal arrives.

use super::{connect_store, exit_code, load_or_report};
use crate::api::{app_router, serve, AppState};
use clap::Args;
use tokio::sync::watch;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the configured listen address
    #[arg(long, value_name = "ADDR")]
    pub listen: Option<String>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let mut config = match load_or_report(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        if let Some(listen) = &self.listen {
            tracing::info!(listen_addr = %listen, "Overriding listen address from CLI");
            config.server.listen_addr = listen.clone();
        }

        let store = match connect_store(&config).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let state = AppState::new(store, &config.server);
        let router = app_router(state, &config.server);

        println!("🚀 Leadbook listening on {}", config.server.listen_addr);

        if let Err(e) = serve(router, &config.server.listen_addr, shutdown_signal).await {
            tracing::error!(error = %e, "HTTP server failed");
            eprintln!("❌ Server error: {e}");
            return Ok(exit_code::FATAL);
        }

        Ok(exit_code::SUCCESS)
    }
}
