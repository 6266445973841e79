//! `cdocs serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use cdocs_config::{CliSettings, Config};
use cdocs_server::{ServerConfig, run_server};
use clap::Args;

use super::site_from_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover cdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content root directory holding `basics/` and `advanced/` (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            content_dir: self.content_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Basics directory: {}",
            config.content_resolved.basics_dir.display()
        ));
        output.info(&format!(
            "Advanced directory: {}",
            config.content_resolved.advanced_dir.display()
        ));
        if config.highlight.enabled {
            output.info(&format!("Highlighting: {}", config.highlight.cdn_url));
        } else {
            output.info("Highlighting: disabled");
        }

        let site = Arc::new(site_from_config(&config));
        let server_config = ServerConfig {
            host: config.server.host.clone(),
            port: config.server.port,
            version: version.to_owned(),
        };
        run_server(server_config, site).await?;

        Ok(())
    }
}
