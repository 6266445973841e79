//! `cdocs build` command implementation.

use std::path::PathBuf;

use cdocs_config::{CliSettings, Config};
use cdocs_site::build_site;
use clap::Args;

use super::site_from_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover cdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content root directory holding `basics/` and `advanced/` (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            output_dir: self.output_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let output_dir = &config.site_resolved.output_dir;

        output.info(&format!(
            "Content: {}",
            config.content_resolved.root.display()
        ));
        output.info(&format!("Output: {}", output_dir.display()));

        let site = site_from_config(&config);
        let report = build_site(&site, output_dir)?;

        output.success(&format!(
            "Built {} pages to {}",
            report.pages,
            report.out_dir.display()
        ));
        Ok(())
    }
}
