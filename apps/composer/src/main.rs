mod config;
mod errors;
mod layout;
mod models;
mod render;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::{compose_document, FsIconResolver};
use crate::render::{render_to_file, JsonBackend};

fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume composer v{}", env!("CARGO_PKG_VERSION"));

    let raw = std::fs::read_to_string(&config.input_path)
        .with_context(|| format!("Failed to read '{}'", config.input_path.display()))?;
    let (resume, presentation) = models::parse_input(&raw)
        .with_context(|| format!("Rejected input '{}'", config.input_path.display()))?;
    info!(
        "Loaded resume for '{}' ({:?})",
        resume.full_name, presentation.text_direction
    );

    let icons = FsIconResolver::new(&config.icon_dir);
    let page = compose_document(&resume, &presentation, &icons);

    let backend = JsonBackend {
        pretty: config.pretty_output,
    };
    render_to_file(&backend, &page, &config.output_path)
        .with_context(|| format!("Failed to write '{}'", config.output_path.display()))?;

    Ok(())
}
