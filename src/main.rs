mod output; // JSON rendering of a generated model
mod settings; // defaults, config/default.toml and LEDGRID_* overrides

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{self, EnvFilter};

fn main() -> anyhow::Result<()> {
    // stdout carries the model, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let settings = settings::load_settings().context("Failed to load configuration")?;
    let layout = settings
        .layout
        .to_layout()
        .with_context(|| format!("Invalid layout configuration for preset {:?}", settings.layout.preset))?;

    info!(
        width = layout.width(),
        height = layout.height(),
        sub_grids = layout.sub_grids(),
        scale = layout.scale(),
        "Generating model"
    );
    let model = layout.model();
    if let Some(bounds) = model.bounds() {
        debug!(%bounds, "Model extent");
    }

    let stdout = std::io::stdout();
    output::write_model(&mut stdout.lock(), &model, settings.output.pretty)?;
    info!(points = model.len(), "Model written");

    Ok(())
}
