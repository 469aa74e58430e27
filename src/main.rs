use anyhow::Result;
use casualty_viz::{config::Config, report};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) resolve config ───────────────────────────────────────────
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let cfg = Config::resolve(config_path.as_deref())?;
    info!(output_dir = %cfg.output_dir.display(), "startup");

    // ─── 3) run the four analyses ────────────────────────────────────
    let report = report::run(&cfg)?;
    for chart in &report.charts {
        info!(path = %chart.display(), "wrote chart");
    }

    info!("all done");
    Ok(())
}
