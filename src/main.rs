use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use folio::core::config::{self, CliOverrides, ResolvedConfig};
use folio::core::profile::Profile;
use folio::core::state::App;
use folio::relay::HttpRelay;

#[derive(Parser)]
#[command(name = "folio", about = "A developer portfolio in your terminal")]
struct Args {
    /// Mail relay URL the contact form posts to
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Portfolio profile TOML (defaults to the bundled sample)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Config file to use instead of ~/.folio/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Log to `~/.folio/folio.log`; the terminal belongs to the UI.
fn init_logging() {
    let Some(dir) = config::folio_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(dir.join("folio.log")) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}

fn build_app(config: &ResolvedConfig) -> anyhow::Result<App> {
    let relay = HttpRelay::new(config.endpoint.clone(), config.request_timeout)
        .context("failed to set up the mail relay")?;
    log::info!(
        "Relay endpoint: {} (timeout {:?})",
        relay.endpoint(),
        config.request_timeout
    );

    let profile = match &config.profile_path {
        Some(path) => Profile::load(path)
            .with_context(|| format!("failed to load profile {}", path.display()))?,
        None => Profile::bundled().context("bundled profile is invalid")?,
    };
    log::info!("Profile: {} ({} skills)", profile.name, profile.skills.len());

    Ok(App::new(Arc::new(relay), profile))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();
    init_logging();

    log::info!("Folio starting up");

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .context("failed to load configuration")?;

    let cli = CliOverrides {
        endpoint: args.endpoint,
        profile: args.profile,
    };
    let resolved = config::resolve(&file_config, &cli).context("invalid configuration")?;

    let app = build_app(&resolved)?;
    folio::tui::run(app).context("terminal UI failed")?;

    log::info!("Folio shut down");
    Ok(())
}
