use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use graphical_interface::MapConfig;
use logger::Logger;
use tracing::info;

/// Shows geotagged posts on a map, with a sidebar to filter them by member,
/// country and city.
#[derive(Debug, Parser)]
#[command(name = "member-map", version, about)]
struct Args {
    /// JSON file with the list of locations
    #[arg(long, env = "MEMBER_MAP_DATA", default_value = "locations.json")]
    data: PathBuf,

    /// Directory where member_map.log is written
    #[arg(long, env = "MEMBER_MAP_LOG_DIR", default_value = "logs")]
    log_dir: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "MEMBER_MAP_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Window title
    #[arg(long, default_value = "Member Map")]
    title: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let logger = Logger::new(&args.log_dir, &args.log_level)
        .with_context(|| format!("could not set up logging in {}", args.log_dir.display()))?;
    info!(
        data = %args.data.display(),
        log_file = %logger.log_file().display(),
        "starting member map"
    );

    graphical_interface::run(MapConfig {
        data_path: args.data,
        title: args.title,
    })
    .map_err(|e| anyhow::anyhow!("the map window failed: {e}"))?;

    info!("member map closed");
    Ok(())
}
