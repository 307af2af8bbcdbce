use std::path::PathBuf;

use dm_app::AppPaths;
use dm_core::ports::AppDirsPort;
use dm_infra::DirsAppDirsAdapter;
use domani::bootstrap;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let defaults = AppPaths::from_app_dirs(&DirsAppDirsAdapter::new().get_app_dirs()?);

    // First argument overrides the config location.
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or(defaults.config_path);
    let config_found = config_path.exists();
    let config = bootstrap::load_config(&config_path)?;

    // Logs live under the configured data root.
    let logs_dir = bootstrap::resolve_logs_dir(&config)?;
    bootstrap::tracing::init_tracing_subscriber(&logs_dir)?;
    if config_found {
        info!(path = %config_path.display(), "Config loaded");
    } else {
        warn!(path = %config_path.display(), "Config file not found, using empty config");
    }

    bootstrap::run_app(config).await
}
