//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - ✅ Create infra implementations (key-value store, task history, clock)
//! - ✅ Inject them into the use cases through port traits
//!
//! ## Prohibited
//!
//! ❌ **No business logic**
//! ❌ **No configuration validation** (policy lives in the app layer)
//!
//! > **This is the only place allowed to depend on dm-infra and dm-app simultaneously.**

use std::path::PathBuf;
use std::sync::Arc;

use dm_app::usecases::tutorial::{
    TutorialAdvancement, TutorialController, TutorialLifecycleController, TutorialTargetRegistry,
    TutorialTimings,
};
use dm_app::usecases::{GetAnalyticsSummary, SummarizePlan};
use dm_app::AppPaths;
use dm_core::app_dirs::AppDirs;
use dm_core::config::AppConfig;
use dm_core::ports::{
    AppDirsError, AppDirsPort, ClockPort, KeyValueStorePort, TaskHistoryPort, TutorialPrefsPort,
};
use dm_infra::{
    DirsAppDirsAdapter, FileKeyValueStore, JsonTaskHistoryRepository, KvTutorialPrefsRepository,
    SystemClock,
};

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("App directory resolution failed: {0}")]
    AppDirs(#[from] AppDirsError),
}

/// Fully assembled application services.
pub struct AppServices {
    pub paths: AppPaths,
    pub tutorial: Arc<TutorialController>,
    pub advancement: TutorialAdvancement,
    pub lifecycle: Arc<TutorialLifecycleController>,
    pub targets: Arc<TutorialTargetRegistry>,
    pub plan: SummarizePlan,
    pub analytics: GetAnalyticsSummary,
}

/// Resolve the data root: the configured directory, else the platform default.
pub fn resolve_app_dirs(config: &AppConfig) -> WiringResult<AppDirs> {
    if !config.data_dir.as_os_str().is_empty() {
        return Ok(AppDirs {
            app_data_root: config.data_dir.clone(),
        });
    }
    Ok(DirsAppDirsAdapter::new().get_app_dirs()?)
}

/// Log directory under the resolved data root.
pub fn resolve_logs_dir(config: &AppConfig) -> WiringResult<PathBuf> {
    Ok(AppPaths::from_app_dirs(&resolve_app_dirs(config)?).logs_dir)
}

pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppServices> {
    let dirs = resolve_app_dirs(config)?;
    let paths = AppPaths::from_app_dirs(&dirs).with_tasks_export_path(&dirs, &config.task_export_path);

    let store: Arc<dyn KeyValueStorePort> = Arc::new(FileKeyValueStore::new(paths.store_path.clone()));
    let prefs: Arc<dyn TutorialPrefsPort> = Arc::new(KvTutorialPrefsRepository::new(store));
    let history: Arc<dyn TaskHistoryPort> =
        Arc::new(JsonTaskHistoryRepository::new(paths.tasks_export_path.clone()));
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    let tutorial = Arc::new(TutorialController::new(prefs));
    let timings = TutorialTimings::from_config(&config.tutorial);
    // Headless: no scroll container to drive.
    let targets = Arc::new(TutorialTargetRegistry::new(tutorial.subscribe(), timings, None));

    Ok(AppServices {
        paths,
        advancement: TutorialAdvancement::new(Arc::clone(&tutorial)),
        lifecycle: Arc::new(TutorialLifecycleController::new(Arc::clone(&tutorial))),
        targets,
        plan: SummarizePlan::new(Arc::clone(&history), Arc::clone(&clock)),
        analytics: GetAnalyticsSummary::new(history, clock, config.lookback_days),
        tutorial,
    })
}
