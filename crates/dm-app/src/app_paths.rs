use std::path::{Path, PathBuf};

use dm_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub store_path: PathBuf,
    pub config_path: PathBuf,
    pub tasks_export_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            store_path: dirs.app_data_root.join("store.json"),
            config_path: dirs.app_data_root.join("config.toml"),
            tasks_export_path: dirs.app_data_root.join("tasks.json"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }

    /// Overlay the export path from config. Empty means unset; relative
    /// paths resolve against the data root.
    pub fn with_tasks_export_path(mut self, dirs: &AppDirs, path: &Path) -> Self {
        if path.as_os_str().is_empty() {
            return self;
        }
        self.tasks_export_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            dirs.app_data_root.join(path)
        };
        self
    }
}
