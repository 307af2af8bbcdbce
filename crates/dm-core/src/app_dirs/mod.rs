use std::path::PathBuf;

/// Root directories the application may write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}
