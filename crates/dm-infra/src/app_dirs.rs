//! Platform data root for Domani.
//!
//! `DOMANI_PROFILE` selects a side-by-side data root (`domani-<profile>`) so a
//! second local instance never shares the tutorial store with the first.
//! Only ASCII letters, digits, `-` and `_` survive in the profile name; the
//! result is always a single path component under the platform directory.

use std::path::PathBuf;

use dm_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "domani";

pub const PROFILE_ENV: &str = "DOMANI_PROFILE";

fn sanitize_profile(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
    profile: Option<String>,
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DirsAppDirsAdapter {
    /// Platform data-local directory, profile taken from `DOMANI_PROFILE`.
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
            profile: std::env::var(PROFILE_ENV).ok(),
        }
    }

    /// Use `base` instead of the platform data-local directory.
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
            ..Self::new()
        }
    }

    pub fn with_profile(mut self, profile: Option<&str>) -> Self {
        self.profile = profile.map(str::to_string);
        self
    }

    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }

    /// `domani`, or `domani-<profile>` when a usable profile is set.
    pub fn app_dir_name(&self) -> String {
        match self.profile.as_deref().and_then(sanitize_profile) {
            Some(profile) => format!("{APP_DIR_NAME}-{profile}"),
            None => APP_DIR_NAME.to_string(),
        }
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(self.app_dir_name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileKeyValueStore;
    use dm_core::ports::KeyValueStorePort;
    use serde_json::json;
    use tempfile::TempDir;

    fn adapter(base: &std::path::Path, profile: Option<&str>) -> DirsAppDirsAdapter {
        DirsAppDirsAdapter::with_base_data_local_dir(base.to_path_buf()).with_profile(profile)
    }

    #[test]
    fn default_root_is_domani() {
        let dirs = adapter(std::path::Path::new("/tmp"), None).get_app_dirs().unwrap();

        assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/domani"));
    }

    #[test]
    fn blank_profile_falls_back_to_default_root() {
        for profile in ["", "   ", "///"] {
            let dirs = adapter(std::path::Path::new("/tmp"), Some(profile))
                .get_app_dirs()
                .unwrap();
            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/domani"), "{profile:?}");
        }
    }

    #[test]
    fn profile_cannot_escape_the_data_root() {
        let dirs = adapter(std::path::Path::new("/tmp"), Some("../../etc"))
            .get_app_dirs()
            .unwrap();

        assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/domani-etc"));
        assert_eq!(dirs.app_data_root.parent(), Some(std::path::Path::new("/tmp")));
    }

    #[test]
    fn profile_keeps_dashes_and_underscores() {
        let adapter = adapter(std::path::Path::new("/tmp"), Some(" qa_run-2 "));

        assert_eq!(adapter.app_dir_name(), "domani-qa_run-2");
    }

    #[tokio::test]
    async fn profiles_keep_separate_tutorial_stores() {
        let temp_dir = TempDir::new().unwrap();
        let main_root = adapter(temp_dir.path(), None).get_app_dirs().unwrap();
        let qa_root = adapter(temp_dir.path(), Some("qa")).get_app_dirs().unwrap();

        FileKeyValueStore::with_defaults(&main_root.app_data_root)
            .set("domani.tutorial", json!({"has_completed_tutorial": true}))
            .await
            .unwrap();

        let qa_store = FileKeyValueStore::with_defaults(&qa_root.app_data_root);
        assert_eq!(qa_store.get("domani.tutorial").await.unwrap(), None);
    }
}
