pub mod app_dirs;
pub mod kv;
pub mod task_history;
pub mod time;
pub mod tutorial_prefs;

pub use app_dirs::DirsAppDirsAdapter;
pub use kv::FileKeyValueStore;
pub use task_history::JsonTaskHistoryRepository;
pub use time::SystemClock;
pub use tutorial_prefs::KvTutorialPrefsRepository;
