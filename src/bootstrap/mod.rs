pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use run::run_app;
pub use wiring::{resolve_logs_dir, wire_dependencies, AppServices};
