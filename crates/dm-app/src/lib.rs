//! Domani application layer
//!
//! Use cases and tutorial orchestration on top of `dm-core` ports.

pub mod app_paths;
pub mod usecases;

pub use app_paths::AppPaths;
