//! Configuration for gh-user-lookup
//!
//! This crate provides:
//! - Configuration file discovery (CWD first, then home directory)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;

pub use app_config::{AppConfig, DEFAULT_API_BASE_URL};
pub use config_file::{candidate_paths, load_config_file, CONFIG_FILE};
