// src/app/mod.rs
//
// Process-level concerns: where the bundle lives and how startup is wired.

pub mod bootstrap;
pub mod config;

pub use bootstrap::{bootstrap, build_state};
pub use config::{resolve_data_dir, BundleConfig, DATA_DIR_ENV};
