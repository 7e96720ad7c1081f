// src/app/config.rs
//
// Where the bundled catalog documents live.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the bundle directory
pub const DATA_DIR_ENV: &str = "MOVIESHELF_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "data";

/// Pick the bundle directory.
///
/// Order: the `MOVIESHELF_DATA_DIR` value, then `./data` if it exists, then
/// `{APP_DATA}/movieshelf`. Falls back to `./data` when the platform has no
/// data directory.
pub fn resolve_data_dir(env_override: Option<OsString>, default_exists: bool) -> PathBuf {
    match env_override {
        Some(dir) => PathBuf::from(dir),
        None if default_exists => PathBuf::from(DEFAULT_DATA_DIR),
        None => dirs::data_dir()
            .map(|dir| dir.join("movieshelf"))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
    }
}

/// Location of the bundled catalog and seed documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    /// Directory holding both documents
    pub data_dir: PathBuf,

    /// File name of the full catalog
    pub catalog_file: String,

    /// File name of the first-launch seed
    pub seed_file: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_file: "MovieData.json".to_string(),
            seed_file: "MovieSeed.json".to_string(),
        }
    }
}

impl BundleConfig {
    /// Defaults with the data directory taken from the environment,
    /// see [`resolve_data_dir`].
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let data_dir = resolve_data_dir(
            std::env::var_os(DATA_DIR_ENV),
            defaults.data_dir.is_dir(),
        );

        Self {
            data_dir,
            ..defaults
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    pub fn seed_path(&self) -> PathBuf {
        self.data_dir.join(&self.seed_file)
    }
}
