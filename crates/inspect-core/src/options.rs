//! Options shared by the inspection executables.
//!
//! Only the input locations are configurable. The scan limits
//! (group cap, sample length, character window) are constants owned by the
//! inspector crates.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{InspectError, Result};

/// SVG chart inspected when no path is given.
pub const DEFAULT_SVG_PATH: &str = "assets/odontograma.svg";

/// EPS chart scanned when no path is given.
pub const DEFAULT_EPS_PATH: &str = "assets/odontograma.eps";

/// Directory name under the user config dir.
pub const CONFIG_DIR_NAME: &str = "dental-chart-inspect";

/// Project-local config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".dental-chart-inspect.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectOptions {
    pub svg_path: PathBuf,
    pub eps_path: PathBuf,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            svg_path: PathBuf::from(DEFAULT_SVG_PATH),
            eps_path: PathBuf::from(DEFAULT_EPS_PATH),
        }
    }
}

/// Load config from the global and project-local TOML files.
/// The project-local file fully overrides the global one. Missing files are
/// silently ignored; unparsable ones are logged and skipped.
pub fn load_config() -> InspectOptions {
    let global = dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join("config.toml"));
    load_config_from(global.as_deref(), Path::new(LOCAL_CONFIG_FILE))
}

/// Same as [`load_config`] with explicit file locations.
pub fn load_config_from(global: Option<&Path>, local: &Path) -> InspectOptions {
    let mut opts = InspectOptions::default();

    for path in global.into_iter().chain(std::iter::once(local)) {
        match read_config_file(path) {
            Ok(Some(parsed)) => {
                log::debug!("Loaded config from {}", path.display());
                opts = parsed;
            }
            Ok(None) => {}
            Err(e) => log::warn!("Failed to load {}: {}", path.display(), e),
        }
    }

    opts
}

/// Read a single config file. Returns `Ok(None)` when the file does not exist.
pub fn read_config_file(path: &Path) -> Result<Option<InspectOptions>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    toml::from_str::<InspectOptions>(&contents)
        .map(Some)
        .map_err(|e| InspectError::Config(format!("{}: {}", path.display(), e)))
}
