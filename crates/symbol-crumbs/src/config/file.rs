use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
};

use serde_json::Value;

use super::CrumbsSettings;

pub const CONFIG_FILENAME: &str = "symbol-crumbs.toml";

/// Read a TOML settings file and merge it over `base`.
///
/// The file uses the same keys as the LSP payload, either at the top level
/// or under a `[symbol-crumbs]` table.
pub fn load_settings_file(
    path: &Path,
    base: &CrumbsSettings,
) -> Result<CrumbsSettings, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|error| ConfigFileError::Read {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;
    let payload: Value = toml::from_str(&content).map_err(|error| ConfigFileError::Parse {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;
    Ok(base.merged_with_payload(&payload))
}

/// Walks parent directories from `start` looking for `symbol-crumbs.toml`.
pub fn find_settings_file(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?
    } else {
        start
    };
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[derive(Debug)]
pub enum ConfigFileError {
    Read {
        path: PathBuf,
        reason: String,
    },
    Parse {
        path: PathBuf,
        reason: String,
    },
}

impl Display for ConfigFileError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Read {
                path,
                reason,
            } => write!(f, "failed to read {}: {reason}", path.display()),
            Self::Parse {
                path,
                reason,
            } => write!(f, "failed to parse {}: {reason}", path.display()),
        }
    }
}

impl std::error::Error for ConfigFileError {}

#[cfg(test)]
#[path = "../../tests/src/config/file_tests.rs"]
mod tests;
