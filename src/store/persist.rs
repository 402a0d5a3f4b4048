//! Durable snapshot of the packs slice.
//!
//! The snapshot is a plain JSON blob, written after every dispatch and
//! read back at store construction. There is no schema version and no
//! migration: a blob that no longer matches the current shape is
//! discarded with a warning and the initial state is used instead.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::packs::PacksState;

/// The persisted subset of the state tree. Only the packs slice
/// survives restarts; everything else restarts from its initial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub packs: PacksState,
}

/// Errors from writing the state file.
#[derive(Debug, Error)]
pub enum StateFileError {
    #[error("failed to write state file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read the snapshot at `path`.
///
/// Returns `None` when the file is absent, unreadable, or malformed —
/// callers fall back to the initial state in every case.
pub fn load_state(path: &Path) -> Option<PersistedState> {
    if !path.exists() {
        return None;
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "state file unreadable, starting fresh");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "state file malformed, starting fresh");
            None
        }
    }
}

/// Write the snapshot to `path`, creating parent directories as needed.
pub fn save_state(path: &Path, state: &PersistedState) -> Result<(), StateFileError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StateFileError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let raw = serde_json::to_string(state)?;
    fs::write(path, raw).map_err(|source| StateFileError::Write {
        path: path.to_path_buf(),
        source,
    })
}
