//! JSON data file: the persistence collaborator around the in-memory
//! engine.
//!
//! The engine itself does no I/O; this module loads a [`ProjectData`]
//! before a command runs and writes it back afterwards. Event times are
//! persisted as the literal `HH:MM` strings the store holds, so they
//! round-trip byte for byte.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::Vendor;
use crate::store::StoreSnapshot;

/// Everything the CLI keeps on disk for one project: the schedule store
/// snapshot plus the vendor list owned by the surrounding layer.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProjectData {
    #[serde(default)]
    pub schedule: StoreSnapshot,
    #[serde(default)]
    pub vendors: Vec<Vendor>,
}

pub fn load(path: &Path) -> AppResult<ProjectData> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "Data file not found: {} (run `runsheet init` first)",
                path.display()
            ),
        )
        .into());
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save(path: &Path, data: &ProjectData) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}
