//! Storage slot for the session identity.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use crate::model::identity::Identity;

pub trait SessionPersistence {
    fn save(&mut self, identity: &Identity) -> Result<()>;

    /// The stored identity. Missing or malformed data both yield `None`.
    fn load(&self) -> Option<Identity>;

    fn clear(&mut self) -> Result<()>;
}

fn decode(raw: &str) -> Option<Identity> {
    match serde_json::from_str(raw) {
        Ok(identity) => Some(identity),
        Err(e) => {
            warn!(error = %e, "Discarding malformed stored session");
            None
        }
    }
}

/// JSON file holding the identity of the last login.
pub struct FileSessionPersistence {
    path: PathBuf,
}

impl FileSessionPersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionPersistence for FileSessionPersistence {
    fn save(&mut self, identity: &Identity) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating session directory {}", dir.display()))?;
        }
        let raw = serde_json::to_string(identity)?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("writing session file {}", self.path.display()))
    }

    fn load(&self) -> Option<Identity> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        decode(&raw)
    }

    fn clear(&mut self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e)
                .with_context(|| format!("removing session file {}", self.path.display())),
            _ => Ok(()),
        }
    }
}

/// Slot kept in memory as serialized JSON.
#[derive(Default)]
pub struct MemorySessionPersistence {
    slot: Option<String>,
}

impl MemorySessionPersistence {
    /// Pre-filled with `raw`, well-formed or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl SessionPersistence for MemorySessionPersistence {
    fn save(&mut self, identity: &Identity) -> Result<()> {
        self.slot = Some(serde_json::to_string(identity)?);
        Ok(())
    }

    fn load(&self) -> Option<Identity> {
        decode(self.slot.as_deref()?)
    }

    fn clear(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }
}
