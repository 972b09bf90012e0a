// gfscalc is a backup storage and retention calculator
// Copyright (C) 2025  Javier Lancha Vázquez <javier.lancha@gmail.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{LinkId, LinkStore};

#[derive(Debug, Serialize, Deserialize)]
struct StoredLink {
    expires_at: DateTime<Utc>,
    value: Value,
}

/// Link store keeping one JSON file per link inside a directory.
pub struct LocalLinkStore {
    root: PathBuf,
}

impl LocalLinkStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn link_path(&self, id: &LinkId) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }
}

impl LinkStore for LocalLinkStore {
    fn put(&self, id: &LinkId, value: &Value, expires_at: DateTime<Utc>) -> Result<()> {
        std::fs::create_dir_all(&self.root).with_context(|| {
            format!(
                "Could not create link store \'{}\'",
                self.root.to_string_lossy()
            )
        })?;

        let stored = StoredLink {
            expires_at,
            value: value.clone(),
        };
        let path = self.link_path(id);
        let contents = serde_json::to_vec(&stored)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Could not write link \'{}\'", path.to_string_lossy()))
    }

    fn get(&self, id: &LinkId, now: DateTime<Utc>) -> Result<Option<Value>> {
        let path = self.link_path(id);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read(&path)
            .with_context(|| format!("Could not read link \'{}\'", path.to_string_lossy()))?;
        let stored: StoredLink = serde_json::from_slice(&contents)
            .with_context(|| format!("Corrupted link \'{}\'", path.to_string_lossy()))?;

        if stored.expires_at <= now {
            std::fs::remove_file(&path).with_context(|| {
                format!(
                    "Could not remove expired link \'{}\'",
                    path.to_string_lossy()
                )
            })?;
            return Ok(None);
        }

        Ok(Some(stored.value))
    }
}
