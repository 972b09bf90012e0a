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

use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde_json::Value;

use super::{LinkId, LinkStore};

/// In-process link store.
#[derive(Default)]
pub struct MemoryLinkStore {
    entries: Mutex<HashMap<LinkId, (Value, DateTime<Utc>)>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl LinkStore for MemoryLinkStore {
    fn put(&self, id: &LinkId, value: &Value, expires_at: DateTime<Utc>) -> Result<()> {
        self.entries
            .lock()
            .insert(id.clone(), (value.clone(), expires_at));
        Ok(())
    }

    fn get(&self, id: &LinkId, now: DateTime<Utc>) -> Result<Option<Value>> {
        let mut entries = self.entries.lock();

        let expired = match entries.get(id) {
            Some((_, expires_at)) => *expires_at <= now,
            None => return Ok(None),
        };

        if expired {
            entries.remove(id);
            return Ok(None);
        }
        Ok(entries.get(id).map(|(value, _)| value.clone()))
    }
}
