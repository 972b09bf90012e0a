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

pub mod localfs;
pub mod memory;

use std::{fmt, str::FromStr};

use anyhow::{Context, Error, Result, anyhow, bail};
use chrono::{DateTime, Duration, Utc};
use rand::{Rng, distr::Alphanumeric};
use serde_json::Value;

use crate::{global::defaults::LINK_ID_LENGTH, plan::ScheduleConfig};

/// Identifier of a shared configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkId(String);

impl LinkId {
    /// Creates a new, random ID made of ASCII letters and digits.
    pub fn new_random() -> Self {
        let id = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(LINK_ID_LENGTH)
            .map(char::from)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LinkId {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.len() != LINK_ID_LENGTH || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(anyhow!(
                "Invalid link \'{}\': expected {} letters or digits",
                s,
                LINK_ID_LENGTH
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key-value store for shared configurations.
///
/// Values are stored verbatim and expire at a fixed time. Expired entries
/// behave exactly like missing ones.
pub trait LinkStore: Send + Sync {
    fn put(&self, id: &LinkId, value: &Value, expires_at: DateTime<Utc>) -> Result<()>;

    /// Returns the value stored under `id` if it exists and has not expired at `now`.
    fn get(&self, id: &LinkId, now: DateTime<Utc>) -> Result<Option<Value>>;
}

/// Stores a configuration under a new random link and returns the link.
pub fn share_config(
    store: &dyn LinkStore,
    config: &ScheduleConfig,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<LinkId> {
    let value = serde_json::to_value(config)?;
    let id = LinkId::new_random();
    store
        .put(&id, &value, now + ttl)
        .with_context(|| format!("Failed to store link {}", id))?;
    Ok(id)
}

/// Retrieves a shared configuration.
pub fn open_link(store: &dyn LinkStore, id: &LinkId, now: DateTime<Utc>) -> Result<ScheduleConfig> {
    let Some(value) = store.get(id, now)? else {
        bail!("Link is not valid or has already expired!");
    };

    let config = serde_json::from_value(value)
        .with_context(|| format!("Link {} does not hold a valid configuration", id))?;
    Ok(config)
}
