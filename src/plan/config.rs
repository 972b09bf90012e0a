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

use std::{fmt, str::FromStr};

use anyhow::{Error, Result, anyhow, bail};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::global::defaults::{
    DEFAULT_FULL_SIZE, DEFAULT_INCREMENT_SIZE, DEFAULT_RESTORE_POINTS, DAYS_PER_WEEK,
};

/// Day of the week. The discriminant is the position of the day inside a
/// `ScheduleConfig`, which always lists the days from Monday to Sunday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Two-letter abbreviation used in reports ("Mo", "Tu", ...).
    pub fn short_name(&self) -> &'static str {
        &self.name()[0..2]
    }
}

/// Parses a day from its name or any prefix of at least two letters
/// ("mo", "Wed", "friday").
impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s.len() >= 2 {
            for day in Weekday::ALL {
                if day.name().to_lowercase().starts_with(&s) {
                    return Ok(day);
                }
            }
        }
        Err(anyhow!("Invalid day \'{}\'", s))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single restore point produced by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackupPoint {
    /// This specific point is a full backup.
    pub full: bool,
    pub weekly: bool,
    pub monthly: bool,
    pub yearly: bool,
    pub size: f64,
}

impl BackupPoint {
    pub fn new(full: bool, size: f64) -> Self {
        Self {
            full,
            weekly: false,
            monthly: false,
            yearly: false,
            size,
        }
    }

    /// Returns true if the point carries any GFS retention tag.
    pub fn is_gfs(&self) -> bool {
        self.weekly || self.monthly || self.yearly
    }
}

/// Settings and planned points of one day of the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdaySlot {
    pub day: Weekday,

    /// Backups run on this day.
    #[serde(rename = "exec")]
    pub active: bool,

    /// The backup of this day is always a full backup.
    #[serde(rename = "full")]
    pub designated_full: bool,

    /// One entry per scheduled week. GFS synthesis can leave gaps (`None`).
    #[serde(default)]
    pub points: Vec<Option<BackupPoint>>,
}

impl WeekdaySlot {
    pub fn new(day: Weekday, active: bool, designated_full: bool) -> Self {
        Self {
            day,
            active,
            designated_full,
            points: Vec::new(),
        }
    }

    /// Returns the point planned for `week`, if any.
    #[inline]
    pub fn point(&self, week: usize) -> Option<&BackupPoint> {
        self.points.get(week).and_then(|p| p.as_ref())
    }

    #[inline]
    pub fn point_mut(&mut self, week: usize) -> Option<&mut BackupPoint> {
        self.points.get_mut(week).and_then(|p| p.as_mut())
    }

    /// Places a point at `week`, padding the sequence with gaps if needed.
    pub fn insert_point(&mut self, week: usize, point: BackupPoint) {
        if self.points.len() <= week {
            self.points.resize(week + 1, None);
        }
        self.points[week] = Some(point);
    }

    /// Number of defined points, gaps excluded.
    pub fn point_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainOptions {
    pub restore_points: u32,
    pub full_size: f64,
    pub increment_size: f64,
}

impl Default for MainOptions {
    fn default() -> Self {
        Self {
            restore_points: DEFAULT_RESTORE_POINTS,
            full_size: DEFAULT_FULL_SIZE,
            increment_size: DEFAULT_INCREMENT_SIZE,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GfsTargets {
    pub weekly: u32,
    pub monthly: u32,
    pub yearly: u32,
}

impl GfsTargets {
    pub fn is_empty(&self) -> bool {
        self.weekly == 0 && self.monthly == 0 && self.yearly == 0
    }
}

/// Retention policy implied by a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionPolicy {
    ForeverForwardIncremental,
    ForwardIncremental,
    Gfs,
}

impl fmt::Display for RetentionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetentionPolicy::ForeverForwardIncremental => write!(f, "Forever-Forward-Incremental"),
            RetentionPolicy::ForwardIncremental => write!(f, "Forward-Incremental"),
            RetentionPolicy::Gfs => write!(f, "Grandfather-Father-Son (GFS)"),
        }
    }
}

/// The complete input (and, once planned, output) of a calculation.
///
/// Missing sections fall back to the defaults when deserializing, so a
/// partially written file still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub weekdays: Vec<WeekdaySlot>,
    pub main_options: MainOptions,
    pub gfs: GfsTargets,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let weekdays = Weekday::ALL
            .iter()
            .map(|&day| {
                let active = !matches!(day, Weekday::Saturday | Weekday::Sunday);
                WeekdaySlot::new(day, active, day == Weekday::Friday)
            })
            .collect();

        Self {
            weekdays,
            main_options: MainOptions::default(),
            gfs: GfsTargets::default(),
        }
    }
}

impl ScheduleConfig {
    /// Checks the preconditions the planner relies on.
    pub fn validate(&self) -> Result<()> {
        if self.weekdays.len() != DAYS_PER_WEEK {
            bail!(
                "Expected {} weekdays, found {}",
                DAYS_PER_WEEK,
                self.weekdays.len()
            );
        }

        for (i, slot) in self.weekdays.iter().enumerate() {
            if u8::from(slot.day) as usize != i {
                let expected = Weekday::try_from(i as u8)?;
                bail!(
                    "Weekdays must be listed from Monday to Sunday (found {} in place of {})",
                    slot.day,
                    expected
                );
            }
        }

        let opts = &self.main_options;
        if !opts.full_size.is_finite() || opts.full_size <= 0.0 {
            bail!("Full backup size must be a positive number");
        }
        if !opts.increment_size.is_finite() || opts.increment_size <= 0.0 {
            bail!("Incremental backup size must be a positive number");
        }

        Ok(())
    }

    /// Indices (into `weekdays`) of the days on which backups run, in week order.
    pub fn active_days(&self) -> Vec<usize> {
        self.weekdays
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.active)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns a copy of the configuration with every point removed.
    pub fn without_points(&self) -> Self {
        let mut config = self.clone();
        for slot in config.weekdays.iter_mut() {
            slot.points.clear();
        }
        config
    }

    /// Size of a backup taken on the given slot.
    #[inline]
    pub fn backup_size(&self, slot: &WeekdaySlot) -> f64 {
        if slot.designated_full {
            self.main_options.full_size
        } else {
            self.main_options.increment_size
        }
    }

    /// Returns true if an active day runs full backups. Without one the
    /// schedule is forever-forward-incremental and holds no GFS points.
    pub fn has_active_full_day(&self) -> bool {
        self.weekdays
            .iter()
            .any(|slot| slot.active && slot.designated_full)
    }

    pub fn retention_policy(&self) -> RetentionPolicy {
        if !self.weekdays.iter().any(|slot| slot.designated_full) {
            RetentionPolicy::ForeverForwardIncremental
        } else if !self.gfs.is_empty() {
            RetentionPolicy::Gfs
        } else {
            RetentionPolicy::ForwardIncremental
        }
    }

    pub fn scheduled_days(&self) -> Vec<Weekday> {
        self.weekdays
            .iter()
            .filter(|slot| slot.active)
            .map(|slot| slot.day)
            .collect()
    }

    pub fn full_days(&self) -> Vec<Weekday> {
        self.weekdays
            .iter()
            .filter(|slot| slot.designated_full)
            .map(|slot| slot.day)
            .collect()
    }

    /// Total number of defined points across the active days.
    pub fn total_points(&self) -> usize {
        self.weekdays
            .iter()
            .filter(|slot| slot.active)
            .map(|slot| slot.point_count())
            .sum()
    }
}
