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

use serde::{Deserialize, Serialize};

use crate::global::defaults::MAX_PROJECTION_YEARS;

use super::config::ScheduleConfig;

/// Storage consumption of a planned schedule.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageEstimate {
    pub current_max: f64,
    pub projected_max: f64,
    pub projection_years: u32,
    /// Annual data growth, in percent.
    #[serde(rename = "data_growth")]
    pub data_growth_percent: f64,
}

impl StorageEstimate {
    /// Creates an estimate holding only the projection parameters.
    pub fn new(projection_years: u32, data_growth_percent: f64) -> Self {
        Self {
            current_max: 0.0,
            projected_max: 0.0,
            projection_years,
            data_growth_percent,
        }
    }
}

/// Rounds half-way values up, towards positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Horizons longer than `MAX_PROJECTION_YEARS` are not projected at all.
pub fn effective_projection_years(years: u32) -> u32 {
    if years > MAX_PROJECTION_YEARS { 0 } else { years }
}

/// Computes the current and projected storage usage of a planned config.
///
/// The current usage counts one extra full backup as a system buffer. It is
/// not an operational margin: reports add that on top.
///
/// Growth is compounded one year at a time and rounded after every year.
pub fn calculate_storage(config: &ScheduleConfig, shell: &StorageEstimate) -> StorageEstimate {
    let projection_years = effective_projection_years(shell.projection_years);
    let mut estimate = StorageEstimate {
        projection_years,
        ..shell.clone()
    };

    let active = config.active_days();
    if active.is_empty() {
        estimate.current_max = 0.0;
        estimate.projected_max = 0.0;
        return estimate;
    }

    let mut current = config.main_options.full_size;
    for &day in &active {
        let slot = &config.weekdays[day];
        current += slot.point_count() as f64 * config.backup_size(slot);
    }
    estimate.current_max = round_half_up(current);

    let growth = shell.data_growth_percent / 100.0 + 1.0;
    let mut projected = estimate.current_max;
    for _ in 0..projection_years {
        projected = round_half_up(projected * growth);
    }
    estimate.projected_max = projected;

    estimate
}
