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

use crate::plan::config::{ScheduleConfig, Weekday, WeekdaySlot};

/// (active, designated full) flags of a day.
pub type DayFlags = (bool, bool);

pub const OFF: DayFlags = (false, false);
pub const INC: DayFlags = (true, false);
pub const FULL: DayFlags = (true, true);

/// Builds a config from the flags of each day, Monday first.
/// Full backups weigh 50 and incrementals 5.
pub fn make_config(days: [DayFlags; 7], restore_points: u32) -> ScheduleConfig {
    let mut config = ScheduleConfig::default();
    config.weekdays = Weekday::ALL
        .iter()
        .zip(days)
        .map(|(&day, (active, full))| WeekdaySlot::new(day, active, full))
        .collect();
    config.main_options.restore_points = restore_points;
    config.main_options.full_size = 50.0;
    config.main_options.increment_size = 5.0;
    config
}
