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

// -- Calendar --
pub const DAYS_PER_WEEK: usize = 7;

// GFS strides. A month is approximated as 4 weeks (28 days) and a year as 52 weeks.
pub const WEEKS_PER_MONTH: usize = 4;
pub const WEEKS_PER_YEAR: usize = 52;

// -- Storage projection --
/// Longer horizons are not projected (treated as 0 years).
pub const MAX_PROJECTION_YEARS: u32 = 99;

/// Operational buffer recommended on top of the estimate, in percent.
/// It does not include the data growth.
pub const RECOMMENDED_BUFFER_PERCENT: f64 = 15.0;

pub const DEFAULT_PROJECTION_YEARS: u32 = 1;
pub const DEFAULT_DATA_GROWTH_PERCENT: f64 = 10.0;

// -- Default configuration --
pub const DEFAULT_RESTORE_POINTS: u32 = 7;
pub const DEFAULT_FULL_SIZE: f64 = 100.0;
pub const DEFAULT_INCREMENT_SIZE: f64 = 10.0;
pub const DEFAULT_CONFIG_FILE: &str = "gfscalc.json";

// -- Share links --
/// Four days, in seconds.
pub const DEFAULT_LINK_TTL_SECS: i64 = 345600;
pub const LINK_ID_LENGTH: usize = 16;
pub const DEFAULT_LINK_STORE_DIR: &str = ".gfscalc/links";

// Display
/// Weeks shown in the point grid before the remaining ones are summarized.
pub const MAX_GRID_WEEKS: usize = 12;

pub const DEFAULT_VERBOSITY: u32 = 1;
