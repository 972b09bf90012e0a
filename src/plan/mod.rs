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

pub mod config;
pub mod gfs;
pub mod grid;
pub mod scheduler;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use config::{
    BackupPoint, GfsTargets, MainOptions, RetentionPolicy, ScheduleConfig, Weekday, WeekdaySlot,
};
pub use gfs::{GfsTier, process_gfs};
pub use scheduler::process_retention;
pub use storage::{StorageEstimate, calculate_storage};

/// Result of running the whole planner on a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub config: ScheduleConfig,
    pub estimate: StorageEstimate,
}

/// Plans the restore points of `config`, tags the GFS points and projects the
/// storage usage. `shell` carries the projection horizon and growth rate.
pub fn calculate(config: &ScheduleConfig, shell: &StorageEstimate) -> Calculation {
    let planned = process_gfs(&process_retention(config));
    let estimate = calculate_storage(&planned, shell);

    Calculation {
        config: planned,
        estimate,
    }
}
