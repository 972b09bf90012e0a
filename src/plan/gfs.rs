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

use crate::global::defaults::{WEEKS_PER_MONTH, WEEKS_PER_YEAR};

use super::config::{BackupPoint, GfsTargets, ScheduleConfig};
use super::grid::WeekGrid;

/// GFS retention tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GfsTier {
    Weekly,
    Monthly,
    Yearly,
}

impl GfsTier {
    /// Number of weeks between two consecutive points of the tier.
    pub fn stride(&self) -> usize {
        match self {
            GfsTier::Weekly => 1,
            GfsTier::Monthly => WEEKS_PER_MONTH,
            GfsTier::Yearly => WEEKS_PER_YEAR,
        }
    }

    pub fn target(&self, targets: &GfsTargets) -> usize {
        match self {
            GfsTier::Weekly => targets.weekly as usize,
            GfsTier::Monthly => targets.monthly as usize,
            GfsTier::Yearly => targets.yearly as usize,
        }
    }

    pub fn tag(&self, point: &mut BackupPoint) {
        match self {
            GfsTier::Weekly => point.weekly = true,
            GfsTier::Monthly => point.monthly = true,
            GfsTier::Yearly => point.yearly = true,
        }
    }

    pub fn is_tagged(&self, point: &BackupPoint) -> bool {
        match self {
            GfsTier::Weekly => point.weekly,
            GfsTier::Monthly => point.monthly,
            GfsTier::Yearly => point.yearly,
        }
    }
}

/// The day currently anchoring GFS retention, as a position in the active-day
/// list. Each phase starts from the cursor left by the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GfsCursor {
    pub day: usize,
}

/// Tags full backups for weekly, monthly and yearly retention.
///
/// Expects a config already laid out by `process_retention`. When the
/// anchoring day has no point at a required week and it is a designated full
/// day, a new full point is added there. Schedules without a designated full
/// day cannot hold GFS points and are returned as they are.
pub fn process_gfs(config: &ScheduleConfig) -> ScheduleConfig {
    let mut planned = config.clone();

    if planned.gfs.is_empty() {
        return planned;
    }

    let grid = WeekGrid::build(&planned);
    if grid.active_len() == 0 {
        return planned;
    }

    let has_full_day = (0..grid.active_len())
        .any(|pos| planned.weekdays[grid.weekday_index(pos)].designated_full);
    if !has_full_day {
        return planned;
    }

    let cursor = classify_weekly(&mut planned, &grid, GfsCursor::default());
    let cursor = classify_periodic(&mut planned, &grid, GfsTier::Monthly, cursor);
    classify_periodic(&mut planned, &grid, GfsTier::Yearly, cursor);

    planned
}

/// Handles a week in which the anchoring day has no point.
/// Returns false if the point exists and must be tagged by the caller.
fn synthesize_missing(
    planned: &mut ScheduleConfig,
    grid: &WeekGrid,
    tier: GfsTier,
    cursor: GfsCursor,
    week: usize,
) -> bool {
    let full_size = planned.main_options.full_size;
    let slot = &mut planned.weekdays[grid.weekday_index(cursor.day)];

    if slot.point(week).is_some() {
        return false;
    }

    if slot.designated_full {
        let mut point = BackupPoint::new(true, full_size);
        tier.tag(&mut point);
        slot.insert_point(week, point);
    }
    true
}

/// One weekly point per week. The latest full backup of the week is kept.
fn classify_weekly(
    planned: &mut ScheduleConfig,
    grid: &WeekGrid,
    mut cursor: GfsCursor,
) -> GfsCursor {
    let tier = GfsTier::Weekly;

    for week in 0..tier.target(&planned.gfs) {
        if synthesize_missing(planned, grid, tier, cursor, week) {
            continue;
        }

        for &pos in grid.week(week).iter().rev() {
            if let Some(point) = grid.point_mut(planned, pos, week) {
                if point.full {
                    tier.tag(point);
                    cursor.day = pos;
                    break;
                }
            }
        }
    }

    cursor
}

/// Monthly and yearly points. The anchoring day is kept when it runs full
/// backups, otherwise the earliest full backup of the week takes over.
fn classify_periodic(
    planned: &mut ScheduleConfig,
    grid: &WeekGrid,
    tier: GfsTier,
    mut cursor: GfsCursor,
) -> GfsCursor {
    for i in 0..tier.target(&planned.gfs) {
        let week = i * tier.stride();

        if synthesize_missing(planned, grid, tier, cursor, week) {
            continue;
        }

        let anchor = &mut planned.weekdays[grid.weekday_index(cursor.day)];
        if anchor.designated_full {
            if let Some(point) = anchor.point_mut(week) {
                tier.tag(point);
            }
            continue;
        }

        for &pos in grid.week(week) {
            if let Some(point) = grid.point_mut(planned, pos, week) {
                if point.full {
                    tier.tag(point);
                    cursor.day = pos;
                    break;
                }
            }
        }
    }

    cursor
}

/// Counts the points carrying the tag of `tier`.
pub fn count_tagged(config: &ScheduleConfig, tier: GfsTier) -> usize {
    config
        .weekdays
        .iter()
        .flat_map(|slot| slot.points.iter().flatten())
        .filter(|point| tier.is_tagged(point))
        .count()
}
