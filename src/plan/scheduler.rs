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

use super::config::{BackupPoint, ScheduleConfig};

/// State of the scheduler while laying out weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainState {
    /// Regular weeks: every active day (or the remainder, on the last week)
    /// gets a point.
    Normal,
    /// The planned points ran out on an incremental. Extra weeks are opened
    /// one day at a time until a full backup closes the chain.
    SearchingForFull,
}

/// What to do after the last planned point turned out to be an incremental.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainFix {
    /// No day ever runs a full backup: turn the last point into a full one.
    ForceFull,
    /// Append the next active day of the same week.
    ExtendWeek,
    /// Open a new week and start searching from its first day.
    OpenWeek,
}

impl ChainState {
    fn transition(
        self,
        has_full_day: bool,
        days_in_week: usize,
        active_days: usize,
    ) -> (Self, ChainFix) {
        match (has_full_day, days_in_week < active_days) {
            (false, _) => (self, ChainFix::ForceFull),
            (true, true) => (self, ChainFix::ExtendWeek),
            (true, false) => (ChainState::SearchingForFull, ChainFix::OpenWeek),
        }
    }
}

/// Lays out the restore points of every active day.
///
/// Points are produced one week at a time until `restore_points` are planned.
/// Incrementals depend on the last full backup, so if the final point is an
/// incremental the schedule keeps going until a designated full day is
/// reached. Schedules without any full day (forever-forward-incremental) end
/// with a synthetic full instead.
///
/// Any points already present in `config` are discarded.
pub fn process_retention(config: &ScheduleConfig) -> ScheduleConfig {
    let mut planned = config.without_points();

    let active = planned.active_days();
    if active.is_empty() {
        return planned;
    }

    let active_count = active.len();
    let restore_points = planned.main_options.restore_points as usize;

    let mut week_count = restore_points / active_count;
    let extra_days = restore_points % active_count;
    let has_extra_days = extra_days > 0;
    if has_extra_days {
        week_count += 1;
    }

    let has_full_day = active
        .iter()
        .any(|&day| planned.weekdays[day].designated_full);

    let mut state = ChainState::Normal;
    let mut week = 0;

    while week < week_count {
        let mut day_count = match state {
            ChainState::SearchingForFull => 1,
            ChainState::Normal if week + 1 == week_count && has_extra_days => extra_days,
            ChainState::Normal => active_count,
        };

        let mut day = 0;
        while day < day_count {
            let size = planned.backup_size(&planned.weekdays[active[day]]);
            let slot = &mut planned.weekdays[active[day]];
            slot.points.push(Some(BackupPoint::new(slot.designated_full, size)));

            let closes_schedule = week + 1 == week_count && day + 1 == day_count;
            if closes_schedule && !slot.designated_full {
                let (next_state, fix) = state.transition(has_full_day, day_count, active_count);
                state = next_state;

                match fix {
                    ChainFix::ForceFull => {
                        if let Some(Some(last)) = slot.points.last_mut() {
                            last.full = true;
                        }
                        break;
                    }
                    ChainFix::ExtendWeek => day_count += 1,
                    ChainFix::OpenWeek => week_count += 1,
                }
            }

            day += 1;
        }

        week += 1;
    }

    planned
}
