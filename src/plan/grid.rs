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

/// Week-major view over the day-major point sequences of a config.
///
/// Row `w` lists the positions (into the active-day list) of the days that
/// have a point at week `w`, in week order. The grid is built once and keeps
/// describing the points that existed at that time; points synthesized later
/// are not part of it.
#[derive(Debug, Clone, Default)]
pub struct WeekGrid {
    active: Vec<usize>,
    rows: Vec<Vec<usize>>,
}

impl WeekGrid {
    /// The number of weeks is taken from the first active day, which always
    /// holds the longest sequence after scheduling.
    pub fn build(config: &ScheduleConfig) -> Self {
        let active = config.active_days();

        let week_count = active
            .first()
            .map(|&day| config.weekdays[day].points.len())
            .unwrap_or(0);

        let rows = (0..week_count)
            .map(|week| {
                active
                    .iter()
                    .enumerate()
                    .filter(|(_, day)| config.weekdays[**day].point(week).is_some())
                    .map(|(pos, _)| pos)
                    .collect()
            })
            .collect();

        Self { active, rows }
    }

    pub fn week_count(&self) -> usize {
        self.rows.len()
    }

    /// Active-day positions with a point at `week`. Empty past the last week.
    pub fn week(&self, week: usize) -> &[usize] {
        self.rows.get(week).map(|r| r.as_slice()).unwrap_or(&[])
    }

    /// Index into `ScheduleConfig::weekdays` of the active day at `pos`.
    #[inline]
    pub fn weekday_index(&self, pos: usize) -> usize {
        self.active[pos]
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Day-major access: the point of the active day at `pos` for `week`.
    pub fn point<'a>(
        &self,
        config: &'a ScheduleConfig,
        pos: usize,
        week: usize,
    ) -> Option<&'a BackupPoint> {
        config.weekdays[self.active[pos]].point(week)
    }

    pub fn point_mut<'a>(
        &self,
        config: &'a mut ScheduleConfig,
        pos: usize,
        week: usize,
    ) -> Option<&'a mut BackupPoint> {
        config.weekdays[self.active[pos]].point_mut(week)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::plan::scheduler::process_retention;
    use crate::testing::{FULL, INC, OFF, make_config};

    #[test]
    fn test_transpose_full_weeks() {
        let config = process_retention(&make_config([INC, OFF, INC, OFF, FULL, OFF, OFF], 6));
        let grid = WeekGrid::build(&config);

        assert_eq!(grid.week_count(), 2);
        assert_eq!(grid.active_len(), 3);
        assert_eq!(grid.week(0), &[0, 1, 2]);
        assert_eq!(grid.week(1), &[0, 1, 2]);
        assert_eq!(grid.weekday_index(2), 4);
        assert!(grid.point(&config, 2, 1).unwrap().full);
        assert!(grid.week(2).is_empty());
    }

    #[test]
    fn test_transpose_partial_week() {
        // Mon full, Tue and Wed incremental: the third week only has Monday
        let config = process_retention(&make_config([FULL, INC, INC, OFF, OFF, OFF, OFF], 7));
        let grid = WeekGrid::build(&config);

        assert_eq!(grid.week_count(), 3);
        assert_eq!(grid.week(2), &[0]);
    }

    #[test]
    fn test_transpose_empty() {
        let config = process_retention(&make_config([OFF; 7], 7));
        let grid = WeekGrid::build(&config);
        assert_eq!(grid.week_count(), 0);
        assert!(grid.week(0).is_empty());
    }

    #[test]
    fn test_point_mut_writes_through() {
        let mut config = process_retention(&make_config([INC, FULL, OFF, OFF, OFF, OFF, OFF], 4));
        let grid = WeekGrid::build(&config);

        grid.point_mut(&mut config, 1, 1).unwrap().weekly = true;
        assert!(config.weekdays[1].point(1).unwrap().weekly);
        assert!(grid.point_mut(&mut config, 1, 5).is_none());
    }
}
