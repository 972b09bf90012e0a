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

use colored::Colorize;

use crate::{
    global::defaults::RECOMMENDED_BUFFER_PERCENT,
    plan::{BackupPoint, Calculation, ScheduleConfig, Weekday, storage::round_half_up},
    ui::table::{Alignment, Table},
    utils,
};

/// A titled group of (label, value) rows.
pub struct ReportSection {
    pub title: &'static str,
    pub rows: Vec<(String, String)>,
}

fn join_days(days: &[Weekday]) -> String {
    if days.is_empty() {
        return "-".to_string();
    }
    days.iter()
        .map(|day| day.short_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Storage needed once the recommended operational buffer is added.
pub fn with_recommended_buffer(current_max: f64) -> f64 {
    round_half_up(current_max * (1.0 + RECOMMENDED_BUFFER_PERCENT / 100.0))
}

/// Builds the summary of a calculation.
pub fn report_sections(calculation: &Calculation) -> Vec<ReportSection> {
    let config = &calculation.config;
    let estimate = &calculation.estimate;
    let years = estimate.projection_years;

    vec![
        ReportSection {
            title: "Basic Configuration",
            rows: vec![
                (
                    "Restore Points".to_string(),
                    config.main_options.restore_points.to_string(),
                ),
                (
                    "Retention Policy".to_string(),
                    config.retention_policy().to_string(),
                ),
                (
                    "Full Backup Size".to_string(),
                    utils::format_gb(config.main_options.full_size),
                ),
                (
                    "Incremental Backup Size".to_string(),
                    utils::format_gb(config.main_options.increment_size),
                ),
            ],
        },
        ReportSection {
            title: "Advanced Configuration",
            rows: vec![
                (
                    "Scheduled Days".to_string(),
                    join_days(&config.scheduled_days()),
                ),
                (
                    "Scheduled Full Backup Days".to_string(),
                    join_days(&config.full_days()),
                ),
                (
                    "GFS Retention (W/M/Y)".to_string(),
                    format!(
                        "{}/{}/{}",
                        config.gfs.weekly, config.gfs.monthly, config.gfs.yearly
                    ),
                ),
            ],
        },
        ReportSection {
            title: "Calculation",
            rows: vec![
                (
                    "Current Backup Storage Consumption".to_string(),
                    utils::format_gb(estimate.current_max),
                ),
                (
                    format!(
                        "Recommended Storage ({}% buffer)",
                        RECOMMENDED_BUFFER_PERCENT
                    ),
                    utils::format_gb(with_recommended_buffer(estimate.current_max)),
                ),
                (
                    "Estimated Annual Data Growth Rate".to_string(),
                    format!("{} %", estimate.data_growth_percent),
                ),
                (
                    format!(
                        "Projected Backup Storage Consumption in {} Year{}",
                        years,
                        if years > 1 { "s" } else { "" }
                    ),
                    utils::format_gb(estimate.projected_max),
                ),
            ],
        },
    ]
}

/// Renders the summary as text. Colors are only used when `color` is set.
pub fn render_report(calculation: &Calculation, color: bool) -> String {
    let mut output = String::new();

    for section in report_sections(calculation) {
        let title = if color {
            section.title.bold().to_string()
        } else {
            section.title.to_string()
        };
        output.push_str(&format!("{title}\n"));

        let mut table = Table::new_with_alignments(vec![Alignment::Left, Alignment::Right]);
        table.set_headers(vec!["Specification".to_string(), "Evaluation".to_string()]);
        for (label, value) in section.rows {
            table.add_row(vec![label, value]);
        }
        output.push_str(&table.render());
        output.push('\n');
    }

    output
}

/// Short cell text for a point: `F`/`I`, followed by its GFS tags.
pub fn point_cell(point: Option<&BackupPoint>) -> String {
    let Some(point) = point else {
        return "-".to_string();
    };

    let mut cell = String::from(if point.full { "F" } else { "I" });
    if point.weekly {
        cell.push('W');
    }
    if point.monthly {
        cell.push('M');
    }
    if point.yearly {
        cell.push('Y');
    }
    cell
}

/// Day-by-week table of the planned points of the active days.
/// Only the first `max_weeks` weeks are shown.
pub fn points_table(config: &ScheduleConfig, max_weeks: usize, color: bool) -> Table {
    let week_count = config
        .weekdays
        .iter()
        .filter(|slot| slot.active)
        .map(|slot| slot.points.len())
        .max()
        .unwrap_or(0);
    let shown = week_count.min(max_weeks);

    let mut alignments = vec![Alignment::Left];
    alignments.extend(std::iter::repeat_n(Alignment::Center, shown + 1));
    let mut table = Table::new_with_alignments(alignments);

    let mut headers = vec!["Day".to_string()];
    headers.extend((1..=shown).map(|week| format!("W{week}")));
    headers.push("Points".to_string());
    table.set_headers(headers);

    for slot in config.weekdays.iter().filter(|slot| slot.active) {
        let mut row = vec![slot.day.name().to_string()];
        for week in 0..shown {
            let cell = point_cell(slot.point(week));
            let cell = match (color, slot.point(week)) {
                (true, Some(point)) if point.is_gfs() => cell.bold().yellow().to_string(),
                (true, Some(point)) if point.full => cell.bold().green().to_string(),
                _ => cell,
            };
            row.push(cell);
        }
        row.push(slot.point_count().to_string());
        table.add_row(row);
    }

    table
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::plan::{StorageEstimate, calculate};
    use crate::testing::{FULL, INC, OFF, make_config};

    #[test]
    fn test_point_cell() {
        assert_eq!(point_cell(None), "-");

        let mut point = BackupPoint::new(false, 5.0);
        assert_eq!(point_cell(Some(&point)), "I");

        point.full = true;
        point.weekly = true;
        point.yearly = true;
        assert_eq!(point_cell(Some(&point)), "FWY");
    }

    #[test]
    fn test_report_rows() {
        let mut config = make_config([INC, OFF, INC, OFF, FULL, OFF, OFF], 10);
        config.gfs.weekly = 2;
        let calculation = calculate(&config, &StorageEstimate::new(1, 10.0));

        let sections = report_sections(&calculation);
        assert_eq!(sections.len(), 3);

        let basic = &sections[0].rows;
        assert_eq!(basic[0].1, "10");
        assert_eq!(basic[1].1, "Grandfather-Father-Son (GFS)");
        assert_eq!(basic[2].1, "50 GB");

        let advanced = &sections[1].rows;
        assert_eq!(advanced[0].1, "Mo, We, Fr");
        assert_eq!(advanced[1].1, "Fr");

        let calc = &sections[2].rows;
        assert_eq!(calc[0].1, "290 GB");
        // 290 * 1.15 = 333.5
        assert_eq!(calc[1].1, "334 GB");
        assert_eq!(calc[3].0, "Projected Backup Storage Consumption in 1 Year");
        assert_eq!(calc[3].1, "319 GB");
    }

    #[test]
    fn test_render_report_without_color() {
        let config = make_config([INC, INC, OFF, OFF, OFF, OFF, OFF], 5);
        let calculation = calculate(&config, &StorageEstimate::new(3, 5.0));

        let report = render_report(&calculation, false);
        assert!(!report.contains('\x1b'));
        assert!(report.contains("Forever-Forward-Incremental"));
        assert!(report.contains("in 3 Years"));
        assert!(report.contains("Scheduled Full Backup Days"));
    }

    #[test]
    fn test_points_table() {
        let mut config = make_config([INC, OFF, OFF, OFF, FULL, OFF, OFF], 4);
        config.gfs.weekly = 1;
        let calculation = calculate(&config, &StorageEstimate::new(0, 0.0));

        let rendered = points_table(&calculation.config, 12, false).render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[1].contains("W1") && lines[1].contains("W2"));
        assert!(!lines[1].contains("W3"));
        assert!(lines[3].starts_with(" Monday"));
        assert!(lines[3].contains(" I "));
        assert!(lines[4].contains("FW"));
        assert!(lines[4].trim_end().ends_with('2'));
    }

    #[test]
    fn test_points_table_truncates_weeks() {
        let config = make_config([OFF, OFF, OFF, OFF, FULL, OFF, OFF], 30);
        let calculation = calculate(&config, &StorageEstimate::new(0, 0.0));

        let table = points_table(&calculation.config, 12, false);
        // Day column, 12 weeks and the point count
        assert_eq!(table.num_columns(), 14);
        assert!(table.render().contains(" 30 "));
    }
}
