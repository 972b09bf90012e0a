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

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::{
    global::defaults::{MAX_GRID_WEEKS, MAX_PROJECTION_YEARS},
    plan::{self, Calculation, RetentionPolicy, ScheduleConfig, Weekday},
    ui::{self, report},
    utils,
};

use super::{GlobalArgs, ProjectionArgs, SourceArgs};

/// Values that replace the loaded configuration for a single run.
#[derive(Args, Debug, Default)]
pub struct OverrideArgs {
    /// Number of restore points to keep
    #[arg(long)]
    pub restore_points: Option<u32>,

    /// Size of a full backup in GB
    #[arg(long)]
    pub full_size: Option<f64>,

    /// Size of an incremental backup in GB
    #[arg(long)]
    pub increment_size: Option<f64>,

    /// Weekly GFS restore points
    #[arg(long)]
    pub weekly: Option<u32>,

    /// Monthly GFS restore points
    #[arg(long)]
    pub monthly: Option<u32>,

    /// Yearly GFS restore points
    #[arg(long)]
    pub yearly: Option<u32>,

    /// Days on which backups run (e.g. "mo,tu,we,th,fr")
    #[arg(long, value_delimiter = ',')]
    pub days: Option<Vec<Weekday>>,

    /// Days whose backup is always a full backup (e.g. "fr")
    #[arg(long, value_delimiter = ',')]
    pub full_days: Option<Vec<Weekday>>,
}

impl OverrideArgs {
    pub fn apply(&self, config: &mut ScheduleConfig) {
        if let Some(restore_points) = self.restore_points {
            config.main_options.restore_points = restore_points;
        }
        if let Some(full_size) = self.full_size {
            config.main_options.full_size = full_size;
        }
        if let Some(increment_size) = self.increment_size {
            config.main_options.increment_size = increment_size;
        }
        if let Some(weekly) = self.weekly {
            config.gfs.weekly = weekly;
        }
        if let Some(monthly) = self.monthly {
            config.gfs.monthly = monthly;
        }
        if let Some(yearly) = self.yearly {
            config.gfs.yearly = yearly;
        }
        if let Some(days) = &self.days {
            for slot in config.weekdays.iter_mut() {
                slot.active = days.contains(&slot.day);
            }
        }
        if let Some(full_days) = &self.full_days {
            for slot in config.weekdays.iter_mut() {
                slot.designated_full = full_days.contains(&slot.day);
            }
        }
    }
}

#[derive(Args, Debug)]
#[clap(about = "Plan the restore points and estimate the backup storage")]
pub struct CmdArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    #[clap(flatten)]
    pub overrides: OverrideArgs,

    #[clap(flatten)]
    pub projection: ProjectionArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the result as JSON to a file
    #[arg(short, long, value_parser)]
    pub output: Option<PathBuf>,
}

pub fn run(global: &GlobalArgs, args: &CmdArgs) -> Result<()> {
    let mut config = super::load_config(global, &args.source)?;
    args.overrides.apply(&mut config);
    config.validate()?;

    let shell = args.projection.shell()?;
    if skips_gfs(&config) {
        ui::cli::warning!(
            "No active day runs full backups. GFS restore points will not be planned."
        );
    }

    ui::cli::verbose_1!(
        "Planning {} with {} restore points",
        planned_policy(&config),
        config.main_options.restore_points
    );
    let calculation = plan::calculate(&config, &shell);
    ui::cli::verbose_2!(
        "{} planned across {}",
        utils::format_count(calculation.config.total_points(), "point", "points"),
        utils::format_count(calculation.config.scheduled_days().len(), "day", "days")
    );

    if let Some(output) = &args.output {
        utils::json::save_json_pretty(&calculation, output)?;
        ui::cli::log!("Result written to \'{}\'", output.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
    } else if args.output.is_none() {
        print_calculation(&calculation, args.projection.years);
    }

    Ok(())
}

/// GFS targets are set but no active day runs full backups.
fn skips_gfs(config: &ScheduleConfig) -> bool {
    !config.gfs.is_empty() && !config.has_active_full_day()
}

/// Policy the planner actually follows. Designated full days that never run
/// do not count.
fn planned_policy(config: &ScheduleConfig) -> RetentionPolicy {
    if config.has_active_full_day() {
        config.retention_policy()
    } else {
        RetentionPolicy::ForeverForwardIncremental
    }
}

/// `requested_years` is the horizon asked for, before the projection limit.
fn projection_summary(calculation: &Calculation, requested_years: u32) -> Option<String> {
    if requested_years > MAX_PROJECTION_YEARS {
        return None;
    }
    let estimate = &calculation.estimate;
    Some(format!(
        "Projected in {}: {}",
        utils::format_count(estimate.projection_years, "year", "years"),
        utils::format_gb(estimate.projected_max)
    ))
}

fn print_calculation(calculation: &Calculation, requested_years: u32) {
    let table = report::points_table(&calculation.config, MAX_GRID_WEEKS, true);
    println!();
    table.print();

    let weeks = calculation
        .config
        .weekdays
        .iter()
        .map(|slot| slot.points.len())
        .max()
        .unwrap_or(0);
    if weeks > MAX_GRID_WEEKS {
        println!("... {} more weeks", weeks - MAX_GRID_WEEKS);
    }
    println!();

    let estimate = &calculation.estimate;
    println!(
        "{} {}",
        "Current Backup Storage:".bold(),
        utils::format_gb(estimate.current_max).bold().green()
    );
    println!(
        "{} {}",
        "Recommended Storage:".bold(),
        utils::format_gb(report::with_recommended_buffer(estimate.current_max))
    );
    match projection_summary(calculation, requested_years) {
        Some(summary) => println!("{}", summary.bold().cyan()),
        None => println!("{}", "No growth projected".yellow()),
    }
}
