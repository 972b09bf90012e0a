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

use anyhow::{Result, bail};
use chrono::Utc;
use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::{
    global::defaults::{
        DEFAULT_CONFIG_FILE, DEFAULT_DATA_GROWTH_PERCENT, DEFAULT_LINK_STORE_DIR,
        DEFAULT_PROJECTION_YEARS, MAX_PROJECTION_YEARS,
    },
    plan::{ScheduleConfig, StorageEstimate},
    share::{self, LinkId, localfs::LocalLinkStore},
    ui, utils,
};

pub mod cmd_calc;
pub mod cmd_init;
pub mod cmd_open;
pub mod cmd_report;
pub mod cmd_share;

// CLI arguments
#[derive(Parser, Debug)]
#[clap(
    version = env!("CARGO_PKG_VERSION"), // Version from crate metadata
    about = "gfscalc backup storage and retention calculator",
)]
pub struct Cli {
    // Subcommand
    #[command(subcommand)]
    pub command: Command,

    // Global arguments
    #[clap(flatten)]
    pub global_args: GlobalArgs,
}

// List of commands
#[derive(Subcommand, Debug)]
pub enum Command {
    Init(cmd_init::CmdArgs),
    Calc(cmd_calc::CmdArgs),
    Report(cmd_report::CmdArgs),
    Share(cmd_share::CmdArgs),
    Open(cmd_open::CmdArgs),
}

#[derive(Parser, Debug)]
#[clap(group = ArgGroup::new("verbosity_group").multiple(false))]
pub struct GlobalArgs {
    /// Configuration file
    #[clap(short = 'c', long, value_parser, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory where shared links are kept
    #[clap(long, value_parser, default_value = DEFAULT_LINK_STORE_DIR)]
    pub link_store: PathBuf,

    /// Disable logging (verbosity = 0)
    #[clap(long, value_parser, group = "verbosity_group")]
    pub quiet: bool,

    /// Set the verbosity level [0-3]
    #[clap(short = 'v', long, value_parser, group = "verbosity_group")]
    pub verbosity: Option<u32>,
}

/// Where the configuration of a command comes from.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Load the configuration from a shared link instead of the configuration file
    #[arg(short, long)]
    pub link: Option<LinkId>,
}

/// Storage projection parameters.
#[derive(Args, Debug)]
pub struct ProjectionArgs {
    /// Projection horizon in years. Horizons above 99 years are not projected.
    #[arg(short, long, default_value_t = DEFAULT_PROJECTION_YEARS)]
    pub years: u32,

    /// Annual data growth in percent
    #[arg(short, long, default_value_t = DEFAULT_DATA_GROWTH_PERCENT, allow_negative_numbers = true)]
    pub growth: f64,
}

impl Default for ProjectionArgs {
    fn default() -> Self {
        Self {
            years: DEFAULT_PROJECTION_YEARS,
            growth: DEFAULT_DATA_GROWTH_PERCENT,
        }
    }
}

impl ProjectionArgs {
    /// Builds the estimate the planner fills in.
    pub fn shell(&self) -> Result<StorageEstimate> {
        if !self.growth.is_finite() {
            bail!("Data growth must be a number");
        }
        if self.years > MAX_PROJECTION_YEARS {
            ui::cli::warning!(
                "Projections are limited to {} years. No growth will be projected.",
                MAX_PROJECTION_YEARS
            );
        }
        Ok(StorageEstimate::new(self.years, self.growth))
    }
}

pub(crate) fn open_link_store(global: &GlobalArgs) -> LocalLinkStore {
    LocalLinkStore::new(global.link_store.clone())
}

/// Loads the configuration of a command.
///
/// A shared link takes precedence over the configuration file. If neither is
/// available the default configuration is used.
pub(crate) fn load_config(global: &GlobalArgs, source: &SourceArgs) -> Result<ScheduleConfig> {
    let config = if let Some(id) = &source.link {
        ui::cli::verbose_1!("Loading configuration from link {}", id);
        let store = open_link_store(global);
        share::open_link(&store, id, Utc::now())?
    } else if global.config.exists() {
        ui::cli::verbose_1!(
            "Loading configuration from \'{}\'",
            global.config.display()
        );
        utils::json::load_json(&global.config)?
    } else {
        ui::cli::verbose_1!(
            "\'{}\' not found. Using the default configuration",
            global.config.display()
        );
        ScheduleConfig::default()
    };

    config.validate()?;
    Ok(config)
}

pub fn run(args: &Cli) -> Result<()> {
    match &args.command {
        Command::Init(cmd_args) => cmd_init::run(&args.global_args, cmd_args),
        Command::Calc(cmd_args) => cmd_calc::run(&args.global_args, cmd_args),
        Command::Report(cmd_args) => cmd_report::run(&args.global_args, cmd_args),
        Command::Share(cmd_args) => cmd_share::run(&args.global_args, cmd_args).map(|_| ()),
        Command::Open(cmd_args) => cmd_open::run(&args.global_args, cmd_args),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::plan::Weekday;

    #[test]
    fn test_cli_parses_calc() {
        let cli = Cli::try_parse_from([
            "gfscalc",
            "-c",
            "plan.json",
            "calc",
            "--restore-points",
            "14",
            "--days",
            "mo, We,friday",
            "--years",
            "3",
            "--growth",
            "12.5",
        ])
        .unwrap();

        assert_eq!(cli.global_args.config, PathBuf::from("plan.json"));
        match cli.command {
            Command::Calc(args) => {
                assert_eq!(args.overrides.restore_points, Some(14));
                assert_eq!(
                    args.overrides.days,
                    Some(vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday])
                );
                assert_eq!(args.projection.years, 3);
                assert_eq!(args.projection.growth, 12.5);
            }
            _ => panic!("Expected the calc command"),
        }
    }

    #[test]
    fn test_cli_rejects_invalid_link() {
        assert!(Cli::try_parse_from(["gfscalc", "calc", "--link", "short"]).is_err());
        assert!(Cli::try_parse_from(["gfscalc", "open", "ABCDEFGHIJKLMNOP"]).is_ok());
    }

    #[test]
    fn test_projection_shell() {
        let args = ProjectionArgs {
            years: 150,
            growth: 10.0,
        };
        let shell = args.shell().unwrap();
        assert_eq!(shell.projection_years, 150);

        let args = ProjectionArgs {
            years: 1,
            growth: f64::INFINITY,
        };
        assert!(args.shell().is_err());
    }
}
