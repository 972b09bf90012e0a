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

#![cfg(test)]

mod tests {
    use anyhow::Result;
    use gfscalc::{
        commands::{
            ProjectionArgs, SourceArgs,
            cmd_calc::{self, OverrideArgs},
            cmd_init, cmd_report,
        },
        plan::{self, Calculation, ScheduleConfig, StorageEstimate, Weekday},
        utils,
    };
    use tempfile::tempdir;

    use crate::integration_tests::quiet_global_args;

    fn calc_args(overrides: OverrideArgs, output: Option<std::path::PathBuf>) -> cmd_calc::CmdArgs {
        cmd_calc::CmdArgs {
            source: SourceArgs::default(),
            overrides,
            projection: ProjectionArgs::default(),
            json: false,
            output,
        }
    }

    #[test]
    fn test_calc_without_config_file_uses_defaults() -> Result<()> {
        let tmp_dir = tempdir()?;
        let global = quiet_global_args(tmp_dir.path());
        let output = tmp_dir.path().join("result.json");

        cmd_calc::run(
            &global,
            &calc_args(OverrideArgs::default(), Some(output.clone())),
        )?;

        let result: Calculation = utils::json::load_json(&output)?;
        let expected = plan::calculate(&ScheduleConfig::default(), &StorageEstimate::new(1, 10.0));
        assert_eq!(result, expected);
        assert!(!global.config.exists());
        Ok(())
    }

    #[test]
    fn test_calc_with_overrides() -> Result<()> {
        let tmp_dir = tempdir()?;
        let global = quiet_global_args(tmp_dir.path());
        let output = tmp_dir.path().join("result.json");

        cmd_init::run(&global, &cmd_init::CmdArgs::default())?;

        let overrides = OverrideArgs {
            restore_points: Some(10),
            full_size: Some(50.0),
            increment_size: Some(5.0),
            weekly: Some(2),
            days: Some(vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday]),
            ..Default::default()
        };
        cmd_calc::run(&global, &calc_args(overrides, Some(output.clone())))?;

        let result: Calculation = utils::json::load_json(&output)?;
        assert_eq!(result.config.total_points(), 12);
        assert_eq!(result.estimate.current_max, 290.0);
        assert_eq!(result.estimate.projected_max, 319.0);

        // The configuration file is left as it was
        let stored: ScheduleConfig = utils::json::load_json(&global.config)?;
        assert_eq!(stored, ScheduleConfig::default());
        Ok(())
    }

    #[test]
    fn test_calc_rejects_invalid_sizes() -> Result<()> {
        let tmp_dir = tempdir()?;
        let global = quiet_global_args(tmp_dir.path());

        let overrides = OverrideArgs {
            full_size: Some(0.0),
            ..Default::default()
        };
        assert!(cmd_calc::run(&global, &calc_args(overrides, None)).is_err());
        Ok(())
    }

    #[test]
    fn test_calc_rejects_malformed_config() -> Result<()> {
        let tmp_dir = tempdir()?;
        let global = quiet_global_args(tmp_dir.path());
        std::fs::write(&global.config, "{\"weekdays\": []}")?;

        assert!(cmd_calc::run(&global, &calc_args(OverrideArgs::default(), None)).is_err());
        Ok(())
    }

    #[test]
    fn test_report_to_file() -> Result<()> {
        let tmp_dir = tempdir()?;
        let global = quiet_global_args(tmp_dir.path());
        let output = tmp_dir.path().join("report.txt");

        let args = cmd_report::CmdArgs {
            source: SourceArgs::default(),
            projection: ProjectionArgs {
                years: 150,
                growth: 10.0,
            },
            output: Some(output.clone()),
        };
        cmd_report::run(&global, &args)?;

        let report = std::fs::read_to_string(&output)?;
        assert!(report.contains("Forward-Incremental"));
        assert!(report.contains("Recommended Storage (15% buffer)"));
        // Plain text only
        assert!(!report.contains('\x1b'));
        Ok(())
    }
}
