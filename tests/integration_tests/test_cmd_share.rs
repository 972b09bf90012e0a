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
    use std::str::FromStr;

    use anyhow::Result;
    use gfscalc::{
        commands::{
            ProjectionArgs, SourceArgs, cmd_calc, cmd_init, cmd_open, cmd_share,
        },
        plan::{Calculation, ScheduleConfig},
        share::LinkId,
        utils,
    };
    use tempfile::tempdir;

    use crate::integration_tests::quiet_global_args;

    #[test]
    fn test_share_and_open() -> Result<()> {
        let tmp_dir = tempdir()?;
        let global = quiet_global_args(tmp_dir.path());

        cmd_init::run(&global, &cmd_init::CmdArgs::default())?;
        let mut config: ScheduleConfig = utils::json::load_json(&global.config)?;
        config.gfs.monthly = 3;
        config.main_options.restore_points = 21;
        utils::json::save_json_pretty(&config, &global.config)?;

        let id = cmd_share::run(&global, &cmd_share::CmdArgs::default())?;
        assert!(global.link_store.join(format!("{}.json", id)).exists());

        let output = tmp_dir.path().join("opened.json");
        cmd_open::run(
            &global,
            &cmd_open::CmdArgs {
                id: id.clone(),
                output: Some(output.clone()),
            },
        )?;
        let opened: ScheduleConfig = utils::json::load_json(&output)?;
        assert_eq!(opened, config);

        // The shared link takes precedence over the configuration file
        std::fs::remove_file(&global.config)?;
        let result_path = tmp_dir.path().join("result.json");
        let calc_args = cmd_calc::CmdArgs {
            source: SourceArgs { link: Some(id) },
            overrides: Default::default(),
            projection: ProjectionArgs::default(),
            json: false,
            output: Some(result_path.clone()),
        };
        cmd_calc::run(&global, &calc_args)?;

        let result: Calculation = utils::json::load_json(&result_path)?;
        assert_eq!(result.config.gfs.monthly, 3);
        assert_eq!(result.config.main_options.restore_points, 21);
        Ok(())
    }

    #[test]
    fn test_open_unknown_link() -> Result<()> {
        let tmp_dir = tempdir()?;
        let global = quiet_global_args(tmp_dir.path());

        let args = cmd_open::CmdArgs {
            id: LinkId::from_str("0123456789abcdef")?,
            output: None,
        };
        let err = cmd_open::run(&global, &args).unwrap_err();
        assert_eq!(err.to_string(), "Link is not valid or has already expired!");
        Ok(())
    }

    #[test]
    fn test_share_rejects_non_positive_ttl() -> Result<()> {
        let tmp_dir = tempdir()?;
        let global = quiet_global_args(tmp_dir.path());

        assert!(cmd_share::run(&global, &cmd_share::CmdArgs { ttl: 0 }).is_err());
        assert!(!global.link_store.exists());
        Ok(())
    }
}
