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
        commands::cmd_init,
        plan::{ScheduleConfig, Weekday},
        utils,
    };
    use tempfile::tempdir;

    use crate::integration_tests::quiet_global_args;

    #[test]
    fn test_init_writes_default_config() -> Result<()> {
        let tmp_dir = tempdir()?;
        let global = quiet_global_args(tmp_dir.path());

        cmd_init::run(&global, &cmd_init::CmdArgs::default())?;

        let config: ScheduleConfig = utils::json::load_json(&global.config)?;
        assert_eq!(config, ScheduleConfig::default());
        assert_eq!(
            config.scheduled_days(),
            vec![
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday
            ]
        );
        assert_eq!(config.full_days(), vec![Weekday::Friday]);
        Ok(())
    }

    #[test]
    fn test_init_force_overwrites() -> Result<()> {
        let tmp_dir = tempdir()?;
        let global = quiet_global_args(tmp_dir.path());

        std::fs::write(&global.config, "{\"gfs\": {\"weekly\": 9}}")?;
        cmd_init::run(&global, &cmd_init::CmdArgs { force: true })?;

        let config: ScheduleConfig = utils::json::load_json(&global.config)?;
        assert_eq!(config.gfs.weekly, 0);
        Ok(())
    }
}
