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

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use crate::{plan::ScheduleConfig, ui, utils};

use super::GlobalArgs;

#[derive(Args, Debug, Default)]
#[clap(about = "Write a default configuration file")]
pub struct CmdArgs {
    /// Overwrite an existing configuration without asking
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(global: &GlobalArgs, args: &CmdArgs) -> Result<()> {
    let path = &global.config;

    if path.exists() && !args.force {
        let prompt = format!("\'{}\' already exists. Overwrite it?", path.display());
        if !ui::cli::confirm(&prompt)? {
            bail!("Configuration \'{}\' left untouched", path.display());
        }
    }

    let config = ScheduleConfig::default();
    utils::json::save_json_pretty(&config, path)?;

    ui::cli::log!(
        "Default configuration written to \'{}\'",
        path.display().to_string().bold()
    );
    ui::cli::verbose_1!("Policy: {}", config.retention_policy());

    Ok(())
}
