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
use chrono::Utc;
use clap::Args;

use crate::{
    share::{self, LinkId},
    ui, utils,
};

use super::GlobalArgs;

#[derive(Args, Debug)]
#[clap(about = "Retrieve a shared configuration")]
pub struct CmdArgs {
    /// Link ID
    #[arg(value_parser)]
    pub id: LinkId,

    /// Save the configuration to a file instead of printing it
    #[arg(short, long, value_parser)]
    pub output: Option<PathBuf>,
}

pub fn run(global: &GlobalArgs, args: &CmdArgs) -> Result<()> {
    let store = super::open_link_store(global);
    let config = share::open_link(&store, &args.id, Utc::now())?;
    config.validate()?;

    match &args.output {
        Some(output) => {
            utils::json::save_json_pretty(&config, output)?;
            ui::cli::log!("Configuration written to \'{}\'", output.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&config)?),
    }

    Ok(())
}
