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

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    plan,
    ui::{self, report},
};

use super::{GlobalArgs, ProjectionArgs, SourceArgs};

#[derive(Args, Debug)]
#[clap(about = "Print a summary of the configuration and its storage estimate")]
pub struct CmdArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    #[clap(flatten)]
    pub projection: ProjectionArgs,

    /// Write the report to a text file instead of printing it
    #[arg(short, long, value_parser)]
    pub output: Option<PathBuf>,
}

pub fn run(global: &GlobalArgs, args: &CmdArgs) -> Result<()> {
    let config = super::load_config(global, &args.source)?;
    let shell = args.projection.shell()?;
    let calculation = plan::calculate(&config, &shell);

    match &args.output {
        Some(output) => {
            let text = report::render_report(&calculation, false);
            std::fs::write(output, text)
                .with_context(|| format!("Could not write report to \'{}\'", output.display()))?;
            ui::cli::log!("Report written to \'{}\'", output.display());
        }
        None => {
            println!();
            print!("{}", report::render_report(&calculation, true));
        }
    }

    Ok(())
}
