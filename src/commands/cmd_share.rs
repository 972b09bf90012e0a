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
use chrono::{Duration, Utc};
use clap::Args;
use colored::Colorize;

use crate::{global::defaults::DEFAULT_LINK_TTL_SECS, share, ui};

use super::{GlobalArgs, SourceArgs};

#[derive(Args, Debug)]
#[clap(about = "Store the configuration under a link that can be opened later")]
pub struct CmdArgs {
    /// Seconds until the link expires
    #[arg(long, default_value_t = DEFAULT_LINK_TTL_SECS)]
    pub ttl: i64,
}

impl Default for CmdArgs {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_LINK_TTL_SECS,
        }
    }
}

/// Shares the configuration and returns the new link.
pub fn run(global: &GlobalArgs, args: &CmdArgs) -> Result<share::LinkId> {
    if args.ttl <= 0 {
        bail!("The link lifetime must be positive");
    }

    let config = super::load_config(global, &SourceArgs::default())?;
    let store = super::open_link_store(global);

    let now = Utc::now();
    let ttl = Duration::seconds(args.ttl);
    let id = share::share_config(&store, &config.without_points(), ttl, now)?;

    ui::cli::log_always!("{}", id.as_str().bold().yellow());
    ui::cli::verbose_1!(
        "Link stored in \'{}\'. Expires on {}",
        store.root().display(),
        (now + ttl).format("%Y-%m-%d %H:%M:%S %Z")
    );

    Ok(id)
}
