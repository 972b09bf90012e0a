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

use std::path::Path;

use gfscalc::commands::GlobalArgs;

mod test_cmd_calc;
mod test_cmd_init;
mod test_cmd_share;

fn quiet_global_args(root: &Path) -> GlobalArgs {
    GlobalArgs {
        config: root.join("gfscalc.json"),
        link_store: root.join("links"),
        quiet: true,
        verbosity: None,
    }
}
