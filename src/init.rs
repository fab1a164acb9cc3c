/*
jfrog-release-notes: Fetch the release notes of a JFrog product version.
Copyright (C) 2026  The jfrog-release-notes contributors

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

/*!
The `init` subcommand, which writes an example configuration file.

This makes it more convenient to connect a deployment for the `--current` flag.
*/

use std::fs;
use std::path::Path;

use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;

/// The example configuration file in the source repository.
static EXAMPLE_CONFIG: &str = include_str!("../example/config.yaml");

/// Write the example configuration to the selected file.
///
/// If the parent directory doesn't exist, create it.
pub fn write_example_config(file: &Path, force: bool) -> Result<()> {
    if file.exists() && !force {
        bail!(
            "The configuration file already exists: {}. Use --force to replace it.",
            file.display()
        );
    }

    if let Some(dir) = file.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            log::info!("The directory does not exist. Creating.");
            fs::create_dir_all(dir).wrap_err("Failed to create the configuration directory.")?;
        }
    }

    fs::write(file, EXAMPLE_CONFIG).wrap_err("Failed to write the configuration file.")?;
    log::info!("Created the configuration file: {}", file.display());

    Ok(())
}
