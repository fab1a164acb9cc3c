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

// Enable additional clippy lints by default.
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::todo
)]
// Most of the error documentation would only repeat the `errors` module.
#![allow(clippy::missing_errors_doc)]
// Forbid unsafe code in this program.
#![forbid(unsafe_code)]

use std::path::Path;

use color_eyre::eyre::{eyre, Result, WrapErr};

pub mod catalog;
pub mod cli;
pub mod config;
pub mod deployment;
pub mod errors;
pub mod fetch;
pub mod filter;
mod http;
mod init;
mod logging;
pub mod request;

use cli::{Cli, Commands, ReleaseNotesArgs};
use config::Config;
use request::RequestConfiguration;

/// Run the subcommand that the user picked on the command line.
pub fn run(cli: &Cli) -> Result<()> {
    // Initialize the logging system based on the set verbosity
    logging::initialize_logger(cli.verbose)?;

    match &cli.command {
        // If the user picked the `release-notes` subcommand, print the requested notes
        Commands::ReleaseNotes(args) => {
            let text = display_release_notes(cli.config.as_deref(), args)?;
            println!("{text}");
        }
        // If the user picked the `init` subcommand, write the example configuration
        Commands::Init { force } => {
            let file = config::locate(cli.config.as_deref()).ok_or_else(|| {
                eyre!("Cannot find the configuration directory. Use the --config option.")
            })?;
            init::write_example_config(&file, *force)
                .wrap_err("Failed to initialize the configuration file.")?;
        }
    }

    Ok(())
}

/// Run the `release-notes` subcommand: validate the input, load the configuration,
/// and fetch the notes.
fn display_release_notes(config_file: Option<&Path>, args: &ReleaseNotesArgs) -> Result<String> {
    let request = RequestConfiguration::from_input(args)?;
    log::debug!("{:?}", request);

    let config = Config::load(config_file)?;
    if let Some(source) = &config.source {
        log::debug!("Using the configuration from {}", source.display());
    }

    let text = release_notes(request, &config, args.server_id.as_deref())
        .wrap_err("Failed to get the release notes.")?;

    Ok(text)
}

/// Fetch the release notes that the request describes, resolving the current version first
/// if the request asks for it.
///
/// Every request happens in sequence on a single thread.
#[tokio::main(flavor = "current_thread")]
pub async fn release_notes(
    mut request: RequestConfiguration,
    config: &Config,
    server_id: Option<&str>,
) -> errors::Result<String> {
    // Reject unknown products before any network access.
    config.catalog.ensure_known(&request.product)?;

    let client = http::client()?;

    if request.use_current_version {
        let server = config.server(server_id)?;
        request.version =
            deployment::current_version(&client, &server, &request.product).await?;
        log::info!("The current {} version is {}.", request.product, request.version);
    }

    let payload =
        fetch::release_notes(&client, &config.catalog, &request.product, &request.version)
            .await?;

    filter::filter_content(&payload.bintray.content, &request.version, request.date_only)
}
