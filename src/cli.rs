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

use std::path::PathBuf;

use bpaf::Bpaf;

use crate::request::{BoolFlag, CommandInput, StringFlag};

/// Define the command-line arguments of the tool.
#[must_use]
pub fn arguments() -> Cli {
    cli().run()
}

/// Fetch the release notes of a JFrog product version.
#[derive(Clone, Debug, Bpaf)]
#[bpaf(options)]
pub struct Cli {
    /// Display more detailed progress messages.
    #[bpaf(short, long, req_flag(()), many, map(vec_len))]
    pub verbose: usize,

    /// The configuration file with servers and the product catalog.
    #[bpaf(long, argument("FILE"))]
    pub config: Option<PathBuf>,

    #[bpaf(external(commands))]
    pub command: Commands,
}

#[derive(Clone, Debug, Bpaf)]
pub enum Commands {
    ReleaseNotes(#[bpaf(external(release_notes_args))] ReleaseNotesArgs),
    /// Write an example configuration file.
    #[bpaf(command)]
    Init {
        /// Replace an existing configuration file.
        #[bpaf(long)]
        force: bool,
    },
}

/// Get the release notes of a JFrog product version.
#[derive(Clone, Debug, Default, Bpaf)]
#[bpaf(command("release-notes"), long("rn"))]
pub struct ReleaseNotesArgs {
    /// Get the release notes of the currently deployed version. Give only the product.
    #[bpaf(long)]
    pub current: bool,

    /// Print only the release date.
    #[bpaf(long)]
    pub date: bool,

    /// The product version, instead of the second argument.
    #[bpaf(long, argument("VERSION"))]
    pub version: Option<String>,

    /// The configured server that --current queries.
    #[bpaf(long("server-id"), argument("ID"))]
    pub server_id: Option<String>,

    /// The product, followed by its version unless --version or --current is set.
    #[bpaf(positional("PRODUCT [VERSION]"), many)]
    pub arguments: Vec<String>,
}

impl CommandInput for ReleaseNotesArgs {
    fn arguments(&self) -> &[String] {
        &self.arguments
    }

    fn bool_flag(&self, flag: BoolFlag) -> bool {
        match flag {
            BoolFlag::Current => self.current,
            BoolFlag::Date => self.date,
        }
    }

    fn string_flag(&self, flag: StringFlag) -> Option<&str> {
        match flag {
            StringFlag::Version => self.version.as_deref(),
        }
    }
}

// `bpaf` counts repeated flags by collecting them.
#[allow(clippy::needless_pass_by_value)]
fn vec_len<T>(vec: Vec<T>) -> usize {
    vec.len()
}

#[cfg(test)]
mod tests {
    use bpaf::Args;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        cli().run_inner(Args::from(args)).expect("the arguments should parse")
    }

    #[test]
    fn release_notes_with_flags() {
        let parsed = parse(&[
            "-vv",
            "release-notes",
            "--date",
            "--version",
            "7.9.2",
            "artifactory",
        ]);
        assert_eq!(parsed.verbose, 2);
        let Commands::ReleaseNotes(args) = parsed.command else {
            panic!("expected the release-notes command");
        };
        assert!(args.bool_flag(BoolFlag::Date));
        assert!(!args.bool_flag(BoolFlag::Current));
        assert_eq!(args.string_flag(StringFlag::Version), Some("7.9.2"));
        assert_eq!(args.arguments(), ["artifactory"]);
    }

    #[test]
    fn alias_and_extra_positionals() {
        let parsed = parse(&["rn", "artifactory", "7.11.2", "xray"]);
        let Commands::ReleaseNotes(args) = parsed.command else {
            panic!("expected the release-notes command");
        };
        // Counting the arguments is up to the request parser.
        assert_eq!(args.arguments().len(), 3);
    }

    #[test]
    fn init_and_config() {
        let parsed = parse(&["--config", "/tmp/rn.yaml", "init", "--force"]);
        assert_eq!(parsed.config, Some(PathBuf::from("/tmp/rn.yaml")));
        assert!(matches!(parsed.command, Commands::Init { force: true }));
    }

    #[test]
    fn check_invariants() {
        cli().check_invariants(false);
    }
}
