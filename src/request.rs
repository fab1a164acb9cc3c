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

use crate::errors::{Error, Result};

/// Switches of the `release-notes` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoolFlag {
    Current,
    Date,
}

/// Flags of the `release-notes` command that take a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringFlag {
    Version,
}

/// Whatever carries the positional arguments and flags of a single invocation.
///
/// This keeps the request parsing independent of the command-line library.
pub trait CommandInput {
    fn arguments(&self) -> &[String];
    fn bool_flag(&self, flag: BoolFlag) -> bool;
    fn string_flag(&self, flag: StringFlag) -> Option<&str>;
}

/// What the user asked for in a single invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestConfiguration {
    pub product: String,
    pub version: String,
    pub use_current_version: bool,
    pub date_only: bool,
}

impl RequestConfiguration {
    /// Build the request from the command input, or reject an invalid combination
    /// of arguments and flags.
    pub fn from_input(input: &impl CommandInput) -> Result<Self> {
        let arguments = input.arguments();
        let current = input.bool_flag(BoolFlag::Current);
        let version_flag = input
            .string_flag(StringFlag::Version)
            .filter(|version| !version.is_empty());

        let mut conf = Self::default();

        if current {
            if arguments.len() != 1 {
                return Err(Error::Argument(format!(
                    "Wrong number of arguments. --current flag expects 1 argument: 'product'. Received: {}",
                    arguments.len()
                )));
            }
            conf.use_current_version = true;
        }

        conf.date_only = input.bool_flag(BoolFlag::Date);

        if let Some(version) = version_flag {
            conf.version = version.to_string();
        }

        match arguments {
            [product, version] => {
                conf.product = product.clone();
                conf.version = version.clone();
            }
            [product] if version_flag.is_some() || current => {
                conf.product = product.clone();
            }
            _ => {
                return Err(Error::Argument(format!(
                    "Wrong number of arguments. Expected: 1 or 2, Received: {}",
                    arguments.len()
                )));
            }
        }

        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Input {
        arguments: Vec<String>,
        current: bool,
        date: bool,
        version: Option<String>,
    }

    impl Input {
        fn args(arguments: &[&str]) -> Self {
            Self {
                arguments: arguments.iter().map(ToString::to_string).collect(),
                ..Self::default()
            }
        }
    }

    impl CommandInput for Input {
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

    #[test]
    fn product_and_version() {
        let conf = RequestConfiguration::from_input(&Input::args(&["artifactory", "7.11.2"]))
            .expect("two arguments are valid");
        assert_eq!(
            conf,
            RequestConfiguration {
                product: "artifactory".into(),
                version: "7.11.2".into(),
                use_current_version: false,
                date_only: false,
            }
        );
    }

    #[test]
    fn wrong_argument_counts() {
        let cases: [&[&str]; 3] = [&[], &["artifactory"], &["artifactory", "7.11.2", "xray"]];
        for args in cases {
            let result = RequestConfiguration::from_input(&Input::args(args));
            assert!(
                matches!(result, Err(Error::Argument(_))),
                "{args:?} should be rejected"
            );
        }
    }

    #[test]
    fn version_flag_with_product() {
        let input = Input {
            version: Some("3.11.2".into()),
            date: true,
            ..Input::args(&["xray"])
        };
        let conf = RequestConfiguration::from_input(&input).expect("version flag is enough");
        assert_eq!(conf.product, "xray");
        assert_eq!(conf.version, "3.11.2");
        assert!(conf.date_only);
        assert!(!conf.use_current_version);
    }

    #[test]
    fn positional_version_overrides_flag() {
        let input = Input {
            version: Some("1.0.0".into()),
            ..Input::args(&["artifactory", "7.9.2"])
        };
        let conf = RequestConfiguration::from_input(&input).expect("valid");
        assert_eq!(conf.version, "7.9.2");
    }

    #[test]
    fn empty_version_flag_is_ignored() {
        let input = Input {
            version: Some(String::new()),
            ..Input::args(&["artifactory"])
        };
        assert!(matches!(
            RequestConfiguration::from_input(&input),
            Err(Error::Argument(_))
        ));
    }

    #[test]
    fn current_needs_exactly_the_product() {
        let input = Input {
            current: true,
            ..Input::args(&["artifactory"])
        };
        let conf = RequestConfiguration::from_input(&input).expect("valid");
        assert!(conf.use_current_version);
        assert_eq!(conf.product, "artifactory");
        assert!(conf.version.is_empty());

        let input = Input {
            current: true,
            ..Input::args(&["artifactory", "7.9.2"])
        };
        let err = RequestConfiguration::from_input(&input).unwrap_err();
        assert!(err.to_string().contains("--current"));
    }
}
