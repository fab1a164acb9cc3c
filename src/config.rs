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

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::{Catalog, CatalogOverrides};
use crate::errors::{Error, Result};

/// The environment variable that can point to the configuration file.
pub const CONFIG_ENV_VAR: &str = "JFROG_RN_CONFIG";
/// The environment variable that supplies the access token if the server entry has none.
pub const TOKEN_ENV_VAR: &str = "JFROG_ACCESS_TOKEN";

const CONFIG_DIR_NAME: &str = "jfrog-rn";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// The connection details of a single deployment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerDetails {
    pub id: String,
    pub url: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub access_token: Option<String>,
    #[serde(default)]
    pub default: bool,
}

/// How to authenticate against a deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    Token(String),
    Basic { user: String, password: String },
    Anonymous,
}

/// The parsed configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub servers: Vec<ServerDetails>,
    pub catalog: Option<CatalogOverrides>,
}

/// Everything that an invocation needs besides the command-line input.
#[derive(Debug)]
pub struct Config {
    /// The file that the configuration came from, if there was one.
    pub source: Option<PathBuf>,
    pub servers: Vec<ServerDetails>,
    pub catalog: Catalog,
}

impl Config {
    /// Load the configuration file from the explicit path, or from the default location.
    ///
    /// An explicitly requested file must exist. A missing file at the default location
    /// results in an empty configuration with the built-in catalog.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        // Only a file that the user pointed to must exist.
        let required = explicit.is_some() || std::env::var_os(CONFIG_ENV_VAR).is_some();

        match locate(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) if required => Err(Error::Configuration(format!(
                "The configuration file does not exist: {}",
                path.display()
            ))),
            _ => {
                log::debug!("No configuration file found. Using the built-in catalog.");
                Ok(Self::empty())
            }
        }
    }

    /// A configuration without any servers, using the built-in catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            source: None,
            servers: Vec::new(),
            catalog: Catalog::builtin().clone(),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        log::debug!("Reading the configuration file: {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "Cannot read the configuration file {}: {}",
                path.display(),
                e
            ))
        })?;
        let mut config = Self::parse(&text).map_err(|e| match e {
            Error::Configuration(msg) => {
                Error::Configuration(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse the YAML text of a configuration file.
    pub fn parse(text: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(text).map_err(|e| {
            Error::Configuration(format!("Cannot parse the configuration file: {e}"))
        })?;

        let catalog = match file.catalog {
            Some(overrides) => Catalog::with_overrides(overrides),
            None => Catalog::builtin().clone(),
        };

        Ok(Self {
            source: None,
            servers: file.servers,
            catalog,
        })
    }

    /// Pick the server to query.
    ///
    /// With an ID, the server must exist. Without one, use the server marked as default,
    /// or the only configured server.
    pub fn server(&self, server_id: Option<&str>) -> Result<ServerDetails> {
        let server = match server_id {
            Some(id) => self.servers.iter().find(|server| server.id == id),
            None => self
                .servers
                .iter()
                .find(|server| server.default)
                .or_else(|| match self.servers.as_slice() {
                    [only] => Some(only),
                    _ => None,
                }),
        };

        let Some(server) = server else {
            return Err(Error::Configuration(
                "no server-id was found, or the server-id has no url".to_string(),
            ));
        };

        if server.url.trim().is_empty() {
            return Err(Error::Configuration(format!(
                "no server-id was found, or the server-id has no url: {}",
                server.id
            )));
        }

        let mut server = server.clone();
        if !server.url.ends_with('/') {
            server.url.push('/');
        }

        Ok(server)
    }
}

impl ServerDetails {
    /// The credentials to use, falling back on the access token from the environment.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        // Empty values in the file count as missing.
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        if let Some(token) = non_empty(&self.access_token) {
            return Credentials::Token(token);
        }
        if let (Some(user), Some(password)) = (non_empty(&self.user), self.password.clone()) {
            return Credentials::Basic { user, password };
        }
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => Credentials::Token(token),
            _ => Credentials::Anonymous,
        }
    }
}

/// The configuration file to use: the explicit path, the path in the environment,
/// or the file in the platform configuration directory.
#[must_use]
pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .or_else(default_path)
}

/// The configuration file in the platform configuration directory.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
