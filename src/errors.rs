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

//! Every way that fetching release notes can fail.
//!
//! The messages are shown to the user as they are, so each variant carries
//! the URL, product, or version that it concerns.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The positional arguments and flags don't form a valid request.
    #[error("{0}")]
    Argument(String),

    /// No usable deployment connection, or an unreadable configuration file.
    #[error("{0}")]
    Configuration(String),

    #[error("Product name {0} is not valid")]
    UnknownProduct(String),

    #[error("couldn't find release notes for {product} version {version}")]
    NotFound { product: String, version: String },

    #[error("Received unexpected status code from {url}. status code: {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Received unexpected response, failed to parse response from {url}. err: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Couldn't find release date for version {0}")]
    DateNotFound(String),

    /// The release notes contain `Released:` but no heading after it.
    #[error("Malformed release notes format for version {0}: no section heading follows the release date")]
    MalformedReleaseNotes(String),

    /// Deployments at 7.0.0 and later always end up here for Xray.
    #[error("Can't get release notes for Xray version lower than 3.0.0")]
    UnsupportedVersionRange,

    #[error("Deployment reported an invalid version '{version}': {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("Failed to send request to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
