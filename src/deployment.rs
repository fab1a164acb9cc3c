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
Resolving the "current" version of a product from a connected deployment.

The deployment is an Artifactory server. Its own version is the current version
of Artifactory. Xray runs next to it, and only Artifactory servers older than 7.0.0
expose the Xray version at a predictable address.
*/

use reqwest::{Client, StatusCode, Url};
use semver::Version;
use serde::Deserialize;

use crate::config::{Credentials, ServerDetails};
use crate::errors::{Error, Result};
use crate::http;

pub const XRAY_PRODUCT: &str = "xray";

/// Artifactory servers from this version on don't get the secondary Xray lookup.
const XRAY_LOOKUP_LIMIT: Version = Version::new(7, 0, 0);

const DEPLOYMENT_VERSION_PATH: &str = "api/system/version";
const XRAY_VERSION_PATH: &[&str] = &["xray", "api", "v1", "system", "version"];

/// The response of the Artifactory version endpoint.
#[derive(Debug, Deserialize)]
struct DeploymentVersion {
    version: String,
    #[serde(default)]
    revision: String,
}

/// The response of the Xray version endpoint.
#[derive(Debug, Deserialize)]
pub struct XrayVersion {
    pub xray_version: String,
    #[serde(default)]
    pub xray_revision: String,
}

/// Find out which version of the product the configured deployment runs.
pub async fn current_version(
    client: &Client,
    server: &ServerDetails,
    product: &str,
) -> Result<String> {
    log::info!(
        "Resolving the current {} version from server '{}'.",
        product,
        server.id
    );
    let credentials = server.credentials();

    let deployment_version = deployment_version(client, &server.url, &credentials).await?;

    if product != XRAY_PRODUCT {
        return Ok(deployment_version);
    }

    if !supports_xray_lookup(&deployment_version)? {
        // Newer deployments always fail here, whatever Xray version they run.
        // Kept as observed until the intended behavior is clarified.
        return Err(Error::UnsupportedVersionRange);
    }

    let url = xray_version_url(&server.url)?;
    xray_version(client, &url).await
}

/// Query the version that the deployment itself reports.
async fn deployment_version(
    client: &Client,
    server_url: &str,
    credentials: &Credentials,
) -> Result<String> {
    let url = format!("{server_url}{DEPLOYMENT_VERSION_PATH}");
    let (status, body) = http::get(client, &url, credentials).await?;
    if status != StatusCode::OK {
        return Err(Error::UnexpectedStatus {
            url,
            status: status.as_u16(),
        });
    }
    let version: DeploymentVersion = http::decode(&body, &url)?;
    log::debug!(
        "The deployment reports version {} (revision {}).",
        version.version,
        version.revision
    );
    Ok(version.version)
}

/// Query the Xray version endpoint next to an older deployment.
async fn xray_version(client: &Client, url: &str) -> Result<String> {
    let (status, body) = http::get(client, url, &Credentials::Anonymous).await?;
    if status != StatusCode::OK {
        return Err(Error::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let version: XrayVersion = http::decode(&body, url)?;
    log::debug!(
        "Xray reports version {} (revision {}).",
        version.xray_version,
        version.xray_revision
    );
    Ok(version.xray_version)
}

/// Whether the deployment is old enough for the secondary Xray lookup.
pub fn supports_xray_lookup(deployment_version: &str) -> Result<bool> {
    Ok(parse_lenient(deployment_version)? < XRAY_LOOKUP_LIMIT)
}

/// The Xray version endpoint: the deployment URL without its last path segment,
/// followed by the Xray API path.
pub fn xray_version_url(server_url: &str) -> Result<String> {
    let invalid = || Error::Configuration(format!("The server URL is not valid: {server_url}"));

    let mut url = Url::parse(server_url).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|()| invalid())?
        .pop_if_empty()
        .pop()
        .extend(XRAY_VERSION_PATH);

    Ok(url.to_string())
}

/// Parse a version that might lack the minor or patch component, or carry a `v` prefix.
pub fn parse_lenient(version: &str) -> Result<Version> {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let core_end = trimmed.find(|c: char| c == '-' || c == '+').unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(core_end);
    let missing = 2_usize.saturating_sub(core.matches('.').count());
    let padded = format!("{core}{}{suffix}", ".0".repeat(missing));

    Version::parse(&padded).map_err(|source| Error::InvalidVersion {
        version: version.to_string(),
        source,
    })
}
