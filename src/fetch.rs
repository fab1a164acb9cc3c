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

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::config::Credentials;
use crate::errors::{Error, Result};
use crate::http;

/// The release notes envelope that the catalog service returns.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReleaseNotesPayload {
    #[serde(alias = "Version")]
    pub version: String,
    pub package: String,
    pub repo: String,
    pub owner: String,
    pub bintray: Content,
}

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Content {
    pub content: String,
    pub syntax: String,
}

/// Download the release notes of a product version.
pub async fn release_notes(
    client: &Client,
    catalog: &Catalog,
    product: &str,
    version: &str,
) -> Result<ReleaseNotesPayload> {
    let url = catalog.release_notes_url(product, version)?;
    log::info!("Downloading release notes for {} {}.", product, version);

    // The catalog is public. Never send deployment credentials there.
    let (status, body) = http::get(client, &url, &Credentials::Anonymous).await?;

    interpret(status, &body, &url, product, version)
}

/// Turn the catalog's response into the payload, or into the matching error.
pub fn interpret(
    status: StatusCode,
    body: &str,
    url: &str,
    product: &str,
    version: &str,
) -> Result<ReleaseNotesPayload> {
    match status {
        StatusCode::OK => http::decode(body, url),
        StatusCode::NOT_FOUND => Err(Error::NotFound {
            product: product.to_string(),
            version: version.to_string(),
        }),
        other => Err(Error::UnexpectedStatus {
            url: url.to_string(),
            status: other.as_u16(),
        }),
    }
}
