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

//! Small helpers around the shared `reqwest` client.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Credentials;
use crate::errors::{Error, Result};

/// Prepare the HTTP client that all requests of an invocation share.
pub fn client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::Configuration(format!("Failed to prepare the HTTP client: {e}")))
}

/// Send a JSON GET request and return the status code with the body as text.
///
/// Status codes aren't interpreted here. Every caller reacts to them differently.
pub async fn get(
    client: &Client,
    url: &str,
    credentials: &Credentials,
) -> Result<(StatusCode, String)> {
    log::debug!("GET {}", url);

    let request = client.get(url).header(CONTENT_TYPE, "application/json");
    let request = match credentials {
        Credentials::Token(token) => request.bearer_auth(token),
        Credentials::Basic { user, password } => request.basic_auth(user, Some(password)),
        Credentials::Anonymous => request,
    };

    let response = request.send().await.map_err(|source| Error::Request {
        url: url.to_string(),
        source,
    })?;
    let status = response.status();
    let body = response.text().await.map_err(|source| Error::Request {
        url: url.to_string(),
        source,
    })?;

    log::debug!("{} responded with {}", url, status);

    Ok((status, body))
}

/// Deserialize a JSON response body that came from `url`.
pub fn decode<T: DeserializeOwned>(body: &str, url: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| Error::MalformedResponse {
        url: url.to_string(),
        source,
    })
}
