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

//! The mapping from product names to their release notes endpoints.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::errors::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://bintray.com/api/v1/packages/jfrog";

/// The newest revision of the built-in product mapping.
pub const LATEST_REVISION: u32 = 2;

/// The placeholder that the requested version replaces in an endpoint template.
const VERSION_PLACEHOLDER: &str = "{version}";

// Revision 1 knew only Artifactory and Xray. Revision 2 added Pipelines.
const REVISION_1: &[(&str, &str)] = &[
    (
        "artifactory",
        "artifactory-pro/jfrog-artifactory-pro/versions/{version}/release_notes/",
    ),
    (
        "xray",
        "jfrog-xray/jfrog-xray/versions/{version}/release_notes/",
    ),
];
const REVISION_2_ADDITIONS: &[(&str, &str)] = &[(
    "pipelines",
    "pipelines/jfrog-pipelines/versions/{version}/release_notes/",
)];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::revision(LATEST_REVISION));

/// An immutable, versioned set of product endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    pub revision: u32,
    pub base_url: String,
    products: BTreeMap<String, String>,
}

/// The optional `catalog` section of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogOverrides {
    pub revision: Option<u32>,
    pub base_url: Option<String>,
    #[serde(default)]
    pub products: BTreeMap<String, String>,
}

impl Catalog {
    /// The built-in catalog at the latest revision.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// The built-in catalog at a specific revision.
    /// Unknown revisions fall back to the latest one.
    #[must_use]
    pub fn revision(revision: u32) -> Self {
        let revision = if (1..=LATEST_REVISION).contains(&revision) {
            revision
        } else {
            log::warn!(
                "Unknown catalog revision {}. Using revision {}.",
                revision,
                LATEST_REVISION
            );
            LATEST_REVISION
        };

        let mut products: BTreeMap<String, String> = REVISION_1
            .iter()
            .map(|(name, template)| ((*name).to_string(), (*template).to_string()))
            .collect();
        if revision >= 2 {
            products.extend(
                REVISION_2_ADDITIONS
                    .iter()
                    .map(|(name, template)| ((*name).to_string(), (*template).to_string())),
            );
        }

        Self {
            revision,
            base_url: DEFAULT_BASE_URL.to_string(),
            products,
        }
    }

    /// Apply the user's configuration on top of a built-in revision.
    #[must_use]
    pub fn with_overrides(overrides: CatalogOverrides) -> Self {
        let mut catalog = Self::revision(overrides.revision.unwrap_or(LATEST_REVISION));
        if let Some(base_url) = overrides.base_url {
            catalog.base_url = base_url;
        }
        catalog.products.extend(overrides.products);
        catalog
    }

    /// Product names in alphabetical order.
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    /// Check that the catalog knows the product, without building any URL yet.
    pub fn ensure_known(&self, product: &str) -> Result<()> {
        self.template(product).map(|_| ()).map_err(|e| {
            log::debug!(
                "Catalog revision {} knows these products: {}",
                self.revision,
                self.products().collect::<Vec<_>>().join(", ")
            );
            e
        })
    }

    /// The full release notes URL of a product version.
    pub fn release_notes_url(&self, product: &str, version: &str) -> Result<String> {
        let endpoint = self.template(product)?.replace(VERSION_PLACEHOLDER, version);
        Ok(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        ))
    }

    fn template(&self, product: &str) -> Result<&str> {
        self.products
            .get(product)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownProduct(product.to_string()))
    }
}
