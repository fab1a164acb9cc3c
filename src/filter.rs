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

//! Narrowing the release notes text down to what the user asked for.

use crate::errors::{Error, Result};

const RELEASED_MARKER: &str = "Released:";
const HEADING_MARKER: &str = "####";

/// Return the full content, or only the release date line in date-only mode.
pub fn filter_content(content: &str, version: &str, date_only: bool) -> Result<String> {
    if date_only {
        released_date(content, version).map(ToString::to_string)
    } else {
        Ok(content.to_string())
    }
}

/// Find the `Released: ...` line, which ends at the next `####` heading.
pub fn released_date<'a>(content: &'a str, version: &str) -> Result<&'a str> {
    let start = content
        .find(RELEASED_MARKER)
        .ok_or_else(|| Error::DateNotFound(version.to_string()))?;
    let from_date = &content[start..];
    let end = from_date
        .find(HEADING_MARKER)
        .ok_or_else(|| Error::MalformedReleaseNotes(version.to_string()))?;

    Ok(from_date[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const XRAY_3_11_2: &str = "### Xray 3.11.2

Released: November 11, 2020
#### Resolved Issues
1. Fixed an issue whereby, when a call to an Xray endpoint that requires authentication is done with bad credentials, consecutive API calls, even with good credentials, might fail as well.
2. Fixed an issue whereby, duplicate update Metadata server events were created causing redundant load on internal systems like RabbitMQ, PostgreSQL and MDS.
3. Fixed an issue whereby, lack of data sanitation sometimes led to SQL injection.
";

    const ARTIFACTORY_7_9_2: &str = "### Artifactory 7.9.2

Released: 20 October, 2020

#### Resolved Issues
1. Fixed an issue occurring in Artifactory version 7.9, whereby when installing or upgrading a JFrog Artifactory HA environment, the HA nodes sometimes failed to start due to a bad hex format for the join key.
2. Fixed an issue, whereby missing dependencies caused RPM installs to fail on certain operating systems.
";

    #[test]
    fn artifactory_date() {
        assert_eq!(
            filter_content(ARTIFACTORY_7_9_2, "7.9.2", true).unwrap(),
            "Released: 20 October, 2020"
        );
    }

    #[test]
    fn artifactory_full() {
        assert_eq!(
            filter_content(ARTIFACTORY_7_9_2, "7.9.2", false).unwrap().trim(),
            ARTIFACTORY_7_9_2.trim()
        );
    }

    #[test]
    fn xray_date() {
        assert_eq!(
            filter_content(XRAY_3_11_2, "3.11.2", true).unwrap(),
            "Released: November 11, 2020"
        );
    }

    #[test]
    fn xray_full() {
        assert_eq!(
            filter_content(XRAY_3_11_2, "3.11.2", false).unwrap().trim(),
            XRAY_3_11_2.trim()
        );
    }

    #[test]
    fn missing_release_date() {
        let err = filter_content("### Xray 3.11.2\n#### Resolved Issues\n", "3.11.2", true)
            .unwrap_err();
        assert!(matches!(err, Error::DateNotFound(ref v) if v == "3.11.2"));
    }

    #[test]
    fn missing_release_date_is_fine_without_date_mode() {
        let content = "### Xray 3.11.2\nNothing here.";
        assert_eq!(filter_content(content, "3.11.2", false).unwrap(), content);
    }

    #[test]
    fn heading_before_the_date_does_not_count() {
        let content = "#### Xray 3.11.2\nReleased: November 11, 2020\n";
        let err = released_date(content, "3.11.2").unwrap_err();
        assert!(matches!(err, Error::MalformedReleaseNotes(_)));
    }
}
