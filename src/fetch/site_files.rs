//! robots.txt and sitemap.xml presence probes.

use std::time::Duration;

use log::{debug, warn};

use super::types::{SiteFileStatus, SiteFiles};
use crate::config::{ROBOTS_TXT_PATH, SITEMAP_XML_PATH};
use crate::error_handling::ProbeError;

/// Sends a HEAD request for `path` at the origin of `base_url` and returns the status code.
///
/// # Errors
///
/// Returns `ProbeError::Url` if `base_url` does not parse, or
/// `ProbeError::Http` if the request fails or times out.
pub async fn probe_site_file(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    timeout: Duration,
) -> Result<u16, ProbeError> {
    let url = url::Url::parse(base_url)?.join(path)?;
    debug!("HEAD {url}");

    let response = client
        .head(url.clone())
        .timeout(timeout)
        .send()
        .await
        .map_err(|source| ProbeError::Http {
            url: url.to_string(),
            source,
        })?;
    Ok(response.status().as_u16())
}

/// Probes robots.txt and sitemap.xml one after the other.
///
/// Both paths resolve against the origin of `base_url`, so
/// `https://example.com/blog/post` probes `https://example.com/robots.txt`
/// rather than `.../blog/post/robots.txt`.
///
/// Never fails: probe errors are logged and reported as `SiteFileStatus::Unchecked`.
pub async fn probe_site_files(
    client: &reqwest::Client,
    base_url: &str,
    timeout: Duration,
) -> SiteFiles {
    SiteFiles {
        robots_txt: site_file_status(client, base_url, ROBOTS_TXT_PATH, timeout).await,
        sitemap_xml: site_file_status(client, base_url, SITEMAP_XML_PATH, timeout).await,
    }
}

async fn site_file_status(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    timeout: Duration,
) -> SiteFileStatus {
    match probe_site_file(client, base_url, path, timeout).await {
        Ok(200) => SiteFileStatus::Found,
        Ok(status) => {
            debug!("{path} answered {status} for {base_url}");
            SiteFileStatus::NotFound
        }
        Err(e) => {
            warn!("Could not check {path} for {base_url}: {e}");
            SiteFileStatus::Unchecked
        }
    }
}
