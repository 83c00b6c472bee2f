//! Fetch artifact data structures.

use std::borrow::Cow;

use reqwest::header::HeaderMap;
use serde::Serialize;

/// Captured response of the timed page GET.
///
/// Headers keep `reqwest`'s `HeaderMap`, so lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    /// Wall-clock seconds from request start to full body, rounded to 2 decimals
    pub elapsed_secs: Option<f64>,
}

impl FetchResult {
    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// All values of a repeated header joined with `", "`, or `None` if absent.
    ///
    /// Values that are not valid visible ASCII are decoded lossily.
    pub fn joined_header(&self, name: &str) -> Option<String> {
        let values: Vec<Cow<'_, str>> = self
            .headers
            .get_all(name)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }
}

/// Presence of a well-known site file (robots.txt, sitemap.xml).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteFileStatus {
    Found,
    /// Answered with a status other than 200
    NotFound,
    /// The probe itself failed (timeout, connection error); reported as "Not Found"
    Unchecked,
}

impl SiteFileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteFileStatus::Found => "Found",
            SiteFileStatus::NotFound | SiteFileStatus::Unchecked => "Not Found",
        }
    }
}

impl Serialize for SiteFileStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// robots.txt and sitemap.xml probe results for one audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteFiles {
    pub robots_txt: SiteFileStatus,
    pub sitemap_xml: SiteFileStatus,
}
