//! Page fetching and site-file probing.
//!
//! All network calls here are timeout-bounded and fallible. Callers decide how
//! to degrade: the pipeline treats a failed page fetch as "unreachable" and a
//! failed site-file probe as an SEO issue. Nothing is retried.

mod site_files;
mod types;

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::error_handling::FetchError;
use crate::utils::round_to;

pub use site_files::{probe_site_file, probe_site_files};
pub use types::{FetchResult, SiteFileStatus, SiteFiles};

/// Performs the timed GET of the audited page.
///
/// Elapsed time is wall-clock from request start until the full body has been
/// read, rounded to 2 decimal places. Any status code counts as a response;
/// only transport failures are errors.
///
/// # Errors
///
/// - `FetchError::Timeout` if the request or body read exceeds `timeout`
/// - `FetchError::Request` for connect/DNS/TLS/protocol failures
/// - `FetchError::Body` if the body cannot be read
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<FetchResult, FetchError> {
    debug!("Fetching {url} (timeout {}s)", timeout.as_secs_f64());
    let start = Instant::now();

    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify_error(url, timeout, e, false))?;

    let status = response.status().as_u16();
    let headers = response.headers().clone();
    log::trace!("Response version: {:?}", response.version());

    let body = response
        .bytes()
        .await
        .map_err(|e| classify_error(url, timeout, e, true))?
        .to_vec();

    let elapsed = round_to(start.elapsed().as_secs_f64(), 2);
    info!(
        "Fetched {url}: status {status}, {} bytes in {elapsed}s",
        body.len()
    );

    Ok(FetchResult {
        status,
        headers,
        body,
        elapsed_secs: Some(elapsed),
    })
}

fn classify_error(
    url: &str,
    timeout: Duration,
    error: reqwest::Error,
    reading_body: bool,
) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
            timeout_secs: timeout.as_secs(),
        }
    } else if reading_body {
        FetchError::Body {
            url: url.to_string(),
            source: error,
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn test_client() -> reqwest::Client {
        reqwest::Client::builder()
            .user_agent(crate::config::DEFAULT_USER_AGENT)
            .build()
            .expect("Failed to create HTTP client")
    }

    #[tokio::test]
    async fn test_fetch_page_captures_response() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/"),
                request::headers(contains(("user-agent", crate::config::DEFAULT_USER_AGENT))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("X-Frame-Options", "DENY")
                    .body("<html><title>Hello</title></html>"),
            ),
        );

        let url = server.url("/").to_string();
        let result = fetch_page(&test_client(), &url, Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(result.status, 200);
        assert!(result.has_header("x-frame-options"));
        assert_eq!(result.text(), "<html><title>Hello</title></html>");
        let elapsed = result.elapsed_secs.unwrap();
        assert!(elapsed >= 0.0);
        assert_eq!(elapsed, round_to(elapsed, 2));
    }

    #[tokio::test]
    async fn test_fetch_page_error_status_is_still_a_response() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/missing"))
                .respond_with(status_code(404).body("Not Found")),
        );

        let url = server.url("/missing").to_string();
        let result = fetch_page(&test_client(), &url, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(result.status, 404);
    }

    #[tokio::test]
    async fn test_fetch_page_timeout() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/slow"))
                .respond_with(delay_and_then(Duration::from_secs(2), status_code(200))),
        );

        let url = server.url("/slow").to_string();
        let err = fetch_page(&test_client(), &url, Duration::from_millis(200))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Timeout { .. }), "got: {err}");
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = format!("http://127.0.0.1:{port}/");
        let err = fetch_page(&test_client(), &url, Duration::from_secs(2))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }), "got: {err}");
    }
}
