// Shared helpers for the integration tests: a mock site and a deterministic auditor.

#![allow(dead_code)] // Each test file uses a subset

use std::sync::Arc;
use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};
use webpulse::config::DEFAULT_USER_AGENT;
use webpulse::{Auditor, FixedSignals, ScoringConfig};

pub const WELL_FORMED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Northwind Traders - Fine Foods</title>
  <meta name="description" content="Northwind Traders imports and distributes specialty foods from around the world.">
  <meta property="og:title" content="Northwind Traders">
  <meta property="og:url" content="https://northwind.example/">
</head>
<body>
  <h1>Northwind Traders</h1>
  <img src="/logo.png" alt="Northwind logo">
  <a href="/catalog">Catalog</a>
</body>
</html>"#;

/// Serves `WELL_FORMED_PAGE` at `/` with every security header, robots.txt but no sitemap.xml.
pub fn well_formed_site() -> Server {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/"),
            request::headers(contains(("user-agent", DEFAULT_USER_AGENT))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("Content-Type", "text/html; charset=utf-8")
                .insert_header("Content-Security-Policy", "default-src 'self'")
                .insert_header("Strict-Transport-Security", "max-age=63072000")
                .insert_header("X-Content-Type-Options", "nosniff")
                .insert_header("X-Frame-Options", "DENY")
                .insert_header("Referrer-Policy", "no-referrer")
                .insert_header("Permissions-Policy", "geolocation=()")
                .body(WELL_FORMED_PAGE),
        ),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/robots.txt"))
            .respond_with(status_code(200)),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/sitemap.xml"))
            .respond_with(status_code(404)),
    );
    server
}

/// Auditor with fixed signals and short timeouts.
pub fn test_auditor() -> Auditor {
    let client = reqwest::Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .expect("Failed to create HTTP client");
    Auditor::new(Arc::new(client), ScoringConfig::default())
        .with_signals(Arc::new(FixedSignals::healthy()))
        .with_timeouts(Duration::from_secs(5), Duration::from_secs(1))
}
