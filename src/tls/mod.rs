//! TLS certificate validation probe.
//!
//! Connects to the audited host on port 443 and performs a full TLS handshake,
//! verifying the certificate chain against the Mozilla root set and the
//! certificate against the hostname. The probe is independent of the page fetch:
//! a valid certificate does not imply a reachable page, and vice versa.
//!
//! Uses `tokio-rustls` for the async handshake.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use rustls::pki_types::ServerName;
use serde::Serialize;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::config::{HTTPS_PORT, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::ProbeError;

/// Outcome of the TLS probe. `error` is `None` when the certificate is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsProbeResult {
    pub valid: bool,
    pub error: Option<String>,
}

impl TlsProbeResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Validates the certificate served by `host:443`.
///
/// Never fails: every connect, timeout, handshake, or verification error is
/// reported as `valid: false` with the error description.
pub async fn probe_tls(host: &str, handshake_timeout: Duration) -> TlsProbeResult {
    probe_tls_on_port(host, HTTPS_PORT, handshake_timeout).await
}

pub(crate) async fn probe_tls_on_port(
    host: &str,
    port: u16,
    handshake_timeout: Duration,
) -> TlsProbeResult {
    match verify_certificate(host, port, handshake_timeout).await {
        Ok(()) => {
            info!("TLS certificate valid for {host}");
            TlsProbeResult::valid()
        }
        Err(e) => {
            warn!("TLS probe failed for {host}: {e}");
            TlsProbeResult::invalid(e.to_string())
        }
    }
}

async fn verify_certificate(
    host: &str,
    port: u16,
    handshake_timeout: Duration,
) -> Result<(), ProbeError> {
    debug!("Probing TLS for {host}:{port}");

    let server_name =
        ServerName::try_from(host.to_string()).map_err(|e| ProbeError::InvalidServerName {
            host: host.to_string(),
            reason: e.to_string(),
        })?;

    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    // Explicit provider: the probe must not depend on a process-wide default being installed
    let config =
        ClientConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
            .with_safe_default_protocol_versions()?
            .with_root_certificates(root_store)
            .with_no_client_auth();

    let sock = match tokio::time::timeout(
        Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
        TcpStream::connect((host, port)),
    )
    .await
    {
        Ok(Ok(sock)) => sock,
        Ok(Err(source)) => {
            return Err(ProbeError::Connect {
                host: host.to_string(),
                port,
                source,
            })
        }
        Err(_) => {
            return Err(ProbeError::Timeout {
                stage: "TCP connection",
                host: host.to_string(),
                timeout_secs: TCP_CONNECT_TIMEOUT_SECS,
            })
        }
    };

    let connector = TlsConnector::from(Arc::new(config));
    match tokio::time::timeout(handshake_timeout, connector.connect(server_name, sock)).await {
        Ok(Ok(stream)) => {
            let (_, session) = stream.get_ref();
            debug!(
                "TLS handshake with {host} complete: {:?}, {:?}",
                session.protocol_version(),
                session.negotiated_cipher_suite().map(|cs| cs.suite())
            );
            Ok(())
        }
        Ok(Err(source)) => Err(ProbeError::Handshake {
            host: host.to_string(),
            source,
        }),
        Err(_) => Err(ProbeError::Timeout {
            stage: "TLS handshake",
            host: host.to_string(),
            timeout_secs: handshake_timeout.as_secs(),
        }),
    }
}
