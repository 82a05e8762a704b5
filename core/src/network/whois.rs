use std::time::Duration;

use async_trait::async_trait;
use domscout_common::domain::Candidate;
use domscout_common::error::LookupError;
use domscout_protocols::whois::{self, WhoisAnswer};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::ports::{Registration, RegistrationLookup};

/// [`RegistrationLookup`] speaking plain WHOIS.
///
/// Known TLDs go straight to their registry; anything else is first resolved
/// through the IANA referral server. Each query opens and drops its own
/// connection.
pub struct WhoisClient {
    timeout: Duration,
    port: u16,
    pinned: Option<String>,
}

impl WhoisClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            port: whois::WHOIS_PORT,
            pinned: None,
        }
    }

    /// Sends every query to `server:port`, skipping server resolution.
    pub fn pinned(server: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            timeout,
            port,
            pinned: Some(server.into()),
        }
    }

    async fn resolve_server(&self, domain: &str) -> Result<String, LookupError> {
        if let Some(server) = &self.pinned {
            return Ok(server.clone());
        }
        if let Some(server) = whois::server_for(domain) {
            return Ok(server.to_string());
        }

        let tld = domain.rsplit('.').next().unwrap_or(domain);
        let referral = self.query(whois::IANA_SERVER, tld).await?;
        match whois::referral_server(&referral) {
            Some(server) => Ok(server),
            None => {
                debug!(domain, tld, "IANA has no whois server for this tld");
                Err(LookupError::NotFound)
            }
        }
    }

    async fn query(&self, server: &str, query: &str) -> Result<String, LookupError> {
        let exchange = async {
            let mut stream = TcpStream::connect((server, self.port)).await?;
            stream.write_all(&whois::encode_query(query)).await?;
            let mut buffer: Vec<u8> = Vec::new();
            stream.read_to_end(&mut buffer).await?;
            Ok::<String, std::io::Error>(String::from_utf8_lossy(&buffer).into_owned())
        };

        match timeout(self.timeout, exchange).await {
            Ok(Ok(raw)) => Ok(raw),
            Ok(Err(err)) => Err(LookupError::Transient(format!("{server}: {err}"))),
            Err(_elapsed) => Err(LookupError::Transient(format!(
                "{server}: no answer within {}s",
                self.timeout.as_secs()
            ))),
        }
    }
}

#[async_trait]
impl RegistrationLookup for WhoisClient {
    async fn lookup(&self, candidate: &Candidate) -> Result<Registration, LookupError> {
        let domain = candidate.as_str();
        let server = self.resolve_server(domain).await?;
        let raw = self.query(&server, domain).await?;

        match whois::parse_response(&raw) {
            Ok(WhoisAnswer::NotFound) => Err(LookupError::NotFound),
            Ok(WhoisAnswer::Record(record)) => Ok(record),
            Err(err) => Err(LookupError::Transient(format!("{server}: {err}"))),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
