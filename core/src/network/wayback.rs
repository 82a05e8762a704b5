use async_trait::async_trait;
use domscout_common::domain::Candidate;
use domscout_common::error::LookupError;
use domscout_protocols::wayback;
use reqwest::Client;
use tracing::debug;

use crate::ports::ArchiveLookup;

/// [`ArchiveLookup`] backed by the Wayback Machine availability API.
pub struct WaybackClient {
    client: Client,
    endpoint: String,
}

impl WaybackClient {
    /// `client` should carry the per-attempt archive timeout.
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, wayback::AVAILABILITY_ENDPOINT)
    }

    pub fn with_endpoint(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ArchiveLookup for WaybackClient {
    async fn has_snapshot(&self, candidate: &Candidate) -> Result<bool, LookupError> {
        let url = wayback::availability_url(&self.endpoint, candidate.as_str());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(LookupError::transient)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Transient(format!("HTTP {status} from archive")));
        }

        let body = response.text().await.map_err(LookupError::transient)?;

        match wayback::has_snapshot(&body) {
            Ok(archived) => Ok(archived),
            Err(err) => {
                debug!(%candidate, %err, "unreadable archive answer, treating as no snapshot");
                Ok(false)
            }
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
