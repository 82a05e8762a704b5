use async_trait::async_trait;
use domscout_common::config::Config;
use domscout_common::domain::Candidate;
use domscout_protocols::expired;
use reqwest::Client;
use tracing::debug;

use crate::network::http::{build_client, fetch_text};
use crate::ports::ExpiredListSource;

/// Scrapes the public listing of recently deleted domains.
pub struct ExpiredListScraper {
    client: Client,
    url: String,
}

impl ExpiredListScraper {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(build_client(cfg.timeouts.fetch)?, &cfg.expired_list_url))
    }
}

#[async_trait]
impl ExpiredListSource for ExpiredListScraper {
    async fn fetch_expired(&self) -> anyhow::Result<Vec<Candidate>> {
        let page = fetch_text(&self.client, &self.url).await?;
        let domains = expired::extract_domains(&page)?;
        debug!(url = %self.url, found = domains.len(), "expired list scraped");

        Ok(domains.into_iter().filter_map(Candidate::new).collect())
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
