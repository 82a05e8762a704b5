use domscout_core::Orchestrator;

use super::{expired, new};
use crate::mprint;

/// Both pipelines back to back. A failed or empty first pipeline does not stop the second.
pub async fn run_all(orchestrator: &Orchestrator, quiet: u8) -> anyhow::Result<()> {
    let new_domains = new::new_domains(orchestrator, quiet).await;
    mprint!();
    let expired_domains = expired::expired_domains(orchestrator, quiet).await;
    new_domains.and(expired_domains)
}
