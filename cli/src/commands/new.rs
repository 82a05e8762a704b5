use std::time::Instant;

use domscout_core::Orchestrator;

use super::report;
use crate::terminal::print;

pub async fn new_domains(orchestrator: &Orchestrator, quiet: u8) -> anyhow::Result<()> {
    print::header("hunting for new domains", quiet);

    let start_time = Instant::now();
    let report = orchestrator.run_new_domains().await;

    report::present(&report, start_time.elapsed(), quiet);
    report::ensure_saved(&report)
}
