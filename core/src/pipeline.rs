//! # Discovery Pipelines
//!
//! Implements the two use cases of the tool:
//!
//! * **new domains**: generate names from word lists and news, keep the ones
//!   that are unregistered, short enough and never archived.
//! * **expired domains**: take a list of recently deleted names, keep the
//!   ones that are free again and score above the threshold.
//!
//! Each pipeline is a chain of stages that only ever shrinks the candidate
//! set. An empty stage ends the pipeline early with [`PipelineReport::Empty`].

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use domscout_common::config::Config;
use domscout_common::domain::candidate::merge_unique;
use domscout_common::domain::{Candidate, Scored};
use domscout_common::{error, info, success, warn};
use tokio::task::{self, JoinSet};

use crate::network::{WaybackClient, WhoisClient, http};
use crate::persist::ResultWriter;
use crate::pool::WorkerPool;
use crate::ports::{
    ArchiveLookup, CandidateSource, ExpiredListSource, Progress, Publisher, RegistrationLookup,
    ResultSink, Scorer,
};
use crate::probe::{AvailabilityProbe, HistoryProbe, Probe, ScoreProbe};
use crate::publish::MarketplaceLister;
use crate::scoring::SimulatedScorer;
use crate::sources::{DictionarySource, ExpiredListScraper, NewsSource, TrendSource};
use crate::stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    NewDomains,
    ExpiredDomains,
}

impl PipelineKind {
    /// Name used for the results file, `<stem>_found.txt`.
    pub fn file_stem(&self) -> &'static str {
        match self {
            PipelineKind::NewDomains => "new_domains",
            PipelineKind::ExpiredDomains => "expired_domains",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PipelineKind::NewDomains => "New Domain Discovery",
            PipelineKind::ExpiredDomains => "Expired Domain Discovery",
        }
    }
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// The step that left a pipeline without candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Generation,
    ExpiredList,
    Availability,
    Length,
    History,
    Score,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StageKind::Generation => "generation",
            StageKind::ExpiredList => "expired list",
            StageKind::Availability => "availability",
            StageKind::Length => "length",
            StageKind::History => "history",
            StageKind::Score => "score",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineReport {
    /// `stage` produced an empty set; later stages never ran.
    Empty { pipeline: PipelineKind, stage: StageKind },
    /// Final result lines in output order. `saved` is `None` when writing the
    /// results file failed.
    Completed {
        pipeline: PipelineKind,
        results: Vec<String>,
        saved: Option<PathBuf>,
    },
}

impl PipelineReport {
    pub fn pipeline(&self) -> PipelineKind {
        match self {
            PipelineReport::Empty { pipeline, .. } | PipelineReport::Completed { pipeline, .. } => *pipeline,
        }
    }

    /// Result lines, empty when the pipeline halted early.
    pub fn results(&self) -> &[String] {
        match self {
            PipelineReport::Empty { .. } => &[],
            PipelineReport::Completed { results, .. } => results,
        }
    }
}

/// Everything the pipelines talk to. Tests build this from in-memory fakes.
pub struct Collaborators {
    pub sources: Vec<Arc<dyn CandidateSource>>,
    pub expired: Box<dyn ExpiredListSource>,
    pub registry: Arc<dyn RegistrationLookup>,
    pub archive: Arc<dyn ArchiveLookup>,
    pub scorer: Arc<dyn Scorer>,
    pub publisher: Arc<dyn Publisher>,
    pub sink: Arc<dyn ResultSink>,
}

impl Collaborators {
    /// The network-backed set, wired from `cfg`.
    pub fn live(cfg: &Config) -> anyhow::Result<Self> {
        let sources: Vec<Arc<dyn CandidateSource>> = vec![
            Arc::new(DictionarySource::from_config(cfg)),
            Arc::new(TrendSource::from_config(cfg)),
            Arc::new(NewsSource::from_config(cfg)?),
        ];

        Ok(Self {
            sources,
            expired: Box::new(ExpiredListScraper::from_config(cfg)?),
            registry: Arc::new(WhoisClient::new(cfg.timeouts.whois)),
            archive: Arc::new(WaybackClient::new(http::build_client(cfg.timeouts.archive)?)),
            scorer: Arc::new(SimulatedScorer::from_credentials(&cfg.credentials)),
            publisher: Arc::new(MarketplaceLister::from_credentials(&cfg.credentials)),
            sink: Arc::new(ResultWriter::new(&cfg.output_dir)),
        })
    }
}

pub struct Orchestrator {
    max_name_len: usize,
    score_threshold: u32,
    pool: WorkerPool,
    sources: Vec<Arc<dyn CandidateSource>>,
    expired: Box<dyn ExpiredListSource>,
    availability: Arc<AvailabilityProbe>,
    history: Arc<HistoryProbe>,
    score: Arc<ScoreProbe>,
    publisher: Arc<dyn Publisher>,
    sink: Arc<dyn ResultSink>,
    progress: Arc<dyn Progress>,
}

impl Orchestrator {
    pub fn new(cfg: &Config, collaborators: Collaborators, progress: Arc<dyn Progress>) -> Self {
        let Collaborators {
            sources,
            expired,
            registry,
            archive,
            scorer,
            publisher,
            sink,
        } = collaborators;

        Self {
            max_name_len: cfg.max_name_len,
            score_threshold: cfg.score_threshold,
            pool: WorkerPool::from_config(cfg),
            sources,
            expired,
            availability: Arc::new(Probe::availability(registry)),
            history: Arc::new(Probe::history(archive)),
            score: Arc::new(Probe::score(scorer)),
            publisher,
            sink,
            progress,
        }
    }

    /// Replaces the default pool, mainly to change its width.
    pub fn with_pool(mut self, pool: WorkerPool) -> Self {
        self.pool = pool;
        self
    }

    /// Runs the new-domain pipeline, then the expired-domain pipeline.
    pub async fn run_all(&self) -> Vec<PipelineReport> {
        vec![self.run_new_domains().await, self.run_expired_domains().await]
    }

    /// 1. **Generation**: every source, merged and deduplicated.
    /// 2. **Availability**: keep unregistered names.
    /// 3. **Length**: keep names no longer than `max_name_len`.
    /// 4. **History**: keep names never seen by the web archive.
    /// 5. **Output**: sorted, saved and published.
    pub async fn run_new_domains(&self) -> PipelineReport {
        let kind = PipelineKind::NewDomains;

        let candidates = self.generate().await;
        info!("Generated {} unique candidates", candidates.len());
        if candidates.is_empty() {
            return halted(kind, StageKind::Generation);
        }

        let available = self.check_availability(candidates).await;
        info!("{} candidates are available", available.len());
        if available.is_empty() {
            return halted(kind, StageKind::Availability);
        }

        let short = stage::filter_by_length(available, self.max_name_len);
        info!("{} candidates fit within {} characters", short.len(), self.max_name_len);
        if short.is_empty() {
            return halted(kind, StageKind::Length);
        }

        let pairs = stage::probe_stage(
            &self.pool,
            self.history.clone(),
            short,
            "Checking archive history",
            self.progress.as_ref(),
            |history| history.is_clean(),
        )
        .await;
        let mut clean: Vec<Candidate> = pairs.into_iter().map(|(candidate, _)| candidate).collect();
        info!("{} candidates have no archive history", clean.len());
        if clean.is_empty() {
            return halted(kind, StageKind::History);
        }

        clean.sort();
        let lines: Vec<String> = clean.iter().map(Candidate::to_string).collect();
        self.finish(kind, clean, lines).await
    }

    /// 1. **Expired list**: fetched and deduplicated.
    /// 2. **Availability**: keep names that are free again.
    /// 3. **Score**: keep names scoring strictly above the threshold.
    /// 4. **Output**: ranked by score, saved and published.
    pub async fn run_expired_domains(&self) -> PipelineReport {
        let kind = PipelineKind::ExpiredDomains;

        let expired = match self.expired.fetch_expired().await {
            Ok(list) => list,
            Err(err) => {
                error!("Could not fetch the expired domain list: {err:#}");
                Vec::new()
            }
        };
        let expired = merge_unique([expired]);
        info!("Found {} recently expired domains", expired.len());
        if expired.is_empty() {
            return halted(kind, StageKind::ExpiredList);
        }

        let available = self.check_availability(expired).await;
        info!("{} expired domains are available", available.len());
        if available.is_empty() {
            return halted(kind, StageKind::Availability);
        }

        let threshold = self.score_threshold;
        let pairs = stage::probe_stage(
            &self.pool,
            self.score.clone(),
            available,
            "Scoring domains",
            self.progress.as_ref(),
            |score| *score > threshold,
        )
        .await;
        info!("{} domains score above {threshold}", pairs.len());
        if pairs.is_empty() {
            return halted(kind, StageKind::Score);
        }

        let mut scored: Vec<Scored> = pairs
            .into_iter()
            .map(|(candidate, score)| Scored { candidate, score })
            .collect();
        Scored::sort_by_rank(&mut scored);

        let lines: Vec<String> = scored.iter().map(Scored::to_string).collect();
        let winners: Vec<Candidate> = scored.into_iter().map(|s| s.candidate).collect();
        self.finish(kind, winners, lines).await
    }

    async fn generate(&self) -> Vec<Candidate> {
        let mut tasks: JoinSet<(&'static str, anyhow::Result<Vec<Candidate>>)> = JoinSet::new();
        for source in &self.sources {
            let source = source.clone();
            tasks.spawn(async move { (source.name(), source.generate().await) });
        }

        let mut batches = Vec::with_capacity(self.sources.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((name, Ok(batch))) => {
                    info!("{name} generator produced {} candidates", batch.len());
                    batches.push(batch);
                }
                Ok((name, Err(err))) => error!("{name} generator failed: {err:#}"),
                Err(err) => error!("generator task did not complete: {err}"),
            }
        }

        merge_unique(batches)
    }

    async fn check_availability(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let pairs = stage::probe_stage(
            &self.pool,
            self.availability.clone(),
            candidates,
            "Checking availability",
            self.progress.as_ref(),
            |availability| availability.is_available(),
        )
        .await;
        pairs.into_iter().map(|(candidate, _)| candidate).collect()
    }

    /// Publishes every winner in the background, saves the lines on the
    /// blocking pool and waits for the publishes before reporting.
    async fn finish(&self, kind: PipelineKind, winners: Vec<Candidate>, lines: Vec<String>) -> PipelineReport {
        let mut publishing: JoinSet<()> = JoinSet::new();
        for candidate in winners {
            let publisher = self.publisher.clone();
            publishing.spawn(async move { publisher.publish(&candidate).await });
        }

        // File writes stay off the runtime threads.
        let sink = self.sink.clone();
        let to_save = lines.clone();
        let stem = kind.file_stem();
        let saved = match task::spawn_blocking(move || sink.save(stem, &to_save)).await {
            Ok(Ok(path)) => {
                success!("Saved {} results to {}", lines.len(), path.display());
                Some(path)
            }
            Ok(Err(err)) => {
                error!("{err}");
                None
            }
            Err(err) => {
                error!("results writer did not complete: {err}");
                None
            }
        };

        while let Some(joined) = publishing.join_next().await {
            if let Err(err) = joined {
                warn!("publish task did not complete: {err}");
            }
        }

        PipelineReport::Completed {
            pipeline: kind,
            results: lines,
            saved,
        }
    }
}

fn halted(pipeline: PipelineKind, stage: StageKind) -> PipelineReport {
    warn!("No candidates left after the {stage} stage, stopping {pipeline}");
    PipelineReport::Empty { pipeline, stage }
}
