//! Discovery engine: probes, the worker pool, stages and the two pipelines,
//! plus the live adapters they run against.

pub mod network;
pub mod persist;
pub mod pipeline;
pub mod pool;
pub mod ports;
pub mod probe;
pub mod publish;
pub mod scoring;
pub mod sources;
pub mod stage;

pub use pipeline::{Collaborators, Orchestrator, PipelineKind, PipelineReport, StageKind};
pub use pool::WorkerPool;
pub use ports::{NoProgress, Progress};
