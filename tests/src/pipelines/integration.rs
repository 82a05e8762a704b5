use std::fs;
use std::path::Path;
use std::sync::Arc;

use domscout_common::config::Config;
use domscout_core::{NoProgress, Orchestrator, PipelineKind, PipelineReport, StageKind};

use super::fakes::*;

fn orchestrator(world: World, dir: &Path) -> Orchestrator {
    let cfg = Config {
        workers: 3,
        output_dir: dir.to_path_buf(),
        ..Config::default()
    };
    Orchestrator::new(&cfg, world.into_collaborators(dir), Arc::new(NoProgress))
}

fn saved_lines(dir: &Path, pipeline: PipelineKind) -> Vec<String> {
    let path = dir.join(format!("{}_found.txt", pipeline.file_stem()));
    let contents = fs::read_to_string(path).unwrap();
    let mut lines = contents.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("# Results from "), "unexpected header {header:?}");
    lines.map(str::to_string).collect()
}

fn completed(report: &PipelineReport) -> &[String] {
    match report {
        PipelineReport::Completed { results, saved, .. } => {
            assert!(saved.is_some(), "results were not saved");
            results
        }
        other => panic!("expected a completed pipeline, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn new_domains_dedups_and_drops_registered_names() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        sources: vec![
            StaticSource::new("dictionary", &["a.com", "b.io"]),
            StaticSource::new("trends", &["a.com"]),
        ],
        registry: FakeRegistry::new(&["a.com"], &[]),
        ..World::default()
    };
    let publisher = world.publisher.clone();

    let report = orchestrator(world, dir.path()).run_new_domains().await;

    assert_eq!(completed(&report), ["b.io"]);
    assert_eq!(saved_lines(dir.path(), PipelineKind::NewDomains), vec!["b.io"]);
    assert_eq!(publisher.published(), vec!["b.io"]);
}

#[tokio::test(start_paused = true)]
async fn new_domains_apply_length_and_history_then_sort() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        sources: vec![
            StaticSource::new("dictionary", &["shortname.com", "thisoneisjustonthe.com", "fresh.ai"]),
            StaticSource::new("news", &["archived.io", "exactlyfifteen1.io"]),
        ],
        archive: FakeArchive::new(&["archived.io"], &[]),
        ..World::default()
    };

    let report = orchestrator(world, dir.path()).run_new_domains().await;

    assert_eq!(completed(&report), ["exactlyfifteen1.io", "fresh.ai", "shortname.com"]);
    assert_eq!(
        saved_lines(dir.path(), PipelineKind::NewDomains),
        vec!["exactlyfifteen1.io", "fresh.ai", "shortname.com"]
    );
}

#[tokio::test(start_paused = true)]
async fn unreachable_services_fail_closed() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        sources: vec![StaticSource::new("dictionary", &["flaky.com", "quiet.io", "steady.ai"])],
        registry: FakeRegistry::new(&[], &["flaky.com"]),
        archive: FakeArchive::new(&[], &["quiet.io"]),
        ..World::default()
    };

    let started = tokio::time::Instant::now();
    let report = orchestrator(world, dir.path()).run_new_domains().await;

    assert_eq!(completed(&report), ["steady.ai"]);
    // Registry retries back off 1s + 2s, archive retries 2s + 4s.
    assert!(started.elapsed() >= std::time::Duration::from_secs(9));
}

#[tokio::test(start_paused = true)]
async fn new_domains_halt_when_nothing_is_available() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        sources: vec![StaticSource::new("dictionary", &["taken.com", "gone.io"])],
        registry: FakeRegistry::new(&["taken.com", "gone.io"], &[]),
        ..World::default()
    };
    let publisher = world.publisher.clone();

    let report = orchestrator(world, dir.path()).run_new_domains().await;

    assert_eq!(
        report,
        PipelineReport::Empty {
            pipeline: PipelineKind::NewDomains,
            stage: StageKind::Availability,
        }
    );
    assert!(!dir.path().join("new_domains_found.txt").exists());
    assert!(publisher.published().is_empty());
}

#[tokio::test(start_paused = true)]
async fn failing_generator_does_not_stop_the_others() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        sources: vec![
            StaticSource::failing("dictionary"),
            StaticSource::new("trends", &["rocketlabs.io"]),
            StaticSource::failing("news"),
        ],
        ..World::default()
    };

    let report = orchestrator(world, dir.path()).run_new_domains().await;

    assert_eq!(completed(&report), ["rocketlabs.io"]);
}

#[tokio::test(start_paused = true)]
async fn no_generated_candidates_halts_at_generation() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        sources: vec![StaticSource::failing("dictionary"), StaticSource::new("trends", &[])],
        ..World::default()
    };

    let report = orchestrator(world, dir.path()).run_new_domains().await;

    assert_eq!(
        report,
        PipelineReport::Empty {
            pipeline: PipelineKind::NewDomains,
            stage: StageKind::Generation,
        }
    );
}

#[tokio::test(start_paused = true)]
async fn expired_domains_rank_by_score_above_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        expired: Some(candidates(&[
            "low.com", "high.com", "tie.com", "mid.com", "taken.com", "high.com",
        ])),
        registry: FakeRegistry::new(&["taken.com"], &[]),
        scorer: FixedScorer::new(&[
            ("low.com", 20),
            ("high.com", 40),
            ("mid.com", 25),
            ("tie.com", 25),
            ("taken.com", 39),
        ]),
        ..World::default()
    };
    let publisher = world.publisher.clone();

    let report = orchestrator(world, dir.path()).run_expired_domains().await;

    let expected = ["high.com (DA: 40)", "mid.com (DA: 25)", "tie.com (DA: 25)"];
    assert_eq!(completed(&report), expected);
    assert_eq!(saved_lines(dir.path(), PipelineKind::ExpiredDomains), expected);
    assert_eq!(publisher.published(), vec!["high.com", "mid.com", "tie.com"]);
}

#[tokio::test(start_paused = true)]
async fn expired_domains_halt_when_no_score_clears_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        expired: Some(candidates(&["meh.com", "nope.com"])),
        scorer: FixedScorer::new(&[("meh.com", 20), ("nope.com", 5)]),
        ..World::default()
    };

    let report = orchestrator(world, dir.path()).run_expired_domains().await;

    assert_eq!(
        report,
        PipelineReport::Empty {
            pipeline: PipelineKind::ExpiredDomains,
            stage: StageKind::Score,
        }
    );
}

#[tokio::test(start_paused = true)]
async fn unreachable_expired_list_halts_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        expired: None,
        ..World::default()
    };

    let report = orchestrator(world, dir.path()).run_expired_domains().await;

    assert_eq!(
        report,
        PipelineReport::Empty {
            pipeline: PipelineKind::ExpiredDomains,
            stage: StageKind::ExpiredList,
        }
    );
}

#[tokio::test(start_paused = true)]
async fn empty_new_pipeline_does_not_block_expired_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        sources: vec![StaticSource::failing("dictionary")],
        expired: Some(candidates(&["revived.com"])),
        scorer: FixedScorer::new(&[("revived.com", 33)]),
        ..World::default()
    };

    let reports = orchestrator(world, dir.path()).run_all().await;

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].pipeline(), PipelineKind::NewDomains);
    assert!(reports[0].results().is_empty());
    assert_eq!(reports[1].pipeline(), PipelineKind::ExpiredDomains);
    assert_eq!(completed(&reports[1]), ["revived.com (DA: 33)"]);
}

#[tokio::test(start_paused = true)]
async fn new_domains_halt_when_every_name_is_too_long() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        sources: vec![StaticSource::new(
            "dictionary",
            &["averyveryverylongname.com", "anotherextremelylongone.io"],
        )],
        ..World::default()
    };
    let publisher = world.publisher.clone();

    let report = orchestrator(world, dir.path()).run_new_domains().await;

    assert_eq!(
        report,
        PipelineReport::Empty {
            pipeline: PipelineKind::NewDomains,
            stage: StageKind::Length,
        }
    );
    assert!(!dir.path().join("new_domains_found.txt").exists());
    assert!(publisher.published().is_empty());
}

#[tokio::test(start_paused = true)]
async fn new_domains_halt_when_every_name_was_archived() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        sources: vec![StaticSource::new("news", &["oldsite.com", "usedbefore.io"])],
        archive: FakeArchive::new(&["oldsite.com", "usedbefore.io"], &[]),
        ..World::default()
    };
    let publisher = world.publisher.clone();

    let report = orchestrator(world, dir.path()).run_new_domains().await;

    assert_eq!(
        report,
        PipelineReport::Empty {
            pipeline: PipelineKind::NewDomains,
            stage: StageKind::History,
        }
    );
    assert!(!dir.path().join("new_domains_found.txt").exists());
    assert!(publisher.published().is_empty());
}

#[tokio::test(start_paused = true)]
async fn expired_domains_halt_when_every_name_was_reregistered() {
    let dir = tempfile::tempdir().unwrap();
    let world = World {
        expired: Some(candidates(&["grabbed.com", "renewed.io"])),
        registry: FakeRegistry::new(&["grabbed.com", "renewed.io"], &[]),
        scorer: FixedScorer::new(&[("grabbed.com", 50), ("renewed.io", 45)]),
        ..World::default()
    };
    let publisher = world.publisher.clone();

    let report = orchestrator(world, dir.path()).run_expired_domains().await;

    assert_eq!(
        report,
        PipelineReport::Empty {
            pipeline: PipelineKind::ExpiredDomains,
            stage: StageKind::Availability,
        }
    );
    assert!(!dir.path().join("expired_domains_found.txt").exists());
    assert!(publisher.published().is_empty());
}

#[tokio::test]
async fn saving_results_leaves_the_runtime_free() {
    let dir = tempfile::tempdir().unwrap();
    let (sink, started, release) = HandshakeSink::new(dir.path());
    let world = World {
        sources: vec![StaticSource::new("dictionary", &["fresh.ai"])],
        sink: Some(sink),
        ..World::default()
    };

    let answer = tokio::spawn(async move {
        if started.await.is_ok() {
            release.send(()).unwrap();
        }
    });
    let report = orchestrator(world, dir.path()).run_new_domains().await;
    answer.await.unwrap();

    assert_eq!(completed(&report), ["fresh.ai"]);
    assert_eq!(saved_lines(dir.path(), PipelineKind::NewDomains), vec!["fresh.ai"]);
}

#[tokio::test(start_paused = true)]
async fn unwritable_output_is_reported_without_a_path() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "").unwrap();
    let world = World {
        sources: vec![StaticSource::new("dictionary", &["fresh.ai"])],
        ..World::default()
    };
    let publisher = world.publisher.clone();

    let report = orchestrator(world, &blocker).run_new_domains().await;

    assert_eq!(
        report,
        PipelineReport::Completed {
            pipeline: PipelineKind::NewDomains,
            results: vec!["fresh.ai".to_string()],
            saved: None,
        }
    );
    assert_eq!(publisher.published(), vec!["fresh.ai"]);
}
