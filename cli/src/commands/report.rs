use std::time::Duration;

use colored::*;
use domscout_common::success;
use domscout_core::{PipelineKind, PipelineReport};

use crate::mprint;
use crate::terminal::{colors, print};

pub fn present(report: &PipelineReport, total_time: Duration, quiet: u8) {
    match report {
        PipelineReport::Empty { pipeline, stage } => {
            print::header(&format!("nothing survived the {stage} stage"), quiet);
            print::no_results(*pipeline);
        }
        PipelineReport::Completed {
            pipeline,
            results,
            saved,
        } => {
            if quiet > 0 {
                mprint!();
            }
            print::header(pipeline.title(), quiet);
            print_results(*pipeline, results);
            if let Some(path) = saved {
                print::aligned_line("saved to", path.display().to_string());
            }
            print_summary(*pipeline, results.len(), total_time, quiet);
        }
    }
}

fn print_results(pipeline: PipelineKind, results: &[String]) {
    for (idx, line) in results.iter().enumerate() {
        let entry = match pipeline {
            PipelineKind::NewDomains => line.color(colors::PRIMARY),
            PipelineKind::ExpiredDomains => highlight_score(line),
        };
        print::numbered(idx + 1, entry);
    }
}

/// Colours the `(DA: n)` part of an expired-domain line.
fn highlight_score(line: &str) -> ColoredString {
    match line.split_once(" (") {
        Some((domain, score)) => format!(
            "{} {}",
            domain.color(colors::PRIMARY),
            format!("({score}").color(colors::ACCENT)
        )
        .normal(),
        None => line.color(colors::PRIMARY),
    }
}

fn print_summary(pipeline: PipelineKind, found: usize, total_time: Duration, quiet: u8) {
    let found: ColoredString = format!("{found} domains").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output = format!("{} complete: {found} found in {total_time}", pipeline.title());

    match quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => success!("{output}"),
    }
}

/// Fails when a completed pipeline could not write its results file.
pub fn ensure_saved(report: &PipelineReport) -> anyhow::Result<()> {
    match report {
        PipelineReport::Completed { pipeline, saved: None, .. } => {
            anyhow::bail!("results of {} were not saved", pipeline.title())
        }
        _ => Ok(()),
    }
}
