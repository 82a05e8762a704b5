use std::sync::Mutex;

use domscout_core::Progress;
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TEMPLATE: &str = "{spinner:.blue} {msg:<26} [{wide_bar:.green/black}] {pos}/{len}";
const TICKS: &[&str] = &["▁▁▁▁▁", "▁▂▂▂▁", "▁▄▂▄▁", "▂▄▆▄▂", "▄▆█▆▄", "▂▄▆▄▂", "▁▄▂▄▁", "▁▂▂▂▁"];

/// One progress bar per worker pool run, drawn by the indicatif layer.
#[derive(Default)]
pub struct SpanProgress {
    current: Mutex<Option<Span>>,
}

impl SpanProgress {
    fn with_span(&self, f: impl FnOnce(&Span)) {
        if let Ok(guard) = self.current.lock() {
            if let Some(span) = guard.as_ref() {
                f(span);
            }
        }
    }
}

impl Progress for SpanProgress {
    fn start(&self, label: &str, total: usize) {
        let span = info_span!("stage", indicatif.pb_show = true);
        span.pb_set_style(&style());
        span.pb_set_length(total as u64);
        span.pb_set_message(label);
        span.pb_start();

        if let Ok(mut current) = self.current.lock() {
            *current = Some(span);
        }
    }

    fn advance(&self) {
        self.with_span(|span| span.pb_inc(1));
    }

    fn finish(&self) {
        if let Ok(mut current) = self.current.lock() {
            current.take();
        }
    }
}

fn style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE)
        .map(|style| style.tick_strings(TICKS).progress_chars("━╸ "))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}
