//! Span timing for the `instrumentation` feature.
//!
//! Every span opened by `#[instrument]` on `solve` and `get_move` is timed by
//! `SpanTimer`; totals are kept per thread and merged when the table is printed.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use thread_local::ThreadLocal;
use tracing::span;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Clone, Copy, Debug, Default)]
struct SpanTotals {
    calls: u64,
    busy: Duration,
}

impl SpanTotals {
    fn record(&mut self, elapsed: Duration) {
        self.calls += 1;
        self.busy += elapsed;
    }

    fn merge(&mut self, other: &SpanTotals) {
        self.calls += other.calls;
        self.busy += other.busy;
    }
}

static SPAN_TOTALS: Lazy<ThreadLocal<Mutex<HashMap<&'static str, SpanTotals>>>> =
    Lazy::new(ThreadLocal::new);

struct SpanTimer;

impl<S> Layer<S> for SpanTimer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let started = match span.extensions_mut().remove::<Instant>() {
            Some(started) => started,
            None => return,
        };

        let totals = SPAN_TOTALS.get_or(|| Mutex::new(HashMap::new()));
        if let Ok(mut totals) = totals.lock() {
            totals
                .entry(span.name())
                .or_default()
                .record(started.elapsed());
        }
    }
}

/// Installs the timing layer as the global subscriber. With `RUST_LOG` unset or
/// `off` spans are only timed; otherwise they are also printed.
pub fn init_tracing() -> Result<(), SetGlobalDefaultError> {
    let filter = std::env::var("RUST_LOG").unwrap_or_default();

    if filter.is_empty() || filter == "off" {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(SpanTimer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let printer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(SpanTimer)
            .with(printer);
        tracing::subscriber::set_global_default(subscriber)
    }
}

/// Prints one row per span name to stderr, slowest total first.
pub fn print_timing_statistics() {
    let mut merged: HashMap<&'static str, SpanTotals> = HashMap::new();
    for totals in SPAN_TOTALS.iter() {
        if let Ok(totals) = totals.lock() {
            for (name, span_totals) in totals.iter() {
                merged.entry(*name).or_default().merge(span_totals);
            }
        }
    }

    if merged.is_empty() {
        eprintln!("no spans were timed");
        return;
    }

    let mut rows: Vec<_> = merged.into_iter().collect();
    rows.sort_by(|a, b| b.1.busy.cmp(&a.1.busy));

    eprintln!("\n{:<32} {:>10} {:>14} {:>14}", "span", "calls", "total (ms)", "mean (us)");
    for (name, totals) in rows {
        let total_ms = totals.busy.as_secs_f64() * 1_000.0;
        let mean_us = totals.busy.as_secs_f64() * 1_000_000.0 / totals.calls.max(1) as f64;
        eprintln!(
            "{:<32} {:>10} {:>14.2} {:>14.2}",
            name, totals.calls, total_ms, mean_us
        );
    }
}
