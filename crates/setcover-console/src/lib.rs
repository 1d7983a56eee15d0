//! Colored console output for set cover runs.
//!
//! Provides a custom `tracing` layer that formats solver, batch and dataset
//! events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end, batch start/end, each
//!   solved or generated dataset)
//! - **WARN**: Skipped dataset files
//! - **DEBUG**: Each selected set with coverage progress
//! - **TRACE**: Reinsertions and pruned sets
//!
//! The default filter is `setcover_solver=info,setcover_benchmark=info,
//! setcover_io=info`; `RUST_LOG` overrides it.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);
static UNIVERSE_SIZE: AtomicU64 = AtomicU64::new(0);

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_FILTER: &str = "setcover_solver=info,setcover_benchmark=info,setcover_io=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints a banner and installs the tracing subscriber.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SetCoverConsoleLayer)
            .try_init();
    });
}

fn mark_solve_start(universe_size: u64) {
    let epoch = EPOCH.get_or_init(Instant::now);
    SOLVE_START_NANOS.store(epoch.elapsed().as_nanos() as u64, Ordering::Relaxed);
    UNIVERSE_SIZE.store(universe_size, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "{} {}",
        "setcover".bright_cyan().bold(),
        format!("v{VERSION} - greedy set cover").bright_white()
    );
    let _ = stdout.flush();
}

/// A tracing layer that formats set cover events with colors.
pub struct SetCoverConsoleLayer;

impl<S: Subscriber> Layer<S> for SetCoverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("setcover_solver")
            && !target.starts_with("setcover_benchmark")
            && !target.starts_with("setcover_io")
        {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    set: Option<String>,
    file: Option<String>,
    reason: Option<String>,
    set_count: Option<u64>,
    universe_size: Option<u64>,
    membership_count: Option<u64>,
    selected: Option<u64>,
    rounds: Option<u64>,
    reinsertions: Option<u64>,
    pruned: Option<u64>,
    round: Option<u64>,
    gain: Option<u64>,
    stale_gain: Option<u64>,
    covered: Option<u64>,
    duration_ms: Option<u64>,
    dataset_count: Option<u64>,
    skipped: Option<u64>,
    required_sets: Option<u64>,
    rows: Option<u64>,
}

impl EventVisitor {
    fn text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "set" => self.set = Some(value),
            "file" | "path" | "results_file" => self.file = Some(value),
            "reason" => self.reason = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "set_count" => self.set_count = Some(value),
            "universe_size" => self.universe_size = Some(value),
            "membership_count" => self.membership_count = Some(value),
            "selected" => self.selected = Some(value),
            "rounds" => self.rounds = Some(value),
            "reinsertions" => self.reinsertions = Some(value),
            "pruned" => self.pruned = Some(value),
            "round" => self.round = Some(value),
            "gain" => self.gain = Some(value),
            "stale_gain" => self.stale_gain = Some(value),
            "covered" => self.covered = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "dataset_count" => self.dataset_count = Some(value),
            "skipped" => self.skipped = Some(value),
            "required_sets" => self.required_sets = Some(value),
            "rows" => self.rows = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "set_selected" => format_set_selected(v),
        "set_reinserted" | "set_pruned" if level == Level::TRACE => format_requeue(v),
        "batch_start" => format_batch_start(v),
        "dataset_solved" => format_dataset_solved(v),
        "dataset_generated" => format_dataset_generated(v),
        "dataset_skipped" => format_dataset_skipped(v),
        "batch_end" => format_batch_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    let universe = v.universe_size.unwrap_or(0);
    mark_solve_start(universe);

    format!(
        "{} {} Solving │ {} sets │ {} elements │ {} memberships",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.set_count).bright_yellow(),
        count(v.universe_size).bright_yellow(),
        count(v.membership_count).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Cover found │ {} sets │ {} rounds │ {} reinserted │ {} pruned │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.selected).bright_green().bold(),
        count(v.rounds).white(),
        count(v.reinsertions).white(),
        count(v.pruned).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_set_selected(v: &EventVisitor) -> String {
    let covered = v.covered.unwrap_or(0);
    let universe = UNIVERSE_SIZE.load(Ordering::Relaxed);

    format!(
        "{} {} Round {:>8} │ {} +{} │ {} covered",
        format_elapsed(),
        "✓".bright_green(),
        count(v.round).bright_black(),
        v.set.as_deref().unwrap_or("?").white().bold(),
        count(v.gain).bright_magenta(),
        format_coverage(covered, universe),
    )
}

fn format_requeue(v: &EventVisitor) -> String {
    let (icon, action) = match v.event.as_deref() {
        Some("set_pruned") => ("✗".bright_red().to_string(), "pruned"),
        _ => ("↺".bright_yellow().to_string(), "requeued"),
    };

    let mut output = format!(
        "{} {} Round {:>8} │ {} {}",
        format_elapsed(),
        icon,
        count(v.round).bright_black(),
        v.set.as_deref().unwrap_or("?").bright_black(),
        action,
    );
    if let (Some(stale), Some(gain)) = (v.stale_gain, v.gain) {
        output.push_str(&format!(" │ {} → {}", stale, gain).bright_black().to_string());
    }
    output
}

fn format_batch_start(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Batch │ {} datasets",
        format_elapsed(),
        "▶".bright_blue().bold(),
        count(v.dataset_count).bright_yellow(),
    );
    if let Some(skipped) = v.skipped.filter(|&n| n > 0) {
        output.push_str(&format!(" │ {} skipped", skipped.yellow()));
    }
    output
}

fn format_dataset_solved(v: &EventVisitor) -> String {
    format!(
        "{} {} {} │ {} sets │ {} elements │ {} required │ {}",
        format_elapsed(),
        "◆".bright_blue(),
        v.file.as_deref().unwrap_or("?").white().bold(),
        count(v.set_count),
        count(v.universe_size),
        count(v.required_sets).bright_green().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_dataset_generated(v: &EventVisitor) -> String {
    format!(
        "{} {} {} │ {} rows",
        format_elapsed(),
        "+".bright_green(),
        v.file.as_deref().unwrap_or("?").white(),
        count(v.rows),
    )
}

fn format_dataset_skipped(v: &EventVisitor) -> String {
    let what = v.file.as_deref().unwrap_or("dataset");
    format!(
        "{} {} Skipped {} │ {}",
        format_elapsed(),
        "!".bright_yellow().bold(),
        what.yellow(),
        v.reason.as_deref().unwrap_or(""),
    )
}

fn format_batch_end(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Batch complete │ {} datasets │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.dataset_count).bright_green().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    );
    if let Some(file) = &v.file {
        output.push_str(&format!(" │ {}", file.white()));
    }
    output
}

fn format_coverage(covered: u64, universe: u64) -> String {
    if universe == 0 {
        return covered.to_formatted_string(&Locale::en);
    }
    let percent = covered as f64 * 100.0 / universe as f64;
    format!(
        "{}/{} ({:.1}%)",
        covered.to_formatted_string(&Locale::en),
        universe.to_formatted_string(&Locale::en),
        percent
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
