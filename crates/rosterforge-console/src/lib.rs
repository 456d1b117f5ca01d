//! Colorful console output for roster generation.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end)
//! - **WARN**: Ignored overrides, backend failures, non-optimal results
//! - **DEBUG**: Model size per constraint family

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[cfg(test)]
mod tests;

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target prefix of the events this layer renders.
const SOLVER_TARGET: &str = "rosterforge_solver";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the RosterForge banner and sets up tracing. `RUST_LOG`
/// overrides the default `rosterforge_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(solver_directive())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RosterConsoleLayer)
            .try_init();
    });
}

fn solver_directive() -> Directive {
    format!("{}=info", SOLVER_TARGET)
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}

fn print_banner() {
    let banner = r#"
 ____            _            _____
|  _ \ ___  ___ | |_ ___ _ __|  ___|__  _ __ __ _  ___
| |_) / _ \/ __|| __/ _ \ '__| |_ / _ \| '__/ _` |/ _ \
|  _ < (_) \__ \| ||  __/ |  |  _| (_) | | | (_| |  __/
|_| \_\___/|___/ \__\___|_|  |_|  \___/|_|  \__, |\___|
                                            |___/
"#;

    let version_line = format!("                   v{} - Weekly Shift Rostering\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats roster solver events with colors.
pub struct RosterConsoleLayer;

impl<S: Subscriber> Layer<S> for RosterConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with(SOLVER_TARGET) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    backend: Option<String>,
    status: Option<String>,
    score: Option<String>,
    error: Option<String>,
    employee: Option<String>,
    day: Option<String>,
    employees: Option<u64>,
    positions: Option<u64>,
    days: Option<u64>,
    variables: Option<u64>,
    constraints: Option<u64>,
    time_limit_secs: Option<u64>,
    assignments: Option<u64>,
    shortages: Option<u64>,
    duration_ms: Option<u64>,
    decisions: Option<u64>,
    slacks: Option<u64>,
    coverage_rows: Option<u64>,
    one_per_day_rows: Option<u64>,
    rest_rows: Option<u64>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "backend" => self.backend = Some(value),
            "status" => self.status = Some(value),
            "score" => self.score = Some(value),
            "error" => self.error = Some(value),
            "employee" => self.employee = Some(value),
            "day" => self.day = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "employees" => self.employees = Some(value),
            "positions" => self.positions = Some(value),
            "days" => self.days = Some(value),
            "variables" => self.variables = Some(value),
            "constraints" => self.constraints = Some(value),
            "time_limit_secs" => self.time_limit_secs = Some(value),
            "assignments" => self.assignments = Some(value),
            "shortages" => self.shortages = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "decisions" => self.decisions = Some(value),
            "slacks" => self.slacks = Some(value),
            "coverage_rows" => self.coverage_rows = Some(value),
            "one_per_day_rows" => self.one_per_day_rows = Some(value),
            "rest_rows" => self.rest_rows = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "solve_failed" => format_solve_failed(v),
        "not_proven_optimal" => format_not_proven_optimal(v),
        "override_ignored" => format_override_ignored(v),
        "model_built" => format_model_built(v),
        _ => String::new(),
    }
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} Solving │ {} employees │ {} positions │ {} days │ {} variables │ {} constraints",
        "▶".bright_green().bold(),
        count(v.employees).bright_yellow(),
        count(v.positions).bright_yellow(),
        count(v.days).bright_yellow(),
        count(v.variables).bright_yellow(),
        count(v.constraints).bright_yellow(),
    );

    if let Some(backend) = &v.backend {
        output.push_str(&format!(" │ {}", backend.bright_magenta()));
    }

    let time_limit = v.time_limit_secs.unwrap_or(0);
    if time_limit > 0 {
        output.push_str(&format!(
            " │ {}s limit",
            time_limit.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }

    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let status = v.status.as_deref().unwrap_or("UNKNOWN");
    let duration = format_duration_ms(v.duration_ms.unwrap_or(0));

    let mut output = format!(
        "{} Solving complete │ {} │ {}",
        "■".bright_cyan().bold(),
        format_status(status),
        duration.yellow(),
    );

    if let Some(score) = &v.score {
        output.push_str(&format!(" │ {}", format_score(score)));
    }
    if let Some(assignments) = v.assignments {
        output.push_str(&format!(
            " │ {} assignments",
            assignments.to_formatted_string(&Locale::en).white()
        ));
    }
    match v.shortages {
        Some(0) => output.push_str(&format!(" │ {}", "fully staffed".bright_green())),
        Some(n) => output.push_str(&format!(
            " │ {} short",
            n.to_formatted_string(&Locale::en).bright_red().bold()
        )),
        None => {}
    }

    output
}

fn format_solve_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} │ {}",
        "✗".bright_red().bold(),
        format_status(v.status.as_deref().unwrap_or("UNKNOWN")),
        v.error.as_deref().unwrap_or("backend failed").bright_red()
    )
}

fn format_not_proven_optimal(v: &EventVisitor) -> String {
    format!(
        "{} {} │ a better roster may exist",
        "!".yellow().bold(),
        format_status(v.status.as_deref().unwrap_or("FEASIBLE")),
    )
}

fn format_override_ignored(v: &EventVisitor) -> String {
    format!(
        "{} Override ignored │ employee {} │ {}",
        "!".yellow().bold(),
        v.employee.as_deref().unwrap_or("?").white(),
        v.day.as_deref().unwrap_or("?").white(),
    )
}

fn format_model_built(v: &EventVisitor) -> String {
    format!(
        "{} Model │ {} decisions │ {} slacks │ {} coverage │ {} one-per-day │ {} rest",
        "·".bright_black(),
        count(v.decisions),
        count(v.slacks),
        count(v.coverage_rows),
        count(v.one_per_day_rows),
        count(v.rest_rows),
    )
    .bright_black()
    .to_string()
}

fn format_status(status: &str) -> String {
    match status {
        "OPTIMAL" => status.bright_green().bold().to_string(),
        "FEASIBLE" => status.yellow().bold().to_string(),
        _ => status.bright_red().bold().to_string(),
    }
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

/// Colors a `-Nshortage/Aassigned/Ppreference` score by level.
fn format_score(score: &str) -> String {
    let parts: Vec<&str> = score.split('/').collect();
    if parts.len() != 3 {
        return score.white().to_string();
    }

    let shortage = parts[0].trim_end_matches("shortage");
    let shortage_str = if shortage.parse::<i64>().is_ok_and(|n| n < 0) {
        parts[0].bright_red().to_string()
    } else {
        parts[0].bright_green().to_string()
    };

    format!("{}/{}/{}", shortage_str, parts[1].white(), parts[2].bright_cyan())
}
