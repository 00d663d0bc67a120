//! Replays a recorded dashboard session.
//!
//! Usage:
//!
//! ```text
//! labkeeper-replay <session-path>
//! ```
//!
//! The JSON document at `session-path` must serialize a [`Session`]: an
//! optional dashboard configuration, an optional seed, and the intents to
//! apply in order. A representative session is:
//!
//! ```json
//! {
//!   "config": { "maxReasonLength": 200 },
//!   "seed": {
//!     "pending": [
//!       { "id": "1", "roomName": "Lab 101", "bookingTime": "09:00-10:30",
//!         "floor": 1, "building": "Science" }
//!     ]
//!   },
//!   "intents": [
//!     { "intent": "acceptTask", "id": "1" },
//!     { "intent": "markTaskNotCompleted", "id": "1", "selectedIssue": "KeyMissing" }
//!   ]
//! }
//! ```
//!
//! Each intent's outcome is written to stdout as one JSON line, followed by
//! a final line holding the dashboard view. Logs go to stderr; set
//! `LABKEEPER_LOG` to an env-filter directive and `LABKEEPER_LOG_FORMAT` to
//! `json` or `compact`.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use labkeeper::config::DashboardConfig;
use labkeeper::dashboard::{
    DashboardController, DashboardError, DashboardIntent, DashboardView, IntentOutcome,
    SessionSeed,
};
use mockable::DefaultClock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Errors that abort a replay.
#[derive(Debug, Error)]
enum ReplayError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to read session file {path}: {source}")]
    SessionRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse session file: {0}")]
    SessionParse(#[source] serde_json::Error),
    #[error("failed to seed dashboard: {0}")]
    Seed(#[source] DashboardError),
    #[error("failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// A recorded session to replay.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Session {
    config: DashboardConfig,
    seed: SessionSeed,
    intents: Vec<DashboardIntent>,
}

/// One output line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum ReplayLine<'a> {
    Outcome {
        intent: &'static str,
        #[serde(flatten)]
        outcome: &'a IntentOutcome,
    },
    View(&'a DashboardView),
}

fn main() -> Result<(), ReplayError> {
    init_tracing();
    let path = parse_args(env::args_os().map(PathBuf::from))?;
    let session = load_session(&path)?;
    let stdout = io::stdout();
    run_replay(session, &mut stdout.lock())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LABKEEPER_LOG")
        .unwrap_or_else(|_| EnvFilter::new("labkeeper=info,warn"));
    let format = env::var("LABKEEPER_LOG_FORMAT").unwrap_or_else(|_| "compact".to_owned());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = PathBuf>) -> Result<PathBuf, ReplayError> {
    let _program = args.next();
    let path = args
        .next()
        .ok_or_else(|| ReplayError::InvalidArgs("missing session path argument".into()))?;
    if let Some(extra) = args.next() {
        return Err(ReplayError::InvalidArgs(format!(
            "unexpected extra argument: {}",
            extra.display()
        )));
    }
    Ok(path)
}

fn load_session(path: &Path) -> Result<Session, ReplayError> {
    let bytes = fs::read(path).map_err(|source| ReplayError::SessionRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(ReplayError::SessionParse)
}

fn run_replay(session: Session, out: &mut impl Write) -> Result<(), ReplayError> {
    let mut dashboard =
        DashboardController::with_seed(session.config, Arc::new(DefaultClock), session.seed)
            .map_err(ReplayError::Seed)?;
    let total = session.intents.len();
    let mut failures = 0_usize;

    for intent in session.intents {
        let name = intent.name();
        let outcome = dashboard.apply(intent);
        if !outcome.ok {
            failures += 1;
        }
        write_line(out, &ReplayLine::Outcome {
            intent: name,
            outcome: &outcome,
        })?;
    }
    write_line(out, &ReplayLine::View(&dashboard.view()))?;

    if failures > 0 {
        warn!(total, failures, "replay finished with failed intents");
    } else {
        info!(total, "replay finished");
    }
    Ok(())
}

fn write_line(out: &mut impl Write, line: &ReplayLine<'_>) -> Result<(), ReplayError> {
    let encoded = serde_json::to_string(line).map_err(ReplayError::Encode)?;
    writeln!(out, "{encoded}").map_err(ReplayError::Output)
}
