//! Reads save events (one JSON object per line) from stdin, runs them through the
//! notification pipeline and prints every dispatched notification to stdout.
//!
//! The forum state comes from the snapshot named by `FORUMPUSH_SNAPSHOT`; without
//! it the store starts empty. Logs go to stderr, filtered by `RUST_LOG`.

use std::{env, io, path::PathBuf, process::ExitCode, sync::Arc};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};

use forumpush_core::{NotificationPipeline, Outcome};
use forumpush_memory_adapter::{LogDelivery, MemoryStore, Snapshot};
use forumpush_types::error::FpResult;
use forumpush_types::types::RawSaveEvent;

pub struct Config {
	pub snapshot: Option<PathBuf>,
}

impl Config {
	fn from_env() -> Self {
		Config { snapshot: env::var_os("FORUMPUSH_SNAPSHOT").map(PathBuf::from) }
	}
}

#[derive(Debug, Default)]
struct Stats {
	events: usize,
	dispatched: usize,
	skipped: usize,
	failed: usize,
}

fn outcome_label(outcome: &Outcome) -> &'static str {
	match outcome {
		Outcome::Rejected(reason) => reason.as_str(),
		Outcome::Ineligible => "ineligible",
		Outcome::Disabled => "disabled",
		Outcome::NoTargets => "no-targets",
		Outcome::Dispatched(_) => "dispatched",
	}
}

async fn run(config: Config) -> FpResult<Stats> {
	let snapshot = match &config.snapshot {
		Some(path) => MemoryStore::read_snapshot_file(path).await?,
		None => {
			warn!("FORUMPUSH_SNAPSHOT not set, starting with an empty forum");
			Snapshot::default()
		}
	};

	let store = Arc::new(MemoryStore::from_snapshot(&snapshot));
	let pipeline = NotificationPipeline::builder()
		.entity_types(snapshot.entity_types)
		.users(store.clone())
		.meta(store.clone())
		.options(store.clone())
		.titles(store)
		.delivery(Arc::new(LogDelivery::new(io::stdout())))
		.build()?;

	let mut stats = Stats::default();
	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	let mut line_no = 0usize;
	while let Some(line) = lines.next_line().await? {
		line_no += 1;
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}

		let event: RawSaveEvent = match serde_json::from_str(line) {
			Ok(event) => event,
			Err(err) => {
				warn!(line = line_no, "Skipping malformed event: {}", err);
				stats.skipped += 1;
				continue;
			}
		};
		stats.events += 1;

		let content_id = event.content_id;
		match pipeline.on_raw_content_saved(event).await {
			Ok(outcome) => {
				if matches!(outcome, Outcome::Dispatched(_)) {
					stats.dispatched += 1;
				}
				debug!(
					line = line_no,
					content_id = %content_id,
					outcome = outcome_label(&outcome),
					"Event processed"
				);
			}
			Err(err) => {
				error!(line = line_no, content_id = %content_id, "Event failed: {}", err);
				stats.failed += 1;
			}
		}
	}

	Ok(stats)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.with_writer(io::stderr)
		.init();

	match run(Config::from_env()).await {
		Ok(stats) => {
			info!(
				events = stats.events,
				dispatched = stats.dispatched,
				skipped = stats.skipped,
				failed = stats.failed,
				"Replay finished"
			);
			if stats.failed > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS }
		}
		Err(err) => {
			error!("Replay aborted: {}", err);
			ExitCode::FAILURE
		}
	}
}

// vim: ts=4
