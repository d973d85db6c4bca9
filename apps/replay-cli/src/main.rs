//! session-replay: reduce a recorded game event stream into one client's view.
//!
//! Reads JSON-lines events from a file (or stdin), applies them in order
//! through a `Session` and prints the event log followed by a summary of the
//! final phase.

mod config;
mod error;
mod replay;
mod telemetry;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use config::ReplayConfig;
use game_session::Session;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "session-replay")]
#[command(about = "Replay a game event stream through a client session")]
struct Args {
    /// JSON-lines event file; stdin when omitted
    input: Option<PathBuf>,

    /// Room id (falls back to SESSION_ROOM_ID)
    #[arg(long)]
    room: Option<String>,

    /// Local player id (falls back to SESSION_PLAYER_ID)
    #[arg(long)]
    player: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print only the final summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    telemetry::init_tracing(args.json_logs);

    let config = ReplayConfig::resolve(args.room, args.player)?;

    let events = match &args.input {
        Some(path) => replay::read_events(BufReader::new(
            File::open(path).map_err(error::ReplayError::from)?,
        ))?,
        None => replay::read_events(io::stdin().lock())?,
    };
    info!(
        events = events.len(),
        room = %config.room_id,
        player = %config.player_id,
        "replaying event stream"
    );

    let mut session = Session::new(config.room_id, config.player_id);
    let state = session.replay(&events);
    if !state.records_events() && !state.is_terminal() {
        warn!("stream never initialised the session");
    }

    let mut out = io::stdout().lock();
    if !args.quiet {
        for line in session.game_events() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
    }
    for line in replay::summarize(session.state())? {
        writeln!(out, "{line}")?;
    }

    info!(
        events_applied = session.events_applied(),
        phase = session.state().name(),
        "replay finished"
    );
    Ok(())
}
