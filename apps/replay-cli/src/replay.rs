//! Reading event streams and rendering the reduced session.

use std::io::BufRead;

use game_session::domain::phases::SidePhase;
use game_session::{GameEvent, GameState};
use tracing::debug;

use crate::error::ReplayError;

/// Parses a JSON-lines event stream. Blank lines are skipped; line numbers in
/// errors are 1-based.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<GameEvent>, ReplayError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: GameEvent =
            serde_json::from_str(&line).map_err(|e| ReplayError::decode(idx + 1, e))?;
        debug!(line = idx + 1, kind = event.kind().as_str(), "event read");
        events.push(event);
    }
    Ok(events)
}

/// Human-readable summary of where the session ended up.
pub fn summarize(state: &GameState) -> Result<Vec<String>, ReplayError> {
    let mut out = vec![format!("phase: {}", state.name())];

    if state.room().is_some() {
        out.push(format!("deck: {} cards", state.deck()?.len()));
    }

    match state {
        GameState::WaitForInitialize(w) => {
            out.push(format!("waiting for a snapshot of {}", w.game_room_id));
        }
        GameState::Start(start) => {
            out.push(format!("players: {}", start.player_ids.join(", ")));
            out.push(format!("can start: {}", yes_no(start.can_start_game())));
        }
        GameState::Bidding(bidding) => {
            out.push(format!("round {} dealt by {}", bidding.round, bidding.dealer_id));
            if let Some(bid) = bidding.my_bid {
                out.push(format!("my bid: {bid}"));
            }
            if !bidding.is_everyone_bid() {
                out.push(format!("waiting on: {}", bidding.pending_players().join(", ")));
            }
        }
        GameState::LeadPlayerChanging(p) => side_lines(&mut out, "lead player change", p),
        GameState::HandChangeWaiting(p) => side_lines(&mut out, "hand change", p),
        GameState::FuturePredicateWaiting(p) => side_lines(&mut out, "future predicate", p),
        GameState::BidDeclareChangeWaiting(p) => side_lines(&mut out, "bid change", p),
        GameState::Trick(_) => {}
        GameState::Finished(finished) => {
            out.push(format!("winner: {}", finished.winner_id));
            for (player_id, total) in finished.score_board.standings() {
                out.push(format!("  {player_id}: {total}"));
            }
        }
        GameState::GameEnded => out.push("game ended".to_string()),
    }

    if let Some(trick) = state.current_trick() {
        out.push(format!(
            "round {} trick {}: {} to act",
            trick.round, trick.trick, trick.next_player_id
        ));
        let hand: Vec<&str> = trick.my_cards().iter().map(|c| c.id.as_str()).collect();
        out.push(format!("my hand: {}", hand.join(" ")));
        if let Some(suit) = trick.must_follow() {
            out.push(format!("must follow: {suit:?}"));
        }
        for p in &trick.players {
            out.push(format!(
                "  {}: bid {} took {} bonus {}",
                p.player_id, p.declared_bid, p.took_trick, p.took_bonus
            ));
        }
    }

    Ok(out)
}

fn side_lines(out: &mut Vec<String>, what: &str, phase: &impl SidePhase) {
    let who = if phase.is_me_target() {
        "me".to_string()
    } else {
        phase.target_player_id().to_string()
    };
    out.push(format!("waiting on {who} ({what})"));
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}
