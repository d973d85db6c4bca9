use crate::domain::event_log::EventLog;
use crate::domain::events::GameEvent;
use crate::domain::fixtures::{bidding_phase, ids, run, step, trick_started};
use crate::domain::phases::GameState;
use crate::domain::rules::FIRST_TRICK;

fn bid(player_id: &str, bid: u32) -> GameEvent {
    GameEvent::BidDeclared {
        player_id: player_id.to_string(),
        bid,
    }
}

#[test]
fn local_bid_is_recorded() {
    let (state, _) = run(
        GameState::Bidding(bidding_phase(&["P1", "P2"], "P2")),
        &[bid("P2", 3)],
    );
    let bidding = state.as_bidding().unwrap();
    assert_eq!(bidding.my_bid, Some(3));
    assert!(bidding.players[1].is_bid);
    assert!(!bidding.players[0].is_bid);
}

#[test]
fn remote_bid_marks_roster_only() {
    let (state, _) = run(
        GameState::Bidding(bidding_phase(&["P1", "P2"], "P2")),
        &[bid("P1", 0)],
    );
    let bidding = state.as_bidding().unwrap();
    assert_eq!(bidding.my_bid, None);
    assert!(bidding.players[0].is_bid);
    assert_eq!(bidding.pending_players(), vec!["P2"]);
    assert!(!bidding.is_everyone_bid());
}

#[test]
fn earlier_state_keeps_its_roster() {
    let before = GameState::Bidding(bidding_phase(&["P1", "P2"], "P1"));
    let mut log = EventLog::new();
    let after = step(&before, &mut log, &bid("P1", 2));

    assert!(!before.as_bidding().unwrap().players[0].is_bid);
    assert!(after.as_bidding().unwrap().players[0].is_bid);
}

#[test]
fn unknown_bidder_leaves_roster_unchanged() {
    let before = GameState::Bidding(bidding_phase(&["P1", "P2"], "P1"));
    let (after, log) = run(before.clone(), &[bid("ZZ", 1)]);
    assert_eq!(after, before);
    assert_eq!(log.len(), 1);
}

#[test]
fn trick_started_seeds_trick_phase() {
    let (state, log) = run(
        GameState::Bidding(bidding_phase(&["P1", "P2", "P3"], "P1")),
        &[
            bid("P1", 1),
            bid("P2", 0),
            bid("P3", 2),
            GameEvent::TrickStarted(trick_started(&["P1", "P2", "P3"], 1, 3)),
        ],
    );

    let GameState::Trick(trick) = state else {
        panic!("expected trick, got {}", state.name());
    };
    assert_eq!(trick.trick, FIRST_TRICK);
    assert!(trick.field.is_empty());
    assert_eq!(trick.dealer_id, "P1");
    assert_eq!(trick.next_player_id, "P1");
    assert_eq!(trick.players.len(), 3);
    for p in &trick.players {
        assert_eq!(p.declared_bid, 1);
        assert_eq!(p.card, 3);
        assert_eq!(p.took_trick, 0);
        assert_eq!(p.took_bonus, 0);
    }
    assert_eq!(trick.my_card_ids, ids(&["g1", "y2", "b14"]));
    assert_eq!(trick.round, 3);
    assert_eq!(log.len(), 4);
}

#[test]
fn lobby_events_are_no_ops_while_bidding() {
    let before = GameState::Bidding(bidding_phase(&["P1", "P2"], "P1"));
    let (after, _) = run(
        before.clone(),
        &[GameEvent::PlayerJoined {
            player_id: "P9".into(),
        }],
    );
    assert_eq!(after, before);
}
