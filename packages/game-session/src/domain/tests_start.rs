use crate::domain::events::GameEvent;
use crate::domain::fixtures::{ids, room, round_started, run, step, OWNER};
use crate::domain::event_log::EventLog;
use crate::domain::phases::{GameState, StartPhase};

fn lobby(me: &str, players: &[&str]) -> GameState {
    GameState::Start(StartPhase::new(room(me), ids(players)))
}

fn joined(player_id: &str) -> GameEvent {
    GameEvent::PlayerJoined {
        player_id: player_id.to_string(),
    }
}

#[test]
fn can_start_only_after_second_distinct_join() {
    let mut log = EventLog::new();
    let s0 = lobby(OWNER, &[]);

    let s1 = step(&s0, &mut log, &joined("P1"));
    assert!(!s1.as_start().unwrap().can_start_game());

    let s2 = step(&s1, &mut log, &joined("P1"));
    assert!(!s2.as_start().unwrap().can_start_game());

    let s3 = step(&s2, &mut log, &joined("P2"));
    assert!(s3.as_start().unwrap().can_start_game());
    assert_eq!(log.len(), 3);
}

#[test]
fn join_is_idempotent() {
    let (state, _) = run(lobby(OWNER, &["P1"]), &[joined("P2"), joined("P2"), joined("P1")]);
    assert_eq!(state.as_start().unwrap().player_ids, ids(&["P1", "P2"]));
}

#[test]
fn leave_removes_only_present_player() {
    let (state, log) = run(
        lobby(OWNER, &["P1", "P2", "P3"]),
        &[
            GameEvent::PlayerLeft {
                player_id: "P2".into(),
            },
            GameEvent::PlayerLeft {
                player_id: "P9".into(),
            },
        ],
    );
    assert_eq!(state.as_start().unwrap().player_ids, ids(&["P1", "P3"]));
    assert_eq!(log.len(), 2);
}

#[test]
fn previous_lobby_is_not_mutated() {
    let before = lobby(OWNER, &["P1"]);
    let mut log = EventLog::new();
    let _after = step(&before, &mut log, &joined("P2"));
    assert_eq!(before.as_start().unwrap().player_ids, ids(&["P1"]));
}

#[test]
fn round_started_enters_bidding_with_owner_as_dealer() {
    let (state, _) = run(
        lobby("P2", &["P1"]),
        &[
            joined("P2"),
            GameEvent::RoundStarted(round_started(1, &["P1", "P2"], &["g1"])),
        ],
    );

    let GameState::Bidding(bidding) = state else {
        panic!("expected bidding, got {}", state.name());
    };
    assert_eq!(bidding.players.len(), 2);
    assert!(bidding.players.iter().all(|p| !p.is_bid));
    assert_eq!(bidding.players[0].card, 1);
    assert_eq!(bidding.dealer_id, OWNER);
    assert_eq!(bidding.round, 1);
    assert_eq!(bidding.my_bid, None);
    assert_eq!(bidding.my_card_ids, ids(&["g1"]));
    assert!(bidding.score_board.is_empty());
}

#[test]
fn owner_flag_is_derived_from_identity() {
    let as_owner = StartPhase::new(room(OWNER), ids(&[OWNER]));
    let as_guest = StartPhase::new(room("P2"), ids(&[OWNER, "P2"]));
    assert!(as_owner.is_me_room_owner());
    assert!(!as_guest.is_me_room_owner());
}

#[test]
fn trick_events_are_logged_no_ops_in_lobby() {
    let before = lobby(OWNER, &["P1", "P2"]);
    let (after, log) = run(
        before.clone(),
        &[
            GameEvent::PlayerWon {
                winner_id: "P1".into(),
                trick_bonus: 0,
            },
            GameEvent::GameEnded,
        ],
    );
    assert_eq!(after, before);
    assert_eq!(log.len(), 2);
}
