// Property tests for trick rotation and round bookkeeping.

use proptest::prelude::*;

use crate::domain::events::GameEvent;
use crate::domain::fixtures::{played, round_score, run, trick_phase};
use crate::domain::phases::GameState;
use crate::domain::test_gens::roster;
use crate::domain::test_prelude::proptest_config;

fn refs(players: &[String]) -> Vec<&str> {
    players.iter().map(String::as_str).collect()
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn next_player_rotates_cyclically(players in roster()) {
        let seats = refs(&players);
        let mut state = GameState::Trick(trick_phase(&seats, seats[0]));
        let n = seats.len();

        for (i, seat) in seats.iter().enumerate() {
            let (next, _) = run(state, &[played(seat, "g9")]);
            let t = next.as_trick().unwrap();
            prop_assert_eq!(&t.next_player_id, seats[(i + 1) % n]);
            prop_assert_eq!(t.player_of(seat).unwrap().card, 2);
            prop_assert_eq!(t.field.len(), i + 1);
            state = next;
        }

        let t = state.as_trick().unwrap();
        prop_assert_eq!(&t.next_player_id, seats[0]);
        prop_assert!(t.players.iter().all(|p| p.card == 2));
    }

    #[test]
    fn round_finished_appends_exactly_one_round(
        players in roster(),
        finished_before in 0usize..4,
        score in -40i32..=60,
    ) {
        let seats = refs(&players);
        let mut trick = trick_phase(&seats, seats[0]);
        for r in 0..finished_before {
            trick.score_board = trick.score_board.with_round(round_score(&[("P1", r as i32, 0)]));
        }
        let (state, _) = run(
            GameState::Trick(trick),
            &[
                played(seats[0], "g1"),
                GameEvent::RoundFinished {
                    round_score: round_score(&[(seats[0], score, 0)]),
                },
            ],
        );
        let t = state.as_trick().unwrap();
        prop_assert_eq!(t.score_board.len(), finished_before + 1);
        prop_assert!(t.field.is_empty());
        prop_assert_eq!(
            t.score_board.last_round_score().unwrap().get(seats[0]).unwrap().score,
            score
        );
    }

    #[test]
    fn trick_resolution_hands_lead_to_winner(players in roster(), pick in any::<prop::sample::Index>()) {
        let seats = refs(&players);
        let winner = seats[pick.index(seats.len())];
        let (state, _) = run(
            GameState::Trick(trick_phase(&seats, seats[0])),
            &[
                played(seats[0], "g9"),
                GameEvent::PlayerWon { winner_id: winner.to_string(), trick_bonus: 0 },
            ],
        );
        let t = state.as_trick().unwrap();
        prop_assert_eq!(&t.dealer_id, winner);
        prop_assert_eq!(&t.next_player_id, winner);
        prop_assert_eq!(t.trick, 2);
        prop_assert_eq!(t.player_of(winner).unwrap().took_trick, 1);
    }
}
