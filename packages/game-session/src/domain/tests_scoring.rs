use crate::domain::fixtures::round_score;
use crate::domain::scoring::{Score, ScoreBoard, ScoreBoardPayload};

#[test]
fn with_round_appends_without_touching_original() {
    let empty = ScoreBoard::empty();
    let one = empty.with_round(round_score(&[("A", 20, 0)]));
    let two = one.with_round(round_score(&[("A", -10, 0)]));

    assert_eq!(empty.len(), 0);
    assert_eq!(one.len(), 1);
    assert_eq!(two.len(), 2);
    assert_eq!(
        two.last_round_score().unwrap().get("A"),
        Some(&Score {
            score: -10,
            bonus: 0
        })
    );
}

#[test]
fn totals_skip_rounds_a_player_missed() {
    let board = ScoreBoard::empty()
        .with_round(round_score(&[("A", 20, 10), ("B", 30, 0)]))
        .with_round(round_score(&[("B", -20, 0)]));
    assert_eq!(board.total_for("A"), 20);
    assert_eq!(board.total_for("B"), 10);
    assert_eq!(board.total_for("Z"), 0);
}

#[test]
fn standings_order_by_total_then_id() {
    let board = ScoreBoard::empty()
        .with_round(round_score(&[("C", 10, 0), ("A", 30, 0), ("B", 30, 0)]));
    assert_eq!(
        board.standings(),
        vec![("A".to_string(), 30), ("B".to_string(), 30), ("C".to_string(), 10)]
    );
}

#[test]
fn adapter_keeps_round_order() {
    let payload = ScoreBoardPayload {
        round_scores: vec![round_score(&[("A", 1, 0)]), round_score(&[("A", 2, 0)])],
    };
    let board = ScoreBoard::from(payload.clone());
    assert_eq!(board.rounds()[0].get("A").unwrap().score, 1);
    assert_eq!(board.rounds()[1].get("A").unwrap().score, 2);
    assert_eq!(ScoreBoardPayload::from(&board), payload);
}
