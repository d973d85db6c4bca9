//! Score board: the append-only history of per-round score snapshots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::PlayerId;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub score: i32,
    pub bonus: i32,
}

/// One round's final tally.
pub type RoundScore = BTreeMap<PlayerId, Score>;

/// Raw score board as carried by a game-finished event or a snapshot.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreBoardPayload {
    pub round_scores: Vec<RoundScore>,
}

/// Ordered per-round scores. Length equals the number of finished rounds.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ScoreBoard {
    rounds: Vec<RoundScore>,
}

impl ScoreBoard {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A new board with `round` appended; `self` is unchanged.
    #[must_use]
    pub fn with_round(&self, round: RoundScore) -> Self {
        let mut rounds = Vec::with_capacity(self.rounds.len() + 1);
        rounds.extend(self.rounds.iter().cloned());
        rounds.push(round);
        Self { rounds }
    }

    pub fn rounds(&self) -> &[RoundScore] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn last_round_score(&self) -> Option<&RoundScore> {
        self.rounds.last()
    }

    /// Sum of `score` over every round the player appears in.
    pub fn total_for(&self, player_id: &str) -> i32 {
        self.rounds
            .iter()
            .filter_map(|round| round.get(player_id))
            .map(|s| s.score)
            .sum()
    }

    /// Players ordered by total score, highest first. Ties fall back to id order.
    pub fn standings(&self) -> Vec<(PlayerId, i32)> {
        let mut totals: BTreeMap<&PlayerId, i32> = BTreeMap::new();
        for round in &self.rounds {
            for (player_id, s) in round {
                *totals.entry(player_id).or_default() += s.score;
            }
        }
        let mut out: Vec<(PlayerId, i32)> =
            totals.into_iter().map(|(id, t)| (id.clone(), t)).collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        out
    }
}

impl From<ScoreBoardPayload> for ScoreBoard {
    fn from(payload: ScoreBoardPayload) -> Self {
        Self {
            rounds: payload.round_scores,
        }
    }
}

impl From<&ScoreBoard> for ScoreBoardPayload {
    fn from(board: &ScoreBoard) -> Self {
        Self {
            round_scores: board.rounds.clone(),
        }
    }
}
