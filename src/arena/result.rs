//! Battle outcomes and batch aggregation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Edge, MoveError, PlayerId, PlayerPair};

/// Who won a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Player(PlayerId),
    Tie,
}

impl Winner {
    /// The winning player, or `None` for a tie.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Winner::Player(player) => Some(player),
            Winner::Tie => None,
        }
    }
}

/// Why a player lost without the board filling up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForfeitReason {
    /// The submitted edge failed validation.
    InvalidMove(MoveError),
    /// The decision took longer than the configured limit.
    Timeout { elapsed: Duration, limit: Duration },
}

/// A forfeit: the offending player and the cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forfeit {
    pub player: PlayerId,
    pub reason: ForfeitReason,
}

/// One committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub edge: Edge,
}

/// Wall-clock time spent in one committed decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingRecord {
    pub player: PlayerId,
    pub elapsed: Duration,
}

/// Outcome of a single battle.
///
/// The move and timing logs hold only committed moves, in order. A
/// forfeiting move appears in neither.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    initial_turn: PlayerId,
    winner: Winner,
    scores: PlayerPair<u32>,
    moves: Vec<MoveRecord>,
    timings: Vec<TimingRecord>,
    forfeit: Option<Forfeit>,
}

impl BattleResult {
    pub(crate) fn completed(
        initial_turn: PlayerId,
        scores: PlayerPair<u32>,
        moves: Vec<MoveRecord>,
        timings: Vec<TimingRecord>,
    ) -> Self {
        let winner = scores.leader().map_or(Winner::Tie, Winner::Player);
        Self {
            initial_turn,
            winner,
            scores,
            moves,
            timings,
            forfeit: None,
        }
    }

    pub(crate) fn forfeited(
        initial_turn: PlayerId,
        scores: PlayerPair<u32>,
        moves: Vec<MoveRecord>,
        timings: Vec<TimingRecord>,
        forfeit: Forfeit,
    ) -> Self {
        Self {
            initial_turn,
            winner: Winner::Player(forfeit.player.opponent()),
            scores,
            moves,
            timings,
            forfeit: Some(forfeit),
        }
    }

    #[must_use]
    pub fn initial_turn(&self) -> PlayerId {
        self.initial_turn
    }

    #[must_use]
    pub fn winner(&self) -> Winner {
        self.winner
    }

    /// Scores at the moment the battle ended.
    #[must_use]
    pub fn scores(&self) -> PlayerPair<u32> {
        self.scores
    }

    #[must_use]
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    #[must_use]
    pub fn timings(&self) -> &[TimingRecord] {
        &self.timings
    }

    #[must_use]
    pub fn forfeit(&self) -> Option<&Forfeit> {
        self.forfeit.as_ref()
    }

    #[must_use]
    pub fn is_forfeit(&self) -> bool {
        self.forfeit.is_some()
    }

    /// Total decision time of one player.
    #[must_use]
    pub fn thinking_time(&self, player: PlayerId) -> Duration {
        self.timings
            .iter()
            .filter(|record| record.player == player)
            .map(|record| record.elapsed)
            .sum()
    }
}

/// Results of `batch_run`, grouped by which player moved first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResults {
    by_initial_turn: PlayerPair<Vec<BattleResult>>,
}

impl BatchResults {
    pub(crate) fn new(by_initial_turn: PlayerPair<Vec<BattleResult>>) -> Self {
        Self { by_initial_turn }
    }

    /// Battles in which `player` moved first.
    #[must_use]
    pub fn started_by(&self, player: PlayerId) -> &[BattleResult] {
        &self.by_initial_turn[player]
    }

    /// Every battle, first-seat starts before second-seat starts.
    pub fn iter(&self) -> impl Iterator<Item = &BattleResult> {
        self.by_initial_turn.iter().flat_map(|(_, results)| results.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_initial_turn.iter().map(|(_, results)| results.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn wins(&self, player: PlayerId) -> usize {
        self.iter()
            .filter(|result| result.winner() == Winner::Player(player))
            .count()
    }

    #[must_use]
    pub fn ties(&self) -> usize {
        self.iter()
            .filter(|result| result.winner() == Winner::Tie)
            .count()
    }

    #[must_use]
    pub fn forfeits(&self) -> usize {
        self.iter().filter(|result| result.is_forfeit()).count()
    }

    /// Fraction of all battles won by `player`; 0.0 for an empty batch.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        match self.len() {
            0 => 0.0,
            total => self.wins(player) as f64 / total as f64,
        }
    }
}
