//! The arena: owns the board, enforces legality, scores and alternates turns.

use std::time::Instant;

use tracing::{debug, trace};

use crate::agents::Agent;
use crate::core::{Board, Edge, MoveError, PlayerId, PlayerPair};

use super::config::ArenaConfig;
use super::result::{
    BattleResult, BatchResults, Forfeit, ForfeitReason, MoveRecord, TimingRecord,
};
use super::ArenaError;

/// Referee for battles between two agents.
///
/// The arena is the only owner of the live board. Agents see it through a
/// shared reference in [`Agent::decide`] and never mutate it.
pub struct Arena {
    config: ArenaConfig,
    agents: PlayerPair<Box<dyn Agent>>,
    board: Board,
    scores: PlayerPair<u32>,
    turn: PlayerId,
}

impl Arena {
    /// Create an arena seating `first` as player 0 and `second` as player 1.
    ///
    /// # Panics
    ///
    /// Panics if either board dimension in `config` is zero.
    pub fn new(config: ArenaConfig, first: Box<dyn Agent>, second: Box<dyn Agent>) -> Self {
        let board = Board::new(config.xsize, config.ysize);
        Self {
            config,
            agents: PlayerPair::new(first, second),
            board,
            scores: PlayerPair::default(),
            turn: PlayerId::FIRST,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn scores(&self) -> PlayerPair<u32> {
        self.scores
    }

    /// Player to move.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Clear the board and scores. Player 0 is to move.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.xsize, self.config.ysize);
        self.scores = PlayerPair::default();
        self.turn = PlayerId::FIRST;
    }

    /// True once every box has been scored.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.scores.sum() as usize >= self.board.box_count()
    }

    /// Validate and draw `edge`, returning how many boxes it completed.
    ///
    /// Scores and turn are left alone; see [`Arena::play`].
    pub fn try_move(&mut self, edge: Edge) -> Result<u32, MoveError> {
        self.board.validate(edge)?;
        // Completions are read off the pre-move degrees.
        let completed = self.board.completions(edge);
        self.board.draw(edge)?;
        Ok(completed)
    }

    /// Commit a move for the player to move.
    ///
    /// Credits completed boxes to the mover and passes the turn only when
    /// nothing was completed. On error nothing changes.
    pub fn play(&mut self, edge: Edge) -> Result<u32, MoveError> {
        let completed = self.try_move(edge)?;
        self.scores[self.turn] += completed;
        if completed == 0 {
            self.turn = self.turn.opponent();
        }
        Ok(completed)
    }

    /// Play one battle from an empty board with `initial_turn` to move.
    ///
    /// An illegal or (when a limit is configured) slow decision ends the
    /// battle as a forfeit. Only a failing `Agent::initialize` is an error.
    ///
    /// # Panics
    ///
    /// Panics if the board fills up while boxes remain unscored, which the
    /// scoring rules make impossible.
    pub fn battle(&mut self, initial_turn: PlayerId) -> Result<BattleResult, ArenaError> {
        self.reset();
        self.turn = initial_turn;

        for player in PlayerId::both() {
            let agent = &mut self.agents[player];
            agent
                .initialize()
                .map_err(|source| ArenaError::AgentInitialization {
                    player,
                    agent: agent.name().to_string(),
                    source,
                })?;
        }

        debug!(
            first = self.agents[PlayerId::FIRST].name(),
            second = self.agents[PlayerId::SECOND].name(),
            initial_turn = initial_turn.index(),
            xsize = self.board.xsize(),
            ysize = self.board.ysize(),
            "battle started"
        );

        let mut moves = Vec::with_capacity(self.board.edge_count());
        let mut timings = Vec::with_capacity(self.board.edge_count());

        while !self.is_over() {
            let player = self.turn;
            assert!(
                !self.board.is_full(),
                "board is full with {} of {} boxes scored",
                self.scores.sum(),
                self.board.box_count()
            );

            let started = Instant::now();
            let edge = self.agents[player].decide(&self.board);
            let elapsed = started.elapsed();

            if let Some(limit) = self.config.move_time_limit {
                if elapsed > limit {
                    let reason = ForfeitReason::Timeout { elapsed, limit };
                    return Ok(self.forfeit(initial_turn, player, reason, moves, timings));
                }
            }

            let completed = match self.play(edge) {
                Ok(completed) => completed,
                Err(error) => {
                    let reason = ForfeitReason::InvalidMove(error);
                    return Ok(self.forfeit(initial_turn, player, reason, moves, timings));
                }
            };

            trace!(
                player = player.index(),
                %edge,
                completed,
                elapsed_us = elapsed.as_micros() as u64,
                score0 = self.scores[PlayerId::FIRST],
                score1 = self.scores[PlayerId::SECOND],
                "move committed"
            );
            moves.push(MoveRecord { player, edge });
            timings.push(TimingRecord { player, elapsed });
        }

        let result = BattleResult::completed(initial_turn, self.scores, moves, timings);
        debug!(
            winner = ?result.winner(),
            score0 = self.scores[PlayerId::FIRST],
            score1 = self.scores[PlayerId::SECOND],
            moves = result.moves().len(),
            "battle finished"
        );
        Ok(result)
    }

    /// Run `batch_size` battles with each player starting.
    pub fn batch_run(&mut self) -> Result<BatchResults, ArenaError> {
        let batch_size = self.config.batch_size;
        let mut run = |initial_turn: PlayerId| -> Result<Vec<BattleResult>, ArenaError> {
            (0..batch_size).map(|_| self.battle(initial_turn)).collect()
        };
        let first = run(PlayerId::FIRST)?;
        let second = run(PlayerId::SECOND)?;
        let results = BatchResults::new(PlayerPair::new(first, second));

        debug!(
            battles = results.len(),
            wins0 = results.wins(PlayerId::FIRST),
            wins1 = results.wins(PlayerId::SECOND),
            ties = results.ties(),
            forfeits = results.forfeits(),
            "batch finished"
        );
        Ok(results)
    }

    fn forfeit(
        &self,
        initial_turn: PlayerId,
        player: PlayerId,
        reason: ForfeitReason,
        moves: Vec<MoveRecord>,
        timings: Vec<TimingRecord>,
    ) -> BattleResult {
        debug!(player = player.index(), ?reason, "forfeit");
        let forfeit = Forfeit { player, reason };
        BattleResult::forfeited(initial_turn, self.scores, moves, timings, forfeit)
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("config", &self.config)
            .field("first", &self.agents[PlayerId::FIRST].name())
            .field("second", &self.agents[PlayerId::SECOND].name())
            .field("scores", &self.scores)
            .field("turn", &self.turn)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::time::Duration;

    use super::*;
    use crate::agents::{AgentConfig, RandomAgent};
    use crate::arena::Winner;

    /// Plays a fixed list of edges, then repeats the last one.
    struct ScriptedAgent {
        script: VecDeque<Edge>,
        last: Edge,
    }

    impl ScriptedAgent {
        fn boxed(script: Vec<Edge>) -> Box<dyn Agent> {
            let last = *script.last().unwrap();
            Box::new(Self {
                script: script.into(),
                last,
            })
        }
    }

    impl Agent for ScriptedAgent {
        fn name(&self) -> &str {
            "scripted"
        }

        fn decide(&mut self, _board: &Board) -> Edge {
            self.script.pop_front().unwrap_or(self.last)
        }
    }

    struct SlowAgent;

    impl Agent for SlowAgent {
        fn name(&self) -> &str {
            "slow"
        }

        fn decide(&mut self, board: &Board) -> Edge {
            std::thread::sleep(Duration::from_millis(20));
            board.legal_moves()[0]
        }
    }

    fn random_arena(xsize: usize, ysize: usize) -> Arena {
        Arena::new(
            ArenaConfig::default().with_size(xsize, ysize).with_batch_size(3),
            Box::new(RandomAgent::new(1)),
            Box::new(RandomAgent::new(2)),
        )
    }

    #[test]
    fn test_try_move_rejects_illegal_edges() {
        let mut arena = random_arena(2, 2);
        arena.try_move(Edge::horizontal(0, 0)).unwrap();

        assert!(matches!(
            arena.try_move(Edge::horizontal(0, 0)),
            Err(MoveError::AlreadyDrawn { .. })
        ));
        assert!(matches!(
            arena.try_move(Edge::horizontal(2, 0)),
            Err(MoveError::OffGrid { .. })
        ));
        assert!(matches!(
            arena.try_move(Edge::vertical(0, 2)),
            Err(MoveError::OffGrid { .. })
        ));
        assert!(matches!(
            arena.try_move(Edge::vertical(3, 0)),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert_eq!(arena.board().drawn_count(), 1);
    }

    #[test]
    fn test_completing_box_keeps_turn() {
        let mut arena = random_arena(2, 2);

        assert_eq!(arena.play(Edge::horizontal(0, 0)), Ok(0));
        assert_eq!(arena.turn(), PlayerId::SECOND);
        assert_eq!(arena.play(Edge::vertical(0, 0)), Ok(0));
        assert_eq!(arena.turn(), PlayerId::FIRST);
        assert_eq!(arena.play(Edge::horizontal(0, 1)), Ok(0));
        assert_eq!(arena.turn(), PlayerId::SECOND);

        assert_eq!(arena.play(Edge::vertical(1, 0)), Ok(1));
        assert_eq!(arena.turn(), PlayerId::SECOND);
        assert_eq!(arena.scores(), PlayerPair::new(0, 1));
    }

    #[test]
    fn test_double_completion() {
        // A middle wall closing two three-sided boxes scores both.
        let mut arena = random_arena(2, 1);
        for edge in [
            Edge::horizontal(0, 0),
            Edge::horizontal(1, 0),
            Edge::horizontal(0, 1),
            Edge::horizontal(1, 1),
            Edge::vertical(0, 0),
            Edge::vertical(2, 0),
        ] {
            arena.try_move(edge).unwrap();
        }
        assert_eq!(arena.play(Edge::vertical(1, 0)), Ok(2));
        assert!(arena.is_over());
    }

    #[test]
    fn test_battle_runs_to_completion() {
        let mut arena = random_arena(3, 3);
        let result = arena.battle(PlayerId::SECOND).unwrap();

        assert!(arena.is_over());
        assert!(arena.board().is_full());
        assert!(!result.is_forfeit());
        assert_eq!(result.initial_turn(), PlayerId::SECOND);
        assert_eq!(result.moves().len(), arena.board().edge_count());
        assert_eq!(result.timings().len(), result.moves().len());
        assert_eq!(result.moves()[0].player, PlayerId::SECOND);
        assert_eq!(result.scores().sum(), 9);
        assert_eq!(result.winner().player(), result.scores().leader());
    }

    #[test]
    fn test_invalid_move_forfeits() {
        let mut arena = Arena::new(
            ArenaConfig::default().with_size(2, 2),
            ScriptedAgent::boxed(vec![Edge::horizontal(0, 0)]),
            ScriptedAgent::boxed(vec![Edge::horizontal(0, 0)]),
        );
        let result = arena.battle(PlayerId::FIRST).unwrap();

        assert!(result.is_forfeit());
        assert_eq!(result.winner(), Winner::Player(PlayerId::FIRST));
        assert_eq!(result.moves().len(), 1);
        assert_eq!(result.timings().len(), 1);
        let forfeit = result.forfeit().unwrap();
        assert_eq!(forfeit.player, PlayerId::SECOND);
        assert!(matches!(
            forfeit.reason,
            ForfeitReason::InvalidMove(MoveError::AlreadyDrawn { .. })
        ));
    }

    #[test]
    fn test_slow_agent_times_out() {
        let mut arena = Arena::new(
            ArenaConfig::default()
                .with_size(2, 2)
                .with_move_time_limit(Duration::from_millis(1)),
            Box::new(SlowAgent),
            Box::new(RandomAgent::new(3)),
        );
        let result = arena.battle(PlayerId::FIRST).unwrap();

        assert_eq!(result.winner(), Winner::Player(PlayerId::SECOND));
        assert!(result.moves().is_empty());
        assert!(matches!(
            result.forfeit().map(|f| f.reason),
            Some(ForfeitReason::Timeout { .. })
        ));
        // The timed-out edge was never drawn.
        assert_eq!(arena.board().drawn_count(), 0);
    }

    #[test]
    fn test_battle_resets_between_runs() {
        let mut arena = random_arena(2, 2);
        arena.battle(PlayerId::FIRST).unwrap();
        let result = arena.battle(PlayerId::FIRST).unwrap();
        assert_eq!(result.moves().len(), 12);
        assert_eq!(result.scores().sum(), 4);
    }

    #[test]
    fn test_batch_run_groups_by_initial_turn() {
        let mut arena = random_arena(2, 3);
        let results = arena.batch_run().unwrap();

        assert_eq!(results.len(), 6);
        for player in PlayerId::both() {
            let started = results.started_by(player);
            assert_eq!(started.len(), 3);
            assert!(started.iter().all(|r| r.initial_turn() == player));
        }
        assert_eq!(
            results.wins(PlayerId::FIRST) + results.wins(PlayerId::SECOND) + results.ties(),
            6
        );
    }

    #[test]
    fn test_initialization_failure_aborts() {
        let mut arena = Arena::new(
            ArenaConfig::default().with_size(2, 2),
            Box::new(RandomAgent::new(0)),
            AgentConfig::hybrid().with_transition_ratio(2.0).build(),
        );
        let err = arena.battle(PlayerId::FIRST).unwrap_err();

        match err {
            ArenaError::AgentInitialization { player, agent, .. } => {
                assert_eq!(player, PlayerId::SECOND);
                assert_eq!(agent, "hybrid");
            }
        }
        assert!(arena.batch_run().is_err());
    }
}
