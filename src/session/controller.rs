//! Turn controller: the only owner of the game session.
//!
//! The controller is driven by two triggers, clicks from the view and clock
//! ticks. It never reads the system clock itself; callers pass `now` in, so a
//! whole game can be replayed deterministically in tests.
//!
//! Delayed work (applying the AI's move, publishing a game-over summary) is
//! queued as [`ScheduledAction`]s. The queue is not cleared on reset. Each
//! action remembers the session generation it was scheduled in and is dropped
//! on firing if the session has been reset since.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use super::error::MoveError;
use super::types::{
    GameEvent, GameOverReason, GameSummary, Phase, SessionSnapshot, AI, HUMAN, MAX_STEPS,
};
use crate::board::{Board, Player, Pos};
use crate::config::GameConfig;
use crate::engine::AIEngine;
use crate::rules::{apply_move, evaluate_move, has_legal_move, MoveCandidate};

/// Work deferred until its due time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Land the AI's already chosen move.
    ApplyAiMove(MoveCandidate),
    /// Publish the game-over summary and start a new game.
    EndGame(GameOverReason),
}

/// An [`Action`] waiting in the queue.
#[derive(Debug, Clone)]
pub struct ScheduledAction {
    pub due: Instant,
    pub generation: u64,
    pub action: Action,
}

/// Owns the session state and runs the turn loop.
pub struct TurnController {
    board: Board,
    current_player: Player,
    step_count: u32,
    phase: Phase,
    generation: u64,

    config: GameConfig,
    engine: AIEngine,
    queue: Vec<ScheduledAction>,
    events: Sender<GameEvent>,
    last_summary: Option<GameSummary>,
}

impl TurnController {
    /// Start a session that reports to `events`.
    pub fn new(config: GameConfig, events: Sender<GameEvent>) -> Self {
        Self {
            board: Board::new(),
            current_player: HUMAN,
            step_count: 0,
            phase: Phase::AwaitingHumanMove,
            generation: 0,
            config,
            engine: AIEngine::new(),
            queue: Vec::new(),
            events,
            last_summary: None,
        }
    }

    /// Start a session together with the receiving end of its event channel.
    pub fn with_channel(config: GameConfig) -> (Self, Receiver<GameEvent>) {
        let (tx, rx) = channel();
        (Self::new(config, tx), rx)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board,
            current_player: self.current_player,
            step_count: self.step_count,
            phase: self.phase,
            generation: self.generation,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Summary of the most recently finished game, if any.
    pub fn last_summary(&self) -> Option<GameSummary> {
        self.last_summary
    }

    /// Earliest due time in the queue, stale entries included.
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.iter().map(|s| s.due).min()
    }

    pub fn pending_actions(&self) -> usize {
        self.queue.len()
    }

    /// Forward a click at raw view coordinates.
    pub fn click_cell(&mut self, row: i32, col: i32, now: Instant) -> Result<usize, MoveError> {
        let pos = Pos::try_new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.click(pos, now)
    }

    /// Try to play the human's disk at `pos`.
    ///
    /// Returns the number of flipped disks. A rejected click leaves the
    /// session untouched.
    #[instrument(skip(self, now))]
    pub fn click(&mut self, pos: Pos, now: Instant) -> Result<usize, MoveError> {
        match self.phase {
            Phase::GameOver => return Err(MoveError::GameOver),
            Phase::AiThinking => return Err(MoveError::AiThinking),
            Phase::AwaitingHumanMove => {}
        }
        debug_assert_eq!(self.current_player, HUMAN);

        if !self.board.is_empty(pos) {
            debug!("Rejected click on occupied cell");
            return Err(MoveError::Occupied(pos));
        }

        let flips = evaluate_move(&self.board, HUMAN, pos);
        if flips.is_empty() {
            debug!("Rejected click that flips nothing");
            return Err(MoveError::NoCapture(pos));
        }

        let flipped = flips.len();
        self.play(HUMAN, pos, &flips);
        self.advance(now);
        Ok(flipped)
    }

    /// Fire every queued action due at or before `now`, earliest first.
    ///
    /// Actions scheduled while firing are picked up in the same call when
    /// they are already due.
    pub fn tick(&mut self, now: Instant) {
        while let Some(idx) = self.next_ready(now) {
            let scheduled = self.queue.remove(idx);
            self.fire(scheduled, now);
        }
    }

    /// Throw the current game away and start over.
    #[instrument(skip(self, now))]
    pub fn reset(&mut self, now: Instant) {
        self.board = Board::new();
        self.current_player = HUMAN;
        self.step_count = 0;
        self.phase = Phase::AwaitingHumanMove;
        self.generation += 1;
        info!(generation = self.generation, "New game");

        self.emit(GameEvent::Reset);
        self.emit(GameEvent::TurnChanged(HUMAN));
        self.emit(GameEvent::BoardChanged);
        self.advance(now);
    }

    fn next_ready(&self, now: Instant) -> Option<usize> {
        self.queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= now)
            .min_by_key(|(_, s)| s.due)
            .map(|(idx, _)| idx)
    }

    fn schedule(&mut self, action: Action, due: Instant) {
        debug!(?action, generation = self.generation, "Scheduling action");
        self.queue.push(ScheduledAction {
            due,
            generation: self.generation,
            action,
        });
    }

    fn fire(&mut self, scheduled: ScheduledAction, now: Instant) {
        if scheduled.generation != self.generation {
            debug!(
                scheduled = scheduled.generation,
                current = self.generation,
                "Dropping stale scheduled action"
            );
            return;
        }

        match scheduled.action {
            Action::ApplyAiMove(candidate) => {
                if self.phase != Phase::AiThinking {
                    warn!(phase = %self.phase, "AI move fired outside AI turn");
                    return;
                }
                self.play(AI, candidate.pos, &candidate.flips);
                self.advance(now);
            }
            Action::EndGame(reason) => {
                let summary = GameSummary::from_tally(self.board.tally(), reason);
                info!(%summary, "Game finished");
                self.last_summary = Some(summary);
                self.emit(GameEvent::GameOver(summary));
                self.reset(now);
            }
        }
    }

    /// Put a disk down, count the step and hand the turn over.
    fn play(&mut self, player: Player, pos: Pos, flips: &[Pos]) {
        apply_move(&mut self.board, player, pos, flips);
        self.step_count += 1;
        self.current_player = player.opponent();
        info!(
            ?player,
            %pos,
            flipped = flips.len(),
            step = self.step_count,
            "Move applied"
        );
        debug!("\n{}", self.board);

        self.emit(GameEvent::MoveApplied {
            player,
            pos,
            flipped: flips.len(),
        });
        self.emit(GameEvent::TurnChanged(self.current_player));
        self.emit(GameEvent::BoardChanged);
    }

    /// Decide what happens next for the side to move.
    fn advance(&mut self, now: Instant) {
        if self.step_count >= MAX_STEPS {
            self.finish(GameOverReason::BoardFull, now);
            return;
        }

        // Below MAX_STEPS from here on, so the quick rule ends the game
        // whenever the side to move is stuck.
        if self.current_player == AI {
            let result = self.engine.choose_move(&self.board, AI);
            match result.best_move {
                Some(candidate) => {
                    debug!(
                        pos = %candidate.pos,
                        flips = candidate.flip_count(),
                        candidates = result.candidates,
                        "AI thinking"
                    );
                    self.phase = Phase::AiThinking;
                    self.emit(GameEvent::AiThinking);
                    let due = now + self.config.ai_delay();
                    self.schedule(Action::ApplyAiMove(candidate), due);
                }
                None => self.stuck(AI, now),
            }
        } else if has_legal_move(&self.board, HUMAN) {
            self.phase = Phase::AwaitingHumanMove;
        } else {
            self.stuck(HUMAN, now);
        }
    }

    /// `player` is to move but has nothing legal.
    fn stuck(&mut self, player: Player, now: Instant) {
        let other = player.opponent();
        if self.config.strict_end_detection && has_legal_move(&self.board, other) {
            info!(?player, "No legal move, passing");
            self.current_player = other;
            self.emit(GameEvent::Passed(player));
            self.emit(GameEvent::TurnChanged(other));
            self.emit(GameEvent::BoardChanged);
            self.advance(now);
        } else {
            self.finish(GameOverReason::NoValidMove, now);
        }
    }

    fn finish(&mut self, reason: GameOverReason, now: Instant) {
        info!(%reason, step = self.step_count, "Game over detected");
        self.phase = Phase::GameOver;
        let due = now + self.config.game_over_delay();
        self.schedule(Action::EndGame(reason), due);
    }

    fn emit(&self, event: GameEvent) {
        if self.events.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}
