//! The game session: board + timer bookkeeping + delayed effects.
//!
//! `GameSession` is the single entry point the presentation layer talks to.
//! It forwards selections into the [`Board`], owns the start timestamp and
//! the frozen end-of-game summary, schedules the delayed mismatch flip-back
//! and hint expiry, and emits [`SessionEvent`]s for everything a renderer
//! needs to react to.
//!
//! Time never comes from a clock in here - every operation takes `now` from
//! the caller, and delayed effects only happen when the caller pumps
//! [`GameSession::run_due_tasks`]. A reset bumps the session generation, so
//! a task scheduled before the reset is recognized as stale and dropped.

use std::collections::VecDeque;

use tracing::{debug, instrument, trace};

use crate::cards::{CardRegistry, SlotId};
use crate::core::{GameConfig, GameRng, Millis};
use crate::rules::{Board, SelectOutcome};

use super::event::{EventSink, GameSummary, SessionEvent};
use super::schedule::{Generation, ScheduledTask, TaskKind, TaskQueue};

/// One playable game of memory, from deal to win (or reset).
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    registry: CardRegistry,
    rng: GameRng,
    board: Board,

    /// Bumped on reset; scheduled tasks carry the generation they were
    /// created under and are ignored if it no longer matches.
    generation: Generation,
    tasks: TaskQueue,

    /// Set on the first accepted selection.
    started_at: Option<Millis>,

    /// Frozen at the moment of the win.
    summary: Option<GameSummary>,

    /// Emitted events awaiting delivery.
    events: VecDeque<SessionEvent>,
}

impl GameSession {
    /// Start a session over the standard 12-pair set.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), CardRegistry::standard(), seed)
    }

    /// Start a session with explicit configuration and card set.
    #[must_use]
    pub fn with_config(config: GameConfig, registry: CardRegistry, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let board = Board::deal(&registry, &mut rng);
        debug_assert_eq!(board.pair_count(), config.pair_count);

        Self {
            config,
            registry,
            rng,
            board,
            generation: Generation::default(),
            tasks: TaskQueue::new(),
            started_at: None,
            summary: None,
            events: VecDeque::new(),
        }
    }

    /// Select a card at `now`.
    ///
    /// Forwards to the board; reacts to the outcome:
    /// - first accepted selection records the start timestamp
    /// - a mismatch schedules the flip-back `mismatch_delay_ms` out
    /// - the winning match freezes the [`GameSummary`]
    ///
    /// `Ignored` outcomes emit no event.
    #[instrument(skip(self), level = "debug")]
    pub fn select_card(&mut self, slot: SlotId, now: Millis) -> SelectOutcome {
        let outcome = self.board.select(slot);

        if !outcome.is_ignored() && self.started_at.is_none() {
            debug!(%now, "session started");
            self.started_at = Some(now);
        }

        match outcome {
            SelectOutcome::Ignored => {}
            SelectOutcome::Pending => {
                self.events.push_back(SessionEvent::Pending { slot });
            }
            SelectOutcome::Matched(pair) => {
                self.events.push_back(SessionEvent::Matched { pair });
            }
            SelectOutcome::Mismatch { first, second } => {
                self.tasks.schedule(ScheduledTask {
                    kind: TaskKind::ResolveMismatch,
                    due: now.plus(self.config.mismatch_delay_ms),
                    generation: self.generation,
                });
                self.events.push_back(SessionEvent::Mismatch { first, second });
            }
            SelectOutcome::Won(_) => {
                let summary = GameSummary::compute(
                    self.board.pair_count(),
                    self.board.move_count(),
                    self.elapsed_secs(now),
                );
                debug!(?summary, "game won");
                self.summary = Some(summary);
                self.events.push_back(SessionEvent::Won { summary });
            }
        }

        outcome
    }

    /// Reveal a hint pair at `now`.
    ///
    /// Emits [`SessionEvent::HintShown`] and schedules the expiry
    /// `hint_reveal_ms` out. Board state, move count, and lock are
    /// untouched - a hint is never a move. Returns the hinted slots, or
    /// `None` while the board is locked or won.
    #[instrument(skip(self), level = "debug")]
    pub fn hint(&mut self, now: Millis) -> Option<(SlotId, SlotId)> {
        let (first, second) = self.board.hint()?;
        let pair = self.board.card(first)?.pair_key;

        self.tasks.schedule(ScheduledTask {
            kind: TaskKind::HintExpiry {
                pair,
                slots: (first, second),
            },
            due: now.plus(self.config.hint_reveal_ms),
            generation: self.generation,
        });
        self.events.push_back(SessionEvent::HintShown {
            pair,
            slots: (first, second),
        });

        Some((first, second))
    }

    /// Apply every delayed effect due at `now`. Returns how many applied.
    ///
    /// A task whose generation predates the current session is stale - the
    /// reset that bumped the generation already rebuilt the state the task
    /// would have touched - and is dropped unapplied.
    pub fn run_due_tasks(&mut self, now: Millis) -> usize {
        let mut applied = 0;

        for task in self.tasks.take_due(now) {
            if task.generation != self.generation {
                trace!(task_gen = %task.generation, current = %self.generation, "dropping stale task");
                continue;
            }

            match task.kind {
                TaskKind::ResolveMismatch => {
                    if let Some(slots) = self.board.resolve_mismatch() {
                        self.events.push_back(SessionEvent::MismatchResolved { slots });
                        applied += 1;
                    }
                }
                TaskKind::HintExpiry { pair, slots } => {
                    self.events.push_back(SessionEvent::HintExpired { pair, slots });
                    applied += 1;
                }
            }
        }

        applied
    }

    /// Advisory timer tick.
    ///
    /// Emits [`SessionEvent::TimerTick`] with the elapsed whole seconds
    /// while the game is running; silent (and `None`) before the first flip
    /// and after the win, so a caller's ticker naturally goes quiet once the
    /// game ends or resets.
    pub fn tick(&mut self, now: Millis) -> Option<u64> {
        if !self.board.is_started() || self.board.is_won() {
            return None;
        }

        let elapsed_secs = self.elapsed_secs(now);
        self.events.push_back(SessionEvent::TimerTick { elapsed_secs });
        Some(elapsed_secs)
    }

    /// Discard the whole game and deal a fresh one.
    ///
    /// Bumps the generation so any in-flight delayed task from the old game
    /// is dropped when it comes due. Undelivered events from the old game
    /// are discarded with it.
    #[instrument(skip(self), level = "debug")]
    pub fn reset(&mut self) {
        self.generation = self.generation.next();
        self.tasks.clear();
        self.events.clear();
        self.board.reset(&self.registry, &mut self.rng);
        self.started_at = None;
        self.summary = None;
        debug!(generation = %self.generation, "session reset");
    }

    /// Terminal-state exit hook. No game-state effect; hands the frozen
    /// summary back to the calling application.
    #[must_use]
    pub fn handle_continue(&self) -> Option<GameSummary> {
        self.summary
    }

    /// Whole seconds of play at `now`: frozen once won, zero before the
    /// first flip.
    #[must_use]
    pub fn elapsed_secs(&self, now: Millis) -> u64 {
        if let Some(summary) = self.summary {
            return summary.elapsed_secs;
        }
        match self.started_at {
            Some(start) => now.seconds_since(start),
            None => 0,
        }
    }

    /// Deliver and clear all pending events.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    /// Deliver all pending events into a sink.
    pub fn pump_events(&mut self, sink: &mut dyn EventSink) {
        for event in self.events.drain(..) {
            sink.on_event(&event);
        }
    }

    // === Accessors ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The card registry backing this session.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Current session generation.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Frozen summary, present once the game is won.
    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    /// Earliest due time among scheduled tasks, for callers that sleep
    /// between pumps.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Millis> {
        self.tasks.next_due()
    }
}
