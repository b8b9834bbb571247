//! The match engine state machine.

use im::Vector;
use smallvec::SmallVec;

use super::event::GameEvent;
use super::state::{EnginePhase, FlipOutcome, FlipRejection, GameSnapshot};
use crate::cards::{build_deck, Card, CardPosition};
use crate::core::{ConfigError, GameConfig, GameRng, Generation, Timeline, TimerId};
use crate::session::{MemoryScoreStore, ScoreStore, SessionTracker};

/// Most ticks replayed one by one in a single `advance`. A longer backlog
/// (a suspended tab, a host clock jump) is counted in one step.
const MAX_TICKS_PER_ADVANCE: u64 = 3600;

/// Deferred engine transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EngineTimer {
    /// Turn a mismatched pair face-down.
    FlipBack {
        first: CardPosition,
        second: CardPosition,
    },
    /// Advance the elapsed-time counter.
    Tick,
    /// Announce the win dialog.
    RevealWin,
}

/// Memory-matching game engine.
///
/// Owns one session's cards and counters plus the persisted best score.
/// Engines are plain values: any number can run side by side.
///
/// ## Lifecycle
///
/// ```
/// use bloom_match::engine::{EnginePhase, FlipOutcome, MatchEngine};
/// use bloom_match::cards::CardPosition;
/// use bloom_match::core::GameConfig;
/// use bloom_match::session::MemoryScoreStore;
///
/// let mut engine = MatchEngine::new(GameConfig::default(), MemoryScoreStore::new(), 42).unwrap();
/// engine.start();
///
/// assert_eq!(engine.flip(CardPosition::new(0)), FlipOutcome::Revealed);
/// assert_eq!(engine.phase(), EnginePhase::OnePicked);
///
/// // One second later the clock has ticked once.
/// engine.advance(1000);
/// assert_eq!(engine.elapsed_seconds(), 1);
/// ```
#[derive(Debug)]
pub struct MatchEngine<S: ScoreStore = MemoryScoreStore> {
    config: GameConfig,
    /// Deck-shuffling stream.
    rng: GameRng,
    cards: Vector<Card>,
    /// Face-up unmatched cards, in flip order.
    pending: SmallVec<[CardPosition; 2]>,
    phase: EnginePhase,
    locked: bool,
    matches_found: u32,
    session: SessionTracker<S>,
    clock: Timeline<EngineTimer>,
    tick_timer: Option<TimerId>,
    flip_back_timer: Option<TimerId>,
    events: Vec<GameEvent>,
}

impl<S: ScoreStore> MatchEngine<S> {
    /// Create an engine. No deck is dealt until `start()`.
    pub fn new(config: GameConfig, store: S, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            rng: GameRng::new(seed).for_context("deck"),
            config,
            cards: Vector::new(),
            pending: SmallVec::new(),
            phase: EnginePhase::Idle,
            locked: false,
            matches_found: 0,
            session: SessionTracker::new(store),
            clock: Timeline::new(),
            tick_timer: None,
            flip_back_timer: None,
            events: Vec::new(),
        })
    }

    // === Commands ===

    /// Deal a fresh deck, zero the counters and start the clock.
    ///
    /// Any session in progress is discarded, including a pending flip-back.
    pub fn start(&mut self) {
        self.cancel_timers();
        let generation = self.clock.restart();

        self.cards = match build_deck(&self.config.alphabet, &mut self.rng) {
            Ok(deck) => deck.into_iter().collect(),
            Err(err) => {
                log::error!("cannot deal: {err}");
                Vector::new()
            }
        };
        self.pending.clear();
        self.phase = EnginePhase::Idle;
        self.locked = false;
        self.matches_found = 0;
        self.session.reset();

        self.tick_timer = self.clock.try_schedule(self.config.tick_interval_ms, EngineTimer::Tick);

        log::info!(
            "{} dealt {} cards (best score: {:?})",
            generation,
            self.cards.len(),
            self.session.best_score()
        );

        self.emit(GameEvent::GameStarted {
            generation: generation.raw(),
            card_count: self.cards.len(),
            best_score: self.session.best_score(),
        });
        self.emit(GameEvent::MovesChanged { moves: 0 });
        self.emit(GameEvent::TimeChanged { elapsed_seconds: 0 });
    }

    /// Abandon the current session and start a new one.
    pub fn reset(&mut self) {
        log::info!(
            "reset requested in {:?} after {} move(s)",
            self.phase,
            self.session.moves()
        );
        self.start();
    }

    /// Turn a card face-up.
    ///
    /// Flips that would break the rules (locked input, matched or face-up
    /// card, unknown position, finished game) change nothing.
    pub fn flip(&mut self, position: CardPosition) -> FlipOutcome {
        if let Some(rejection) = self.check_flip(position) {
            log::debug!("ignored flip of {}: {:?}", position, rejection);
            return FlipOutcome::Ignored(rejection);
        }

        if let Some(card) = self.cards.get_mut(position.index()) {
            card.face_up = true;
        }
        self.pending.push(position);
        self.emit(GameEvent::CardFlipped { position });

        if self.pending.len() < 2 {
            self.phase = EnginePhase::OnePicked;
            return FlipOutcome::Revealed;
        }

        let moves = self.session.record_move();
        self.emit(GameEvent::MovesChanged { moves });
        self.locked = true;
        self.phase = EnginePhase::Evaluating;

        self.evaluate_pair()
    }

    /// Move virtual time forward, firing every timer that comes due.
    pub fn advance(&mut self, delta_ms: u64) {
        let target = self.clock.now_ms().saturating_add(delta_ms);

        while let Some(fired) = self.clock.pop_due(target) {
            if fired.generation != self.clock.generation() {
                log::debug!("dropping stale timer from {}", fired.generation);
                continue;
            }

            match fired.payload {
                EngineTimer::FlipBack { first, second } => {
                    self.flip_back_timer = None;
                    self.hide_pair(first, second);
                }
                EngineTimer::Tick => self.on_tick(fired.due_ms, target),
                EngineTimer::RevealWin => {
                    self.emit(GameEvent::WinRevealed {
                        moves: self.session.moves(),
                        elapsed_seconds: self.session.elapsed_seconds(),
                    });
                }
            }
        }

        self.clock.settle(target);
    }

    /// Take every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All cards in grid order. Empty before the first `start()`.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, position: CardPosition) -> Option<&Card> {
        self.cards.get(position.index())
    }

    #[must_use]
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// True exactly while a mismatched pair is shown before flipping back.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase.is_terminal()
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.session.moves()
    }

    #[must_use]
    pub fn matches_found(&self) -> u32 {
        self.matches_found
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.session.elapsed_seconds()
    }

    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.session.best_score()
    }

    /// Face-up unmatched cards, in the order they were flipped.
    #[must_use]
    pub fn pending_pair(&self) -> &[CardPosition] {
        &self.pending
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.clock.generation()
    }

    /// Virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Number of scheduled deferred transitions.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.clock.len()
    }

    /// The best-score store.
    #[must_use]
    pub fn store(&self) -> &S {
        self.session.store()
    }

    /// Capture the session for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            generation: self.clock.generation().raw(),
            phase: self.phase,
            locked: self.locked,
            moves: self.session.moves(),
            matches_found: self.matches_found,
            pair_count: self.config.pair_count() as u32,
            elapsed_seconds: self.session.elapsed_seconds(),
            best_score: self.session.best_score(),
            cards: self.cards.clone(),
        }
    }

    // === Transitions ===

    fn check_flip(&self, position: CardPosition) -> Option<FlipRejection> {
        if self.phase.is_terminal() {
            return Some(FlipRejection::GameOver);
        }
        if self.locked {
            return Some(FlipRejection::Locked);
        }
        let Some(card) = self.cards.get(position.index()) else {
            return Some(FlipRejection::UnknownPosition);
        };
        if card.matched {
            return Some(FlipRejection::AlreadyMatched);
        }
        if card.face_up {
            return Some(FlipRejection::AlreadyFaceUp);
        }
        None
    }

    fn evaluate_pair(&mut self) -> FlipOutcome {
        let (first, second) = (self.pending[0], self.pending[1]);
        let matched = match (self.card(first), self.card(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };

        self.emit(GameEvent::PairResolved {
            first,
            second,
            matched,
        });

        if !matched {
            log::debug!("{} and {} differ, flipping back", first, second);
            self.flip_back_timer = Some(self.clock.schedule(
                self.config.mismatch_delay_ms,
                EngineTimer::FlipBack { first, second },
            ));
            return FlipOutcome::Mismatched;
        }

        for position in [first, second] {
            if let Some(card) = self.cards.get_mut(position.index()) {
                card.matched = true;
            }
        }
        self.matches_found += 1;
        self.pending.clear();
        self.locked = false;

        if self.matches_found as usize == self.config.pair_count() {
            self.finish();
            return FlipOutcome::Matched { won: true };
        }

        self.phase = EnginePhase::Idle;
        FlipOutcome::Matched { won: false }
    }

    fn hide_pair(&mut self, first: CardPosition, second: CardPosition) {
        if self.pending[..] != [first, second] {
            log::warn!("flip-back for {} and {} no longer pending", first, second);
            return;
        }

        for position in [first, second] {
            if let Some(card) = self.cards.get_mut(position.index()) {
                card.face_up = false;
            }
        }
        self.pending.clear();
        self.locked = false;
        self.phase = EnginePhase::Idle;
        self.emit(GameEvent::CardsHidden { first, second });
    }

    fn on_tick(&mut self, due_ms: u64, target_ms: u64) {
        self.tick_timer = None;
        if self.phase.is_terminal() {
            return;
        }

        let interval = self.config.tick_interval_ms;
        // Ticks falling due within this advance, this one included.
        let due_ticks = (target_ms - due_ms) / interval + 1;

        let (elapsed_seconds, next_delay) = if due_ticks > MAX_TICKS_PER_ADVANCE {
            log::debug!("catching up {} ticks at once", due_ticks);
            let seconds = u32::try_from(due_ticks).unwrap_or(u32::MAX);
            (self.session.add_seconds(seconds), interval.checked_mul(due_ticks))
        } else {
            (self.session.tick(), Some(interval))
        };

        log::trace!("tick: {}s", elapsed_seconds);
        self.emit(GameEvent::TimeChanged { elapsed_seconds });

        self.tick_timer = next_delay.and_then(|delay| self.clock.try_schedule(delay, EngineTimer::Tick));
        if self.tick_timer.is_none() {
            log::warn!("clock exhausted at {}s, elapsed time stops", elapsed_seconds);
        }
    }

    fn finish(&mut self) {
        self.phase = EnginePhase::Won;
        if let Some(id) = self.tick_timer.take() {
            self.clock.cancel(id);
        }

        let moves = self.session.moves();
        let elapsed_seconds = self.session.elapsed_seconds();
        let is_new_best = self.session.record_win(moves);

        log::info!(
            "won in {} move(s), {}s (new best: {})",
            moves,
            elapsed_seconds,
            is_new_best
        );

        self.emit(GameEvent::Won {
            moves,
            elapsed_seconds,
            is_new_best,
        });
        if is_new_best {
            self.emit(GameEvent::BestScoreChanged { best_score: moves });
        }

        self.clock.schedule(self.config.win_reveal_delay_ms, EngineTimer::RevealWin);
    }

    fn cancel_timers(&mut self) {
        if let Some(id) = self.flip_back_timer.take() {
            log::debug!("cancelling pending flip-back");
            self.clock.cancel(id);
        }
        if let Some(id) = self.tick_timer.take() {
            self.clock.cancel(id);
        }
    }

    fn emit(&mut self, event: GameEvent) {
        log::debug!("event: {}", event.kind());
        self.events.push(event);
    }
}
