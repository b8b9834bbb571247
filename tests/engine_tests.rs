//! Match engine integration tests.
//!
//! These tests drive the engine only through its public commands and
//! observe it through accessors and emitted events.

use bloom_match::cards::{Alphabet, CardPosition, Symbol};
use bloom_match::core::GameConfig;
use bloom_match::engine::{EnginePhase, FlipOutcome, FlipRejection, GameEvent, MatchEngine};
use bloom_match::session::MemoryScoreStore;
use rustc_hash::FxHashMap;

fn started(seed: u64, store: MemoryScoreStore) -> MatchEngine {
    let mut engine = MatchEngine::new(GameConfig::default(), store, seed).unwrap();
    engine.start();
    engine.drain_events();
    engine
}

/// Both positions of every symbol, in alphabet order.
fn pairs(engine: &MatchEngine) -> Vec<(CardPosition, CardPosition)> {
    let mut by_symbol: FxHashMap<Symbol, Vec<CardPosition>> = FxHashMap::default();
    for card in engine.cards() {
        by_symbol.entry(card.symbol).or_default().push(card.position);
    }
    let mut pairs: Vec<_> = by_symbol.into_iter().map(|(s, p)| (s, (p[0], p[1]))).collect();
    pairs.sort_by_key(|(s, _)| *s);
    pairs.into_iter().map(|(_, p)| p).collect()
}

fn mismatched_pair(engine: &MatchEngine) -> (CardPosition, CardPosition) {
    let first = engine.cards()[0];
    let second = engine.cards().iter().find(|c| c.symbol != first.symbol).unwrap();
    (first.position, second.position)
}

fn play_perfect_game(engine: &mut MatchEngine) {
    for (a, b) in pairs(engine) {
        engine.flip(a);
        engine.flip(b);
    }
}

// =============================================================================
// Deck
// =============================================================================

/// Every dealt deck holds 16 cards with each symbol exactly twice.
#[test]
fn test_deck_has_sixteen_cards_in_pairs() {
    for seed in 0..20 {
        let engine = started(seed, MemoryScoreStore::new());
        assert_eq!(engine.cards().len(), 16);

        let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
        for card in engine.cards() {
            *counts.entry(card.symbol).or_default() += 1;
            assert!(!card.face_up);
            assert!(!card.matched);
        }
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&n| n == 2));
    }
}

/// Restarting deals a fresh shuffle.
#[test]
fn test_restart_deals_new_deck() {
    let mut engine = started(42, MemoryScoreStore::new());
    let first: Vec<_> = engine.cards().iter().map(|c| c.symbol).collect();

    engine.start();
    let second: Vec<_> = engine.cards().iter().map(|c| c.symbol).collect();

    assert_ne!(first, second);
}

/// Two engines with the same seed deal the same decks; engines don't share state.
#[test]
fn test_independent_instances() {
    let mut a = started(7, MemoryScoreStore::new());
    let b = started(7, MemoryScoreStore::new());
    assert_eq!(a.cards(), b.cards());

    a.flip(CardPosition::new(0));
    assert!(a.card(CardPosition::new(0)).unwrap().face_up);
    assert!(!b.card(CardPosition::new(0)).unwrap().face_up);
    assert_eq!(b.phase(), EnginePhase::Idle);
}

// =============================================================================
// Match / mismatch scenarios
// =============================================================================

/// flip(a), flip(b) with different symbols: both face-down after the delay.
#[test]
fn test_mismatch_scenario() {
    let mut engine = started(42, MemoryScoreStore::new());
    let (a, b) = mismatched_pair(&engine);

    assert_eq!(engine.flip(a), FlipOutcome::Revealed);
    assert_eq!(engine.flip(b), FlipOutcome::Mismatched);
    assert!(engine.is_locked());

    let events = engine.drain_events();
    assert_eq!(
        events,
        vec![
            GameEvent::CardFlipped { position: a },
            GameEvent::CardFlipped { position: b },
            GameEvent::MovesChanged { moves: 1 },
            GameEvent::PairResolved {
                first: a,
                second: b,
                matched: false,
            },
        ]
    );

    engine.advance(1000);

    assert!(!engine.card(a).unwrap().face_up);
    assert!(!engine.card(b).unwrap().face_up);
    assert_eq!(engine.moves(), 1);
    assert!(!engine.is_locked());
    assert_eq!(engine.phase(), EnginePhase::Idle);
    assert!(engine
        .drain_events()
        .contains(&GameEvent::CardsHidden { first: a, second: b }));
}

/// flip(a), flip(b) with the same symbol: both matched and face-up.
#[test]
fn test_match_scenario() {
    let mut engine = started(42, MemoryScoreStore::new());
    let (a, b) = pairs(&engine)[0];

    engine.flip(a);
    assert_eq!(engine.flip(b), FlipOutcome::Matched { won: false });

    for pos in [a, b] {
        let card = engine.card(pos).unwrap();
        assert!(card.matched);
        assert!(card.face_up);
    }
    assert_eq!(engine.moves(), 1);
    assert_eq!(engine.matches_found(), 1);
    assert!(!engine.is_locked());

    // Matched cards never go back face-down.
    engine.advance(5000);
    assert!(engine.card(a).unwrap().face_up);
}

/// A flip during the confirmation delay changes nothing.
#[test]
fn test_flip_during_delay_is_ignored() {
    let mut engine = started(3, MemoryScoreStore::new());
    let (a, b) = mismatched_pair(&engine);
    engine.flip(a);
    engine.flip(b);
    engine.drain_events();

    engine.advance(500);
    let other = engine
        .cards()
        .iter()
        .find(|c| c.position != a && c.position != b)
        .unwrap()
        .position;

    assert_eq!(engine.flip(other), FlipOutcome::Ignored(FlipRejection::Locked));
    assert_eq!(engine.flip(b), FlipOutcome::Ignored(FlipRejection::Locked));
    assert!(engine.drain_events().is_empty());
    assert_eq!(engine.moves(), 1);

    // After the flip-back the same card can be played.
    engine.advance(500);
    assert_eq!(engine.flip(other), FlipOutcome::Revealed);
}

/// Out-of-range positions are ignored.
#[test]
fn test_unknown_position() {
    let mut engine = started(1, MemoryScoreStore::new());
    assert_eq!(
        engine.flip(CardPosition::new(16)),
        FlipOutcome::Ignored(FlipRejection::UnknownPosition)
    );
    assert_eq!(engine.phase(), EnginePhase::Idle);
}

// =============================================================================
// Winning
// =============================================================================

/// A perfect game with no prior best records 8 as the new best.
#[test]
fn test_perfect_game_sets_best() {
    let mut engine = started(42, MemoryScoreStore::new());
    engine.advance(3000);
    engine.drain_events();

    play_perfect_game(&mut engine);

    assert!(engine.is_won());
    assert_eq!(engine.phase(), EnginePhase::Won);
    assert_eq!(engine.matches_found(), 8);
    assert_eq!(engine.moves(), 8);
    assert_eq!(engine.best_score(), Some(8));
    assert_eq!(engine.store().best(), Some(8));

    let events = engine.drain_events();
    assert!(events.contains(&GameEvent::Won {
        moves: 8,
        elapsed_seconds: 3,
        is_new_best: true,
    }));
    assert!(events.contains(&GameEvent::BestScoreChanged { best_score: 8 }));
}

/// The clock stops at the win; the dialog is announced after its delay.
#[test]
fn test_win_stops_clock_and_reveals() {
    let mut engine = started(42, MemoryScoreStore::new());
    engine.advance(2000);
    play_perfect_game(&mut engine);
    engine.drain_events();

    engine.advance(499);
    assert!(engine.drain_events().is_empty());

    engine.advance(1);
    assert_eq!(
        engine.drain_events(),
        vec![GameEvent::WinRevealed {
            moves: 8,
            elapsed_seconds: 2,
        }]
    );

    engine.advance(60_000);
    assert_eq!(engine.elapsed_seconds(), 2);
    assert!(engine.drain_events().is_empty());
    assert_eq!(engine.pending_timers(), 0);
}

/// A worse game does not replace the stored best.
#[test]
fn test_worse_game_keeps_best() {
    let mut engine = started(42, MemoryScoreStore::with_best(8));

    let (a, b) = mismatched_pair(&engine);
    engine.flip(a);
    engine.flip(b);
    engine.advance(1000);
    play_perfect_game(&mut engine);

    assert_eq!(engine.moves(), 9);
    assert_eq!(engine.best_score(), Some(8));
    assert_eq!(engine.store().writes(), 0);
    assert!(engine.drain_events().contains(&GameEvent::Won {
        moves: 9,
        elapsed_seconds: 1,
        is_new_best: false,
    }));
}

/// Best score only ever decreases across games in one engine.
#[test]
fn test_best_score_non_increasing() {
    let mut engine = started(5, MemoryScoreStore::new());
    let mut best_seen = u32::MAX;

    for extra_misses in [3u32, 0, 5, 1] {
        engine.start();
        for _ in 0..extra_misses {
            let (a, b) = mismatched_pair(&engine);
            engine.flip(a);
            engine.flip(b);
            engine.advance(1000);
        }
        play_perfect_game(&mut engine);

        let best = engine.best_score().unwrap();
        assert!(best <= best_seen);
        best_seen = best;
    }
    assert_eq!(best_seen, 8);
}

// =============================================================================
// Reset
// =============================================================================

/// reset() while Evaluating cancels the flip-back; nothing stale fires.
#[test]
fn test_reset_during_evaluating() {
    let mut engine = started(42, MemoryScoreStore::new());
    let (a, b) = mismatched_pair(&engine);
    engine.flip(a);
    engine.flip(b);
    assert_eq!(engine.phase(), EnginePhase::Evaluating);
    let old_generation = engine.generation();

    engine.reset();
    assert!(engine.generation() > old_generation);
    assert_eq!(engine.phase(), EnginePhase::Idle);
    assert!(!engine.is_locked());
    assert_eq!(engine.moves(), 0);
    assert!(engine.pending_pair().is_empty());
    // Only the new session's tick is scheduled.
    assert_eq!(engine.pending_timers(), 1);

    // Flip a card of the new deck, then let the old delay elapse.
    engine.flip(CardPosition::new(0));
    engine.drain_events();
    engine.advance(1000);

    assert!(engine.card(CardPosition::new(0)).unwrap().face_up);
    assert_eq!(engine.phase(), EnginePhase::OnePicked);
    let events = engine.drain_events();
    assert!(!events.iter().any(|e| matches!(e, GameEvent::CardsHidden { .. })));
    assert_eq!(events, vec![GameEvent::TimeChanged { elapsed_seconds: 1 }]);
}

/// reset() after a win makes the engine playable again and restarts the clock.
#[test]
fn test_reset_after_win() {
    let mut engine = started(11, MemoryScoreStore::new());
    play_perfect_game(&mut engine);
    assert!(engine.is_won());

    engine.reset();
    assert!(!engine.is_won());
    assert_eq!(engine.matches_found(), 0);
    assert_eq!(engine.best_score(), Some(8));

    engine.advance(1000);
    assert_eq!(engine.elapsed_seconds(), 1);
    assert_eq!(engine.flip(CardPosition::new(0)), FlipOutcome::Revealed);
}

// =============================================================================
// Configuration
// =============================================================================

/// Custom timings flow through to the state machine.
#[test]
fn test_custom_delays() {
    let config = GameConfig::default()
        .with_mismatch_delay_ms(250)
        .with_tick_interval_ms(100);
    let mut engine = MatchEngine::new(config, MemoryScoreStore::new(), 1).unwrap();
    engine.start();

    let (a, b) = mismatched_pair(&engine);
    engine.flip(a);
    engine.flip(b);
    engine.advance(250);

    assert!(!engine.is_locked());
    assert_eq!(engine.elapsed_seconds(), 2);
}

/// Smaller alphabets deal smaller decks and win after fewer pairs.
#[test]
fn test_small_alphabet() {
    let alphabet = Alphabet::new(Alphabet::flowers().entries()[..3].to_vec());
    let config = GameConfig::default().with_alphabet(alphabet);
    let mut engine = MatchEngine::new(config, MemoryScoreStore::new(), 9).unwrap();
    engine.start();

    assert_eq!(engine.cards().len(), 6);
    play_perfect_game(&mut engine);
    assert!(engine.is_won());
    assert_eq!(engine.moves(), 3);
}

/// Snapshots serialize for renderers.
#[test]
fn test_snapshot_json() {
    let mut engine = started(42, MemoryScoreStore::new());
    engine.flip(CardPosition::new(0));

    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["phase"], "onePicked");
    assert_eq!(json["moves"], 0);
    assert_eq!(json["bestScore"], serde_json::Value::Null);
    assert_eq!(json["cards"].as_array().unwrap().len(), 16);
    assert_eq!(json["cards"][0]["faceUp"], true);
}
