use std::time::Duration;

use super::*;
use chess_core::Square;

fn fast_config() -> EngineConfig {
    let mut config = EngineConfig {
        fixed_depth: Some(1),
        seed: Some(11),
        ..EngineConfig::default()
    };
    config.time.think_steps = vec![chess_core::ThinkStep::new(None, 2_000, 3_000)];
    config
}

#[test]
fn test_search_records_landing_square() {
    let mut engine = AmateurEngine::with_config(fast_config());
    let mut pos = Position::from_fen("7k/8/8/8/8/8/8/R6K w - - 0 40").unwrap();
    let result = engine.search(&mut pos, &SearchLimits::clock(Duration::from_secs(300)));

    let mv = result.best_move.unwrap();
    assert!(pos.is_legal(mv));
    assert_eq!(engine.history().len(), 1);
    assert!(engine.history().contains(pos.landing_square(mv)));
}

#[test]
fn test_new_game_clears_history() {
    let mut engine = AmateurEngine::with_config(fast_config());
    let mut pos = Position::startpos();
    engine.search(&mut pos, &SearchLimits::clock(Duration::from_secs(300)));
    assert!(!engine.history().is_empty());
    engine.new_game();
    assert!(engine.history().is_empty());
}

#[test]
fn test_history_capacity_follows_config() {
    let engine = AmateurEngine::with_config(EngineConfig {
        history_len: 5,
        ..EngineConfig::default()
    });
    assert_eq!(engine.history().capacity(), 5);
    assert!(!engine.history().contains(Square::E4));
}

#[test]
fn test_strength_option() {
    let mut engine = AmateurEngine::new();
    assert!(engine.set_option("Strength", "weak"));
    assert_eq!(engine.config().strength, Strength::Weak);
    assert!(engine.set_option("strength", "Normal"));
    assert_eq!(engine.config().strength, Strength::Normal);
    assert!(!engine.set_option("Strength", "master"));
    assert_eq!(engine.config().strength, Strength::Normal);
}

#[test]
fn test_depth_option() {
    let mut engine = AmateurEngine::new();
    assert!(engine.set_option("Depth", "3"));
    assert_eq!(engine.config().fixed_depth, Some(3));
    assert!(engine.set_option("Depth", "40"));
    assert_eq!(engine.config().fixed_depth, Some(MAX_OPTION_DEPTH));
    assert!(engine.set_option("Depth", "0"));
    assert_eq!(engine.config().fixed_depth, None);
    assert!(!engine.set_option("Depth", "deep"));
}

#[test]
fn test_seed_option_makes_choices_repeatable() {
    let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
    let limits = SearchLimits::clock(Duration::from_secs(300));

    let mut first = AmateurEngine::with_config(fast_config());
    let mut second = AmateurEngine::with_config(fast_config());
    assert!(first.set_option("Seed", "1234"));
    assert!(second.set_option("Seed", "1234"));

    let mut a = Position::from_fen(fen).unwrap();
    let mut b = Position::from_fen(fen).unwrap();
    assert_eq!(
        first.search(&mut a, &limits).best_move,
        second.search(&mut b, &limits).best_move
    );

    assert!(first.set_option("Seed", "random"));
    assert_eq!(first.config().seed, None);
    assert!(!first.set_option("Seed", "-5"));
}

#[test]
fn test_unknown_option_is_rejected() {
    let mut engine = AmateurEngine::new();
    assert!(!engine.set_option("Hash", "64"));
}

#[test]
fn test_options_advertised() {
    let engine = AmateurEngine::new();
    let options = engine.options();
    assert_eq!(options.len(), 3);
    assert!(options[0].starts_with("option name Strength type combo default normal"));
    assert!(options[1].contains("max 6"));
}
