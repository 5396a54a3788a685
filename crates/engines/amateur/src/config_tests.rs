use super::*;

#[test]
fn test_defaults_select_normal_profile() {
    let config = EngineConfig::default();
    assert_eq!(config.strength, Strength::Normal);
    assert_eq!(config.profile(), &ProfileTuning::normal());
    assert_eq!(config.history_len, 3);
    assert_eq!(config.eval.piece_values.value(PieceKind::Queen), 9.0);
    assert_eq!(config.eval.piece_values.value(PieceKind::King), 0.0);
}

#[test]
fn test_weak_profile_is_noisier_and_more_lenient() {
    let weak = ProfileTuning::weak();
    let normal = ProfileTuning::normal();
    assert!(weak.noise > normal.noise);
    assert!(weak.hanging_eval_penalty < normal.hanging_eval_penalty);
    assert!(weak.hanging_multiplier < normal.hanging_multiplier);
}

#[test]
fn test_strength_parsing() {
    assert_eq!("weak".parse::<Strength>().unwrap(), Strength::Weak);
    assert_eq!(" Normal ".parse::<Strength>().unwrap(), Strength::Normal);
    assert!("grandmaster".parse::<Strength>().is_err());
    assert_eq!(Strength::Weak.to_string(), "weak");
}

#[test]
fn test_partial_toml_overrides() {
    let config = EngineConfig::from_toml_str(
        r#"
        strength = "weak"
        history_len = 5
        seed = 42

        [eval]
        center_bonus = 0.5

        [time]
        panic_threshold_ms = 1500

        [[depth_steps]]
        depths = [1]
        "#,
    )
    .unwrap();

    assert_eq!(config.strength, Strength::Weak);
    assert_eq!(config.profile(), &ProfileTuning::weak());
    assert_eq!(config.history_len, 5);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.eval.center_bonus, 0.5);
    assert_eq!(config.eval.opening_moves, 10);
    assert_eq!(config.time.panic_threshold_ms, 1_500);
    assert_eq!(config.depth_steps, vec![DepthStep::new(None, &[1])]);
}

#[test]
fn test_rejects_empty_depth_step() {
    let err = EngineConfig::from_toml_str(
        r#"
        [[depth_steps]]
        depths = []
        "#,
    );
    assert!(err.is_err());
}

#[test]
fn test_rejects_unknown_strength() {
    assert!(EngineConfig::from_toml_str(r#"strength = "expert""#).is_err());
}
