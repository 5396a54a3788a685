use super::*;

#[test]
fn test_simple_commands() {
    assert_eq!(parse_command("uci"), Some(UciCommand::Uci));
    assert_eq!(parse_command("  isready "), Some(UciCommand::IsReady));
    assert_eq!(parse_command("ucinewgame"), Some(UciCommand::UciNewGame));
    assert_eq!(parse_command("stop"), Some(UciCommand::Stop));
    assert_eq!(parse_command("quit"), Some(UciCommand::Quit));
}

#[test]
fn test_unknown_and_blank_lines() {
    assert_eq!(parse_command(""), None);
    assert_eq!(parse_command("   "), None);
    assert_eq!(parse_command("ponderhit"), None);
    assert_eq!(parse_command("hello world"), None);
}

#[test]
fn test_position_keeps_arguments() {
    let cmd = parse_command("position startpos moves e2e4 e7e5").unwrap();
    assert_eq!(
        cmd,
        UciCommand::Position {
            args: vec!["startpos", "moves", "e2e4", "e7e5"]
                .into_iter()
                .map(String::from)
                .collect()
        }
    );
    assert!(parse_command("position fen 8/8/8/8/8/8/8/K6k w - - 0 1").is_some());
    assert_eq!(parse_command("position"), None);
    assert_eq!(parse_command("position moves e2e4"), None);
}

#[test]
fn test_go_with_clocks() {
    let cmd = parse_command("go wtime 30000 btime 29000 winc 100 binc 100 movestogo 20").unwrap();
    assert_eq!(
        cmd,
        UciCommand::Go(GoParams {
            wtime: Some(30_000),
            btime: Some(29_000),
            winc: Some(100),
            binc: Some(100),
            ..GoParams::default()
        })
    );
}

#[test]
fn test_go_variants() {
    assert_eq!(parse_command("go"), Some(UciCommand::Go(GoParams::default())));
    let UciCommand::Go(params) = parse_command("go depth 3 movetime 250").unwrap() else {
        panic!("expected go");
    };
    assert_eq!(params.depth, Some(3));
    assert_eq!(params.movetime, Some(250));

    assert_eq!(parse_command("go infinite"), Some(UciCommand::Go(GoParams::default())));
}

#[test]
fn test_go_negative_clock_clamps_to_zero() {
    let UciCommand::Go(params) = parse_command("go wtime -120 btime 5000").unwrap() else {
        panic!("expected go");
    };
    assert_eq!(params.wtime, Some(0));
}

#[test]
fn test_malformed_go_is_ignored() {
    assert_eq!(parse_command("go wtime"), None);
    assert_eq!(parse_command("go depth many"), None);
}

#[test]
fn test_setoption() {
    assert_eq!(
        parse_command("setoption name Strength value weak"),
        Some(UciCommand::SetOption {
            name: "Strength".to_string(),
            value: Some("weak".to_string())
        })
    );
    assert_eq!(
        parse_command("setoption name Clear Hash"),
        Some(UciCommand::SetOption {
            name: "Clear Hash".to_string(),
            value: None
        })
    );
    assert_eq!(parse_command("setoption Strength weak"), None);
    assert_eq!(parse_command("setoption name value 3"), None);
}
