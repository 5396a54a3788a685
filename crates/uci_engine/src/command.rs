//! UCI command parsing

/// Commands the session understands. Anything else is ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    /// Arguments after `position`, handed to the rules facade as-is
    Position { args: Vec<String> },
    Go(GoParams),
    SetOption { name: String, value: Option<String> },
    Stop,
    Quit,
}

/// Parameters for `go`; times are in milliseconds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
    pub winc: Option<u64>,
    pub binc: Option<u64>,
    pub movetime: Option<u64>,
    pub depth: Option<u8>,
}

/// Parse one input line. Returns `None` for blank, unknown or malformed lines.
pub fn parse_command(line: &str) -> Option<UciCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let (&head, rest) = parts.split_first()?;

    match head {
        "uci" => Some(UciCommand::Uci),
        "isready" => Some(UciCommand::IsReady),
        "ucinewgame" => Some(UciCommand::UciNewGame),
        "stop" => Some(UciCommand::Stop),
        "quit" => Some(UciCommand::Quit),
        "position" => parse_position(rest),
        "go" => parse_go(rest).map(UciCommand::Go),
        "setoption" => parse_setoption(rest),
        _ => None,
    }
}

fn parse_position(parts: &[&str]) -> Option<UciCommand> {
    match parts.first() {
        Some(&"startpos") | Some(&"fen") => Some(UciCommand::Position {
            args: parts.iter().map(|s| s.to_string()).collect(),
        }),
        _ => None,
    }
}

fn parse_go(parts: &[&str]) -> Option<GoParams> {
    let mut params = GoParams::default();
    let mut iter = parts.iter();
    while let Some(&key) = iter.next() {
        match key {
            "wtime" | "btime" | "winc" | "binc" | "movetime" => {
                let value = parse_millis(iter.next()?)?;
                match key {
                    "wtime" => params.wtime = Some(value),
                    "btime" => params.btime = Some(value),
                    "winc" => params.winc = Some(value),
                    "binc" => params.binc = Some(value),
                    _ => params.movetime = Some(value),
                }
            }
            "depth" => params.depth = Some(iter.next()?.parse().ok()?),
            // movestogo, nodes, mate and friends carry one value we don't use;
            // infinite and ponder carry none
            "movestogo" | "nodes" | "mate" => {
                iter.next();
            }
            _ => {}
        }
    }
    Some(params)
}

/// Clock values can go negative in some GUIs once a flag has fallen.
fn parse_millis(token: &str) -> Option<u64> {
    let value: i64 = token.parse().ok()?;
    Some(value.max(0) as u64)
}

fn parse_setoption(parts: &[&str]) -> Option<UciCommand> {
    if parts.first() != Some(&"name") {
        return None;
    }
    let value_pos = parts.iter().position(|&p| p == "value");
    let name = parts[1..value_pos.unwrap_or(parts.len())].join(" ");
    if name.is_empty() {
        return None;
    }
    let value = value_pos
        .map(|pos| parts[pos + 1..].join(" "))
        .filter(|value| !value.is_empty());
    Some(UciCommand::SetOption { name, value })
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
