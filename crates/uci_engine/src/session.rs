//! The UCI protocol loop.
//!
//! One command is handled to completion before the next line is read; a
//! `go` searches synchronously, waits out the rest of its think time and
//! only then answers. Every response line is flushed as it is written.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use chess_core::{
    color_sign, move_to_uci, set_position_from_uci, Color, Engine, Position, SearchLimits,
    SearchResult, NULL_MOVE,
};
use tracing::{debug, info, warn};

use crate::command::{parse_command, GoParams, UciCommand};

/// Where the session is in the UCI conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the `uci` handshake
    Idle,
    Ready,
    /// A position has been set up and can be searched
    Positioned,
    Searching,
    Quit,
}

/// Last known remaining clock for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clocks {
    pub white: Duration,
    pub black: Duration,
}

impl Clocks {
    pub fn new(default: Duration) -> Self {
        Self {
            white: default,
            black: default,
        }
    }

    pub fn remaining(&self, color: Color) -> Duration {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Time available for the coming move: the side's clock plus the
    /// increment it gets back after moving.
    fn available(&self, color: Color, params: &GoParams) -> Duration {
        let increment = match color {
            Color::White => params.winc,
            Color::Black => params.binc,
        };
        self.remaining(color) + Duration::from_millis(increment.unwrap_or(0))
    }

    fn update(&mut self, params: &GoParams) {
        if let Some(ms) = params.wtime {
            self.white = Duration::from_millis(ms);
        }
        if let Some(ms) = params.btime {
            self.black = Duration::from_millis(ms);
        }
    }
}

/// Everything a game needs between commands.
pub struct EngineState<E> {
    pub position: Position,
    pub clocks: Clocks,
    pub engine: E,
    default_clock: Duration,
}

impl<E: Engine> EngineState<E> {
    pub fn new(engine: E, default_clock: Duration) -> Self {
        Self {
            position: Position::startpos(),
            clocks: Clocks::new(default_clock),
            engine,
            default_clock,
        }
    }

    /// Back to the starting position with fresh clocks and history.
    pub fn reset(&mut self) {
        self.position = Position::startpos();
        self.clocks = Clocks::new(self.default_clock);
        self.engine.new_game();
    }
}

pub struct Session<E, W> {
    state: EngineState<E>,
    phase: SessionState,
    out: W,
}

impl<E: Engine, W: Write> Session<E, W> {
    pub fn new(engine: E, out: W, default_clock: Duration) -> Self {
        Self {
            state: EngineState::new(engine, default_clock),
            phase: SessionState::Idle,
            out,
        }
    }

    pub fn phase(&self) -> SessionState {
        self.phase
    }

    pub fn state(&self) -> &EngineState<E> {
        &self.state
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            if !self.handle_line(&line?)? {
                break;
            }
        }
        Ok(())
    }

    /// Handle one input line. Returns `false` once the session should end.
    pub fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        let Some(command) = parse_command(line) else {
            if !line.trim().is_empty() {
                debug!(line, "ignoring unrecognised command");
            }
            return Ok(true);
        };

        match command {
            UciCommand::Uci => {
                self.send(&format!("id name {}", self.state.engine.name()))?;
                self.send(&format!("id author {}", self.state.engine.author()))?;
                for option in self.state.engine.options() {
                    self.send(&option)?;
                }
                self.send("uciok")?;
                self.phase = SessionState::Ready;
            }
            UciCommand::IsReady => {
                self.send("readyok")?;
                if self.phase == SessionState::Idle {
                    self.phase = SessionState::Ready;
                }
            }
            UciCommand::UciNewGame => {
                self.state.reset();
                self.phase = SessionState::Positioned;
            }
            UciCommand::Position { args } => {
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                if let Err(err) = set_position_from_uci(&mut self.state.position, &args) {
                    warn!(%err, "position command only partly applied");
                }
                if is_fresh_game(&args) {
                    self.state.engine.new_game();
                }
                self.phase = SessionState::Positioned;
            }
            UciCommand::Go(params) => self.go(&params)?,
            UciCommand::SetOption { name, value } => {
                let value = value.unwrap_or_default();
                if self.state.engine.set_option(&name, &value) {
                    info!(%name, %value, "option set");
                } else {
                    debug!(%name, %value, "option not recognised");
                }
            }
            UciCommand::Stop => {}
            UciCommand::Quit => {
                self.phase = SessionState::Quit;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn go(&mut self, params: &GoParams) -> io::Result<()> {
        self.phase = SessionState::Searching;
        self.state.clocks.update(params);

        let side = self.state.position.side_to_move();
        let mut limits = SearchLimits::clock(self.state.clocks.available(side, params));
        if let Some(ms) = params.movetime {
            limits = limits.with_move_time(Duration::from_millis(ms));
        }
        if let Some(depth) = params.depth {
            limits = limits.with_depth(depth);
        }

        let result = self.state.engine.search(&mut self.state.position, &limits);
        if result.depth > 0 {
            let line = info_line(&result, side);
            self.send(&line)?;
        }

        thread::sleep(result.budget.wait_remaining());

        let token = match result.best_move {
            Some(mv) => move_to_uci(&self.state.position, mv),
            None => NULL_MOVE.to_string(),
        };
        self.send(&format!("bestmove {token}"))?;
        self.phase = SessionState::Positioned;
        Ok(())
    }

    fn send(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}

/// `position startpos` with no moves played means a new game has begun,
/// even when the GUI never sent `ucinewgame`.
fn is_fresh_game(args: &[&str]) -> bool {
    matches!(args, ["startpos"] | ["startpos", "moves"])
}

/// `info` line for a finished search; the score is in centipawns from the
/// side to move's point of view.
fn info_line(result: &SearchResult, side: Color) -> String {
    let cp = (result.score * color_sign(side) * 100.0).round() as i64;
    format!(
        "info depth {} score cp {} nodes {} time {}",
        result.depth,
        cp,
        result.nodes,
        result.budget.elapsed().as_millis()
    )
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
