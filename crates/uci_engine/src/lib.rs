//! UCI front end: command parsing and the session loop that drives an engine.

pub mod command;
pub mod session;

pub use command::{parse_command, GoParams, UciCommand};
pub use session::{Clocks, EngineState, Session, SessionState};
