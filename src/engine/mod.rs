//! Turn engine: the session loop and the typed event log.

pub mod events;
pub mod session;

pub use events::GameEvent;
pub use session::{GameSession, Standing};
