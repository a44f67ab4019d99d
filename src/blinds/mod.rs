//! Blind escalation for a single game.
//!
//! - [`ScheduledAlert`] — One blind level and the offset at which it applies
//! - [`Schedule`] — The full, deterministic level sequence for a table size
//! - [`BlindScheduler`] — Timer task delivering alerts to a sink, cancellable via [`Halt`]
mod alert;
mod schedule;
mod scheduler;

pub use alert::*;
pub use schedule::*;
pub use scheduler::*;
