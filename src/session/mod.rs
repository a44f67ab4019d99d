//! Lifecycle of one played-through game.
//!
//! A [`GameSession`] moves `NotStarted → Active → Finished` exactly once.
//! Starting creates and runs a [`crate::blinds::BlindScheduler`]; finishing
//! cancels it and records the winner in the [`crate::ledger::Ledger`].
//! Front ends drive sessions through the [`Game`] trait.
mod error;
mod game;
mod lifecycle;
#[cfg(test)]
mod spy;

pub use error::*;
pub use game::*;
pub use lifecycle::*;
#[cfg(test)]
pub use spy::*;
