//! Player win counts and the ranked league view.
//!
//! ## Core Types
//!
//! - [`Player`] — Name and win count, the unit of storage and of the wire format
//! - [`League`] — Players in first-seen order; [`League::ranked`] is the sorted view
//! - [`Ledger`] — Shared contract for every store
//! - [`MemoryLedger`] — Process-lifetime store
//! - [`FileLedger`] — Write-through JSON file store
#[cfg(test)]
mod failing;
mod file;
mod league;
mod memory;
mod store;

#[cfg(test)]
pub use failing::*;
pub use file::*;
pub use league::*;
pub use memory::*;
pub use store::*;
