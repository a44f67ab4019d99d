//! HTTP and WebSocket front end.
//!
//! ## Routes
//!
//! - `GET /players/{name}` — plaintext win count, 404 for unknown players
//! - `POST /players/{name}` — record one win, 202 Accepted
//! - `GET /league` — JSON league, best first
//! - `GET /ws` — WebSocket game channel, see [`Connection`]
//! - `GET /health` — liveness probe
//!
//! [`Connection`] is the transport-free per-socket state machine;
//! [`bridge`] pumps an actix-ws session through it.
mod bridge;
mod connection;
pub mod handlers;
mod server;

pub use bridge::*;
pub use connection::*;
pub use server::*;
