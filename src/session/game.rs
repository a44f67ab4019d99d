use super::SessionError;
use crate::Tx;

/// Anything that can host a game from table size to declared winner.
/// Front ends (terminal, WebSocket) only talk to this trait,
/// so they never depend on the scheduler or the ledger directly.
#[async_trait::async_trait]
pub trait Game: Send {
    /// Begin the game for `players` players; blind alerts go to `sink`.
    fn start(&mut self, players: usize, sink: Tx) -> Result<(), SessionError>;
    /// End the game and credit `winner` exactly as given.
    /// Names are case and whitespace sensitive; trimming is the caller's job.
    async fn finish(&mut self, winner: &str) -> Result<(), SessionError>;
}
