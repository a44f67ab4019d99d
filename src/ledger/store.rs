use super::League;
use super::Player;
use crate::Wins;

/// Contract shared by every win store.
///
/// Mutations are serialised so concurrent `record` calls on the same name
/// are never lost; readers never observe a half-applied write.
#[async_trait::async_trait]
pub trait Ledger: Send + Sync {
    /// The stored entry for `name`, if the player is known.
    async fn find(&self, name: &str) -> Option<Player>;
    /// Credits one win to `name`, creating the player on first win.
    async fn record(&self, name: &str) -> anyhow::Result<()>;
    /// Every known player, best first.
    async fn league(&self) -> League;
    /// Wins for `name`; zero for unknown players.
    async fn score(&self, name: &str) -> Wins {
        self.find(name).await.map_or(0, |p| p.wins)
    }
}
