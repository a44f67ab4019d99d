use super::*;
use tokio::sync::RwLock;

/// Ledger that lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    league: RwLock<League>,
}

impl MemoryLedger {
    /// Starts from a known set of players.
    pub fn seeded(league: League) -> Self {
        Self {
            league: RwLock::new(league),
        }
    }
}

#[async_trait::async_trait]
impl Ledger for MemoryLedger {
    async fn find(&self, name: &str) -> Option<Player> {
        self.league.read().await.find(name).cloned()
    }
    async fn record(&self, name: &str) -> anyhow::Result<()> {
        self.league.write().await.record(name);
        log::debug!("[ledger] recorded win for {}", name);
        Ok(())
    }
    async fn league(&self) -> League {
        self.league.read().await.ranked()
    }
}
