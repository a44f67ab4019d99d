use super::*;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Ledger whose every write fails. Reads see the seeded league;
/// `attempts` counts calls to `record`.
#[derive(Debug, Default)]
pub struct FailingLedger {
    league: League,
    attempts: AtomicUsize,
}

impl FailingLedger {
    pub fn seeded(league: League) -> Self {
        Self {
            league,
            attempts: AtomicUsize::new(0),
        }
    }
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Ledger for FailingLedger {
    async fn find(&self, name: &str) -> Option<Player> {
        self.league.find(name).cloned()
    }
    async fn record(&self, name: &str) -> anyhow::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        anyhow::bail!("disk full while recording {}", name)
    }
    async fn league(&self) -> League {
        self.league.ranked()
    }
}
