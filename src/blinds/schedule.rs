use super::ScheduledAlert;
use crate::BLIND_AMOUNTS;
use crate::BLIND_BASE_MINUTES;
use std::time::Duration;

/// Blind levels for one table size, in firing order.
/// The k-th level applies at `k * interval(players)` after the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    players: usize,
    alerts: Vec<ScheduledAlert>,
}

impl Schedule {
    /// Time between consecutive levels: five minutes plus one per player.
    /// Saturates at `Duration::MAX` instead of wrapping.
    pub fn interval(players: usize) -> Duration {
        let minutes = u64::try_from(players)
            .unwrap_or(u64::MAX)
            .saturating_add(BLIND_BASE_MINUTES);
        Duration::from_secs(minutes.saturating_mul(60))
    }
    pub fn for_players(players: usize) -> Self {
        let interval = Self::interval(players);
        let alerts = BLIND_AMOUNTS
            .iter()
            .enumerate()
            .map(|(k, &amount)| ScheduledAlert::new(interval.saturating_mul(k as u32), amount))
            .collect();
        Self { players, alerts }
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn alerts(&self) -> &[ScheduledAlert] {
        &self.alerts
    }
    pub fn len(&self) -> usize {
        self.alerts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
    /// Offset of the final level.
    pub fn span(&self) -> Duration {
        self.alerts.last().map(|a| a.at).unwrap_or_default()
    }
}

impl IntoIterator for Schedule {
    type Item = ScheduledAlert;
    type IntoIter = std::vec::IntoIter<ScheduledAlert>;
    fn into_iter(self) -> Self::IntoIter {
        self.alerts.into_iter()
    }
}
