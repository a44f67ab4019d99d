use crate::Wins;
use serde::Deserialize;
use serde::Serialize;

/// A named player and their win count. Names are case-sensitive keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    pub name: String,
    pub wins: Wins,
}

impl Player {
    pub fn new(name: &str, wins: Wins) -> Self {
        Self {
            name: name.to_string(),
            wins,
        }
    }
}

/// All known players in the order they were first seen.
/// Storage order is never sorted; ranking happens at read time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct League(Vec<Player>);

impl League {
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.0.iter().find(|p| p.name == name)
    }
    pub fn score(&self, name: &str) -> Wins {
        self.find(name).map_or(0, |p| p.wins)
    }
    /// Credits one win, appending the player if unseen.
    pub fn record(&mut self, name: &str) {
        match self.0.iter_mut().find(|p| p.name == name) {
            Some(player) => player.wins = player.wins.saturating_add(1),
            None => self.0.push(Player::new(name, 1)),
        }
    }
    /// Sorted by wins descending; ties keep first-seen order.
    pub fn ranked(&self) -> Self {
        let mut players = self.0.clone();
        players.sort_by(|a, b| b.wins.cmp(&a.wins));
        Self(players)
    }
    pub fn players(&self) -> &[Player] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Player>> for League {
    fn from(players: Vec<Player>) -> Self {
        Self(players)
    }
}

impl IntoIterator for League {
    type Item = Player;
    type IntoIter = std::vec::IntoIter<Player>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
