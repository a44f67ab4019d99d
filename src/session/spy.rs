use super::Game;
use super::SessionError;
use crate::Tx;

/// Recording stand-in for a real session.
/// On start it writes `alert` (if any) to the sink, then remembers the call.
#[derive(Debug, Default)]
pub struct GameSpy {
    pub alert: Option<String>,
    pub started: Vec<usize>,
    pub finished: Vec<String>,
}

impl GameSpy {
    pub fn alerting(alert: &str) -> Self {
        Self {
            alert: Some(alert.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl Game for GameSpy {
    fn start(&mut self, players: usize, sink: Tx) -> Result<(), SessionError> {
        if let Some(alert) = &self.alert {
            let _ = sink.send(alert.clone());
        }
        self.started.push(players);
        Ok(())
    }
    async fn finish(&mut self, winner: &str) -> Result<(), SessionError> {
        self.finished.push(winner.to_string());
        Ok(())
    }
}
