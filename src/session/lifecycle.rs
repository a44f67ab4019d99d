use super::Game;
use super::SessionError;
use crate::MAX_PLAYERS;
use crate::Tx;
use crate::blinds::BlindScheduler;
use crate::blinds::Halt;
use crate::ledger::Ledger;
use std::sync::Arc;

/// Externally visible phase of a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    NotStarted,
    Active,
    Finished,
}

/// Phase plus the data that only exists in that phase.
#[derive(Debug)]
enum Phase {
    NotStarted,
    Active(BlindScheduler),
    Finished(String),
}

/// One game, bound to the ledger its winner is credited to.
///
/// The session owns its scheduler and hands it the output sink on start.
/// It never touches the ledger except through a single `record` on finish.
pub struct GameSession {
    id: uuid::Uuid,
    ledger: Arc<dyn Ledger>,
    players: Option<usize>,
    phase: Phase,
}

impl GameSession {
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            ledger,
            players: None,
            phase: Phase::NotStarted,
        }
    }
    pub fn id(&self) -> uuid::Uuid {
        self.id
    }
    pub fn state(&self) -> State {
        match self.phase {
            Phase::NotStarted => State::NotStarted,
            Phase::Active(_) => State::Active,
            Phase::Finished(_) => State::Finished,
        }
    }
    pub fn players(&self) -> Option<usize> {
        self.players
    }
    pub fn winner(&self) -> Option<&str> {
        match &self.phase {
            Phase::Finished(winner) => Some(winner),
            _ => None,
        }
    }
    /// Cancellation handle for the running schedule, if any.
    pub fn halt(&self) -> Option<Halt> {
        match &self.phase {
            Phase::Active(scheduler) => Some(scheduler.halt()),
            _ => None,
        }
    }
}

#[async_trait::async_trait]
impl Game for GameSession {
    fn start(&mut self, players: usize, sink: Tx) -> Result<(), SessionError> {
        match self.phase {
            Phase::NotStarted if players == 0 => Err(SessionError::NoPlayers),
            Phase::NotStarted if players > MAX_PLAYERS => Err(SessionError::TooManyPlayers(players)),
            Phase::NotStarted => {
                let mut scheduler = BlindScheduler::new(players);
                scheduler.start(sink);
                self.players = Some(players);
                self.phase = Phase::Active(scheduler);
                log::info!("[session {}] started with {} players", self.id, players);
                Ok(())
            }
            Phase::Active(_) => Err(SessionError::AlreadyStarted),
            Phase::Finished(_) => Err(SessionError::AlreadyFinished),
        }
    }
    async fn finish(&mut self, winner: &str) -> Result<(), SessionError> {
        match self.phase {
            Phase::NotStarted => return Err(SessionError::NotStarted),
            Phase::Finished(_) => return Err(SessionError::AlreadyFinished),
            Phase::Active(_) if winner.trim().is_empty() => {
                return Err(SessionError::BadWinner(winner.to_string()));
            }
            Phase::Active(_) => {}
        }
        if let Phase::Active(scheduler) =
            std::mem::replace(&mut self.phase, Phase::Finished(winner.to_string()))
        {
            scheduler.cancel();
        }
        log::info!("[session {}] finished, {} wins", self.id, winner);
        self.ledger
            .record(winner)
            .await
            .inspect_err(|e| log::error!("[session {}] failed to record win: {:#}", self.id, e))
            .map_err(|e| SessionError::Ledger(e.to_string()))
    }
}
