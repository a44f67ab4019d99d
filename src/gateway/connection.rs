use crate::Tx;
use crate::session::Game;
use crate::session::SessionError;

/// Where a game channel is in its two-line protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Next line is the player count.
    AwaitingPlayers,
    /// Next line is the winner's name.
    AwaitingWinner,
    /// Game over; the channel should close.
    Closed,
}

/// Per-channel state machine over any [`Game`].
///
/// Inbound lines drive the stage forward; replies, errors and the game's
/// blind alerts all leave through the same outbox. Nothing here knows
/// which transport carries the lines.
pub struct Connection<G> {
    game: G,
    stage: Stage,
    outbox: Tx,
}

impl<G> Connection<G>
where
    G: Game,
{
    pub fn new(game: G, outbox: Tx) -> Self {
        Self {
            game,
            stage: Stage::AwaitingPlayers,
            outbox,
        }
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn game(&self) -> &G {
        &self.game
    }
    /// Feeds one inbound line. Rejected lines are answered with an
    /// `error: ...` message and leave the stage unchanged.
    pub async fn receive(&mut self, line: &str) -> Stage {
        let line = line.trim();
        let result = match self.stage {
            Stage::AwaitingPlayers => self.begin(line),
            Stage::AwaitingWinner => self.conclude(line).await,
            Stage::Closed => Err(SessionError::AlreadyFinished),
        };
        if let Err(ref e) = result {
            log::debug!("[connection] rejected {:?}: {}", line, e);
            self.say(format!("error: {}", e));
        }
        self.stage
    }
    fn begin(&mut self, line: &str) -> Result<(), SessionError> {
        let players = line
            .parse::<usize>()
            .map_err(|_| SessionError::BadPlayerCount(line.to_string()))?;
        self.game.start(players, self.outbox.clone())?;
        self.stage = Stage::AwaitingWinner;
        Ok(())
    }
    async fn conclude(&mut self, winner: &str) -> Result<(), SessionError> {
        match self.game.finish(winner).await {
            Ok(()) => {
                self.stage = Stage::Closed;
                self.say(format!("{} wins", winner));
                Ok(())
            }
            Err(e @ SessionError::BadWinner(_)) => Err(e),
            Err(e) => {
                self.stage = Stage::Closed;
                Err(e)
            }
        }
    }
    fn say(&self, text: String) {
        let _ = self.outbox.send(text);
    }
}
