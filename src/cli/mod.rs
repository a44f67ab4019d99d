//! Terminal front end for a single game.
//!
//! Reads the table size, starts the game, then reads `"<name> wins"`
//! and finishes it. Prompts, errors and blind alerts all go to one sink.
use crate::Tx;
use crate::session::Game;
use crate::session::SessionError;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncRead;
use tokio::io::BufReader;
use tokio::io::Lines;

pub const PLAYER_PROMPT: &str = "Please enter the number of players: ";
pub const BAD_PLAYER_INPUT: &str =
    "Bad value received for number of players, please try again with a number";
pub const BAD_WINNER_INPUT: &str = "Bad value received for registering a player win, please try again with the correct format '<player> wins'";

const WINS: &str = " wins";

/// Parses `"<name> wins"` into `<name>`, dropping the first ` wins`.
pub fn winner(line: &str) -> Result<String, SessionError> {
    line.find(WINS)
        .map(|i| format!("{}{}", &line[..i], &line[i + WINS.len()..]))
        .ok_or_else(|| SessionError::BadWinner(line.to_string()))
}

pub struct Cli<G, R> {
    game: G,
    lines: Lines<BufReader<R>>,
    out: Tx,
}

impl<G, R> Cli<G, R>
where
    G: Game,
    R: AsyncRead + Unpin,
{
    pub fn new(input: R, out: Tx, game: G) -> Self {
        Self {
            game,
            lines: BufReader::new(input).lines(),
            out,
        }
    }
    pub fn game(&self) -> &G {
        &self.game
    }
    /// Plays one game. Bad input is reported to the sink and ends the game early;
    /// only a broken input stream is an error.
    pub async fn play(&mut self) -> anyhow::Result<()> {
        self.say(PLAYER_PROMPT);
        let line = self.read().await?;
        let players = match line.trim().parse::<usize>() {
            Ok(players) => players,
            Err(_) => return Ok(self.say(BAD_PLAYER_INPUT)),
        };
        if let Err(e) = self.game.start(players, self.out.clone()) {
            log::warn!("[cli] could not start game: {}", e);
            return Ok(self.say(&e.to_string()));
        }
        let line = self.read().await?;
        let winner = match winner(&line) {
            Ok(winner) => winner,
            Err(_) => return Ok(self.say(BAD_WINNER_INPUT)),
        };
        if let Err(e) = self.game.finish(&winner).await {
            log::warn!("[cli] could not finish game: {}", e);
            self.say(&e.to_string());
        }
        Ok(())
    }
    /// Next input line; end of input reads as an empty line.
    async fn read(&mut self) -> anyhow::Result<String> {
        Ok(self.lines.next_line().await?.unwrap_or_default())
    }
    fn say(&self, text: &str) {
        let _ = self.out.send(text.to_string());
    }
}
