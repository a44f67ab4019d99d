/// Protocol violations and failures surfaced to whoever drives a game.
/// None of these affect other sessions or the enclosing connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    AlreadyStarted,
    NotStarted,
    AlreadyFinished,
    NoPlayers,
    TooManyPlayers(usize),
    BadPlayerCount(String),
    BadWinner(String),
    Ledger(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyStarted => write!(f, "game already started"),
            Self::NotStarted => write!(f, "game not started"),
            Self::AlreadyFinished => write!(f, "game already finished"),
            Self::NoPlayers => write!(f, "a game needs at least one player"),
            Self::TooManyPlayers(n) => {
                write!(f, "{} players is more than the {} a game allows", n, crate::MAX_PLAYERS)
            }
            Self::BadPlayerCount(s) => write!(f, "invalid player count: {:?}", s),
            Self::BadWinner(s) => write!(f, "invalid winner: {:?}", s),
            Self::Ledger(s) => write!(f, "failed to record win: {}", s),
        }
    }
}

impl std::error::Error for SessionError {}
