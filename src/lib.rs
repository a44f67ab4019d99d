//! Poker night host.
//!
//! Runs tournament-style poker evenings: a game session escalates blinds on
//! a schedule derived from the table size, streams the alerts to whoever is
//! driving the game, and records the winner in a league of players.
//!
//! ## Modules
//!
//! - [`blinds`] — Blind schedule computation and the cancellable alert timer
//! - [`session`] — Game lifecycle state machine bound to a ledger
//! - [`ledger`] — Player win counts, in-memory and file-backed
//! - [`cli`] — Line-driven terminal front end for a single game
//! - [`gateway`] — HTTP league routes and the WebSocket game channel

pub mod blinds;
pub mod cli;
pub mod ledger;
pub mod session;
#[cfg(feature = "server")]
pub mod gateway;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Blind amounts in chips.
pub type Chips = u32;
/// League win counter. Never negative by construction.
pub type Wins = u32;
/// Outbound text sink for one game. Each message is one alert or notice.
pub type Tx = tokio::sync::mpsc::UnboundedSender<String>;
/// Receiving half of a [`Tx`].
pub type Rx = tokio::sync::mpsc::UnboundedReceiver<String>;

// ============================================================================
// BLIND STRUCTURE
// ============================================================================
/// Blind levels in chips, one alert per level.
pub const BLIND_AMOUNTS: [Chips; 11] = [100, 200, 300, 400, 500, 600, 800, 1000, 2000, 4000, 8000];
/// Minutes added to the player count to get the interval between levels.
pub const BLIND_BASE_MINUTES: u64 = 5;
/// Largest table a session will start.
pub const MAX_PLAYERS: usize = 100;

// ============================================================================
// PERSISTENCE
// ============================================================================
/// Default league file, relative to the working directory.
pub const LEAGUE_DB: &str = "game.db.json";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Logs to the terminal at `term` and to `logs/<bin>-<unix secs>.log` at DEBUG.
/// HTTP access lines come through `actix_web::middleware::Logger` at INFO.
#[cfg(feature = "server")]
pub fn log(bin: &str, term: log::LevelFilter) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .add_filter_ignore_str("mio")
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let path = format!("logs/{}-{}.log", bin, time);
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path).with_context(|| format!("create log file {}", path))?,
    );
    let term = simplelog::TermLogger::new(
        term,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// A ledger write cut short here leaves the previous file contents in place.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("violent interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
