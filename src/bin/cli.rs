//! Terminal Game Binary
//!
//! Plays one game from stdin: enter the player count, then `<name> wins`.
//! Blind alerts print to stdout as they fire.

use clap::Parser;
use pokerleague::*;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// League file, created if missing.
    #[arg(long, env = "LEAGUE_DB", default_value = LEAGUE_DB)]
    db: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log("cli", ::log::LevelFilter::Warn)?;
    kys();
    let ledger = Arc::new(ledger::FileLedger::open(&args.db)?);
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    let printer = tokio::spawn(async move {
        while let Some(line) = rx.recv().await {
            println!("{}", line);
        }
    });
    let mut game = cli::Cli::new(tokio::io::stdin(), tx, session::GameSession::new(ledger));
    game.play().await?;
    drop(game);
    printer.await?;
    Ok(())
}
