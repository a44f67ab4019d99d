//! League Server Binary
//!
//! Serves player scores and the league over HTTP, and hosts
//! blind-timed games over WebSocket at `/ws`.

use clap::Parser;
use pokerleague::*;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
    bind: String,
    /// League file, created if missing.
    #[arg(long, env = "LEAGUE_DB", default_value = LEAGUE_DB)]
    db: String,
    /// HTTP worker threads.
    #[arg(long, default_value_t = 4)]
    workers: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log("webserver", ::log::LevelFilter::Info)?;
    kys();
    let ledger = Arc::new(ledger::FileLedger::open(&args.db)?);
    gateway::Server::run(&args.bind, args.workers, ledger).await?;
    Ok(())
}
