use super::Connection;
use super::Stage;
use crate::ledger::Ledger;
use crate::session::GameSession;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc::unbounded_channel;

/// Spawns the pump between one WebSocket and a fresh game.
///
/// Outbound alerts take priority over inbound frames. Each text frame may
/// carry several lines; blank lines are ignored. Once the game closes the
/// remaining outbound messages are flushed and the socket is closed.
/// Any transport failure ends the loop, which drops the session and with
/// it the blind schedule.
pub fn bridge(
    ledger: Arc<dyn Ledger>,
    mut session: actix_ws::Session,
    mut stream: actix_ws::MessageStream,
) {
    let (tx, mut rx) = unbounded_channel::<String>();
    let game = GameSession::new(ledger);
    let id = game.id();
    let mut conn = Connection::new(game, tx);
    log::debug!("[bridge {}] connected", id);
    actix_web::rt::spawn(async move {
        'sesh: loop {
            tokio::select! {
                biased;
                msg = rx.recv() => match msg {
                    Some(text) => if session.text(text).await.is_err() { break 'sesh },
                    None => break 'sesh,
                },
                msg = stream.next() => match msg {
                    Some(Ok(actix_ws::Message::Text(text))) => {
                        for line in text.lines().filter(|l| !l.trim().is_empty()) {
                            if conn.receive(line).await == Stage::Closed {
                                while let Ok(text) = rx.try_recv() {
                                    if session.text(text).await.is_err() { break 'sesh }
                                }
                                let _ = session.close(None).await;
                                log::debug!("[bridge {}] game over", id);
                                return;
                            }
                        }
                    }
                    Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                    Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                    Some(Err(_)) => break 'sesh,
                    None => break 'sesh,
                    _ => continue 'sesh,
                },
            }
        }
        log::debug!("[bridge {}] disconnected", id);
    });
}
