use super::bridge;
use crate::ledger::Ledger;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}
pub async fn score(ledger: web::Data<dyn Ledger>, path: web::Path<String>) -> impl Responder {
    match ledger.find(&path.into_inner()).await {
        Some(player) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(player.wins.to_string()),
        None => HttpResponse::NotFound().finish(),
    }
}
pub async fn win(ledger: web::Data<dyn Ledger>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    match ledger.record(&name).await {
        Ok(()) => HttpResponse::Accepted().finish(),
        Err(e) => {
            log::error!("failed to record win for {}: {:#}", name, e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}
pub async fn league(ledger: web::Data<dyn Ledger>) -> impl Responder {
    HttpResponse::Ok().json(ledger.league().await)
}
pub async fn play(
    ledger: web::Data<dyn Ledger>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            bridge(ledger.into_inner(), session, stream);
            response
        }
        Err(e) => {
            log::warn!("rejected websocket handshake: {}", e);
            e.error_response()
        }
    }
}
