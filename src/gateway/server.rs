use super::handlers::*;
use crate::ledger::Ledger;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

pub struct Server;

impl Server {
    /// Route table, shared by the running server and its tests.
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/health", web::get().to(health))
            .route("/league", web::get().to(league))
            .route("/ws", web::get().to(play))
            .service(
                web::resource("/players/{name}")
                    .route(web::get().to(score))
                    .route(web::post().to(win)),
            );
    }
    pub async fn run(
        bind: &str,
        workers: usize,
        ledger: Arc<dyn Ledger>,
    ) -> Result<(), std::io::Error> {
        let ledger = web::Data::from(ledger);
        log::info!("starting league server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(ledger.clone())
                .configure(Server::routes)
        })
        .workers(workers)
        .bind(bind)?
        .run()
        .await
    }
}
