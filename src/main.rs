use rusty_footy::args;
use rusty_footy::controller::upstream::{HttpUpstream, UpstreamClient, UpstreamConfig};
use rusty_footy::routes::configure_api;
use rusty_footy::view::index::{DEFAULT_INDEX_TITLE, render_index_template};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, middleware, web};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::args_checks();
    let upstream_config = UpstreamConfig::from_args(&args);
    let upstream: Arc<dyn UpstreamClient> = Arc::new(HttpUpstream::new(&upstream_config)?);
    log::info!(
        "proxying {} (timeout {:?}), listening on {}",
        upstream_config.base_url,
        upstream_config.timeout,
        args.bind
    );

    let static_dir = args.static_dir.clone();
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(Data::from(upstream.clone()))
            .configure(configure_api)
            .route("/", web::get().to(index))
            .route("/health", web::get().to(health))
            .service(Files::new("/static", &static_dir))
    });
    if let Some(workers) = args.workers {
        server = server.workers(workers);
    }

    server.bind(&args.bind)?.run().await?;
    Ok(())
}

async fn index() -> impl Responder {
    let markup = render_index_template(DEFAULT_INDEX_TITLE);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}
