use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use enrichment_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Missing configuration fails here, before the server starts listening.
    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("Starting enrichment server on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::root)
            .service(handlers::health)
            .service(handlers::generate_quizzes)
            .service(handlers::evaluate_quizzes)
            .service(handlers::translate_enrichment)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
