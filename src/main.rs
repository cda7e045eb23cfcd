use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};

use kidslearn_server::{
    app_state::AppState,
    auth::SessionGuard,
    config::Config,
    handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let bind_host = state.config.web_server_host.clone();
    let bind_port = state.config.web_server_port;
    log::info!("Starting HTTP server on {}:{}", bind_host, bind_port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&state.config.cors_allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::from(state.jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::health_check_live)
            .service(handlers::health_check_ready)
            .service(
                web::scope("/api/auth")
                    .service(handlers::register)
                    .service(handlers::confirm_email)
                    .service(handlers::login)
                    .service(handlers::refresh_token)
                    .service(handlers::logout),
            )
            .service(
                web::scope("/api")
                    .wrap(SessionGuard)
                    .service(handlers::start_quiz)
                    .service(handlers::get_quiz)
                    .service(handlers::submit_answer)
                    .service(handlers::get_leaderboard)
                    .service(handlers::get_profile),
            )
    })
    .bind((bind_host, bind_port))?
    .run()
    .await
}
