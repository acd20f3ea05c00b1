use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use skillforge_server::{app_state::AppState, auth::AuthMiddleware, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let state = AppState::new(&config)
        .await
        .expect("failed to initialize application state");

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    log::info!("starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);

    let cors_origin = config.cors_allowed_origin.clone();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::from(state.jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
            .service(handlers::register)
            .service(handlers::login)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .service(handlers::create_course)
                    .service(handlers::get_all_courses)
                    .service(handlers::get_course)
                    .service(handlers::delete_course)
                    .service(handlers::create_subject)
                    .service(handlers::get_all_subjects)
                    .service(handlers::get_subjects_by_course)
                    .service(handlers::delete_subject)
                    .service(handlers::create_topic)
                    .service(handlers::get_all_topics)
                    .service(handlers::get_topics_by_subject)
                    .service(handlers::delete_topic)
                    .service(handlers::upload_material)
                    .service(handlers::get_materials_by_topic)
                    .service(handlers::download_material)
                    .service(handlers::delete_material)
                    .service(handlers::generate_quiz)
                    .service(handlers::get_all_quizzes)
                    .service(handlers::get_quiz_summaries)
                    .service(handlers::get_quizzes_by_topic)
                    .service(handlers::get_quiz_by_display_id)
                    .service(handlers::submit_attempt)
                    .service(handlers::get_user_attempts)
                    .service(handlers::get_all_attempts)
                    .service(handlers::get_all_users)
                    .service(handlers::get_user)
                    .service(handlers::update_user)
                    .service(handlers::delete_user),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
