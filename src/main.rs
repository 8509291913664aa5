use actix_identity::IdentityMiddleware;
use actix_web::{App, HttpServer, middleware, web};

use studio_booking::domain::types::Username;
use studio_booking::models::config::ServerConfig;
use studio_booking::repository::MemoryRepository;
use studio_booking::routes::auth::session_middleware;
use studio_booking::routes::configure;
use studio_booking::seed::seed_sample_data;
use studio_booking::services::auth::ensure_admin_account;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let repo = MemoryRepository::new();

    let admin_username = match Username::new(server_config.admin_username.as_str()) {
        Ok(username) => username,
        Err(e) => {
            log::error!("Invalid admin_username: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = ensure_admin_account(admin_username, &server_config.admin_password, &repo) {
        log::error!("Failed to create admin account: {e}");
        std::process::exit(1);
    }

    if server_config.seed_sample_data {
        if let Err(e) = seed_sample_data(&repo) {
            log::error!("Failed to load sample data: {e}");
            std::process::exit(1);
        }
    }

    let key = server_config.session_key();
    let cookie_secure = server_config.cookie_secure;
    let address = (server_config.bind_address.clone(), server_config.port);
    log::info!(
        "Starting server on http://{}:{}",
        server_config.bind_address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(session_middleware(key.clone(), cookie_secure))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(configure)
    })
    .bind(address)?
    .run()
    .await
}
