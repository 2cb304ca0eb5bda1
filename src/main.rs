use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use std::sync::Arc;
use tracing::{error, info};
use user_accounts_api::application::user_controller::UserController;
use user_accounts_api::data::user_store::InMemoryUserStore;
use user_accounts_api::infrastructure::config::AppConfig;
use user_accounts_api::infrastructure::logging::init_logging;
use user_accounts_api::infrastructure::security::{Argon2PasswordHasher, JwtSigner};
use user_accounts_api::presentation::handlers::AppState;
use user_accounts_api::presentation::middleware::RequestLogMiddleware;
use user_accounts_api::presentation::routes::configure_routes;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };
    info!(token_ttl_secs = config.token_ttl_secs, "Configuration loaded");

    let store = InMemoryUserStore::new(Argon2PasswordHasher);
    let signer = JwtSigner::with_ttl(&config.jwt_secret, config.token_ttl_secs);
    let state = web::Data::new(AppState {
        users: UserController::new(Arc::new(store), Arc::new(signer)),
    });

    let bind_addr = config.bind_address();
    info!(address = %bind_addr, "Binding server to address");
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .allow_any_header(),
            )
            .wrap(RequestLogMiddleware)
            .configure(configure_routes)
    })
    .bind(&bind_addr)?;

    info!(
        address = %bind_addr,
        routes = %"GET /health, POST /users, GET /users, GET /users/{id}, POST /login",
        "Starting HTTP server"
    );
    server.run().await
}
