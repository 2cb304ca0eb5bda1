use crate::presentation::handlers::{
    create_user, get_all_users, get_user_by_id, health_check, login,
};
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/users", web::post().to(create_user))
        .route("/users", web::get().to(get_all_users))
        .route("/users/{id}", web::get().to(get_user_by_id))
        .route("/login", web::post().to(login));
}
