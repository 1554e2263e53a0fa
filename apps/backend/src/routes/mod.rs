use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. `main.rs` wraps the result in middleware; tests use
/// it as-is.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Game actions and event streams: /api/games/{game}/**
    cfg.service(web::scope("/api/games/{game}").configure(games::configure_routes));
}
