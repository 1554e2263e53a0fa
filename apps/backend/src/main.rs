use actix_web::{web, App, HttpServer};
use blanks_backend::config::AppConfig;
use blanks_backend::infra::state::build_state;
use blanks_backend::middleware::RequestTrace;
use blanks_backend::{routes, telemetry};
use clap::Parser;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::parse();

    match telemetry::log_filter(&config.log_filter) {
        Ok(filter) => telemetry::init_tracing(filter),
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }

    let app_state = match build_state().with_config(&config).and_then(|b| b.build()) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "Starting blanks server");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
