//! Player actions, views and the event stream for one game.
//!
//! Mounted under `/api/games/{game}`. The acting player always comes from
//! the `player` query parameter via [`Caller`].

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{Caller, GameName};
use crate::realtime::{session, ChannelKey};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct SubmitQuery {
    /// Position in the caller's hand.
    card: usize,
}

#[derive(Debug, Deserialize)]
struct ChooseQuery {
    /// Position in the revealed submissions.
    submission: usize,
}

/// POST|GET /api/games/{game}/join?player=NAME
///
/// Seats the caller, creating the game if this is the first reference to
/// it. Joining again returns the existing seat.
async fn join(
    game: GameName,
    caller: Caller,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = app_state.games.join(&game.0, &caller.player)?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/games/{game}/submit?player=NAME&card=INDEX
async fn submit(
    game: GameName,
    caller: Caller,
    query: web::Query<SubmitQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.games.submit(&game.0, &caller.player, query.card)?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/games/{game}/choose?player=NAME&submission=INDEX
async fn choose(
    game: GameName,
    caller: Caller,
    query: web::Query<ChooseQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let outcome = app_state
        .games
        .choose_winner(&game.0, &caller.player, query.submission)?;
    info!(
        game = %game.0,
        judge = %caller.player,
        winner = outcome.winner.as_ref().map(|s| s.player.as_str()),
        finished = outcome.finished,
        "Winner chosen"
    );
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/games/{game}/view?player=NAME
async fn view(
    game: GameName,
    caller: Caller,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = app_state.games.view(&game.0, &caller.player)?;
    Ok(HttpResponse::Ok().json(view))
}

/// GET /api/games/{game}/events?player=NAME
///
/// WebSocket upgrade onto the caller's channel. Only seated players may
/// listen.
async fn events(
    req: HttpRequest,
    stream: web::Payload,
    game: GameName,
    caller: Caller,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    app_state.games.view(&game.0, &caller.player)?;
    let key = ChannelKey::new(game.0, caller.player);
    session::upgrade(req, stream, key, app_state.hub.clone()).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::invalid(ErrorCode::BadRequest, err.to_string()).into()
    }))
    .service(
        web::resource("/join")
            .route(web::post().to(join))
            .route(web::get().to(join)),
    )
    .service(web::resource("/submit").route(web::post().to(submit)))
    .service(web::resource("/choose").route(web::post().to(choose)))
    .service(web::resource("/view").route(web::get().to(view)))
    .service(web::resource("/events").route(web::get().to(events)));
}
