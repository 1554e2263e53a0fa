use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::clean_name;

/// Game name from the `{game}` path segment, trimmed and length-checked.
/// Says nothing about whether the game exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameName(pub String);

impl FromRequest for GameName {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let name = clean_name(req.match_info().get("game"), ErrorCode::InvalidGameName, "Game");
        ready(name.map(GameName))
    }
}
