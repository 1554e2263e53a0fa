//! Who is making the request.
//!
//! The player is whoever the `player` query parameter says. There is no
//! session or token behind it; tightening identity means changing this
//! extractor and nothing else.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::Deserialize;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::clean_name;

#[derive(Deserialize)]
struct CallerQuery {
    player: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub player: String,
}

impl FromRequest for Caller {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = web::Query::<CallerQuery>::from_query(req.query_string())
            .ok()
            .and_then(|q| q.into_inner().player);
        ready(
            clean_name(raw.as_deref(), ErrorCode::InvalidPlayerName, "Player")
                .map(|player| Caller { player }),
        )
    }
}
