use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::{Actor, ActorContext, AsyncContext, Handler, StreamHandler};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use serde::Serialize;
use serde_json::value::RawValue;
use tracing::{info, warn};
use uuid::Uuid;

use crate::realtime::{ChannelEvent, ChannelHub, ChannelKey, EventKind};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

/// Wire shape of one pushed event.
#[derive(Serialize)]
struct Frame<'a> {
    event: EventKind,
    data: FrameData<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum FrameData<'a> {
    Json(Box<RawValue>),
    Text(&'a str),
}

/// Encode an event as a text frame. JSON payloads are embedded as-is, anything
/// else is sent as a string.
pub fn encode_frame(event: &ChannelEvent) -> Result<String, serde_json::Error> {
    let data = match RawValue::from_string(event.payload.to_string()) {
        Ok(raw) => FrameData::Json(raw),
        Err(_) => FrameData::Text(event.payload.as_ref()),
    };
    serde_json::to_string(&Frame {
        event: event.kind,
        data,
    })
}

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    key: ChannelKey,
    hub: Arc<ChannelHub>,
) -> Result<HttpResponse, Error> {
    ws::start(ChannelSession::new(key, hub), &req, stream)
}

/// One connected browser tab listening on a player's channel.
pub struct ChannelSession {
    session_id: Uuid,
    key: ChannelKey,
    hub: Arc<ChannelHub>,
    token: Option<Uuid>,
    last_heartbeat: Instant,
}

impl ChannelSession {
    fn new(key: ChannelKey, hub: Arc<ChannelHub>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            key,
            hub,
            token: None,
            last_heartbeat: Instant::now(),
        }
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(
                    session_id = %actor.session_id,
                    channel = %actor.key,
                    "Websocket client heartbeat timed out"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }

            ctx.ping(b"keepalive");
        });
    }
}

impl Actor for ChannelSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            session_id = %self.session_id,
            channel = %self.key,
            "Websocket session started"
        );
        let recipient = ctx.address().recipient();
        self.token = Some(self.hub.subscribe(&self.key, recipient));
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(token) = self.token.take() {
            self.hub.unsubscribe(&self.key, token);
        }
        info!(
            session_id = %self.session_id,
            channel = %self.key,
            "Websocket session stopped"
        );
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ChannelSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(_) => {
                // The channel is push-only; any inbound frame just proves liveness.
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    session_id = %self.session_id,
                    channel = %self.key,
                    error = %err,
                    "Websocket protocol error"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<ChannelEvent> for ChannelSession {
    type Result = ();

    fn handle(&mut self, event: ChannelEvent, ctx: &mut Self::Context) -> Self::Result {
        match encode_frame(&event) {
            Ok(frame) => ctx.text(frame),
            Err(err) => warn!(
                session_id = %self.session_id,
                channel = %self.key,
                error = %err,
                "Failed to serialize channel event"
            ),
        }
    }
}
