use crate::{inbound, reply::Reply};
use api::{error::Error, Controller};
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::{
    body::{Body, Bytes},
    header::{HeaderValue, CONTENT_TYPE},
    Method, Request, Response, StatusCode,
};
use model::{ChatId, Render};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;

/// Upper bound on the size of an inbound message body.
pub const MAX_BODY: usize = 64 * 1024;

/// Chat message as delivered by the messaging platform.
#[derive(Deserialize)]
struct Message {
    chat: ChatId,
    #[serde(default)]
    text: Option<Box<str>>,
}

#[derive(Serialize)]
struct Replies {
    replies: Vec<Reply>,
}

pub async fn try_respond<B>(req: Request<B>, flow: &Controller) -> Result<Vec<u8>, StatusCode>
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    // For now, we only allow requests from the root endpoint.
    if req.uri().path() != "/" {
        return Err(StatusCode::NOT_FOUND);
    }

    // Disable all non-`POST` requests
    if req.method() != Method::POST {
        return Err(StatusCode::METHOD_NOT_ALLOWED);
    }

    // Parse incoming message
    let body = Limited::new(req.into_body(), MAX_BODY);
    let bytes = body
        .collect()
        .await
        .map_err(|err| {
            if err.is::<LengthLimitError>() {
                StatusCode::PAYLOAD_TOO_LARGE
            } else {
                StatusCode::BAD_REQUEST
            }
        })?
        .to_bytes();
    let Message { chat, text } = serde_json::from_slice(&bytes).map_err(|_| StatusCode::BAD_REQUEST)?;
    drop(bytes);

    let event = inbound::parse(text.as_deref());
    let mut renders = Vec::<Render>::new();
    match flow.on_event(chat, event, &mut renders).await {
        Ok(state) => log::trace!("Chat {chat} now in {state:?}."),
        Err(Error::Busy) => return Err(StatusCode::SERVICE_UNAVAILABLE),
    }

    // Construct new body
    let replies = renders.into_iter().map(Reply::from).collect();
    serde_json::to_vec(&Replies { replies }).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

pub async fn respond<B>(req: Request<B>, flow: &Controller) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    match try_respond(req, flow).await {
        Ok(bytes) => {
            let mut res = Response::new(Full::new(Bytes::from(bytes)));
            assert!(res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json")).is_none());
            res
        }
        Err(code) => {
            log::debug!("Rejected request with {code}.");
            let mut res = Response::new(Full::<Bytes>::default());
            *res.status_mut() = code;
            res
        }
    }
}
