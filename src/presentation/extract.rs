use crate::presentation::error::ApiError;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

/// Request body decoded from JSON.
///
/// A bodyless request, or one that is not declared as JSON, yields
/// `T::default()` so that absent fields reach the controller's presence checks.
/// A JSON body that fails to decode is rejected with 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn is_json(req: &HttpRequest) -> bool {
    let content_type = req.content_type();
    content_type == "application/json" || content_type.ends_with("+json")
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let declared_json = is_json(req);
        let body = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = body.await?;
            if !declared_json || bytes.iter().all(u8::is_ascii_whitespace) {
                debug!(declared_json, "No JSON body, treating request as empty");
                return Ok(JsonBody(T::default()));
            }

            serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
                debug!(error = %e, "Rejecting malformed JSON body");
                ApiError::BadRequest("Invalid JSON payload".to_string()).into()
            })
        })
    }
}
