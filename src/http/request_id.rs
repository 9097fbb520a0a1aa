//! Request ID middleware.
//!
//! Attaches a UUID v4 `x-request-id` to every request as early as
//! possible so handler logs and the response can be correlated. An ID
//! supplied by the client is preserved.

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

pub async fn request_id_middleware(mut request: Request<Body>, next: Next) -> Response {
    let id = match request.headers().get(X_REQUEST_ID) {
        Some(existing) => existing.clone(),
        None => {
            let generated = Uuid::new_v4().to_string();
            let value = HeaderValue::from_str(&generated)
                .expect("uuid string is a valid header value");
            request.headers_mut().insert(X_REQUEST_ID, value.clone());
            value
        }
    };

    let mut response = next.run(request).await;
    response.headers_mut().insert(X_REQUEST_ID, id);
    response
}
