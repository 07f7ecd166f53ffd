// File: crates/tshist-core/src/response.rs
// Summary: Wraps encoded PNG bytes into a status + headers + body envelope for the HTTP layer.

use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, StatusCode};

use crate::encode::ImageBuffer;

pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Built once per request and never mutated afterwards.
#[derive(Debug)]
pub struct ResponseEnvelope {
    status: StatusCode,
    headers: HeaderMap,
    body: ImageBuffer,
}

impl ResponseEnvelope {
    /// `200 OK`, `Content-Type: image/png`, `Content-Length` = body length.
    pub fn png(body: ImageBuffer) -> Self {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(PNG_CONTENT_TYPE));
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        Self { status: StatusCode::OK, headers, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &ImageBuffer {
        &self.body
    }

    /// Hand off to the HTTP layer; bytes pass through untouched.
    pub fn into_http(self) -> http::Response<Vec<u8>> {
        let mut response = http::Response::new(self.body.into_bytes());
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
