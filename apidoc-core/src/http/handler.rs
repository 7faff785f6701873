//! Framework-neutral GET handlers.
//!
//! Adapters accept a [`RouteHandler`] and translate it into whatever their
//! underlying server expects. Two flavors exist because host servers expose
//! two different response APIs:
//!
//! - [`RouteHandler::Respond`] builds a complete [`Response`] with the
//!   high-level helpers (`Html`, `Json`, tuples of headers and body).
//! - [`RouteHandler::Write`] receives a [`ResponseWriter`] and drives it
//!   through `write_head` / `write` / `end`, the way function hosts expose
//!   their raw response object.

use std::fmt;
use std::sync::Arc;

use bytes::{Bytes, BytesMut};

use super::{Body, HeaderMap, HeaderName, HeaderValue, Parts, Response, StatusCode};

type RespondFn = dyn Fn(&Parts) -> Response + Send + Sync;
type WriteFn = dyn Fn(&Parts, &mut ResponseWriter) + Send + Sync;

/// A GET handler registered through an [`HttpAdapter`](crate::HttpAdapter).
#[derive(Clone)]
pub enum RouteHandler {
    Respond(Arc<RespondFn>),
    Write(Arc<WriteFn>),
}

impl RouteHandler {
    /// Handler that returns a complete response.
    pub fn respond<F>(f: F) -> Self
    where
        F: Fn(&Parts) -> Response + Send + Sync + 'static,
    {
        RouteHandler::Respond(Arc::new(f))
    }

    /// Handler that writes its response through a [`ResponseWriter`].
    pub fn write<F>(f: F) -> Self
    where
        F: Fn(&Parts, &mut ResponseWriter) + Send + Sync + 'static,
    {
        RouteHandler::Write(Arc::new(f))
    }

    /// Run the handler against the request head.
    pub fn call(&self, parts: &Parts) -> Response {
        match self {
            RouteHandler::Respond(f) => f(parts),
            RouteHandler::Write(f) => {
                let mut writer = ResponseWriter::new();
                f(parts, &mut writer);
                writer.into_response()
            }
        }
    }
}

impl fmt::Debug for RouteHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteHandler::Respond(_) => f.write_str("RouteHandler::Respond"),
            RouteHandler::Write(_) => f.write_str("RouteHandler::Write"),
        }
    }
}

/// Low-level response object: status and headers first, then body chunks.
///
/// Anything written after [`end`](Self::end) is discarded.
#[derive(Debug, Default)]
pub struct ResponseWriter {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: BytesMut,
    ended: bool,
}

impl ResponseWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status code and append the given headers.
    ///
    /// Header values that are not valid HTTP header values are skipped.
    pub fn write_head<'a, I>(&mut self, status: StatusCode, headers: I)
    where
        I: IntoIterator<Item = (HeaderName, &'a str)>,
    {
        if self.ended {
            tracing::warn!("write_head called after end, ignoring");
            return;
        }
        self.status = Some(status);
        for (name, value) in headers {
            match HeaderValue::from_str(value) {
                Ok(value) => {
                    self.headers.append(name, value);
                }
                Err(_) => tracing::warn!(header = %name, "invalid header value, skipping"),
            }
        }
    }

    /// Append a chunk to the body.
    pub fn write(&mut self, chunk: impl AsRef<[u8]>) {
        if self.ended {
            tracing::warn!("write called after end, ignoring");
            return;
        }
        self.body.extend_from_slice(chunk.as_ref());
    }

    /// Append a final chunk and close the response.
    pub fn end(&mut self, chunk: impl AsRef<[u8]>) {
        self.write(chunk);
        self.ended = true;
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// The status set by `write_head`, `200 OK` if none was set.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Convert into a response. An un-ended writer still yields what was
    /// written so far.
    pub fn into_response(self) -> Response {
        let status = self.status();
        let body: Bytes = self.body.freeze();
        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}
