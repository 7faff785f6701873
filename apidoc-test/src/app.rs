use apidoc_core::http::{Body, Router};
use apidoc_core::{AzureHttpAdapter, ExpressAdapter, FastifyAdapter};
use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, IntoHeaderName, CONTENT_TYPE, LOCATION};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::util::ServiceExt;

/// In-process HTTP test client wrapping an Axum `Router`.
///
/// Uses `tower::ServiceExt::oneshot` to dispatch requests without binding
/// to a TCP port.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Create a `TestApp` from an assembled `axum::Router`.
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Start building a GET request.
    pub fn get(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::GET, path)
    }

    /// Start building a POST request.
    pub fn post(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::POST, path)
    }

    /// Start building a request with an arbitrary HTTP method.
    pub fn request(&self, method: Method, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, method, path)
    }
}

impl From<Router> for TestApp {
    fn from(router: Router) -> Self {
        Self::new(router)
    }
}

impl From<ExpressAdapter> for TestApp {
    fn from(adapter: ExpressAdapter) -> Self {
        Self::new(adapter.into_router())
    }
}

impl From<FastifyAdapter> for TestApp {
    fn from(adapter: FastifyAdapter) -> Self {
        Self::new(adapter.into_router())
    }
}

impl From<AzureHttpAdapter> for TestApp {
    fn from(adapter: AzureHttpAdapter) -> Self {
        Self::new(adapter.into_router())
    }
}

/// Builder for constructing and sending a test HTTP request.
pub struct TestRequest<'a> {
    app: &'a TestApp,
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl<'a> TestRequest<'a> {
    fn new(app: &'a TestApp, method: Method, path: &str) -> Self {
        Self {
            app,
            method,
            path: path.to_string(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Add a custom header.
    pub fn header(mut self, name: impl IntoHeaderName, value: impl AsRef<str>) -> Self {
        self.headers.insert(name, value.as_ref().parse().unwrap());
        self
    }

    /// Set a raw request body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Send the request and return the response.
    pub async fn send(self) -> TestResponse {
        let body = match self.body {
            Some(b) => Body::from(b),
            None => Body::empty(),
        };

        let mut builder = Request::builder().method(self.method).uri(&self.path);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        let request = builder.body(body).unwrap();

        let response = self
            .app
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

// ─── JSON path resolution ───

#[derive(Debug, PartialEq)]
pub enum PathToken {
    Field(String),
    Index(usize),
    Len,
}

/// Split a JSON path into tokens.
///
/// Fields are separated by dots. Keys containing dots or slashes (OpenAPI
/// paths, media types) are written in brackets and quotes:
/// `paths["/cats/{id}"].get.responses["200"]`.
pub fn tokenize_path(path: &str) -> Vec<PathToken> {
    let mut tokens = Vec::new();
    let mut field = String::new();
    let mut chars = path.chars().peekable();

    fn flush(field: &mut String, tokens: &mut Vec<PathToken>) {
        match field.as_str() {
            "" => {}
            "len()" | "size()" => tokens.push(PathToken::Len),
            name => tokens.push(PathToken::Field(name.to_string())),
        }
        field.clear();
    }

    while let Some(c) = chars.next() {
        match c {
            '.' => flush(&mut field, &mut tokens),
            '[' => {
                flush(&mut field, &mut tokens);
                if chars.peek() == Some(&'"') {
                    chars.next();
                    let key: String = chars.by_ref().take_while(|c| *c != '"').collect();
                    assert_eq!(chars.next(), Some(']'), "unclosed bracket in JSON path");
                    tokens.push(PathToken::Field(key));
                } else {
                    let index: String = chars.by_ref().take_while(|c| *c != ']').collect();
                    let index = index
                        .trim()
                        .parse()
                        .expect("non-numeric array index in JSON path");
                    tokens.push(PathToken::Index(index));
                }
            }
            c => field.push(c),
        }
    }
    flush(&mut field, &mut tokens);
    tokens
}

pub fn resolve_path(root: &Value, path: &str) -> Value {
    let tokens = tokenize_path(path);
    let mut current = root.clone();
    for (i, token) in tokens.iter().enumerate() {
        current = match token {
            PathToken::Field(name) => current.get(name).cloned().unwrap_or(Value::Null),
            PathToken::Index(idx) => current.get(*idx).cloned().unwrap_or(Value::Null),
            PathToken::Len => {
                let len = match &current {
                    Value::Array(a) => a.len(),
                    Value::Object(o) => o.len(),
                    Value::String(s) => s.len(),
                    other => {
                        let consumed: Vec<_> =
                            tokens[..i].iter().map(|t| format!("{t:?}")).collect();
                        panic!(
                            "len() applied to non-collection at path segment {}: got {}\nResolved tokens so far: {:?}",
                            i, other, consumed,
                        );
                    }
                };
                Value::Number(serde_json::Number::from(len))
            }
        };
    }
    current
}

// ─── TestResponse ───

/// Response wrapper with status assertions, JSON-path assertions, and body helpers.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    // ── Status assertions ──

    /// Assert status is 200 OK.
    pub fn assert_ok(self) -> Self {
        self.assert_status(StatusCode::OK)
    }

    /// Assert status is 404 Not Found.
    pub fn assert_not_found(self) -> Self {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    /// Assert the response has a specific status code.
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected {expected}, got {}\nBody: {}",
            self.status,
            self.text()
        );
        self
    }

    /// Assert a 302 redirect to `location`.
    pub fn assert_redirect(self, location: &str) -> Self {
        let this = self.assert_status(StatusCode::FOUND);
        assert_eq!(this.header(LOCATION.as_str()), Some(location));
        this
    }

    // ── Content-type assertions ──

    /// Assert the media type, ignoring parameters such as `charset`.
    pub fn assert_content_type(self, expected: &str) -> Self {
        let actual = self
            .header(CONTENT_TYPE.as_str())
            .map(|v| v.split(';').next().unwrap_or_default().trim().to_string());
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "Unexpected content type\n  Body: {}",
            self.text()
        );
        self
    }

    /// Assert a 200 `text/html` response.
    pub fn assert_html(self) -> Self {
        self.assert_ok().assert_content_type("text/html")
    }

    // ── JSON-path assertions ──

    /// Assert that a JSON path resolves to the expected value.
    ///
    /// Supports dot-separated fields, quoted keys, array indices, and
    /// `len()`/`size()`:
    /// ```ignore
    /// resp.assert_json_path("openapi", "3.0.0")
    ///     .assert_json_path("paths.len()", 2)
    ///     .assert_json_path(r#"paths["/cats"].get.tags[0]"#, "cats");
    /// ```
    pub fn assert_json_path(self, path: &str, expected: impl Into<Value>) -> Self {
        let root: Value = self.json();
        let actual = resolve_path(&root, path);
        let expected = expected.into();
        assert_eq!(
            actual, expected,
            "JSON path \"{path}\" assertion failed\n  Expected: {expected}\n  Actual:   {actual}\n  Body: {root}",
        );
        self
    }

    /// Assert that a JSON path satisfies a predicate.
    pub fn assert_json_path_fn(self, path: &str, predicate: impl FnOnce(&Value) -> bool) -> Self {
        let root: Value = self.json();
        let actual = resolve_path(&root, path);
        assert!(
            predicate(&actual),
            "JSON path \"{path}\" predicate failed\n  Value: {actual}\n  Body: {root}",
        );
        self
    }

    /// Extract and deserialize a value at a JSON path.
    pub fn json_path<T: DeserializeOwned>(&self, path: &str) -> T {
        let root: Value = self.json();
        let value = resolve_path(&root, path);
        serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            panic!(
                "Failed to deserialize JSON path \"{path}\": {e}\n  Value: {value}\n  Body: {root}"
            )
        })
    }

    // ── Header access ──

    /// Get a response header value by name.
    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        let name: HeaderName = name.as_ref().parse().ok()?;
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    // ── Body helpers ──

    /// Deserialize the entire response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("Failed to parse JSON: {e}\nBody: {}", self.text()))
    }

    /// Return the response body as a UTF-8 string.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
