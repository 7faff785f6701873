use apidoc_core::http::{Body, Request, ResponseWriter, RouteHandler, StatusCode, CONTENT_TYPE};
use http_body_util::BodyExt;

fn parts() -> apidoc_core::http::Parts {
    Request::builder()
        .uri("/docs")
        .body(Body::empty())
        .unwrap()
        .into_parts()
        .0
}

async fn body_text(response: apidoc_core::http::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn writer_defaults_to_ok() {
    let mut writer = ResponseWriter::new();
    writer.end("hello");
    assert!(writer.is_ended());
    assert_eq!(writer.status(), StatusCode::OK);
    assert_eq!(body_text(writer.into_response()).await, "hello");
}

#[tokio::test]
async fn writer_collects_chunks_until_end() {
    let mut writer = ResponseWriter::new();
    writer.write_head(StatusCode::CREATED, [(CONTENT_TYPE, "application/json")]);
    writer.write("{\"a\":");
    writer.end("1}");
    writer.write("ignored");

    assert_eq!(writer.headers()[CONTENT_TYPE], "application/json");
    let response = writer.into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_text(response).await, "{\"a\":1}");
}

#[test]
fn writer_skips_invalid_header_values() {
    let mut writer = ResponseWriter::new();
    writer.write_head(StatusCode::OK, [(CONTENT_TYPE, "bad\nvalue")]);
    assert!(writer.headers().get(CONTENT_TYPE).is_none());
}

#[tokio::test]
async fn write_handler_sees_request_head() {
    let handler = RouteHandler::write(|parts, res| {
        res.write_head(StatusCode::OK, [(CONTENT_TYPE, "text/plain")]);
        res.end(parts.uri.path());
    });
    let response = handler.call(&parts());
    assert_eq!(body_text(response).await, "/docs");
}
