use apidoc_core::http::{Html, IntoResponse, RouteHandler, StatusCode};
use apidoc_core::{ExpressAdapter, HttpAdapter};
use apidoc_test::{resolve_path, tokenize_path, PathToken, TestApp};
use serde_json::{json, Value};

fn cats_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": { "title": "Cats example", "version": "1.0.0" },
        "tags": [{ "name": "cats" }, { "name": "owners" }],
        "servers": [],
        "paths": {
            "/cats": {
                "get": { "operationId": "CatsController_find_all", "tags": ["cats"] },
                "post": {
                    "operationId": "CatsController_create",
                    "parameters": [
                        { "name": "x-trace", "in": "header" },
                        { "name": "dry_run", "in": "query" },
                        { "name": "locale", "in": "query" }
                    ]
                }
            }
        },
        "components": { "schemas": { "Cat": {}, "Owner": {} } }
    })
}

#[test]
fn resolves_top_level_field() {
    assert_eq!(resolve_path(&cats_document(), "openapi"), json!("3.0.0"));
}

#[test]
fn resolves_nested_info_field() {
    assert_eq!(resolve_path(&cats_document(), "info.title"), json!("Cats example"));
}

#[test]
fn resolves_tag_by_index() {
    let doc = cats_document();
    assert_eq!(resolve_path(&doc, "tags[0].name"), json!("cats"));
    assert_eq!(resolve_path(&doc, "tags[1].name"), json!("owners"));
}

#[test]
fn resolves_operation_parameters() {
    let doc = cats_document();
    assert_eq!(
        resolve_path(&doc, r#"paths["/cats"].post.parameters[1].in"#),
        json!("query")
    );
    assert_eq!(
        resolve_path(&doc, r#"paths["/cats"].get.tags[0]"#),
        json!("cats")
    );
}

#[test]
fn counts_collections() {
    let doc = cats_document();
    assert_eq!(resolve_path(&doc, "tags.len()"), json!(2));
    assert_eq!(resolve_path(&doc, "servers.size()"), json!(0));
    assert_eq!(resolve_path(&doc, "components.schemas.len()"), json!(2));
    assert_eq!(
        resolve_path(&doc, r#"paths["/cats"].post.parameters.len()"#),
        json!(3)
    );
}

#[test]
fn missing_field_is_null() {
    assert_eq!(resolve_path(&cats_document(), "externalDocs"), Value::Null);
    assert_eq!(resolve_path(&cats_document(), r#"paths["/dogs"].get"#), Value::Null);
}

#[test]
fn resolves_quoted_path_keys() {
    let v = json!({"paths": {"/cats/{id}": {"get": {"responses": {"200": {"description": "ok"}}}}}});
    assert_eq!(
        resolve_path(&v, r#"paths["/cats/{id}"].get.responses["200"].description"#),
        json!("ok")
    );
}

#[test]
fn resolves_media_type_key() {
    let v = json!({"content": {"application/vnd.api+json": {"schema": {}}}});
    assert_eq!(
        resolve_path(&v, r#"content["application/vnd.api+json"].schema"#),
        json!({})
    );
}

#[test]
fn tokenizes_indices_quoted_keys_and_len() {
    assert_eq!(
        tokenize_path(r#"tags[1]["name"].len()"#),
        vec![
            PathToken::Field("tags".into()),
            PathToken::Index(1),
            PathToken::Field("name".into()),
            PathToken::Len,
        ]
    );
}

// ── TestApp ─────────────────────────────────────────────────────────────────

fn docs_app() -> TestApp {
    let mut adapter = ExpressAdapter::new();
    adapter.get(
        "/docs",
        RouteHandler::respond(|_| Html("<html></html>").into_response()),
    );
    adapter.get(
        "/docs-json",
        RouteHandler::respond(|_| {
            apidoc_core::http::Json(json!({"paths": {"/cats": {"get": {"tags": ["cats"]}}}}))
                .into_response()
        }),
    );
    adapter.get(
        "/old",
        RouteHandler::write(|_, res| {
            res.write_head(StatusCode::FOUND, [(apidoc_core::http::LOCATION, "/docs")]);
            res.end("");
        }),
    );
    TestApp::from(adapter)
}

#[tokio::test]
async fn serves_html_and_json() {
    let app = docs_app();
    app.get("/docs").send().await.assert_html();
    app.get("/docs-json")
        .send()
        .await
        .assert_ok()
        .assert_content_type("application/json")
        .assert_json_path(r#"paths["/cats"].get.tags[0]"#, "cats")
        .assert_json_path("paths.len()", 1);
}

#[tokio::test]
async fn follows_redirect_and_missing_routes() {
    let app = docs_app();
    app.get("/old").send().await.assert_redirect("/docs");
    app.get("/nope").send().await.assert_not_found();
}
