use apidoc_openapi::{
    merge_document, DocumentBuilder, OpenApiDocument, ScannedDocument, SwaggerCustomOptions,
};
use apidoc_swagger_ui::{SwaggerUi, INIT_SCRIPT, SWAGGER_UI_CDN};
use serde_json::json;

fn document(title: &str) -> OpenApiDocument {
    merge_document(
        DocumentBuilder::new().title(title).build(),
        ScannedDocument::default(),
    )
}

#[test]
fn page_loads_bundle_and_inlines_document() {
    let html = SwaggerUi::new()
        .generate_html(&document("Cats example"), &SwaggerCustomOptions::default())
        .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Swagger UI</title>"));
    assert!(html.contains(&format!("{SWAGGER_UI_CDN}/swagger-ui-bundle.js")));
    assert!(html.contains(r#"<div id="swagger-ui"></div>"#));
    assert!(html.contains(r#""title": "Cats example""#));
    assert!(html.contains("SwaggerUIBundle(swaggerOptions)"));
}

#[test]
fn site_title_is_escaped() {
    let options = SwaggerCustomOptions::new().custom_site_title("Cats & <Dogs>");
    let html = SwaggerUi::new().generate_html(&document("x"), &options).unwrap();
    assert!(html.contains("<title>Cats &amp; &lt;Dogs&gt;</title>"));
}

#[test]
fn closing_script_tags_in_document_are_escaped() {
    let html = SwaggerUi::new()
        .generate_html(&document("</script><script>alert(1)"), &SwaggerCustomOptions::default())
        .unwrap();
    assert!(!html.contains("</script><script>alert(1)"));
    assert!(html.contains(r"<\/script><script>alert(1)"));
}

#[test]
fn explorer_bar_hidden_unless_enabled() {
    let ui = SwaggerUi::new();
    let hidden = ui
        .generate_html(&document("x"), &SwaggerCustomOptions::default())
        .unwrap();
    let shown = ui
        .generate_html(&document("x"), &SwaggerCustomOptions::new().explorer(true))
        .unwrap();
    assert!(hidden.contains(".download-url-wrapper { display: none }"));
    assert!(!shown.contains(".download-url-wrapper { display: none }"));
}

#[test]
fn customizations_are_rendered() {
    let options = SwaggerCustomOptions::new()
        .custom_css(".topbar { background: teal }")
        .custom_css_url("https://cdn.example.com/theme.css")
        .custom_js("/extra.js")
        .custom_favicon("/favicon.ico")
        .swagger_option("docExpansion", json!("none"));
    let html = SwaggerUi::new().generate_html(&document("x"), &options).unwrap();

    assert!(html.contains(".topbar { background: teal }"));
    assert!(html.contains(r#"<link href="https://cdn.example.com/theme.css" rel="stylesheet">"#));
    assert!(html.contains(r#"<script src="/extra.js"></script>"#));
    assert!(html.contains(r#"<link rel="icon" href="/favicon.ico" />"#));
    assert!(html.contains(r#""docExpansion": "none""#));
}

#[test]
fn swagger_url_replaces_inline_document() {
    let options = SwaggerCustomOptions::new().swagger_url("/docs/json");
    let script = SwaggerUi::new().init_script(&document("Inline"), &options).unwrap();
    assert!(script.contains(r#""swaggerUrl": "/docs/json""#));
    assert!(!script.contains("\"swaggerDoc\""));
    assert!(!script.contains("Inline"));
}

#[test]
fn served_files() {
    let files = SwaggerUi::new()
        .serve_files(&document("Cats"), &SwaggerCustomOptions::default())
        .unwrap();

    let names: Vec<_> = files.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["index.css", "oauth2-redirect.html", INIT_SCRIPT]);

    let init = files.get(INIT_SCRIPT).unwrap();
    assert_eq!(init.content_type(), "application/javascript");
    assert!(String::from_utf8_lossy(init.body()).contains("Cats"));
}
