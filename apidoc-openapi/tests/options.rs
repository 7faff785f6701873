use apidoc_core::config::AppConfig;
use apidoc_openapi::{ScanOptions, SwaggerCustomOptions};
use serde_json::json;

#[test]
fn scan_options_defaults() {
    let options = ScanOptions::new();
    assert!(options.include.is_empty());
    assert!(options.extra_models.is_empty());
    assert!(!options.ignore_global_prefix);
    assert!(!options.deep_scan_routes);
    assert_eq!(options.operation_id("CatsController", "create"), "CatsController_create");
}

#[test]
fn scan_options_debug_hides_factory() {
    let options = ScanOptions::new().operation_id_factory(|c, h| format!("{h}@{c}"));
    assert_eq!(options.operation_id("Cats", "create"), "create@Cats");
    assert!(format!("{options:?}").contains("operation_id_factory: Some(\"..\")"));
}

#[test]
fn custom_options_builder() {
    let options = SwaggerCustomOptions::new()
        .explorer(true)
        .swagger_option("persistAuthorization", json!(true))
        .custom_css(".topbar { display: none }")
        .custom_site_title("Cats docs");

    assert!(options.explorer);
    assert_eq!(options.swagger_options["persistAuthorization"], json!(true));
    assert_eq!(options.custom_css.as_deref(), Some(".topbar { display: none }"));
    assert_eq!(options.custom_site_title.as_deref(), Some("Cats docs"));
    assert!(options.swagger_url.is_none());
}

#[test]
fn custom_options_deserialize_camel_case() {
    let options: SwaggerCustomOptions = serde_json::from_value(json!({
        "explorer": true,
        "customSiteTitle": "Docs",
        "swaggerOptions": { "docExpansion": "none" }
    }))
    .unwrap();
    assert!(options.explorer);
    assert_eq!(options.custom_site_title.as_deref(), Some("Docs"));
    assert_eq!(options.swagger_options["docExpansion"], "none");
}

#[test]
fn custom_options_from_config() {
    let yaml = r#"
swagger:
  title: Configured docs
  explorer: "yes"
  favicon: /favicon.ico
  css: https://cdn.example.com/theme.css
"#;
    let config = AppConfig::from_yaml_str(yaml, "test").unwrap();
    let options = SwaggerCustomOptions::from_config(&config).unwrap();

    assert!(options.explorer);
    assert_eq!(options.custom_site_title.as_deref(), Some("Configured docs"));
    assert_eq!(options.custom_favicon.as_deref(), Some("/favicon.ico"));
    assert_eq!(
        options.custom_css_url.as_deref(),
        Some("https://cdn.example.com/theme.css")
    );
    assert!(options.custom_js.is_none());
}

#[test]
fn custom_options_from_empty_config() {
    let options = SwaggerCustomOptions::from_config(&AppConfig::empty()).unwrap();
    assert_eq!(options, SwaggerCustomOptions::default());
}
