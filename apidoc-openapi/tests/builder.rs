use apidoc_core::config::{AppConfig, ConfigValue};
use apidoc_openapi::{merge_document, DocumentBuilder, ScannedDocument};
use serde_json::json;

#[test]
fn builder_defaults() {
    let config = DocumentBuilder::new().build();
    assert_eq!(config.get("openapi"), Some(&json!("3.0.0")));
    assert_eq!(
        config.get("info"),
        Some(&json!({ "title": "", "description": "", "version": "1.0.0", "contact": {} }))
    );
    assert_eq!(config.get("tags"), Some(&json!([])));
    assert_eq!(config.get("servers"), Some(&json!([])));
    assert_eq!(config.get("components"), Some(&json!({})));
}

#[test]
fn builder_sets_info() {
    let config = DocumentBuilder::new()
        .title("Cats example")
        .description("The cats API description")
        .version("2.0")
        .terms_of_service("https://example.com/terms")
        .contact("Team", "https://example.com", "team@example.com")
        .license("MIT", "https://opensource.org/licenses/MIT")
        .build();

    let info = config.get("info").unwrap();
    assert_eq!(info["title"], "Cats example");
    assert_eq!(info["description"], "The cats API description");
    assert_eq!(info["version"], "2.0");
    assert_eq!(info["termsOfService"], "https://example.com/terms");
    assert_eq!(info["contact"]["email"], "team@example.com");
    assert_eq!(info["license"]["name"], "MIT");
}

#[test]
fn builder_collects_servers_and_tags() {
    let config = DocumentBuilder::new()
        .add_server("http://localhost:3000", None)
        .add_server("https://api.example.com", Some("Production"))
        .add_tag("cats", Some("Cat operations"))
        .external_doc("More docs", "https://example.com/docs")
        .build();

    assert_eq!(
        config.get("servers"),
        Some(&json!([
            { "url": "http://localhost:3000" },
            { "url": "https://api.example.com", "description": "Production" }
        ]))
    );
    assert_eq!(
        config.get("tags"),
        Some(&json!([{ "name": "cats", "description": "Cat operations" }]))
    );
    assert_eq!(config.get("externalDocs").unwrap()["url"], "https://example.com/docs");
}

#[test]
fn builder_security_schemes() {
    let config = DocumentBuilder::new()
        .add_bearer_auth()
        .add_api_key()
        .add_basic_auth()
        .add_cookie_auth("connect.sid")
        .add_security_requirement("bearer", &[])
        .build();

    let schemes = &config.components().unwrap()["securitySchemes"];
    assert_eq!(schemes["bearer"]["scheme"], "bearer");
    assert_eq!(schemes["bearer"]["bearerFormat"], "JWT");
    assert_eq!(schemes["api_key"]["in"], "header");
    assert_eq!(schemes["basic"]["scheme"], "basic");
    assert_eq!(schemes["cookie"]["name"], "connect.sid");
    assert_eq!(config.get("security"), Some(&json!([{ "bearer": [] }])));
}

#[test]
fn built_config_merges_into_document() {
    let doc = merge_document(
        DocumentBuilder::new().title("Cats").add_bearer_auth().build(),
        ScannedDocument::default(),
    );
    assert_eq!(doc.title(), Some("Cats"));
    assert!(doc.components().unwrap().contains_key("securitySchemes"));
}

#[test]
fn builder_from_config() {
    let yaml = r#"
openapi:
  title: Configured
  version: 3
  servers:
    - http://localhost:3000
"#;
    let app_config = AppConfig::from_yaml_str(yaml, "test").unwrap();
    let config = DocumentBuilder::from_config(&app_config).unwrap().build();

    let info = config.get("info").unwrap();
    assert_eq!(info["title"], "Configured");
    assert_eq!(info["version"], "3");
    assert_eq!(info["description"], "");
    assert_eq!(
        config.get("servers"),
        Some(&json!([{ "url": "http://localhost:3000" }]))
    );
}

#[test]
fn builder_from_config_reports_bad_types() {
    let mut app_config = AppConfig::empty();
    app_config.set("openapi.title", ConfigValue::List(vec![]));
    assert!(DocumentBuilder::from_config(&app_config).is_err());
}
