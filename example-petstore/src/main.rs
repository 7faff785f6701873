use apidoc::prelude::*;
use apidoc::{default_trace, init_tracing};

mod pets;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::load("dev").unwrap_or_else(|e| {
        tracing::warn!(error = %e, "no configuration loaded, using defaults");
        AppConfig::empty()
    });

    let mut app = Application::new(ExpressAdapter::from_router(pets::router(pets::PetStore::seeded())))
        .set_global_prefix("api")
        .with_module(pets::module());

    let document_config = DocumentBuilder::from_config(&config)?
        .add_bearer_auth()
        .build();
    let document = SwaggerModule::create_document(&app, document_config, &ScanOptions::default())?;

    let docs_path = config.get_or("swagger.path", "api-docs".to_string());
    let options = SwaggerCustomOptions::from_config(&config)?;
    SwaggerModule::setup(&docs_path, &mut app, &document, Some(&options))?;

    let router = app
        .into_adapter()
        .ok_or("application has no HTTP adapter")?
        .into_router()
        .layer(default_trace());

    let port = u16::try_from(config.get_or("server.port", 3000_i64))?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, docs = %docs_path, "Petstore listening");
    axum::serve(listener, router).await?;
    Ok(())
}
