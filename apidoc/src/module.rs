use std::sync::{Arc, OnceLock};

use apidoc_core::http::{
    Html, IntoResponse, Json, RouteHandler, StaticAssets, StatusCode, APPLICATION_JSON,
    CONTENT_TYPE, TEXT_HTML,
};
use apidoc_core::{
    load_package, plugin_fn, validate_path, AdapterKind, HostApplication, HttpAdapter,
    MissingPackageError, ScopedPlugin, SetupError,
};
use apidoc_openapi::{
    create_document, DocumentConfig, OpenApiDocument, RouteScanner, ScanError, ScanOptions,
    Scanner, SwaggerCustomOptions,
};

/// Entry point for documenting an application.
///
/// [`create_document`](Self::create_document) scans the application into an
/// OpenAPI document; [`setup`](Self::setup) serves that document and the
/// Swagger UI under a mount path, using whatever registration style the
/// application's HTTP adapter supports.
pub struct SwaggerModule;

impl SwaggerModule {
    /// Scan `app` with the default [`RouteScanner`] and merge the result over `config`.
    pub fn create_document(
        app: &dyn HostApplication,
        config: DocumentConfig,
        options: &ScanOptions,
    ) -> Result<OpenApiDocument, ScanError> {
        Self::create_document_with(&RouteScanner::new(), app, config, options)
    }

    /// Like [`create_document`](Self::create_document) with a custom scanner.
    pub fn create_document_with<S>(
        scanner: &S,
        app: &dyn HostApplication,
        config: DocumentConfig,
        options: &ScanOptions,
    ) -> Result<OpenApiDocument, S::Error>
    where
        S: Scanner + ?Sized,
    {
        create_document(scanner, app, config, options)
    }

    /// Serve `document` and the Swagger UI at `path`.
    ///
    /// Express-style and azure-style adapters get `GET <path>` (HTML) and
    /// `GET <path>-json` (the document), with the UI files mounted below
    /// `path`. Fastify-style adapters get the scoped Swagger plugin with
    /// `path` as its route prefix. Other adapter types are treated as
    /// express-style.
    pub fn setup(
        path: &str,
        app: &mut dyn HostApplication,
        document: &OpenApiDocument,
        options: Option<&SwaggerCustomOptions>,
    ) -> Result<(), SetupError> {
        let adapter = app.http_adapter().ok_or(SetupError::MissingAdapter)?;
        match adapter.kind() {
            AdapterKind::Fastify => Self::setup_fastify(path, adapter, document),
            AdapterKind::AzureHttp => Self::setup_azure(path, adapter, document, options),
            AdapterKind::Express => Self::setup_express(path, adapter, document, options),
            AdapterKind::Unknown(kind) => {
                tracing::warn!(
                    adapter = %kind,
                    "Unrecognized HTTP adapter type, falling back to express-style setup"
                );
                Self::setup_express(path, adapter, document, options)
            }
        }
    }

    fn setup_express(
        path: &str,
        adapter: &mut dyn HttpAdapter,
        document: &OpenApiDocument,
        options: Option<&SwaggerCustomOptions>,
    ) -> Result<(), SetupError> {
        let path = validate_path(path)?;
        let ui = load_swagger_ui()?;
        let options = options.cloned().unwrap_or_default();

        let html: Arc<str> = ui.generate_html(document, &options)?.into();
        adapter.mount(&path, ui.serve_files(document, &options)?);

        let document = Arc::new(document.clone());
        adapter.get(
            &path,
            RouteHandler::respond(move |_| Html(html.to_string()).into_response()),
        );
        adapter.get(
            &format!("{path}-json"),
            RouteHandler::respond(move |_| Json(&*document).into_response()),
        );

        tracing::info!(path = %path, "Swagger UI mounted");
        Ok(())
    }

    fn setup_azure(
        path: &str,
        adapter: &mut dyn HttpAdapter,
        document: &OpenApiDocument,
        options: Option<&SwaggerCustomOptions>,
    ) -> Result<(), SetupError> {
        let path = validate_path(path)?;
        let ui = load_swagger_ui()?;
        let options = options.cloned().unwrap_or_default();

        let html: Arc<str> = ui.generate_html(document, &options)?.into();
        let json: Arc<[u8]> = serde_json::to_vec(document)?.into();
        adapter.mount(&path, ui.serve_files(document, &options)?);

        adapter.get(
            &path,
            RouteHandler::write(move |_, res| {
                res.write_head(StatusCode::OK, [(CONTENT_TYPE, TEXT_HTML)]);
                res.end(html.as_bytes());
            }),
        );
        adapter.get(
            &format!("{path}-json"),
            RouteHandler::write(move |_, res| {
                res.write_head(StatusCode::OK, [(CONTENT_TYPE, APPLICATION_JSON)]);
                res.end(&json[..]);
            }),
        );

        tracing::info!(path = %path, "Swagger UI mounted");
        Ok(())
    }

    fn setup_fastify(
        path: &str,
        adapter: &mut dyn HttpAdapter,
        document: &OpenApiDocument,
    ) -> Result<(), SetupError> {
        let plugin = load_swagger_plugin()?;
        let document = Arc::new(document.clone());
        let route_prefix = path.to_string();

        // The outer scope keeps the plugin's decorations away from siblings.
        adapter.register(plugin_fn("swagger-scope", move |scope| {
            scope.register(plugin(document, route_prefix))
        }))?;

        tracing::info!(prefix = %path, "Swagger plugin registered");
        Ok(())
    }
}

// ── Optional packages ───────────────────────────────────────────────────────

/// What express- and azure-style setup need from a UI renderer.
trait UiRenderer: Send + Sync {
    fn generate_html(
        &self,
        document: &OpenApiDocument,
        options: &SwaggerCustomOptions,
    ) -> Result<String, serde_json::Error>;

    fn serve_files(
        &self,
        document: &OpenApiDocument,
        options: &SwaggerCustomOptions,
    ) -> Result<StaticAssets, serde_json::Error>;
}

#[cfg(feature = "swagger-ui")]
impl UiRenderer for apidoc_swagger_ui::SwaggerUi {
    fn generate_html(
        &self,
        document: &OpenApiDocument,
        options: &SwaggerCustomOptions,
    ) -> Result<String, serde_json::Error> {
        apidoc_swagger_ui::SwaggerUi::generate_html(self, document, options)
    }

    fn serve_files(
        &self,
        document: &OpenApiDocument,
        options: &SwaggerCustomOptions,
    ) -> Result<StaticAssets, serde_json::Error> {
        apidoc_swagger_ui::SwaggerUi::serve_files(self, document, options)
    }
}

/// Builds the scoped Swagger plugin from a document and a raw route prefix.
type PluginFactory = fn(Arc<OpenApiDocument>, String) -> Box<dyn ScopedPlugin>;

static SWAGGER_UI: OnceLock<Option<Box<dyn UiRenderer>>> = OnceLock::new();
static SWAGGER_PLUGIN: OnceLock<Option<PluginFactory>> = OnceLock::new();

fn load_swagger_ui() -> Result<&'static dyn UiRenderer, MissingPackageError> {
    let renderer = load_package(&SWAGGER_UI, "swagger-ui", "SwaggerModule", || {
        #[cfg(feature = "swagger-ui")]
        let renderer: Option<Box<dyn UiRenderer>> =
            Some(Box::new(apidoc_swagger_ui::SwaggerUi::new()));
        #[cfg(not(feature = "swagger-ui"))]
        let renderer: Option<Box<dyn UiRenderer>> = None;
        renderer
    })?;
    Ok(&**renderer)
}

fn load_swagger_plugin() -> Result<&'static PluginFactory, MissingPackageError> {
    load_package(&SWAGGER_PLUGIN, "swagger-plugin", "SwaggerModule", || {
        #[cfg(feature = "swagger-plugin")]
        let factory: Option<PluginFactory> = Some(swagger_plugin);
        #[cfg(not(feature = "swagger-plugin"))]
        let factory: Option<PluginFactory> = None;
        factory
    })
}

#[cfg(feature = "swagger-plugin")]
fn swagger_plugin(document: Arc<OpenApiDocument>, route_prefix: String) -> Box<dyn ScopedPlugin> {
    use apidoc_swagger_ui::{Mode, Specification, SwaggerPlugin, SwaggerPluginOptions};

    Box::new(SwaggerPlugin::new(SwaggerPluginOptions {
        swagger: document.clone(),
        expose_route: true,
        route_prefix,
        mode: Mode::Static,
        specification: Some(Specification { document }),
        ui: SwaggerCustomOptions::default(),
    }))
}
