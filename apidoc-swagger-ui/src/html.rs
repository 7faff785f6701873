use apidoc_core::http::{StaticAsset, StaticAssets};
use apidoc_openapi::{OpenApiDocument, SwaggerCustomOptions};
use serde_json::{json, Map, Value};

use crate::assets::{embedded_assets, embedded_text};

/// Where the Swagger UI bundle and stylesheet are loaded from.
pub const SWAGGER_UI_CDN: &str = "https://unpkg.com/swagger-ui-dist@5";

/// Name of the init script served next to the page.
pub const INIT_SCRIPT: &str = "swagger-ui-init.js";

const DEFAULT_TITLE: &str = "Swagger UI";

const HIDE_EXPLORER_CSS: &str = ".swagger-ui .topbar .download-url-wrapper { display: none }";

const INIT_TEMPLATE: &str = r#"
window.onload = function() {
  var url = window.location.search.match(/url=([^&]+)/);
  if (url && url.length > 1) {
    url = decodeURIComponent(url[1]);
  } else {
    url = window.location.origin;
  }
  var options = __OPTIONS__;
  url = options.swaggerUrl || url;
  var customOptions = options.customOptions;
  var swaggerOptions = {
    spec: options.swaggerDoc,
    url: url,
    dom_id: '#swagger-ui',
    deepLinking: true,
    presets: [
      SwaggerUIBundle.presets.apis,
      SwaggerUIStandalonePreset
    ],
    plugins: [
      SwaggerUIBundle.plugins.DownloadUrl
    ],
    layout: "StandaloneLayout"
  };
  for (var attrname in customOptions) {
    swaggerOptions[attrname] = customOptions[attrname];
  }
  var ui = SwaggerUIBundle(swaggerOptions);
  if (customOptions.oauth) {
    ui.initOAuth(customOptions.oauth);
  }
  if (customOptions.authAction) {
    ui.authActions.authorize(customOptions.authAction);
  }
  window.ui = ui;
};
"#;

/// Renders the Swagger UI page and its supporting files for a document.
///
/// The page is self-contained apart from the UI bundle itself: the init
/// script (with the document inlined) and the stylesheet are embedded in
/// the HTML, so it works whatever URL it is mounted at.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwaggerUi;

impl SwaggerUi {
    pub fn new() -> Self {
        Self
    }

    /// The full HTML page for `document`.
    pub fn generate_html(
        &self,
        document: &OpenApiDocument,
        options: &SwaggerCustomOptions,
    ) -> Result<String, serde_json::Error> {
        let init_script = self.init_script(document, options)?;
        let title = escape_html(options.custom_site_title.as_deref().unwrap_or(DEFAULT_TITLE));

        let favicon = match &options.custom_favicon {
            Some(href) => format!(r#"<link rel="icon" href="{}" />"#, escape_html(href)),
            None => format!(
                "<link rel=\"icon\" type=\"image/png\" href=\"{SWAGGER_UI_CDN}/favicon-32x32.png\" sizes=\"32x32\" />\n  \
                 <link rel=\"icon\" type=\"image/png\" href=\"{SWAGGER_UI_CDN}/favicon-16x16.png\" sizes=\"16x16\" />"
            ),
        };

        let mut styles = embedded_text("index.css");
        if !options.explorer {
            styles.push_str(HIDE_EXPLORER_CSS);
            styles.push('\n');
        }
        if let Some(css) = &options.custom_css {
            styles.push_str(css);
            styles.push('\n');
        }
        let styles = styles.replace("</", "<\\/");

        let css_link = options
            .custom_css_url
            .as_deref()
            .map(|href| format!(r#"<link href="{}" rel="stylesheet">"#, escape_html(href)))
            .unwrap_or_default();
        let js_script = options
            .custom_js
            .as_deref()
            .map(|src| format!(r#"<script src="{}"></script>"#, escape_html(src)))
            .unwrap_or_default();

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <link rel="stylesheet" type="text/css" href="{SWAGGER_UI_CDN}/swagger-ui.css" >
  {favicon}
  <style>
{styles}  </style>
  {css_link}
</head>

<body>

<div id="swagger-ui"></div>

<script src="{SWAGGER_UI_CDN}/swagger-ui-bundle.js"></script>
<script src="{SWAGGER_UI_CDN}/swagger-ui-standalone-preset.js"></script>
<script>
{init_script}
</script>
{js_script}
</body>
</html>
"#
        ))
    }

    /// The files to mount next to the page: the init script, the default
    /// stylesheet and the OAuth2 redirect page.
    pub fn serve_files(
        &self,
        document: &OpenApiDocument,
        options: &SwaggerCustomOptions,
    ) -> Result<StaticAssets, serde_json::Error> {
        let mut assets = embedded_assets();
        assets.insert(
            INIT_SCRIPT,
            StaticAsset::new("application/javascript", self.init_script(document, options)?),
        );
        Ok(assets)
    }

    /// The script that boots `SwaggerUIBundle` with the document inlined.
    ///
    /// When `swagger_url` is set the UI fetches the document from there
    /// instead and nothing is inlined.
    pub fn init_script(
        &self,
        document: &OpenApiDocument,
        options: &SwaggerCustomOptions,
    ) -> Result<String, serde_json::Error> {
        let mut init = Map::new();
        match &options.swagger_url {
            Some(url) => {
                init.insert("swaggerUrl".into(), json!(url));
            }
            None => {
                init.insert("swaggerDoc".into(), serde_json::to_value(document)?);
            }
        }
        init.insert(
            "customOptions".into(),
            Value::Object(options.swagger_options.clone()),
        );

        // The script ends up inside a <script> element.
        let options_json = serde_json::to_string_pretty(&init)?.replace("</", "<\\/");
        Ok(INIT_TEMPLATE.replace("__OPTIONS__", &options_json))
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
