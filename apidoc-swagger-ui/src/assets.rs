use apidoc_core::http::{StaticAsset, StaticAssets};
use rust_embed::RustEmbed;

/// Files shipped next to the Swagger UI page.
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Embedded;

/// Every embedded file, typed by its extension.
pub(crate) fn embedded_assets() -> StaticAssets {
    let mut assets = StaticAssets::new();
    for name in Embedded::iter() {
        if let Some(file) = Embedded::get(&name) {
            let mime = mime_guess::from_path(name.as_ref()).first_or_octet_stream();
            assets.insert(&name, StaticAsset::new(mime.essence_str(), file.data.into_owned()));
        }
    }
    assets
}

/// The contents of an embedded text file, empty when absent.
pub(crate) fn embedded_text(name: &str) -> String {
    Embedded::get(name)
        .map(|file| String::from_utf8_lossy(&file.data).into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_stylesheet_and_redirect_page() {
        let assets = embedded_assets();
        assert_eq!(assets.get("index.css").unwrap().content_type(), "text/css");
        assert_eq!(
            assets.get("oauth2-redirect.html").unwrap().content_type(),
            "text/html"
        );
    }

    #[test]
    fn missing_text_is_empty() {
        assert!(embedded_text("nope.txt").is_empty());
        assert!(embedded_text("index.css").contains("box-sizing"));
    }
}
