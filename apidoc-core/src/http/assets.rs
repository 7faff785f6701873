use std::collections::BTreeMap;

use bytes::Bytes;

use super::{IntoResponse, Response, CONTENT_TYPE};

/// A single in-memory file served by a documentation UI.
#[derive(Debug, Clone)]
pub struct StaticAsset {
    content_type: String,
    body: Bytes,
}

impl StaticAsset {
    pub fn new(content_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn to_response(&self) -> Response {
        (
            [(CONTENT_TYPE, self.content_type.clone())],
            self.body.clone(),
        )
            .into_response()
    }
}

/// A set of files keyed by their path relative to a mount point.
///
/// Adapters mount these under a path prefix (`app.use(path, files)` in
/// middleware terms): the file `index.css` mounted at `/docs` answers
/// `GET /docs/index.css`.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    files: BTreeMap<String, StaticAsset>,
}

impl StaticAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file. Leading slashes in `name` are ignored.
    pub fn insert(&mut self, name: &str, asset: StaticAsset) {
        self.files
            .insert(name.trim_start_matches('/').to_string(), asset);
    }

    pub fn with(mut self, name: &str, content_type: &str, body: impl Into<Bytes>) -> Self {
        self.insert(name, StaticAsset::new(content_type, body));
        self
    }

    pub fn get(&self, name: &str) -> Option<&StaticAsset> {
        self.files.get(name.trim_start_matches('/'))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StaticAsset)> {
        self.files.iter().map(|(name, asset)| (name.as_str(), asset))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
