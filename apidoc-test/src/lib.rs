//! In-process HTTP testing for documentation routes.
//!
//! ```ignore
//! let app = TestApp::from(adapter);
//! app.get("/api-docs-json")
//!     .send()
//!     .await
//!     .assert_ok()
//!     .assert_json_path(r#"paths["/cats"].get.operationId"#, "CatsController_find_all");
//! ```

mod app;

pub use app::{resolve_path, tokenize_path, PathToken, TestApp, TestRequest, TestResponse};
