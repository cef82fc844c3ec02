#![allow(dead_code)]

use portal::app::{AppState, build_router};
use portal::chrome::ChromeVersion;
use portal::config::SiteConfig;
use portal::store::memory::InMemoryStore;
use std::sync::Arc;

pub const SEED: &str = r#"
modules:
  - module_id: 100
    short_name: technology1
    name: Technology Services
  - module_id: 132
    short_name: compliance
    name: Compliance
    sidebar_html: '<ul class="main_nav"><li><a href="forms.php">Compliance Forms</a></li></ul>'
  - module_id: 190
    short_name: hr
    name: Human Resources
users:
  - user_id: admin1
    class: 0
    module: 100
  - user_id: jdoe
    class: 2
    module: 132
  - user_id: coach
    class: 3
    module: 190
    secondary_modules: "132"
  - user_id: viewer
    class: 4
    module: 132
"#;

pub type TestApp = axum::routing::RouterIntoService<axum::body::Body, ()>;

pub fn app(chrome_version: ChromeVersion) -> TestApp {
    let store = InMemoryStore::from_seed_yaml(SEED).expect("seed");
    let state = AppState {
        site: SiteConfig::default(),
        chrome_version,
        identity_header: "x-remote-user".to_string(),
        store: Arc::new(store),
    };
    build_router(state).into_service()
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

pub async fn read_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}
