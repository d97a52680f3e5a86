//! Composition root for the Folio contact backend.
//!
//! Owns configuration and wires a [`Storage`] backend into the HTTP router.
//! The store is created once by the binary and shared with every handler
//! through router state.

use std::{path::Path, sync::Arc};

use axum::Router;
use folio_core::store::Storage;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FOLIO_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  5000
}

impl Default for ServerConfig {
  fn default() -> Self {
    ServerConfig {
      host: default_host(),
      port: default_port(),
    }
  }
}

impl ServerConfig {
  /// Layer an optional TOML file under `FOLIO_`-prefixed environment
  /// variables. A missing file is not an error.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    Self::load_with_env(path, env_source())
  }

  /// As [`load`](Self::load), with an explicit environment source.
  fn load_with_env(
    path: &Path,
    env: config::Environment,
  ) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(env)
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

fn env_source() -> config::Environment {
  config::Environment::with_prefix("FOLIO").try_parsing(true)
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application: the JSON API under `/api`, a JSON 404 for
/// everything else, and request tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: Storage + 'static,
{
  Router::new()
    .nest("/api", folio_api::api_router(store))
    .fallback(folio_api::not_found)
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use std::{fs, sync::Arc};

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use folio_store_mem::MemStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  use super::*;

  #[test]
  fn missing_config_file_uses_defaults() {
    let path = std::env::temp_dir().join("folio-does-not-exist.toml");
    let cfg = ServerConfig::load(&path).unwrap();
    assert_eq!(cfg.host, ServerConfig::default().host);
  }

  #[test]
  fn config_file_overrides_defaults() {
    let path = std::env::temp_dir().join(format!("folio-cfg-{}.toml", std::process::id()));
    fs::write(&path, "host = \"0.0.0.0\"\n").unwrap();
    let cfg = ServerConfig::load(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(cfg.host, "0.0.0.0");
  }

  #[test]
  fn environment_overrides_config_file() {
    let path = std::env::temp_dir().join(format!("folio-env-{}.toml", std::process::id()));
    fs::write(&path, "host = \"0.0.0.0\"\nport = 7000\n").unwrap();
    let vars = config::Map::from([("FOLIO_PORT".to_string(), "8081".to_string())]);
    let cfg = ServerConfig::load_with_env(&path, env_source().source(Some(vars)));
    fs::remove_file(&path).ok();
    let cfg = cfg.unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.host, "0.0.0.0");
  }

  #[test]
  fn address_joins_host_and_port() {
    let cfg = ServerConfig { host: "localhost".to_string(), port: 8080 };
    assert_eq!(cfg.address(), "localhost:8080");
  }

  #[tokio::test]
  async fn api_is_mounted_under_prefix() {
    let store = Arc::new(MemStore::new());
    let body = json!({
      "name":    "Jo",
      "email":   "a@b.co",
      "subject": "Hi there",
      "message": "This is a test message.",
    })
    .to_string();
    let req = Request::builder()
      .method("POST")
      .uri("/api/contact")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body))
      .unwrap();
    let resp = app(store.clone()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = Request::builder().uri("/api/contact").body(Body::empty()).unwrap();
    let resp = app(store).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn unknown_route_returns_json_404() {
    let store = Arc::new(MemStore::new());
    let req = Request::builder().uri("/api/nope").body(Body::empty()).unwrap();
    let resp = app(store).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "success": false, "message": "Not found" }));
  }
}
