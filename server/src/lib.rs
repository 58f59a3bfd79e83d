//! HTTP actions for the editor plugins.
//!
//! Editors load their config through `GET /actions/<plugin>/config/<file>`.
//! The file is read from `<config_root>/<plugin>/` and served as JavaScript;
//! TinyMCE `.json` configs are wrapped as `tinymce.config = ...` first.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use rte_plugin::{EditorKind, PluginDescriptor};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Content type of every served config.
pub const JAVASCRIPT_CONTENT_TYPE: &str = "application/javascript";

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Host config directory holding the `ckeditor/` and `tinymce/` subdirectories.
    pub config_root: PathBuf,
    /// Installed plugins.
    pub plugins: Vec<PluginDescriptor>,
}

impl ServerState {
    /// State with both editor plugins installed.
    pub fn new(config_root: impl Into<PathBuf>) -> Self {
        Self {
            config_root: config_root.into(),
            plugins: EditorKind::ALL
                .into_iter()
                .map(PluginDescriptor::for_editor)
                .collect(),
        }
    }

    fn plugin(&self, handle: &str) -> Option<&PluginDescriptor> {
        self.plugins.iter().find(|p| p.editor.handle() == handle)
    }
}

/// Errors a request can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    #[error("invalid config file name: {0:?}")]
    InvalidFileName(String),

    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnknownPlugin(_) | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidFileName(_) => StatusCode::BAD_REQUEST,
            ApiError::Io(e) => {
                error!("Config read failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

async fn config_handler(
    State(state): State<Arc<ServerState>>,
    Path((plugin, path)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let descriptor = state
        .plugin(&plugin)
        .ok_or_else(|| ApiError::UnknownPlugin(plugin.clone()))?;
    let editor = descriptor.editor;

    let file_name = config_file_name(&path)?;
    let file_path = state.config_root.join(editor.config_dir()).join(file_name);

    let contents = match tokio::fs::read_to_string(&file_path).await {
        Ok(contents) => contents,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory) => {
            warn!("Config file {:?} not found for {}", file_path, editor);
            return Err(ApiError::NotFound(file_name.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    debug!("Serving {} config {}", editor, file_name);
    let body = editor.config_script(file_name, &contents);
    Ok(([(header::CONTENT_TYPE, JAVASCRIPT_CONTENT_TYPE)], body).into_response())
}

async fn plugins_handler(State(state): State<Arc<ServerState>>) -> Json<Vec<PluginDescriptor>> {
    Json(state.plugins.clone())
}

/// Last segment of the requested path, rejecting names that would leave the
/// config directory.
fn config_file_name(path: &str) -> Result<&str, ApiError> {
    let name = path.rsplit('/').next().unwrap_or_default();
    if name.is_empty() || name == "." || name == ".." || name.contains('\\') {
        return Err(ApiError::InvalidFileName(name.to_string()));
    }
    Ok(name)
}

/// Build the HTTP router with the given state.
pub fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/actions/{plugin}/config/{*path}", get(config_handler))
        .route("/api/v1/plugins", get(plugins_handler))
        .with_state(state)
}
