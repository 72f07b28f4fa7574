//! HTTP surface: every `GET /` renders the page afresh

use crate::config::SiteConfig;
use crate::core::engine::PageEngine;
use crate::core::renderer::RenderOptions;
use crate::core::{AnimationSource, AssetSource};
use crate::utils::error::{PageError, Result};
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

/// Shared, read-only state handed to every request
pub struct AppState<A: AssetSource, F: AnimationSource> {
    engine: Arc<PageEngine<A, F>>,
    content: Arc<SiteConfig>,
}

impl<A: AssetSource, F: AnimationSource> Clone for AppState<A, F> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            content: Arc::clone(&self.content),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub tab: Option<usize>,
}

pub fn build_router<A, F>(engine: Arc<PageEngine<A, F>>, content: Arc<SiteConfig>) -> Router
where
    A: AssetSource + 'static,
    F: AnimationSource + 'static,
{
    let state = AppState { engine, content };

    Router::new()
        .route("/", get(index::<A, F>))
        .route("/health", get(health_check))
        .with_state(state)
}

async fn index<A, F>(
    State(state): State<AppState<A, F>>,
    Query(query): Query<PageQuery>,
) -> Html<String>
where
    A: AssetSource + 'static,
    F: AnimationSource + 'static,
{
    let options = RenderOptions {
        selected_tab: query.tab.unwrap_or(0),
        today: None,
    };
    info!(tab = options.selected_tab, "Rendering page for request");
    let rendered = state.engine.render(state.content.as_ref(), &options).await;
    Html(rendered.html)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, router: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| PageError::ServerError {
            message: format!("failed to bind {}: {}", addr, e),
        })?;
    info!(addr = %addr, "Serving portfolio page");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
        })
        .await
        .map_err(|e| PageError::ServerError {
            message: e.to_string(),
        })?;

    info!("Server stopped");
    Ok(())
}
