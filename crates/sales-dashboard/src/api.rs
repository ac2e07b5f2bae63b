// File: crates/sales-dashboard/src/api.rs
// Summary: HTTP handlers for the dashboard page, chart endpoints, and the selection callback.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use sales_core::{ChartSpec, ChartSurface, DashboardError, RegionSelector, SelectionEvent, SelectorError};
use serde::{Deserialize, Serialize};

use crate::layout;
use crate::state::AppState;
use crate::surface::SvgSurface;

/// `?region=` on the chart endpoints; missing means `all`.
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    #[serde(default)]
    pub region: Option<String>,
}

impl ChartQuery {
    pub fn selector(&self) -> Result<RegionSelector, SelectorError> {
        match self.region.as_deref() {
            None | Some("") => Ok(RegionSelector::All),
            Some(raw) => raw.parse(),
        }
    }
}

/// Reply to a selection event: the node to replace and its new content.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub target: String,
    pub selector: RegionSelector,
    pub figure: ChartSpec,
    pub svg: String,
}

/// Serve the dashboard page.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(layout::render_page(&state))
}

pub async fn health() -> &'static str {
    "ok"
}

/// ChartSpec JSON for `?region=`.
pub async fn chart_json(State(state): State<Arc<AppState>>, Query(query): Query<ChartQuery>) -> Response {
    match query.selector() {
        Ok(selector) => Json(state.controller.on_selection_change(selector)).into_response(),
        Err(error) => bad_request(error),
    }
}

/// Rendered SVG for `?region=`.
pub async fn chart_svg(State(state): State<Arc<AppState>>, Query(query): Query<ChartQuery>) -> Response {
    let selector = match query.selector() {
        Ok(selector) => selector,
        Err(error) => return bad_request(error),
    };
    let spec = state.controller.on_selection_change(selector);
    let svg = sales_render::render_svg(&spec, &state.render);
    ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response()
}

/// Rendered PNG for `?region=`.
#[cfg(feature = "raster")]
pub async fn chart_png(State(state): State<Arc<AppState>>, Query(query): Query<ChartQuery>) -> Response {
    let selector = match query.selector() {
        Ok(selector) => selector,
        Err(error) => return bad_request(error),
    };
    let spec = state.controller.on_selection_change(selector);
    match sales_render::render_png_bytes(&spec, &state.render) {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(error) => {
            tracing::error!(%error, %selector, "png render failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": error.to_string()})),
            )
                .into_response()
        }
    }
}

/// Selection callback: the page posts every radio change here.
pub async fn selection(State(state): State<Arc<AppState>>, Json(event): Json<SelectionEvent>) -> Response {
    let mut surface = SvgSurface::new(state.render);
    let target = surface.chart_id().to_string();
    match state.controller.handle_event(&event, &mut surface) {
        Ok(selector) => {
            let Some(figure) = surface.spec else {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": "chart was not produced"})),
                )
                    .into_response();
            };
            tracing::info!(%selector, points = figure.points.len(), "chart updated");
            Json(UpdateResponse {
                target,
                selector,
                figure,
                svg: surface.markup,
            })
            .into_response()
        }
        Err(error) => {
            tracing::warn!(%error, control = %event.control_id, value = %event.value, "rejected selection");
            bad_request(error)
        }
    }
}

fn bad_request(error: impl Into<DashboardError>) -> Response {
    let error: DashboardError = error.into();
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": error.to_string()})),
    )
        .into_response()
}
