use crate::domain::Category;
use crate::error::{FootballError, Result};
use crate::services::FixtureService;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesQuery {
    pub current_tab: String,
}

pub fn router(service: Arc<FixtureService>) -> Router {
    Router::new()
        .route("/api/matches", get(get_matches))
        .with_state(service)
}

pub async fn serve(addr: SocketAddr, service: Arc<FixtureService>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Query endpoint listening on {}", addr);
    axum::serve(listener, router(service)).await?;
    Ok(())
}

/// Poll endpoint for the frontend: sorted categories for one tab. A bad tab
/// is the caller's fault; anything upstream maps to a gateway failure. Total
/// extraction drift surfaces as an empty array, not an error.
async fn get_matches(
    State(service): State<Arc<FixtureService>>,
    Query(query): Query<MatchesQuery>,
) -> std::result::Result<Json<Vec<Category>>, (StatusCode, String)> {
    match service.matches_for_tab(&query.current_tab).await {
        Ok(categories) => Ok(Json(categories)),
        Err(e @ FootballError::InvalidDate(_)) => Err((StatusCode::BAD_REQUEST, e.to_string())),
        Err(e) => Err((StatusCode::BAD_GATEWAY, e.to_string())),
    }
}
