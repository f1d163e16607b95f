use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InsightsResponse {
    message: String,
}

/// Requests a coaching summary of the whole goal list. Always answers with
/// a message; provider failures surface as the coach's fixed error text.
async fn insights(State(state): State<Arc<AppState>>) -> ApiResult<Json<InsightsResponse>> {
    let goals = state.goal_service.get_goals()?;
    let message = state.coach_service.progress_insights(&goals).await;
    Ok(Json(InsightsResponse { message }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/coach/insights", post(insights))
}
