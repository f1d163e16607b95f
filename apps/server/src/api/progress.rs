use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use hacks_core::errors::ValidationError;
use hacks_core::goals::Goal;
use hacks_core::progress::{
    aggregate_progress, donut_segments, monthly_breakdown, percent_complete, remaining,
    year_breakdown, MonthlyProgress,
};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

/// Global header indicator: mean of the per-goal clamped percentages.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AggregateResponse {
    total_percentage: f64,
}

async fn overall(State(state): State<Arc<AppState>>) -> ApiResult<Json<AggregateResponse>> {
    let goals = state.goal_service.get_goals()?;
    Ok(Json(AggregateResponse {
        total_percentage: aggregate_progress(&goals),
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GoalProgressResponse {
    percentage: u8,
    remaining: f64,
    /// (filled, empty) ring segments; a finished goal is a single full
    /// segment.
    donut: [f64; 2],
}

fn find_goal(state: &AppState, id: &str) -> ApiResult<Goal> {
    state
        .goal_service
        .get_goal(id)?
        .ok_or_else(|| ApiError::not_found(format!("goal {}", id)))
}

async fn goal_progress(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<GoalProgressResponse>> {
    let goal = find_goal(&state, &id)?;
    let (filled, empty) = donut_segments(goal.current, goal.target);
    Ok(Json(GoalProgressResponse {
        percentage: percent_complete(&goal),
        remaining: remaining(&goal),
        donut: [filled, empty],
    }))
}

async fn months(
    Path((id, year)): Path<(String, i32)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<MonthlyProgress>>> {
    let goal = find_goal(&state, &id)?;
    Ok(Json(year_breakdown(&goal, year)))
}

async fn month(
    Path((id, year, month)): Path<(String, i32, u32)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MonthlyProgress>> {
    if !(1..=12).contains(&month) {
        return Err(hacks_core::Error::from(ValidationError::InvalidInput(format!(
            "month must be 1-12, got {}",
            month
        )))
        .into());
    }
    let goal = find_goal(&state, &id)?;
    Ok(Json(monthly_breakdown(&goal, year, month)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/progress", get(overall))
        .route("/goals/{id}/progress", get(goal_progress))
        .route("/goals/{id}/months/{year}", get(months))
        .route("/goals/{id}/months/{year}/{month}", get(month))
}
