use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use hacks_core::goals::{parse_amount, Goal, GoalDraft};

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals()?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<GoalDraft>,
) -> ApiResult<Json<Goal>> {
    let goal = state.goal_service.create_goal(draft).await?;
    Ok(Json(goal))
}

async fn increment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.increment(&id).await?;
    Ok(Json(goals))
}

async fn decrement(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.decrement(&id).await?;
    Ok(Json(goals))
}

/// Amount for the financial entry form: either a JSON number or
/// locale-formatted text with a comma decimal separator ("62.453,36").
#[derive(Deserialize)]
#[serde(untagged)]
enum Amount {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
struct AddValueRequest {
    amount: Amount,
}

async fn add_value(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddValueRequest>,
) -> ApiResult<Json<Vec<Goal>>> {
    let amount = match request.amount {
        Amount::Number(value) => value,
        Amount::Text(text) => parse_amount(&text)?,
    };
    let goals = state.goal_service.add_value(&id, amount).await?;
    Ok(Json(goals))
}

#[derive(Deserialize)]
struct ReorderRequest {
    from: usize,
    to: usize,
}

async fn reorder(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReorderRequest>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.reorder(request.from, request.to).await?;
    Ok(Json(goals))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/reorder", post(reorder))
        .route("/goals/{id}/increment", post(increment))
        .route("/goals/{id}/decrement", post(decrement))
        .route("/goals/{id}/value", post(add_value))
}
