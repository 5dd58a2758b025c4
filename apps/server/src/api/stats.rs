use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::{error::ApiResult, main_lib::AppState};

/// Single query endpoint, dispatched on `q`.
///
/// `more` and `pitcher` read the player name from `n` and the team code
/// from `t`. Unknown or missing `q` echoes the parsed query back.
async fn query(
    State(state): State<Arc<AppState>>,
    params: Result<Query<BTreeMap<String, String>>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = params?;
    let name = params.get("n").map(String::as_str);
    let team = params.get("t").map(String::as_str);
    let stats = &state.stats;

    let response = match params.get("q").map(String::as_str) {
        Some("more") => Json(stats.batter_details(name, team).await?).into_response(),
        Some("pitcher") => Json(stats.pitcher_details(name, team).await?).into_response(),
        Some("top") => Json(stats.top_batters().await?).into_response(),
        Some("lineups") => {
            let lineups = stats.lineups().await?;
            Json(lineups.as_ref()).into_response()
        }
        Some("batterVsPitcher") => {
            let matchups = stats.batter_vs_pitcher().await?;
            Json(matchups.as_ref()).into_response()
        }
        _ => Json(json!({ "query": params })).into_response(),
    };
    Ok(response)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(query))
}
