use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::types::{
    BatchGameResult, BatchTagRequest, BatchTagResponse, GameHighlights, ImpactScoreRequest,
    ImpactScoreResponse, TagGameRequest,
};
use crate::shared::{AppError, AppState};

/// HTTP handler for tagging one game log
///
/// POST /highlights/tag
/// Returns every highlight in log order plus the top plays
#[instrument(name = "tag_game", skip(state, request), fields(game_id = %request.game_id))]
pub async fn tag_game(
    State(state): State<AppState>,
    Json(request): Json<TagGameRequest>,
) -> Result<Json<GameHighlights>, AppError> {
    info!(entries = request.logs.len(), "Tagging game log");

    let response = state.highlight_service.tag_game(request).await?;

    Ok(Json(response))
}

/// HTTP handler for tagging several games at once
///
/// POST /highlights/batch
/// Always 200; failed games carry their own error message
#[instrument(name = "tag_games", skip(state, request), fields(games = request.games.len()))]
pub async fn tag_games(
    State(state): State<AppState>,
    Json(request): Json<BatchTagRequest>,
) -> Json<BatchTagResponse> {
    let results = state
        .highlight_service
        .tag_games(request.games)
        .await
        .into_iter()
        .map(|(game_id, result)| match result {
            Ok(game) => BatchGameResult {
                game_id,
                highlights: Some(game.highlights),
                top_plays: Some(game.top_plays),
                error: None,
            },
            Err(err) => BatchGameResult {
                game_id,
                highlights: None,
                top_plays: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    Json(BatchTagResponse { results })
}

/// HTTP handler for scoring a single play
///
/// POST /highlights/impact-score
#[instrument(name = "compute_impact", skip(state, request))]
pub async fn compute_impact(
    State(state): State<AppState>,
    Json(request): Json<ImpactScoreRequest>,
) -> Json<ImpactScoreResponse> {
    let impact_score = state.highlight_service.impact_score(&request);
    Json(ImpactScoreResponse { impact_score })
}
