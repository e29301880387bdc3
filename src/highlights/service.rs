use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    engine::{top_plays, DEFAULT_TOP_PLAYS},
    serialization::highlights_to_maps,
    types::{GameHighlights, ImpactScoreRequest, TagGameRequest},
    HighlightEngine, HighlightError,
};

/// Async front for the engine. Each game runs on the blocking pool so large
/// logs do not stall the runtime; games share the engine but no state.
#[derive(Clone)]
pub struct HighlightService {
    engine: Arc<HighlightEngine>,
    top_play_limit: usize,
}

impl HighlightService {
    pub fn new(engine: Arc<HighlightEngine>) -> Self {
        Self {
            engine,
            top_play_limit: DEFAULT_TOP_PLAYS,
        }
    }

    pub fn with_top_play_limit(mut self, limit: usize) -> Self {
        self.top_play_limit = limit;
        self
    }

    #[instrument(
        skip(self, request),
        fields(game_id = %request.game_id, entries = request.logs.len())
    )]
    pub async fn tag_game(
        &self,
        request: TagGameRequest,
    ) -> Result<GameHighlights, HighlightError> {
        let engine = Arc::clone(&self.engine);
        let limit = self.top_play_limit;

        let response = tokio::task::spawn_blocking(move || build_response(&engine, request, limit))
            .await
            .map_err(|err| HighlightError::Worker(err.to_string()))??;

        info!(highlights = response.highlights.len(), "Game highlights ready");
        Ok(response)
    }

    /// Tags independent games concurrently. Results come back in request
    /// order, each paired with its game id; one failing game does not
    /// affect the others.
    #[instrument(skip(self, requests), fields(games = requests.len()))]
    pub async fn tag_games(
        &self,
        requests: Vec<TagGameRequest>,
    ) -> Vec<(String, Result<GameHighlights, HighlightError>)> {
        let tasks = requests.into_iter().map(|request| {
            let game_id = request.game_id.clone();
            async move { (game_id, self.tag_game(request).await) }
        });

        let results = join_all(tasks).await;

        for (game_id, result) in &results {
            if let Err(err) = result {
                warn!(%game_id, %err, "Game failed to tag");
            }
        }

        results
    }

    pub fn impact_score(&self, request: &ImpactScoreRequest) -> u8 {
        self.engine.compute_impact_score(
            &request.event,
            &request.game_context,
            request.streak_info.as_ref(),
            request.momentum_info.as_ref(),
        )
    }
}

fn build_response(
    engine: &HighlightEngine,
    request: TagGameRequest,
    limit: usize,
) -> Result<GameHighlights, HighlightError> {
    let highlights = engine.tag_game(&request.logs)?;
    let best = top_plays(&highlights, limit);

    Ok(GameHighlights {
        game_id: request.game_id,
        highlights: highlights_to_maps(&highlights)?,
        top_plays: highlights_to_maps(&best)?,
    })
}
