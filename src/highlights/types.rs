use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{serialization::HighlightMap, GameContext, ImpactEvent, MomentumInfo, StreakInfo};

/// Request payload for tagging one game
#[derive(Debug, Clone, Deserialize)]
pub struct TagGameRequest {
    pub game_id: String,
    pub logs: Vec<Value>,
}

/// Request payload for tagging several independent games
#[derive(Debug, Deserialize)]
pub struct BatchTagRequest {
    pub games: Vec<TagGameRequest>,
}

/// Highlights for one game, plus the highest-impact few
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameHighlights {
    pub game_id: String,
    pub highlights: Vec<HighlightMap>,
    pub top_plays: Vec<HighlightMap>,
}

/// Outcome for one game in a batch. A failed game carries `error` and no
/// highlight lists.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchGameResult {
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<HighlightMap>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_plays: Option<Vec<HighlightMap>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchTagResponse {
    pub results: Vec<BatchGameResult>,
}

#[derive(Debug, Deserialize)]
pub struct ImpactScoreRequest {
    pub event: ImpactEvent,
    #[serde(default)]
    pub game_context: GameContext,
    #[serde(default)]
    pub streak_info: Option<StreakInfo>,
    #[serde(default)]
    pub momentum_info: Option<MomentumInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImpactScoreResponse {
    pub impact_score: u8,
}
