use tracing::debug;

use crate::highlights::{
    detector_order, DetectionContext, GameTrackingState, HighlightDetector, HighlightTag,
    PlayerAction,
};

/// Largest absolute score differential that still counts as a close game.
pub const CLOSE_GAME_MARGIN: u32 = 5;

/// Scoring play late in the quarter with the game still close.
pub fn is_clutch(seconds_remaining: u32, score_diff: u32, points: u32, threshold: u32) -> bool {
    seconds_remaining <= threshold && score_diff <= CLOSE_GAME_MARGIN && points > 0
}

pub struct ClutchDetector;

impl Default for ClutchDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ClutchDetector {
    pub fn new() -> Self {
        Self
    }
}

impl HighlightDetector for ClutchDetector {
    fn detect(
        &self,
        action: &PlayerAction,
        _state: &mut GameTrackingState,
        context: &DetectionContext,
    ) -> Option<HighlightTag> {
        let clutch = is_clutch(
            action.seconds_remaining(),
            action.score_diff,
            action.points,
            context.config.clutch_threshold_seconds,
        );
        if !clutch {
            return None;
        }

        debug!(
            player_id = %action.player_id,
            points = action.points,
            game_time = %action.game_time,
            "Clutch play detected"
        );
        Some(context.factory.clutch_play(action))
    }

    fn order(&self) -> u32 {
        detector_order::CLUTCH
    }

    fn name(&self) -> &'static str {
        "ClutchDetector"
    }
}
