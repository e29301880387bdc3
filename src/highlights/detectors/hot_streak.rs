use tracing::debug;

use crate::highlights::{
    detector_order, DetectionContext, GameTrackingState, HighlightDetector, HighlightTag,
    PlayerAction,
};

/// Scoring actions needed inside the window for a streak.
pub const MIN_STREAK_LENGTH: usize = 3;

/// Tracks each player's scoring actions inside a sliding clock window.
///
/// The window uses the within-quarter clock only, so scores from different
/// quarters with similar clock readings count as close together.
pub struct HotStreakDetector;

impl Default for HotStreakDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl HotStreakDetector {
    pub fn new() -> Self {
        Self
    }
}

impl HighlightDetector for HotStreakDetector {
    fn detect(
        &self,
        action: &PlayerAction,
        state: &mut GameTrackingState,
        context: &DetectionContext,
    ) -> Option<HighlightTag> {
        if !action.is_scoring() {
            return None;
        }

        let window = context.config.hot_streak_window_seconds;
        let streak = state
            .player_shot_streaks
            .entry(action.player_id.clone())
            .or_default();
        streak.push(action.clone());
        streak.retain(|shot| action.clock.distance(&shot.clock) <= window);

        if streak.len() < MIN_STREAK_LENGTH {
            return None;
        }

        debug!(
            player_id = %action.player_id,
            streak_len = streak.len(),
            "Hot streak detected"
        );
        Some(context.factory.hot_streak(action, streak, window))
    }

    fn order(&self) -> u32 {
        detector_order::HOT_STREAK
    }

    fn name(&self) -> &'static str {
        "HotStreakDetector"
    }
}
