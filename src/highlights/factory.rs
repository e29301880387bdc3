use uuid::Uuid;

use super::{HighlightTag, HighlightType, PlayerAction};

/// Fixed confidence per highlight type. These are constants of the detector
/// design and are not configurable.
pub mod confidence {
    pub const CLUTCH_PLAY: f64 = 0.90;
    pub const HOT_STREAK: f64 = 0.85;
    pub const MOMENTUM_SHIFT: f64 = 0.80;
    pub const IMPACT_PLAY: f64 = 0.75;
}

/// Estimated value of one defensive stop, in points.
pub const DEFENSIVE_STOP_VALUE: u32 = 2;

/// Builds highlight records from the state a detector fired on.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighlightFactory;

impl HighlightFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn clutch_play(&self, action: &PlayerAction) -> HighlightTag {
        self.issue(
            action,
            HighlightType::ClutchPlay,
            format!(
                "Clutch {}-pointer with {} remaining in Q{}",
                action.points, action.game_time, action.quarter
            ),
            action.points,
            confidence::CLUTCH_PLAY,
            format!("{} pt differential", action.score_diff),
            vec![action.clone()],
        )
    }

    pub fn hot_streak(
        &self,
        action: &PlayerAction,
        streak: &[PlayerAction],
        window_seconds: u32,
    ) -> HighlightTag {
        let total_points = streak
            .iter()
            .fold(0u32, |total, shot| total.saturating_add(shot.points));
        self.issue(
            action,
            HighlightType::HotStreak,
            format!(
                "Hot streak! {} points in {} minutes",
                total_points,
                window_seconds / 60
            ),
            total_points,
            confidence::HOT_STREAK,
            format!("{} consecutive scores", streak.len()),
            streak.to_vec(),
        )
    }

    pub fn momentum_shift(&self, action: &PlayerAction, run_points: u32) -> HighlightTag {
        self.issue(
            action,
            HighlightType::MomentumShift,
            format!("{}-0 scoring run!", run_points),
            run_points,
            confidence::MOMENTUM_SHIFT,
            format!("{}-point run", run_points),
            vec![action.clone()],
        )
    }

    pub fn impact_play(&self, action: &PlayerAction, defensive_total: u32) -> HighlightTag {
        self.issue(
            action,
            HighlightType::ImpactPlay,
            format!(
                "Defensive dominance! {} defensive stops",
                defensive_total
            ),
            defensive_total.saturating_mul(DEFENSIVE_STOP_VALUE),
            confidence::IMPACT_PLAY,
            "Strong defensive sequence".to_string(),
            vec![action.clone()],
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn issue(
        &self,
        action: &PlayerAction,
        highlight_type: HighlightType,
        description: String,
        score_impact: u32,
        confidence_score: f64,
        detail: String,
        related_actions: Vec<PlayerAction>,
    ) -> HighlightTag {
        HighlightTag {
            id: Uuid::new_v4().to_string(),
            player_id: action.player_id.clone(),
            team_id: action.team_id.clone(),
            highlight_type,
            description,
            score_impact,
            confidence_score,
            quarter: action.quarter,
            game_time: action.game_time.clone(),
            game_context: format!("Q{} | {}", action.quarter, detail),
            related_actions,
        }
    }
}
