use tracing::debug;

use crate::highlights::{
    detector_order, DetectionContext, GameTrackingState, HighlightDetector, HighlightTag,
    PlayerAction,
};

/// Tallies blocks and steals per player for the whole game.
///
/// The tally never resets, so once a player reaches the threshold every
/// further block or steal by that player fires again.
pub struct DefensiveImpactDetector;

impl Default for DefensiveImpactDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DefensiveImpactDetector {
    pub fn new() -> Self {
        Self
    }
}

impl HighlightDetector for DefensiveImpactDetector {
    fn detect(
        &self,
        action: &PlayerAction,
        state: &mut GameTrackingState,
        context: &DetectionContext,
    ) -> Option<HighlightTag> {
        let plays = action.defensive_plays();
        if plays == 0 {
            return None;
        }

        let total = state
            .defensive_plays
            .entry(action.player_id.clone())
            .or_default();
        *total = total.saturating_add(plays);
        let total = *total;

        if total < context.config.defensive_impact_threshold {
            return None;
        }

        debug!(player_id = %action.player_id, total, "Defensive impact detected");
        Some(context.factory.impact_play(action, total))
    }

    fn order(&self) -> u32 {
        detector_order::DEFENSIVE
    }

    fn name(&self) -> &'static str {
        "DefensiveImpactDetector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlights::detectors::test_support::{config, defensive, scoring};
    use crate::highlights::{HighlightFactory, HighlightType};

    #[test]
    fn fires_once_cumulative_total_reaches_threshold() {
        let config = config();
        let factory = HighlightFactory::new();
        let context = DetectionContext::new(&config, &factory);
        let mut state = GameTrackingState::new();
        let detector = DefensiveImpactDetector::new();

        assert!(detector
            .detect(&defensive("d1", 0, 1), &mut state, &context)
            .is_none());
        assert!(detector
            .detect(&defensive("d1", 1, 0), &mut state, &context)
            .is_none());
        let tag = detector
            .detect(&defensive("d1", 1, 1), &mut state, &context)
            .unwrap();

        assert_eq!(tag.highlight_type, HighlightType::ImpactPlay);
        assert_eq!(tag.score_impact, 8);
        assert_eq!(tag.confidence_score, 0.75);
        assert_eq!(state.defensive_total("d1"), 4);
    }

    #[test]
    fn keeps_firing_after_threshold() {
        let config = config();
        let factory = HighlightFactory::new();
        let context = DetectionContext::new(&config, &factory);
        let mut state = GameTrackingState::new();
        let detector = DefensiveImpactDetector::new();

        let impacts: Vec<u32> = [(0, 1), (1, 0), (1, 1), (0, 1)]
            .into_iter()
            .filter_map(|(blocks, steals)| {
                detector.detect(&defensive("d1", blocks, steals), &mut state, &context)
            })
            .map(|tag| tag.score_impact)
            .collect();

        assert_eq!(impacts, vec![8, 10]);
    }

    #[test]
    fn scoring_actions_do_not_count() {
        let config = config();
        let factory = HighlightFactory::new();
        let context = DetectionContext::new(&config, &factory);
        let mut state = GameTrackingState::new();

        let tag = DefensiveImpactDetector::new().detect(
            &scoring("d1", "home", 3, 1, "5:00"),
            &mut state,
            &context,
        );

        assert!(tag.is_none());
        assert!(state.defensive_plays.is_empty());
    }

    #[test]
    fn tallies_are_per_player() {
        let config = config();
        let factory = HighlightFactory::new();
        let context = DetectionContext::new(&config, &factory);
        let mut state = GameTrackingState::new();
        let detector = DefensiveImpactDetector::new();

        detector.detect(&defensive("d1", 2, 0), &mut state, &context);
        let tag = detector.detect(&defensive("d2", 0, 2), &mut state, &context);

        assert!(tag.is_none());
        assert_eq!(state.defensive_total("d1"), 2);
        assert_eq!(state.defensive_total("d2"), 2);
    }

    #[test]
    fn tally_saturates_instead_of_overflowing() {
        let config = config();
        let factory = HighlightFactory::new();
        let context = DetectionContext::new(&config, &factory);
        let mut state = GameTrackingState::new();
        let detector = DefensiveImpactDetector::new();

        let mut big = defensive("d1", 1, 0);
        big.blocks = u32::MAX;
        big.steals = 1;
        detector.detect(&big, &mut state, &context);
        let tag = detector.detect(&big, &mut state, &context).unwrap();

        assert_eq!(state.defensive_total("d1"), u32::MAX);
        assert_eq!(tag.score_impact, u32::MAX);
    }
}
