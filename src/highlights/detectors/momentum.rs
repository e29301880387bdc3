use tracing::debug;

use crate::highlights::{
    detector_order, DetectionContext, GameTrackingState, HighlightDetector, HighlightTag,
    PlayerAction,
};

/// Tracks unanswered scoring runs per team.
///
/// Only a scoring action ends an opposing run; stops, rebounds and other
/// non-scoring actions leave every run untouched.
pub struct MomentumDetector;

impl Default for MomentumDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl MomentumDetector {
    pub fn new() -> Self {
        Self
    }
}

impl HighlightDetector for MomentumDetector {
    fn detect(
        &self,
        action: &PlayerAction,
        state: &mut GameTrackingState,
        context: &DetectionContext,
    ) -> Option<HighlightTag> {
        if !action.is_scoring() {
            return None;
        }

        let run = state
            .team_scoring_runs
            .entry(action.team_id.clone())
            .or_default();
        *run = run.saturating_add(action.points);

        for (team_id, run) in state.team_scoring_runs.iter_mut() {
            if *team_id != action.team_id {
                *run = 0;
            }
        }

        let run_points = state.scoring_run(&action.team_id);
        if run_points < context.config.momentum_run_threshold {
            return None;
        }

        debug!(team_id = %action.team_id, run_points, "Momentum shift detected");
        Some(context.factory.momentum_shift(action, run_points))
    }

    fn order(&self) -> u32 {
        detector_order::MOMENTUM
    }

    fn name(&self) -> &'static str {
        "MomentumDetector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlights::detectors::test_support::{config, defensive, scoring};
    use crate::highlights::{HighlightFactory, HighlightType};

    #[test]
    fn fires_when_unanswered_run_reaches_threshold() {
        let config = config();
        let factory = HighlightFactory::new();
        let context = DetectionContext::new(&config, &factory);
        let mut state = GameTrackingState::new();
        let detector = MomentumDetector::new();

        assert!(detector
            .detect(&scoring("a1", "A", 4, 2, "8:00"), &mut state, &context)
            .is_none());
        assert!(detector
            .detect(&scoring("a2", "A", 4, 2, "7:20"), &mut state, &context)
            .is_none());
        let tag = detector
            .detect(&scoring("a1", "A", 3, 2, "6:45"), &mut state, &context)
            .unwrap();

        assert_eq!(tag.highlight_type, HighlightType::MomentumShift);
        assert_eq!(tag.score_impact, 11);
        assert_eq!(tag.confidence_score, 0.80);
        assert_eq!(tag.description, "11-0 scoring run!");
        assert_eq!(tag.related_actions.len(), 1);
        assert_eq!(tag.player_id, "a1");
    }

    #[test]
    fn opposing_score_resets_run() {
        let config = config();
        let factory = HighlightFactory::new();
        let context = DetectionContext::new(&config, &factory);
        let mut state = GameTrackingState::new();
        let detector = MomentumDetector::new();

        detector.detect(&scoring("a1", "A", 4, 2, "8:00"), &mut state, &context);
        detector.detect(&scoring("a2", "A", 4, 2, "7:20"), &mut state, &context);
        detector.detect(&scoring("b1", "B", 1, 2, "7:00"), &mut state, &context);

        assert_eq!(state.scoring_run("A"), 0);
        assert_eq!(state.scoring_run("B"), 1);

        let tag = detector.detect(&scoring("a1", "A", 3, 2, "6:45"), &mut state, &context);
        assert!(tag.is_none());
        assert_eq!(state.scoring_run("A"), 3);
        assert_eq!(state.scoring_run("B"), 0);
    }

    #[test]
    fn defensive_stop_does_not_interrupt_run() {
        let config = config();
        let factory = HighlightFactory::new();
        let context = DetectionContext::new(&config, &factory);
        let mut state = GameTrackingState::new();
        let detector = MomentumDetector::new();

        detector.detect(&scoring("a1", "A", 6, 3, "4:00"), &mut state, &context);
        assert!(detector
            .detect(&defensive("b1", 1, 1), &mut state, &context)
            .is_none());
        let tag = detector.detect(&scoring("a1", "A", 4, 3, "3:30"), &mut state, &context);

        assert_eq!(tag.map(|t| t.score_impact), Some(10));
    }

    #[test]
    fn run_keeps_growing_past_threshold() {
        let config = config();
        let factory = HighlightFactory::new();
        let context = DetectionContext::new(&config, &factory);
        let mut state = GameTrackingState::new();
        let detector = MomentumDetector::new();

        let impacts: Vec<u32> = [5, 5, 2]
            .into_iter()
            .filter_map(|points| {
                detector.detect(&scoring("a1", "A", points, 1, "9:00"), &mut state, &context)
            })
            .map(|tag| tag.score_impact)
            .collect();

        assert_eq!(impacts, vec![10, 12]);
    }

    #[test]
    fn run_saturates_instead_of_overflowing() {
        let config = config();
        let factory = HighlightFactory::new();
        let context = DetectionContext::new(&config, &factory);
        let mut state = GameTrackingState::new();
        let detector = MomentumDetector::new();

        let mut big = scoring("a1", "A", 3, 2, "8:00");
        big.points = u32::MAX;
        detector.detect(&big, &mut state, &context);
        let tag = detector.detect(&big, &mut state, &context).unwrap();

        assert_eq!(tag.score_impact, u32::MAX);
        assert_eq!(state.scoring_run("A"), u32::MAX);
    }
}
