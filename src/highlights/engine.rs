use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    detectors::{ClutchDetector, DefensiveImpactDetector, HotStreakDetector, MomentumDetector},
    normalizer::normalize_logs,
    scoring::{self, ImpactEvent, MomentumInfo, StreakInfo},
    serialization::{highlights_to_maps, HighlightMap},
    DetectionContext, GameContext, GameTrackingState, HighlightDetector, HighlightError,
    HighlightFactory, HighlightTag,
};
use crate::config::EngineConfig;

pub const DEFAULT_TOP_PLAYS: usize = 5;

/// Turns one game's log into highlights.
///
/// The engine itself is immutable; all tracking state lives in a
/// `GameTrackingState` created per call, so a single engine can be shared
/// across threads and used for many games at once.
pub struct HighlightEngine {
    config: EngineConfig,
    detectors: Vec<Arc<dyn HighlightDetector>>,
    factory: HighlightFactory,
}

impl HighlightEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::builder(config).build()
    }

    pub fn builder(config: EngineConfig) -> HighlightEngineBuilder {
        HighlightEngineBuilder::new(config)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Runs every detector over the log in order and returns the highlights
    /// they emitted. Fails without output if any entry is malformed.
    #[instrument(skip(self, logs), fields(entries = logs.len()))]
    pub fn tag_game(&self, logs: &[Value]) -> Result<Vec<HighlightTag>, HighlightError> {
        let actions = normalize_logs(logs)?;

        let mut state = GameTrackingState::new();
        let context = DetectionContext::new(&self.config, &self.factory);
        let mut highlights = Vec::new();

        for action in &actions {
            for detector in &self.detectors {
                if let Some(highlight) = detector.detect(action, &mut state, &context) {
                    debug!(
                        detector = detector.name(),
                        highlight_type = %highlight.highlight_type,
                        score_impact = highlight.score_impact,
                        "Detector fired"
                    );
                    highlights.push(highlight);
                }
            }
        }

        info!(
            entries = actions.len(),
            highlights = highlights.len(),
            "Game log processed"
        );

        Ok(highlights)
    }

    /// Same as [`tag_game`](Self::tag_game), serialized for transport.
    pub fn process_game_logs(&self, logs: &[Value]) -> Result<Vec<HighlightMap>, HighlightError> {
        highlights_to_maps(&self.tag_game(logs)?)
    }

    pub fn compute_impact_score(
        &self,
        event: &ImpactEvent,
        context: &GameContext,
        streak_info: Option<&StreakInfo>,
        momentum_info: Option<&MomentumInfo>,
    ) -> u8 {
        scoring::compute_impact_score(&self.config, event, context, streak_info, momentum_info)
    }
}

/// One-shot entry point: builds an engine for `config` and processes `logs`.
pub fn process_game_logs(
    config: &EngineConfig,
    logs: &[Value],
) -> Result<Vec<HighlightMap>, HighlightError> {
    HighlightEngine::new(config.clone()).process_game_logs(logs)
}

/// Highest-impact highlights first; ties keep log order.
pub fn top_plays(highlights: &[HighlightTag], limit: usize) -> Vec<HighlightTag> {
    let mut ranked = highlights.to_vec();
    ranked.sort_by(|a, b| b.score_impact.cmp(&a.score_impact));
    ranked.truncate(limit);
    ranked
}

pub struct HighlightEngineBuilder {
    config: EngineConfig,
    detectors: Vec<Arc<dyn HighlightDetector>>,
}

impl HighlightEngineBuilder {
    fn new(config: EngineConfig) -> Self {
        Self {
            config,
            detectors: vec![
                Arc::new(ClutchDetector::new()),
                Arc::new(HotStreakDetector::new()),
                Arc::new(MomentumDetector::new()),
                Arc::new(DefensiveImpactDetector::new()),
            ],
        }
    }

    pub fn with_detector(mut self, detector: Arc<dyn HighlightDetector>) -> Self {
        self.detectors.push(detector);
        self
    }

    pub fn build(mut self) -> HighlightEngine {
        self.detectors.sort_by_key(|d| d.order());
        HighlightEngine {
            config: self.config,
            detectors: self.detectors,
            factory: HighlightFactory::new(),
        }
    }
}
