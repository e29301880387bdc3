pub mod detectors;
pub mod engine;
pub mod factory;
pub mod normalizer;
pub mod scoring;
pub mod serialization;
pub mod service;
pub mod state;

mod errors;
mod handlers;
pub mod models;
pub mod types;

pub use engine::{process_game_logs, top_plays, HighlightEngine, HighlightEngineBuilder};
pub use errors::HighlightError;
pub use factory::HighlightFactory;
pub use handlers::{compute_impact, tag_game, tag_games};
pub use models::*;
pub use scoring::{compute_impact_score, EventCategory, ImpactEvent, MomentumInfo, StreakInfo};
pub use service::HighlightService;
pub use state::GameTrackingState;

use crate::config::EngineConfig;

/// Run order for highlight detectors.
/// Lower values run first; ties keep registration order.
pub mod detector_order {
    pub const CLUTCH: u32 = 100;
    pub const HOT_STREAK: u32 = 200;
    pub const MOMENTUM: u32 = 300;
    pub const DEFENSIVE: u32 = 400;
}

pub trait HighlightDetector: Send + Sync {
    /// Observe one action, updating any state this detector owns, and
    /// return a highlight if the detector fires.
    fn detect(
        &self,
        action: &PlayerAction,
        state: &mut GameTrackingState,
        context: &DetectionContext,
    ) -> Option<HighlightTag>;

    fn order(&self) -> u32;

    fn name(&self) -> &'static str;
}

pub struct DetectionContext<'a> {
    pub config: &'a EngineConfig,
    pub factory: &'a HighlightFactory,
}

impl<'a> DetectionContext<'a> {
    pub fn new(config: &'a EngineConfig, factory: &'a HighlightFactory) -> Self {
        Self { config, factory }
    }
}
