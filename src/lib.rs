// Library crate for the highlight tagging engine
// This file exposes the public API for integration tests and embedding

pub mod config;
pub mod highlights;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::{EngineConfig, ImpactScores};
pub use highlights::{
    compute_impact_score, process_game_logs, top_plays, HighlightEngine, HighlightError,
    HighlightService, HighlightTag, HighlightType,
};
pub use shared::{AppError, AppState};
