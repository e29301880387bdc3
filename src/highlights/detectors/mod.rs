mod clutch;
mod defensive;
mod hot_streak;
mod momentum;

pub use clutch::{is_clutch, ClutchDetector, CLOSE_GAME_MARGIN};
pub use defensive::DefensiveImpactDetector;
pub use hot_streak::HotStreakDetector;
pub use momentum::MomentumDetector;
