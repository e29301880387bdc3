use serde::Deserialize;
use strum_macros::EnumString;

use super::detectors::{is_clutch, CLOSE_GAME_MARGIN};
use super::{GameClock, GameContext};
use crate::config::{EngineConfig, ImpactScores};

pub const BASE_IMPACT_SCORE: i64 = 50;
pub const MAX_IMPACT_SCORE: i64 = 100;

/// Fourth quarter or overtime.
const LATE_GAME_QUARTER: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
pub enum EventCategory {
    #[strum(serialize = "3PT", serialize = "three_pointer")]
    ThreePointer,
    #[strum(serialize = "2PT", serialize = "two_pointer")]
    TwoPointer,
    #[strum(serialize = "Block", serialize = "block")]
    Block,
    #[strum(serialize = "Steal", serialize = "steal")]
    Steal,
    #[strum(default)]
    Other(String),
}

impl EventCategory {
    pub fn weight(&self, scores: &ImpactScores) -> i32 {
        match self {
            EventCategory::ThreePointer => scores.three_pointer,
            EventCategory::TwoPointer => scores.two_pointer,
            EventCategory::Block => scores.block,
            EventCategory::Steal => scores.steal,
            EventCategory::Other(_) => 0,
        }
    }
}

/// A single play to be scored outside the per-game pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawImpactEvent")]
pub struct ImpactEvent {
    pub category: EventCategory,
    pub clock: GameClock,
    pub score_diff: i32,
    pub points: u32,
}

impl ImpactEvent {
    pub fn new(event_type: &str, clock: GameClock, score_diff: i32, points: u32) -> Self {
        Self {
            category: event_type
                .parse()
                .unwrap_or_else(|_| EventCategory::Other(event_type.to_string())),
            clock,
            score_diff,
            points,
        }
    }
}

#[derive(Deserialize)]
struct RawImpactEvent {
    #[serde(default)]
    event_type: String,
    game_time: String,
    #[serde(default)]
    score_diff: i32,
    #[serde(default)]
    points: u32,
}

impl TryFrom<RawImpactEvent> for ImpactEvent {
    type Error = String;

    fn try_from(raw: RawImpactEvent) -> Result<Self, Self::Error> {
        let clock = GameClock::try_from(raw.game_time.as_str())?;
        Ok(ImpactEvent::new(
            &raw.event_type,
            clock,
            raw.score_diff,
            raw.points,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StreakInfo {
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MomentumInfo {
    pub shift_magnitude: u32,
}

/// Weighted 0-100 significance score for one play.
///
/// This is independent of the fixed `score_impact` the detectors assign;
/// the two are not meant to agree.
pub fn compute_impact_score(
    config: &EngineConfig,
    event: &ImpactEvent,
    context: &GameContext,
    streak_info: Option<&StreakInfo>,
    momentum_info: Option<&MomentumInfo>,
) -> u8 {
    let weights = &config.impact_scores;
    let mut score = BASE_IMPACT_SCORE + i64::from(event.category.weight(weights));

    let clutch = is_clutch(
        event.clock.total_seconds(),
        event.score_diff.unsigned_abs(),
        event.points,
        config.clutch_threshold_seconds,
    );
    if clutch {
        score += i64::from(weights.clutch_bonus);
    }

    if let Some(streak) = streak_info {
        score += i64::from(weights.streak_bonus).min(i64::from(streak.points) * 2);
    }

    if let Some(momentum) = momentum_info {
        score += i64::from(weights.momentum_bonus).min(i64::from(momentum.shift_magnitude) * 2);
    }

    if context.score_differential.unsigned_abs() <= CLOSE_GAME_MARGIN {
        score += i64::from(weights.close_game_bonus);
    }

    if context.quarter >= LATE_GAME_QUARTER {
        score += i64::from(weights.fourth_quarter_bonus);
    }

    score.clamp(0, MAX_IMPACT_SCORE) as u8
}
