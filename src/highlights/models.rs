use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

/// A within-quarter game clock reading, counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameClock {
    pub minutes: u32,
    pub seconds: u32,
}

impl GameClock {
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    /// Elapsed seconds between two readings of the same quarter clock.
    /// Quarter boundaries are ignored.
    pub fn distance(&self, other: &GameClock) -> u32 {
        self.total_seconds().abs_diff(other.total_seconds())
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// Largest minutes value a clock reading may carry. Keeps `total_seconds`
/// well inside `u32`.
pub const MAX_CLOCK_MINUTES: u32 = 99;

fn clock_part(part: &str, raw: &str, unit: &str) -> Result<u32, String> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid {} in {:?}", unit, raw));
    }
    part.parse::<u32>().map_err(|_| format!("invalid {} in {:?}", unit, raw))
}

impl TryFrom<&str> for GameClock {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (minutes, seconds) = s
            .split_once(':')
            .ok_or_else(|| format!("expected MM:SS, got {:?}", s))?;
        let minutes = clock_part(minutes, s, "minutes")?;
        let seconds = clock_part(seconds, s, "seconds")?;
        if minutes > MAX_CLOCK_MINUTES {
            return Err(format!("minutes out of range in {:?}", s));
        }
        if seconds > 59 {
            return Err(format!("seconds out of range in {:?}", s));
        }
        Ok(GameClock { minutes, seconds })
    }
}

/// One normalized log entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerAction {
    pub player_id: String,
    pub team_id: String,
    pub action_type: String,
    pub points: u32,
    pub assists: u32,
    pub rebounds: u32,
    pub blocks: u32,
    pub steals: u32,
    pub quarter: u32,
    pub game_time: String,
    /// Absolute score differential at the time of the action.
    pub score_diff: u32,
    #[serde(skip)]
    pub clock: GameClock,
    #[serde(skip)]
    pub timestamp: DateTime<Utc>,
}

impl PlayerAction {
    pub fn seconds_remaining(&self) -> u32 {
        self.clock.total_seconds()
    }

    pub fn is_scoring(&self) -> bool {
        self.points > 0
    }

    pub fn defensive_plays(&self) -> u32 {
        self.blocks.saturating_add(self.steals)
    }
}

/// Snapshot of the surrounding game, as supplied by callers of the impact
/// scorer. Only `quarter` and `score_differential` are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameContext {
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub home_score: u32,
    #[serde(default)]
    pub away_score: u32,
    #[serde(default = "first_quarter")]
    pub quarter: u32,
    #[serde(default)]
    pub time_remaining: Option<u32>,
    #[serde(default)]
    pub possession: Option<String>,
    #[serde(default)]
    pub score_differential: i32,
}

fn first_quarter() -> u32 {
    1
}

impl Default for GameContext {
    fn default() -> Self {
        Self {
            game_id: None,
            home_team: None,
            away_team: None,
            home_score: 0,
            away_score: 0,
            quarter: first_quarter(),
            time_remaining: None,
            possession: None,
            score_differential: 0,
        }
    }
}

impl GameContext {
    pub fn new(quarter: u32, score_differential: i32) -> Self {
        Self {
            quarter,
            score_differential,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum HighlightType {
    ClutchPlay,
    HotStreak,
    MomentumShift,
    ImpactPlay,
}

/// A single emitted highlight. Owned by the caller once returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightTag {
    pub id: String,
    pub player_id: String,
    pub team_id: String,
    pub highlight_type: HighlightType,
    pub description: String,
    pub score_impact: u32,
    pub confidence_score: f64,
    pub quarter: u32,
    pub game_time: String,
    pub game_context: String,
    pub related_actions: Vec<PlayerAction>,
}
