use std::collections::HashMap;

use super::PlayerAction;

/// Per-game tracking state. Built fresh for every game and dropped when the
/// game has been processed; never shared between games.
#[derive(Debug, Default)]
pub struct GameTrackingState {
    /// Team id -> unanswered points since the last opposing score.
    pub team_scoring_runs: HashMap<String, u32>,
    /// Player id -> scoring actions inside the current streak window, oldest first.
    pub player_shot_streaks: HashMap<String, Vec<PlayerAction>>,
    /// Player id -> blocks + steals for the game so far.
    pub defensive_plays: HashMap<String, u32>,
}

impl GameTrackingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scoring_run(&self, team_id: &str) -> u32 {
        self.team_scoring_runs
            .get(team_id)
            .copied()
            .unwrap_or_default()
    }

    pub fn shot_streak(&self, player_id: &str) -> &[PlayerAction] {
        self.player_shot_streaks
            .get(player_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn defensive_total(&self, player_id: &str) -> u32 {
        self.defensive_plays
            .get(player_id)
            .copied()
            .unwrap_or_default()
    }
}
