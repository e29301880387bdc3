use serde_json::{json, Value};

// ============================================================================
// Game Log Construction
// ============================================================================

/// Builds raw game log entries in the shape callers send to the engine.
/// Quarter and score differential are sticky: set them once and every
/// following entry uses them.
pub struct GameLogBuilder {
    quarter: u32,
    score_diff: i64,
    entries: Vec<Value>,
}

impl GameLogBuilder {
    pub fn new() -> Self {
        Self {
            quarter: 1,
            score_diff: 10,
            entries: vec![],
        }
    }

    pub fn in_quarter(mut self, quarter: u32) -> Self {
        self.quarter = quarter;
        self
    }

    pub fn with_score_diff(mut self, score_diff: i64) -> Self {
        self.score_diff = score_diff;
        self
    }

    pub fn score(self, player: &str, team: &str, points: u32, game_time: &str) -> Self {
        let action_type = match points {
            3 => "3PT",
            2 => "2PT",
            _ => "FT",
        };
        self.entry(
            json!({
                "player_id": player,
                "team_id": team,
                "action_type": action_type,
                "points": points,
            }),
            game_time,
        )
    }

    pub fn defend(
        self,
        player: &str,
        team: &str,
        blocks: u32,
        steals: u32,
        game_time: &str,
    ) -> Self {
        self.entry(
            json!({
                "player_id": player,
                "team_id": team,
                "action_type": "Defense",
                "blocks": blocks,
                "steals": steals,
            }),
            game_time,
        )
    }

    /// Appends an entry as-is, without filling in quarter or score.
    pub fn raw(mut self, entry: Value) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> Vec<Value> {
        self.entries
    }

    fn entry(mut self, mut fields: Value, game_time: &str) -> Self {
        fields["quarter"] = json!(self.quarter);
        fields["game_time"] = json!(game_time);
        fields["score_diff"] = json!(self.score_diff);
        self.entries.push(fields);
        self
    }
}
