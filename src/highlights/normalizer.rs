use chrono::Utc;
use serde_json::{Map, Value};

use super::{GameClock, HighlightError, PlayerAction};

/// Upper bound for any single count field on one log entry.
pub const MAX_ACTION_COUNT: u32 = 1_000;

/// Converts one raw log entry into a `PlayerAction`.
///
/// `player_id`, `team_id`, `quarter`, `game_time` and `score_diff` are
/// required. Count fields and `action_type` default to zero/empty when
/// absent or null. `index` is the entry's position in the game log and is
/// only used for error reporting.
pub fn normalize_log(index: usize, log: &Value) -> Result<PlayerAction, HighlightError> {
    let entry = log
        .as_object()
        .ok_or_else(|| HighlightError::malformed(index, "entry", "must be a JSON object"))?;

    let game_time = required_str(index, entry, "game_time")?;
    let clock = GameClock::try_from(game_time.as_str())
        .map_err(|reason| HighlightError::malformed(index, "game_time", reason))?;

    let quarter = required_u32(index, entry, "quarter")?;
    if quarter == 0 {
        return Err(HighlightError::malformed(index, "quarter", "must be at least 1"));
    }

    let score_diff = present(entry, "score_diff")
        .ok_or_else(|| HighlightError::malformed(index, "score_diff", "is required"))?
        .as_i64()
        .ok_or_else(|| HighlightError::malformed(index, "score_diff", "must be an integer"))?;
    let score_diff = u32::try_from(score_diff.unsigned_abs())
        .map_err(|_| HighlightError::malformed(index, "score_diff", "is out of range"))?;

    Ok(PlayerAction {
        player_id: required_id(index, entry, "player_id")?,
        team_id: required_id(index, entry, "team_id")?,
        action_type: optional_str(index, entry, "action_type")?,
        points: optional_count(index, entry, "points")?,
        assists: optional_count(index, entry, "assists")?,
        rebounds: optional_count(index, entry, "rebounds")?,
        blocks: optional_count(index, entry, "blocks")?,
        steals: optional_count(index, entry, "steals")?,
        quarter,
        game_time,
        score_diff,
        clock,
        timestamp: Utc::now(),
    })
}

/// Normalizes a whole game log, stopping at the first bad entry.
pub fn normalize_logs(logs: &[Value]) -> Result<Vec<PlayerAction>, HighlightError> {
    logs.iter()
        .enumerate()
        .map(|(index, log)| normalize_log(index, log))
        .collect()
}

fn present<'a>(entry: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    entry.get(field).filter(|value| !value.is_null())
}

// Ids are strings, but numeric ids are common in exported box scores.
fn required_id(
    index: usize,
    entry: &Map<String, Value>,
    field: &'static str,
) -> Result<String, HighlightError> {
    match present(entry, field) {
        Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        Some(_) => Err(HighlightError::malformed(
            index,
            field,
            "must be a non-empty string",
        )),
        None => Err(HighlightError::malformed(index, field, "is required")),
    }
}

fn required_str(
    index: usize,
    entry: &Map<String, Value>,
    field: &'static str,
) -> Result<String, HighlightError> {
    match present(entry, field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(HighlightError::malformed(index, field, "must be a string")),
        None => Err(HighlightError::malformed(index, field, "is required")),
    }
}

fn optional_str(
    index: usize,
    entry: &Map<String, Value>,
    field: &'static str,
) -> Result<String, HighlightError> {
    match present(entry, field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(HighlightError::malformed(index, field, "must be a string")),
        None => Ok(String::new()),
    }
}

fn required_u32(
    index: usize,
    entry: &Map<String, Value>,
    field: &'static str,
) -> Result<u32, HighlightError> {
    let value = present(entry, field)
        .ok_or_else(|| HighlightError::malformed(index, field, "is required"))?;
    as_u32(index, field, value)
}

fn optional_count(
    index: usize,
    entry: &Map<String, Value>,
    field: &'static str,
) -> Result<u32, HighlightError> {
    let count = present(entry, field).map_or(Ok(0), |value| as_u32(index, field, value))?;
    if count > MAX_ACTION_COUNT {
        return Err(HighlightError::malformed(index, field, "is out of range"));
    }
    Ok(count)
}

fn as_u32(index: usize, field: &'static str, value: &Value) -> Result<u32, HighlightError> {
    value
        .as_u64()
        .and_then(|number| u32::try_from(number).ok())
        .ok_or_else(|| HighlightError::malformed(index, field, "must be a non-negative integer"))
}
