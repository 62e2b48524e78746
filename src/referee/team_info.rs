//! Per-team bookkeeping reported by the referee. Opaque to the rules.

use crate::time::Duration;
use crate::wire::gc::GcTeamInfo;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    pub score: u32,
    pub red_cards: u32,
    pub yellow_cards: u32,
    /// Time left on each active yellow card.
    pub yellow_card_times: Vec<Duration>,
    pub timeouts: u32,
    pub timeout_time: Duration,
    pub goalkeeper: u32,
    pub max_allowed_bots: Option<u32>,
    pub can_place_ball: bool,
}

impl Default for TeamInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            score: 0,
            red_cards: 0,
            yellow_cards: 0,
            yellow_card_times: Vec::new(),
            timeouts: 0,
            timeout_time: Duration::ZERO,
            goalkeeper: 0,
            max_allowed_bots: None,
            can_place_ball: true,
        }
    }
}

impl From<&GcTeamInfo> for TeamInfo {
    fn from(info: &GcTeamInfo) -> Self {
        Self {
            name: info.name.clone(),
            score: info.score,
            red_cards: info.red_cards,
            yellow_cards: info.yellow_cards,
            yellow_card_times: info
                .yellow_card_times
                .iter()
                .map(|t| Duration::from_micros(i64::from(*t)))
                .collect(),
            timeouts: info.timeouts,
            timeout_time: Duration::from_micros(i64::from(info.timeout_time)),
            goalkeeper: info.goalkeeper,
            max_allowed_bots: info.max_allowed_bots,
            can_place_ball: info.can_place_ball.unwrap_or(true),
        }
    }
}
