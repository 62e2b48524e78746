//! Aggregate referee state.
//!
//! Holds the authority's protocol fields and provenance only; legality
//! is evaluated by the free functions in [`rules`](super::rules).

use super::command::Command;
use super::match_info::{MatchType, Stage};
use super::team_info::TeamInfo;
use crate::core::TeamColor;
use crate::geom::Vec2;
use crate::time::{Duration, TimePoint};
use crate::wire::gc::RefereeMessage;
use crate::wire::{PayloadKind, WirePayload};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

crate::wire_enum! {
    /// Abstract game state, following the league rules' game states.
    pub enum GameState: i32 {
        None = 0,
        Halt = 1,
        Timeout = 2,
        Stop = 3,
        BallPlacement = 4,
        Kickoff = 5,
        Penalty = 6,
        FreeKick = 7,
        Running = 8,
    }
    fallback: None
}

impl GameState {
    pub fn is_restart(self) -> bool {
        matches!(self, Self::Kickoff | Self::Penalty | Self::FreeKick)
    }
}

/// Where and when a referee packet came from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    /// Local receipt time.
    pub received_at: DateTime<Utc>,
    /// Send time reported by the authority.
    pub sent_at: DateTime<Utc>,
    /// Distinguishes redundant referee boxes; empty when unknown.
    pub source_id: String,
}

impl Provenance {
    /// Receipt minus send time; large values indicate clock skew or lag.
    pub fn clock_skew(&self) -> TimeDelta {
        self.received_at.signed_duration_since(self.sent_at)
    }
}

/// The authority's aggregate game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RefereeState {
    /// When the current game state was entered.
    pub time: TimePoint,

    pub match_type: MatchType,

    pub stage: Stage,
    pub stage_time_left: Duration,

    pub state: GameState,
    /// Second half of the restart handshake.
    pub ready: bool,
    /// The team the current state favors.
    pub color: TeamColor,

    pub last_command: Command,

    pub designated_position: Vec2,

    pub blue_info: TeamInfo,
    pub yellow_info: TeamInfo,

    pub provenance: Provenance,
}

impl Default for RefereeState {
    fn default() -> Self {
        Self {
            time: TimePoint::default(),
            match_type: MatchType::Unknown,
            stage: Stage::None,
            stage_time_left: Duration::ZERO,
            state: GameState::None,
            ready: false,
            color: TeamColor::Blue,
            last_command: Command::default(),
            designated_position: Vec2::zeros(),
            blue_info: TeamInfo::default(),
            yellow_info: TeamInfo::default(),
            provenance: Provenance::default(),
        }
    }
}

impl RefereeState {
    pub fn team_info(&self, color: TeamColor) -> &TeamInfo {
        match color {
            TeamColor::Blue => &self.blue_info,
            TeamColor::Yellow => &self.yellow_info,
        }
    }

    /// Fold a game-controller packet into a new state.
    ///
    /// Fields absent from the packet keep this state's values. The game
    /// state, ready flag, favored color and entry time belong to the
    /// transition logic and are never changed here. A repeated command
    /// (same counter, same instruction) keeps its original timestamp.
    pub fn merge_gc(&self, msg: &RefereeMessage, received_at: DateTime<Utc>) -> RefereeState {
        let sent_at = i64::try_from(msg.packet_timestamp)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_micros);
        if sent_at.is_none() {
            tracing::warn!(
                packet_timestamp = msg.packet_timestamp,
                "referee packet timestamp out of range, keeping previous send time"
            );
        }

        let last_command = match msg.command {
            Some(command) => {
                let timestamp = msg.command_timestamp.unwrap_or(msg.packet_timestamp);
                let time = match i64::try_from(timestamp) {
                    Ok(micros) => TimePoint::from_micros(micros),
                    Err(_) => {
                        tracing::warn!(
                            command_timestamp = timestamp,
                            "referee command timestamp out of range, keeping previous command time"
                        );
                        self.last_command.time
                    }
                };
                let decoded = Command::from_gc(
                    msg.command_counter.unwrap_or(self.last_command.id),
                    time,
                    command,
                );
                if decoded.id == self.last_command.id
                    && decoded.instruction == self.last_command.instruction
                    && decoded.color == self.last_command.color
                {
                    self.last_command.clone()
                } else {
                    decoded
                }
            }
            None => self.last_command.clone(),
        };

        RefereeState {
            time: self.time,
            match_type: msg.match_type.map_or(self.match_type, MatchType::from),
            stage: msg.stage.map_or(self.stage, Stage::from),
            stage_time_left: msg
                .stage_time_left
                .map_or(self.stage_time_left, Duration::from_micros),
            state: self.state,
            ready: self.ready,
            color: self.color,
            last_command,
            designated_position: msg
                .designated_position
                .map_or(self.designated_position, |p| Vec2::new(p.x, p.y)),
            blue_info: msg
                .blue
                .as_ref()
                .map_or_else(|| self.blue_info.clone(), TeamInfo::from),
            yellow_info: msg
                .yellow
                .as_ref()
                .map_or_else(|| self.yellow_info.clone(), TeamInfo::from),
            provenance: Provenance {
                received_at,
                sent_at: sent_at.unwrap_or(self.provenance.sent_at),
                source_id: msg
                    .source_identifier
                    .clone()
                    .unwrap_or_else(|| self.provenance.source_id.clone()),
            },
        }
    }
}

impl WirePayload for RefereeState {
    const KIND: PayloadKind = PayloadKind::Referee;
}
