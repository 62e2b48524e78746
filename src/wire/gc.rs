//! Inbound game-controller referee schema (the authority-native format).
//!
//! Every field other than the packet timestamp is optional: a packet that
//! omits a field leaves the last known value in place when merged into a
//! [`RefereeState`](crate::referee::RefereeState).

use serde::{Deserialize, Serialize};

crate::wire_enum! {
    /// Command enumeration as sent by the game controller.
    pub enum GcCommand: i32 {
        Unknown = -1,
        Halt = 0,
        Stop = 1,
        NormalStart = 2,
        ForceStart = 3,
        PrepareKickoffYellow = 4,
        PrepareKickoffBlue = 5,
        PreparePenaltyYellow = 6,
        PreparePenaltyBlue = 7,
        DirectFreeYellow = 8,
        DirectFreeBlue = 9,
        IndirectFreeYellow = 10,
        IndirectFreeBlue = 11,
        TimeoutYellow = 12,
        TimeoutBlue = 13,
        GoalYellow = 14,
        GoalBlue = 15,
        BallPlacementYellow = 16,
        BallPlacementBlue = 17,
    }
    fallback: Unknown
}

/// One referee packet from the game controller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RefereeMessage {
    /// Identifies which game controller instance sent the packet.
    #[serde(default)]
    pub source_identifier: Option<String>,
    #[serde(default)]
    pub match_type: Option<i32>,

    /// Send time on the controller, in microseconds since the UNIX epoch.
    pub packet_timestamp: u64,

    #[serde(default)]
    pub stage: Option<i32>,
    /// Microseconds left in the stage; negative in overtime.
    #[serde(default)]
    pub stage_time_left: Option<i64>,

    #[serde(default)]
    pub command: Option<GcCommand>,
    #[serde(default)]
    pub command_counter: Option<u32>,
    /// Microseconds since the UNIX epoch at which the command was issued.
    #[serde(default)]
    pub command_timestamp: Option<u64>,

    #[serde(default)]
    pub yellow: Option<GcTeamInfo>,
    #[serde(default)]
    pub blue: Option<GcTeamInfo>,

    #[serde(default)]
    pub designated_position: Option<GcPoint>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GcPoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GcTeamInfo {
    pub name: String,
    pub score: u32,
    pub red_cards: u32,
    #[serde(default)]
    pub yellow_card_times: Vec<u32>,
    pub yellow_cards: u32,
    pub timeouts: u32,
    pub timeout_time: u32,
    pub goalkeeper: u32,
    #[serde(default)]
    pub max_allowed_bots: Option<u32>,
    #[serde(default)]
    pub can_place_ball: Option<bool>,
}
