//! Team-relative rendering of referee values for logs and debug tools.

use super::command::{Command, Instruction};
use super::rules;
use super::state::{GameState, RefereeState};
use crate::core::TeamColor;
use std::fmt;

/// A referee value seen from one team's side.
#[derive(Clone, Copy, Debug)]
pub struct Relative<'a, T> {
    value: &'a T,
    our: TeamColor,
}

fn sided(ours: bool, our: &'static str, their: &'static str) -> &'static str {
    if ours {
        our
    } else {
        their
    }
}

impl Command {
    pub fn relative_to(&self, our: TeamColor) -> Relative<'_, Command> {
        Relative { value: self, our }
    }

    fn describe(&self, our: TeamColor) -> &'static str {
        let ours = self.is_ours(our);
        match self.instruction {
            Instruction::GameOn => "Game on",
            Instruction::GameOff => "Stop",
            Instruction::Halt => "Halt",
            Instruction::Kickoff => sided(ours, "Our kickoff", "Their kickoff"),
            Instruction::Penalty => sided(ours, "Our penalty", "Their penalty"),
            Instruction::DirectFree => sided(ours, "Our direct free kick", "Their direct free kick"),
            Instruction::PlaceBall => sided(ours, "Our ball placement", "Their ball placement"),
            Instruction::Ready => "Ready",
            Instruction::NotReady => "Not ready",
            Instruction::None => "None",
        }
    }
}

impl RefereeState {
    pub fn relative_to(&self, our: TeamColor) -> Relative<'_, RefereeState> {
        Relative { value: self, our }
    }

    fn describe(&self, our: TeamColor) -> &'static str {
        let ours = rules::is_ours(self, our);
        match (self.state, self.ready) {
            (GameState::None, _) => "None",
            (GameState::Halt, _) => "Halt",
            (GameState::Timeout, _) => sided(ours, "Our timeout", "Their timeout"),
            (GameState::Stop, _) => "Stop",
            (GameState::BallPlacement, _) => sided(ours, "Our ball placement", "Their ball placement"),
            (GameState::Kickoff, true) => sided(ours, "Our kickoff (ready)", "Their kickoff (ready)"),
            (GameState::Kickoff, false) => sided(ours, "Our prepare kickoff", "Their prepare kickoff"),
            (GameState::Penalty, true) => sided(ours, "Our penalty (ready)", "Their penalty (ready)"),
            (GameState::Penalty, false) => sided(ours, "Our prepare penalty", "Their prepare penalty"),
            (GameState::FreeKick, _) => sided(ours, "Our free kick", "Their free kick"),
            (GameState::Running, _) => "Running",
        }
    }
}

impl fmt::Display for Relative<'_, Command> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value.describe(self.our))
    }
}

impl fmt::Display for Relative<'_, RefereeState> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.value.time, self.value.describe(self.our))
    }
}
