//! Referee commands.
//!
//! An [`Instruction`] is a closed set of variants. Overlapping rule
//! categories ("any restart", "any sided restart") are answered by
//! [`Instruction::category`], and the equivalent bit masks are kept for
//! the wire, where each instruction is a single power-of-two flag. On
//! the wire a restart may also carry the `Ready` flag; that half of the
//! handshake is kept apart as [`Command::ready`].

use crate::core::TeamColor;
use crate::time::TimePoint;
use crate::wire::gc::GcCommand;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Restarts: kickoff, penalty and direct free kick.
pub const RESTART_MASK: u32 =
    Instruction::Kickoff.bit() | Instruction::Penalty.bit() | Instruction::DirectFree.bit();

/// Restarts plus ball placement: every instruction that favors one team.
pub const SIDED_MASK: u32 = RESTART_MASK | Instruction::PlaceBall.bit();

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Instruction {
    None,
    GameOn,
    GameOff,
    #[default]
    Halt,
    Kickoff,
    Penalty,
    DirectFree,
    PlaceBall,
    Ready,
    NotReady,
}

/// Rule group an instruction belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    None,
    /// Halt, stop and game on.
    Control,
    /// Dead-ball resumption favoring one team.
    Restart,
    Placement,
    /// The prepare/ready handshake that gates ball contact on restarts.
    Handshake,
}

impl Instruction {
    pub const ALL: [Instruction; 10] = [
        Self::None,
        Self::GameOn,
        Self::GameOff,
        Self::Halt,
        Self::Kickoff,
        Self::Penalty,
        Self::DirectFree,
        Self::PlaceBall,
        Self::Ready,
        Self::NotReady,
    ];

    /// Wire flag for this instruction.
    pub const fn bit(self) -> u32 {
        match self {
            Self::None => 0,
            Self::GameOn => 1 << 0,
            Self::GameOff => 1 << 1,
            Self::Halt => 1 << 2,
            Self::Kickoff => 1 << 3,
            Self::Penalty => 1 << 4,
            Self::DirectFree => 1 << 5,
            Self::PlaceBall => 1 << 6,
            Self::Ready => 1 << 7,
            Self::NotReady => 1 << 8,
        }
    }

    /// Decode a wire flag.
    ///
    /// Only single known flags map to an instruction; anything else
    /// becomes `None`.
    pub fn from_bits(bits: u32) -> Self {
        match Self::ALL.iter().find(|i| i.bit() == bits) {
            Some(instruction) => *instruction,
            None => {
                tracing::debug!("unknown instruction bits {:#x}, using None", bits);
                Self::None
            }
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::None => Category::None,
            Self::GameOn | Self::GameOff | Self::Halt => Category::Control,
            Self::Kickoff | Self::Penalty | Self::DirectFree => Category::Restart,
            Self::PlaceBall => Category::Placement,
            Self::Ready | Self::NotReady => Category::Handshake,
        }
    }

    pub fn in_mask(self, mask: u32) -> bool {
        self.bit() & mask != 0
    }

    pub fn is_restart(self) -> bool {
        self.category() == Category::Restart
    }

    pub fn is_sided(self) -> bool {
        matches!(self.category(), Category::Restart | Category::Placement)
    }
}

impl Serialize for Instruction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bit())
    }
}

impl<'de> Deserialize<'de> for Instruction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::from_bits)
    }
}

/// One decoded instruction from the referee.
///
/// Commands without a color scope are color-neutral and never "ours".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CommandRepr", into = "CommandRepr")]
pub struct Command {
    pub id: u32,
    pub time: TimePoint,
    pub instruction: Instruction,
    /// `Ready` flag sent together with the instruction.
    pub ready: bool,
    pub color: Option<TeamColor>,
}

impl Command {
    pub fn new(id: u32, time: TimePoint, instruction: Instruction, color: Option<TeamColor>) -> Self {
        Self {
            id,
            time,
            instruction,
            ready: false,
            color,
        }
    }

    pub fn with_ready(self, ready: bool) -> Self {
        Self { ready, ..self }
    }

    /// Wire flags: the instruction bit, plus `Ready` when set.
    pub fn bits(&self) -> u32 {
        let ready = if self.ready { Instruction::Ready.bit() } else { 0 };
        self.instruction.bit() | ready
    }

    /// Split wire flags into an instruction and the ready flag.
    ///
    /// A lone `Ready` flag is the `Ready` instruction itself.
    pub fn split_bits(bits: u32) -> (Instruction, bool) {
        let ready_bit = Instruction::Ready.bit();
        match bits & !ready_bit {
            0 => (Instruction::from_bits(bits), false),
            rest => (Instruction::from_bits(rest), bits & ready_bit != 0),
        }
    }

    /// Translate a game-controller command.
    ///
    /// Indirect free kicks are treated as direct ones, timeouts as a
    /// color-scoped halt, and goals as a stop.
    pub fn from_gc(id: u32, time: TimePoint, command: GcCommand) -> Self {
        use Instruction as I;
        use crate::core::TeamColor::{Blue, Yellow};

        let (instruction, color) = match command {
            GcCommand::Unknown => (I::None, None),
            GcCommand::Halt => (I::Halt, None),
            GcCommand::Stop => (I::GameOff, None),
            GcCommand::NormalStart => (I::Ready, None),
            GcCommand::ForceStart => (I::GameOn, None),
            GcCommand::PrepareKickoffYellow => (I::Kickoff, Some(Yellow)),
            GcCommand::PrepareKickoffBlue => (I::Kickoff, Some(Blue)),
            GcCommand::PreparePenaltyYellow => (I::Penalty, Some(Yellow)),
            GcCommand::PreparePenaltyBlue => (I::Penalty, Some(Blue)),
            GcCommand::DirectFreeYellow | GcCommand::IndirectFreeYellow => (I::DirectFree, Some(Yellow)),
            GcCommand::DirectFreeBlue | GcCommand::IndirectFreeBlue => (I::DirectFree, Some(Blue)),
            GcCommand::TimeoutYellow => (I::Halt, Some(Yellow)),
            GcCommand::TimeoutBlue => (I::Halt, Some(Blue)),
            GcCommand::GoalYellow => (I::GameOff, Some(Yellow)),
            GcCommand::GoalBlue => (I::GameOff, Some(Blue)),
            GcCommand::BallPlacementYellow => (I::PlaceBall, Some(Yellow)),
            GcCommand::BallPlacementBlue => (I::PlaceBall, Some(Blue)),
        };

        Self::new(id, time, instruction, color)
    }

    pub fn get(&self) -> Instruction {
        self.instruction
    }

    /// Bitwise membership test against a wire mask such as [`RESTART_MASK`].
    pub fn matches(&self, mask: u32) -> bool {
        self.instruction.in_mask(mask)
    }

    pub fn is_ours(&self, our: TeamColor) -> bool {
        self.color == Some(our)
    }

    pub fn stop(&self) -> bool {
        self.instruction == Instruction::GameOff
    }

    pub fn halt(&self) -> bool {
        self.instruction == Instruction::Halt
    }

    pub fn game_on(&self) -> bool {
        self.instruction == Instruction::GameOn
    }

    pub fn restart(&self) -> bool {
        self.instruction.is_restart()
    }

    pub fn our_restart(&self, our: TeamColor) -> bool {
        self.restart() && self.is_ours(our)
    }

    pub fn their_restart(&self, our: TeamColor) -> bool {
        self.restart() && !self.is_ours(our)
    }

    pub fn kickoff(&self) -> bool {
        self.instruction == Instruction::Kickoff
    }

    pub fn our_kickoff(&self, our: TeamColor) -> bool {
        self.kickoff() && self.is_ours(our)
    }

    pub fn their_kickoff(&self, our: TeamColor) -> bool {
        self.kickoff() && !self.is_ours(our)
    }

    pub fn penalty(&self) -> bool {
        self.instruction == Instruction::Penalty
    }

    pub fn our_penalty(&self, our: TeamColor) -> bool {
        self.penalty() && self.is_ours(our)
    }

    pub fn their_penalty(&self, our: TeamColor) -> bool {
        self.penalty() && !self.is_ours(our)
    }

    pub fn direct_free(&self) -> bool {
        self.instruction == Instruction::DirectFree
    }

    pub fn our_direct_free(&self, our: TeamColor) -> bool {
        self.direct_free() && self.is_ours(our)
    }

    pub fn their_direct_free(&self, our: TeamColor) -> bool {
        self.direct_free() && !self.is_ours(our)
    }

    pub fn place_ball(&self) -> bool {
        self.instruction == Instruction::PlaceBall
    }

    pub fn our_place_ball(&self, our: TeamColor) -> bool {
        self.place_ball() && self.is_ours(our)
    }

    pub fn their_place_ball(&self, our: TeamColor) -> bool {
        self.place_ball() && !self.is_ours(our)
    }

    pub fn can_move(&self) -> bool {
        !self.halt()
    }

    /// Goals and timeouts carry a color too, but only sided
    /// instructions grant access to the ball.
    pub fn allowed_near_ball(&self, our: TeamColor) -> bool {
        self.game_on() || (self.instruction.is_sided() && self.is_ours(our))
    }

    /// Restart contact needs the `Ready` flag on our own restart.
    pub fn can_kick_ball(&self, our: TeamColor) -> bool {
        self.game_on() || (self.our_restart(our) && self.ready)
    }

    pub fn should_slow_down(&self) -> bool {
        self.stop()
    }
}

/// Shape of a command on the wire, with the flags merged into `type`.
#[derive(Clone, Serialize, Deserialize)]
struct CommandRepr {
    id: u32,
    time: TimePoint,
    #[serde(rename = "type")]
    bits: u32,
    #[serde(default)]
    color: Option<TeamColor>,
}

impl From<Command> for CommandRepr {
    fn from(command: Command) -> Self {
        Self {
            id: command.id,
            time: command.time,
            bits: command.bits(),
            color: command.color,
        }
    }
}

impl From<CommandRepr> for Command {
    fn from(repr: CommandRepr) -> Self {
        let (instruction, ready) = Command::split_bits(repr.bits);
        Self {
            id: repr.id,
            time: repr.time,
            instruction,
            ready,
            color: repr.color,
        }
    }
}
