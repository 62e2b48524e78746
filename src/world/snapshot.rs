//! The canonical, decision-ready world snapshot.

use super::entity::{BallState, RobotState};
use crate::core::{TeamColor, MAX_ROBOTS};
use crate::time::TimePoint;
use crate::wire::{PayloadKind, WirePayload};
use serde::{Deserialize, Serialize};

/// Which of the two robot collections to address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Own,
    Opp,
}

/// Filtered state of the ball and both teams.
///
/// Each team is a fixed array of [`MAX_ROBOTS`] entries where the entry at
/// index `i` always has identifier `i`, so lookups are direct indexing.
/// The arrays are not exposed mutably as slices, which would allow
/// entries to be swapped.
///
/// # Example
///
/// ```rust
/// use matchstate::core::{TeamColor, MAX_ROBOTS};
/// use matchstate::world::{Team, WorldState};
///
/// let world = WorldState::new(TeamColor::Yellow);
/// for id in 0..MAX_ROBOTS as u32 {
///     assert_eq!(world.robot(Team::Own, id).unwrap().id(), id);
///     assert_eq!(world.robot(Team::Opp, id).unwrap().id(), id);
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "WorldRepr", into = "WorldRepr")]
pub struct WorldState {
    pub time: TimePoint,
    pub ball: BallState,
    own_robots: [RobotState; MAX_ROBOTS],
    opp_robots: [RobotState; MAX_ROBOTS],
}

impl WorldState {
    pub fn new(our_color: TeamColor) -> Self {
        Self {
            time: TimePoint::default(),
            ball: BallState::default(),
            own_robots: std::array::from_fn(|i| RobotState::new(i as u32, our_color)),
            opp_robots: std::array::from_fn(|i| RobotState::new(i as u32, our_color.opponent())),
        }
    }

    pub fn robots(&self, team: Team) -> &[RobotState] {
        match team {
            Team::Own => &self.own_robots,
            Team::Opp => &self.opp_robots,
        }
    }

    pub fn robots_mut(&mut self, team: Team) -> impl Iterator<Item = &mut RobotState> + '_ {
        let robots = match team {
            Team::Own => &mut self.own_robots,
            Team::Opp => &mut self.opp_robots,
        };
        robots.iter_mut()
    }

    pub fn robot(&self, team: Team, id: u32) -> Option<&RobotState> {
        self.robots(team).get(id as usize)
    }

    pub fn robot_mut(&mut self, team: Team, id: u32) -> Option<&mut RobotState> {
        let robots = match team {
            Team::Own => &mut self.own_robots,
            Team::Opp => &mut self.opp_robots,
        };
        robots.get_mut(id as usize)
    }

    /// Robots of one team that are currently seen.
    pub fn seen_robots(&self, team: Team) -> impl Iterator<Item = &RobotState> + '_ {
        self.robots(team).iter().filter(|r| r.seen_state.is_seen())
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(TeamColor::default())
    }
}

impl WirePayload for WorldState {
    const KIND: PayloadKind = PayloadKind::World;
}

/// Wire shape: robots as lists, placed back by identifier on decode.
#[derive(Clone, Serialize, Deserialize)]
struct WorldRepr {
    time: TimePoint,
    ball: BallState,
    own_robots: Vec<RobotState>,
    opp_robots: Vec<RobotState>,
}

impl From<WorldState> for WorldRepr {
    fn from(world: WorldState) -> Self {
        Self {
            time: world.time,
            ball: world.ball,
            own_robots: world.own_robots.into(),
            opp_robots: world.opp_robots.into(),
        }
    }
}

impl From<WorldRepr> for WorldState {
    fn from(repr: WorldRepr) -> Self {
        let mut world = WorldState::default();
        world.time = repr.time;
        world.ball = repr.ball;
        place_by_id(&mut world.own_robots, repr.own_robots, "own");
        place_by_id(&mut world.opp_robots, repr.opp_robots, "opp");
        world
    }
}

fn place_by_id(slots: &mut [RobotState; MAX_ROBOTS], robots: Vec<RobotState>, team: &str) {
    for robot in robots {
        match slots.get_mut(robot.id() as usize) {
            Some(slot) => *slot = robot,
            None => tracing::warn!(
                id = robot.id(),
                max = MAX_ROBOTS,
                "ignoring {} robot with out-of-range identifier",
                team
            ),
        }
    }
}
