//! Matchstate: the game state core of a robot soccer stack
//!
//! Everything here is a pure, synchronous value transformation. Input
//! threads each own their buffers and hand finished values to planning
//! by move; no type in this crate holds a lock.
//!
//! # Core Concepts
//!
//! - **Vision**: a raw detection buffer whose observations point back at
//!   the camera frame they came from
//! - **World**: the filtered snapshot, with robots indexed by their id
//! - **Referee**: decoded commands, the aggregate referee state, and the
//!   legality rules evaluated over it
//! - **Wire**: inbound message schemas and a versioned binary envelope
//!
//! # Example
//!
//! ```rust
//! use matchstate::referee::{rules, GameState, RefereeState};
//! use matchstate::time::TimePoint;
//! use matchstate::vision::RawWorldState;
//! use matchstate::wire::vision::{DetectionBall, DetectionFrame};
//! use matchstate::TeamColor;
//!
//! let mut raw = RawWorldState::new(TimePoint::from_micros(0));
//! raw.ingest(&DetectionFrame {
//!     camera_id: 3,
//!     frame_number: 100,
//!     balls: vec![DetectionBall { confidence: 0.9, ..Default::default() }],
//!     ..Default::default()
//! });
//!
//! let ball = raw.balls().next().unwrap();
//! assert_eq!(ball.source_frame().camera_id, 3);
//!
//! let referee = RefereeState { state: GameState::Stop, ..Default::default() };
//! assert!(rules::should_slow_down(&referee));
//! assert!(!rules::can_kick_ball(&referee, TeamColor::Yellow));
//! ```

pub mod config;
pub mod core;
pub mod geom;
pub mod referee;
pub mod time;
pub mod vision;
pub mod wire;
pub mod world;

// Re-export commonly used types
pub use core::{Phase, TeamColor, TeamSide, MAX_ROBOTS};
pub use referee::{Command, GameState, Legality, RefereeState};
pub use vision::{FrameIdx, RawWorldState};
pub use world::WorldState;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use tracing;
}
