//! Raw detection ingestion.
//!
//! - `FrameLedger`: append-only per-camera capture records
//! - `RawBall` / `RawRobot`: unfiltered observations that point back at
//!   their frame by position
//! - `RawWorldState`: the buffer that owns both and ingests camera messages

mod frame;
mod ledger;
mod observation;
mod raw_world;

pub use frame::RawFrame;
pub use ledger::{FrameIdx, FrameLedger};
pub use observation::{Observed, RawBall, RawRobot, Sourced};
pub use raw_world::RawWorldState;
