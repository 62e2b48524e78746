//! Core `Phase` trait for enumerated protocol states.
//!
//! Stages, game states and visibility classes all share the same shape:
//! a closed set of variants with a wire integer, a display name, and a
//! fallback variant that unknown wire values degrade to.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for enumerated protocol states.
///
/// All methods are pure. Implementations are normally generated by
/// [`wire_enum!`](crate::wire_enum), which also provides the integer
/// conversions used on the wire.
///
/// # Example
///
/// ```rust
/// use matchstate::core::Phase;
/// use matchstate::referee::Stage;
///
/// assert_eq!(Stage::NormalFirstHalf.name(), "NormalFirstHalf");
/// assert!(Stage::PostGame.is_final());
/// assert!(Stage::None.is_unknown());
/// ```
pub trait Phase: Copy + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Get the variant's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this is a terminal variant.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is the fallback variant unknown wire values map to.
    ///
    /// Default implementation returns `false`.
    fn is_unknown(&self) -> bool {
        false
    }
}
