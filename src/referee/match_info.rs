//! Match type and stage progression.

crate::wire_enum! {
    pub enum MatchType: i32 {
        Unknown = 0,
        GroupPhase = 1,
        EliminationPhase = 2,
        Friendly = 3,
    }
    fallback: Unknown
}

crate::wire_enum! {
    /// Coarse match phase, in the order the authority moves through them.
    ///
    /// Stored as reported; nothing in this crate advances it.
    pub enum Stage: i32 {
        None = -1,
        /// A kickoff is called within this stage; it ends with a normal start.
        NormalFirstHalfPre = 0,
        NormalFirstHalf = 1,
        NormalHalfTime = 2,
        /// A kickoff is called within this stage; it ends with a normal start.
        NormalSecondHalfPre = 3,
        NormalSecondHalf = 4,
        ExtraTimeBreak = 5,
        ExtraFirstHalfPre = 6,
        ExtraFirstHalf = 7,
        ExtraHalfTime = 8,
        ExtraSecondHalfPre = 9,
        ExtraSecondHalf = 10,
        PenaltyShootoutBreak = 11,
        PenaltyShootout = 12,
        PostGame = 13,
    }
    fallback: None
    final: [PostGame]
}

impl Stage {
    /// Stages that open with a kickoff.
    pub fn is_pre(self) -> bool {
        matches!(
            self,
            Self::NormalFirstHalfPre
                | Self::NormalSecondHalfPre
                | Self::ExtraFirstHalfPre
                | Self::ExtraSecondHalfPre
        )
    }

    pub fn is_break(self) -> bool {
        matches!(
            self,
            Self::NormalHalfTime
                | Self::ExtraTimeBreak
                | Self::ExtraHalfTime
                | Self::PenaltyShootoutBreak
        )
    }

    /// Stages in which the ball is played.
    pub fn is_half(self) -> bool {
        matches!(
            self,
            Self::NormalFirstHalf
                | Self::NormalSecondHalf
                | Self::ExtraFirstHalf
                | Self::ExtraSecondHalf
                | Self::PenaltyShootout
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    #[test]
    fn stages_are_ordered_by_wire_value() {
        let values: Vec<i32> = Stage::ALL.iter().map(|s| i32::from(*s)).collect();
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(values, sorted);
        assert_eq!(Stage::ALL.len(), 15);
    }

    #[test]
    fn post_game_is_terminal() {
        assert!(Stage::PostGame.is_final());
        assert_eq!(Stage::ALL.iter().filter(|s| s.is_final()).count(), 1);
    }

    #[test]
    fn every_known_stage_has_one_class() {
        for stage in Stage::ALL.iter().filter(|s| !s.is_unknown() && !s.is_final()) {
            let classes = [stage.is_pre(), stage.is_break(), stage.is_half()];
            assert_eq!(classes.iter().filter(|c| **c).count(), 1, "{stage:?}");
        }
    }

    #[test]
    fn unknown_values_degrade() {
        assert_eq!(Stage::from(14), Stage::None);
        assert_eq!(Stage::from(-2), Stage::None);
        assert_eq!(MatchType::from(4), MatchType::Unknown);
        assert_eq!(MatchType::from(2), MatchType::EliminationPhase);
    }
}
