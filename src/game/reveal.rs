// Mapping from wrong-guess count to the astronaut stages that are drawn

/// One cumulative part of the astronaut illustration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    Helmet,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    /// Also triggers the distress sparks
    RightLeg,
}

impl RevealStage {
    /// All stages in unlock order
    pub const ALL: [RevealStage; 6] = [
        RevealStage::Helmet,
        RevealStage::Torso,
        RevealStage::LeftArm,
        RevealStage::RightArm,
        RevealStage::LeftLeg,
        RevealStage::RightLeg,
    ];

    /// Wrong-guess count at which this stage appears (1-based)
    pub fn threshold(self) -> u32 {
        match self {
            RevealStage::Helmet => 1,
            RevealStage::Torso => 2,
            RevealStage::LeftArm => 3,
            RevealStage::RightArm => 4,
            RevealStage::LeftLeg => 5,
            RevealStage::RightLeg => 6,
        }
    }

    pub fn is_revealed(self, wrong_guesses: u32) -> bool {
        wrong_guesses >= self.threshold()
    }
}

/// Stages to draw, in unlock order
pub fn revealed_stages(wrong_guesses: u32) -> impl Iterator<Item = RevealStage> {
    RevealStage::ALL
        .into_iter()
        .filter(move |stage| stage.is_revealed(wrong_guesses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_WRONG;

    #[test]
    fn test_stage_count_matches_wrong_guesses() {
        for wrong in 0..=MAX_WRONG + 2 {
            assert_eq!(revealed_stages(wrong).count() as u32, wrong.min(MAX_WRONG));
        }
    }

    #[test]
    fn test_stages_unlock_in_order() {
        let stages: Vec<_> = revealed_stages(3).collect();
        assert_eq!(
            stages,
            vec![RevealStage::Helmet, RevealStage::Torso, RevealStage::LeftArm]
        );
    }

    #[test]
    fn test_no_stages_before_first_miss() {
        assert_eq!(revealed_stages(0).count(), 0);
    }

    #[test]
    fn test_right_leg_only_at_max() {
        assert!(!RevealStage::RightLeg.is_revealed(MAX_WRONG - 1));
        assert!(RevealStage::RightLeg.is_revealed(MAX_WRONG));
    }
}
