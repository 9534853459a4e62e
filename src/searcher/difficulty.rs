use std::fmt;
use std::str::FromStr;

use crate::position::error::ParseError;

/// Named strength tiers for the automated player. Each tier is nothing more
/// than a fixed search depth.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

struct Tier {
    difficulty: Difficulty,
    search_depth: u8,
    name: &'static str,
}

const TIERS: [Tier; 3] = [
    Tier {
        difficulty: Difficulty::Easy,
        search_depth: 1,
        name: "Easy",
    },
    Tier {
        difficulty: Difficulty::Medium,
        search_depth: 2,
        name: "Medium",
    },
    Tier {
        difficulty: Difficulty::Hard,
        search_depth: 3,
        name: "Hard",
    },
];

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    fn tier(&self) -> &'static Tier {
        &TIERS[*self as usize]
    }

    /// Plies searched below the root move.
    pub fn search_depth(&self) -> u8 {
        self.tier().search_depth
    }

    pub fn display_name(&self) -> &'static str {
        self.tier().name
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// used for parsing cli args
impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        TIERS
            .iter()
            .find(|tier| tier.name.eq_ignore_ascii_case(input.trim()))
            .map(|tier| tier.difficulty)
            .ok_or_else(|| ParseError::InvalidDifficulty {
                input: input.to_string(),
            })
    }
}
