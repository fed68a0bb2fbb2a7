//! Match controller: round countdown and win determination.

use crate::types::*;

pub struct RoundVerdict {
    pub ticks_remaining: u32,
    pub winner: Option<Winner>,
}

/// Decrement the round clock and decide the winner, if any. Deaths are
/// checked before timer expiry, fighter 0's before fighter 1's, so a
/// simultaneous KO awards the round to fighter 1.
pub fn evaluate_round(ticks_remaining: u32, fighters: &[FighterState; 2]) -> RoundVerdict {
    let ticks_remaining = ticks_remaining.saturating_sub(1);

    if fighters[0].is_dead() {
        return RoundVerdict {
            ticks_remaining,
            winner: Some(Winner::Fighter(fighters[1].id)),
        };
    }
    if fighters[1].is_dead() {
        return RoundVerdict {
            ticks_remaining,
            winner: Some(Winner::Fighter(fighters[0].id)),
        };
    }

    if ticks_remaining == 0 {
        let winner = if fighters[0].health > fighters[1].health {
            Winner::Fighter(fighters[0].id)
        } else if fighters[1].health > fighters[0].health {
            Winner::Fighter(fighters[1].id)
        } else {
            Winner::Draw
        };
        return RoundVerdict {
            ticks_remaining,
            winner: Some(winner),
        };
    }

    RoundVerdict {
        ticks_remaining,
        winner: None,
    }
}
