//! SHA-256 commitments over transcripts and snapshots. Snapshot
//! digests give determinism tests and the replay driver a cheap
//! bit-exact equality check.

use sha2::{Digest, Sha256};

use crate::types::*;

/// SHA-256 hash of the full action transcript.
pub fn hash_transcript(transcript: &[[Action; 2]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for pair in transcript {
        for action in pair {
            hasher.update([action.code()]);
        }
    }
    hasher.finalize().into()
}

fn status_code(status: FighterStatus) -> u8 {
    match status {
        FighterStatus::Idle => 0,
        FighterStatus::Move => 1,
        FighterStatus::Jump => 2,
        FighterStatus::Attack => 3,
        FighterStatus::Block => 4,
        FighterStatus::BlockStun => 5,
        FighterStatus::HitStun => 6,
        FighterStatus::Dead => 7,
    }
}

/// SHA-256 hash of a full game snapshot, field by field in a fixed
/// order. Two states hash equal iff every gameplay field is bit-equal.
pub fn hash_snapshot(state: &GameState) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(state.tick.to_le_bytes());
    hasher.update(state.ticks_remaining.to_le_bytes());

    match state.phase {
        MatchPhase::Active => hasher.update([0u8, 0, 0, 0, 0]),
        MatchPhase::HitFreeze { ticks_left } => {
            hasher.update([1u8]);
            hasher.update(ticks_left.to_le_bytes());
        }
        MatchPhase::Over => hasher.update([2u8, 0, 0, 0, 0]),
    }
    match state.winner {
        None => hasher.update([0u8, 0]),
        Some(Winner::Fighter(id)) => hasher.update([1u8, id as u8]),
        Some(Winner::Draw) => hasher.update([2u8, 0]),
    }

    for f in &state.fighters {
        hasher.update(f.id.to_le_bytes());
        hasher.update(f.x.to_le_bytes());
        hasher.update(f.y.to_le_bytes());
        hasher.update(f.vx.to_le_bytes());
        hasher.update(f.vy.to_le_bytes());
        hasher.update(f.facing.to_le_bytes());
        hasher.update(f.health.to_le_bytes());
        hasher.update([status_code(f.status)]);
        hasher.update(f.state_frame.to_le_bytes());
        hasher.update(f.stun_ticks.to_le_bytes());
        hasher.update([f.has_hit as u8, f.grounded as u8]);
        hasher.update([f.attack.map(|k| Action::Attack(k).code()).unwrap_or(0)]);
    }

    hasher.finalize().into()
}
