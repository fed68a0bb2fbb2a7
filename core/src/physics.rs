//! Per-tick integration: gravity, position update, ground and arena
//! clamping, and the minimum-separation push-apart between fighters.

use crate::types::*;

/// Apply gravity to vertical velocity. Dead fighters are frozen.
pub fn apply_gravity(prev: &FighterState, config: &MatchConfig) -> FighterState {
    if prev.status == FighterStatus::Dead {
        return *prev;
    }
    let vy = prev.vy + config.gravity * config.dt;
    FighterState { vy, ..*prev }
}

/// Integrate position by velocity, clamp to the ground plane and the
/// arena bounds. Landing zeroes vertical velocity and sets grounded.
pub fn integrate(prev: &FighterState, config: &MatchConfig) -> FighterState {
    if prev.status == FighterStatus::Dead {
        return *prev;
    }

    let mut x = prev.x + prev.vx * config.dt;
    let mut y = prev.y + prev.vy * config.dt;
    let mut vy = prev.vy;
    let grounded;

    if y >= config.ground_y {
        y = config.ground_y;
        vy = 0.0;
        grounded = true;
    } else {
        grounded = false;
    }

    if x < config.arena_left {
        x = config.arena_left;
    }
    if x > config.arena_right {
        x = config.arena_right;
    }

    FighterState {
        x,
        y,
        vy,
        grounded,
        ..*prev
    }
}

/// Enforce the minimum horizontal separation by pushing both fighters
/// symmetrically apart from their midpoint. Order-independent: the
/// push is derived from positions alone, with fighter 0 treated as the
/// left one when both share an x coordinate.
pub fn separate(pair: &[FighterState; 2], config: &MatchConfig) -> [FighterState; 2] {
    let mut out = *pair;
    let (li, ri) = if pair[0].x <= pair[1].x { (0, 1) } else { (1, 0) };

    let dist = out[ri].x - out[li].x;
    if dist >= config.min_separation {
        return out;
    }

    let mid = (out[li].x + out[ri].x) / 2.0;
    let half = config.min_separation / 2.0;
    out[li].x = mid - half;
    out[ri].x = mid + half;

    // Pushed into a wall: keep the pair inside by shifting off it.
    if out[li].x < config.arena_left {
        out[li].x = config.arena_left;
        out[ri].x = config.arena_left + config.min_separation;
    }
    if out[ri].x > config.arena_right {
        out[ri].x = config.arena_right;
        out[li].x = config.arena_right - config.min_separation;
    }

    out
}
