//! Hitbox/hurtbox derivation and hit resolution.
//!
//! Both attack directions are evaluated every tick against the same
//! pre-combat snapshot, so simultaneous hits land independently —
//! being hit this tick never cancels the hit you dealt this tick.

use crate::constants::{HURTBOX_H, HURTBOX_W};
use crate::geom::{overlap, Rect};
use crate::types::*;

/// Body silhouette, anchored at the feet. Absent once dead.
pub fn hurtbox(f: &FighterState) -> Option<Rect> {
    if f.status == FighterStatus::Dead {
        return None;
    }
    Some(Rect {
        x: f.x - HURTBOX_W / 2.0,
        y: f.y - HURTBOX_H,
        w: HURTBOX_W,
        h: HURTBOX_H,
    })
}

/// The live hitbox, present only while the attack's frame counter is
/// inside `[startup, startup + active)`. Mirrored when facing left.
/// A zero-active definition never produces one.
pub fn current_hitbox(f: &FighterState, config: &MatchConfig) -> Option<Rect> {
    if f.status != FighterStatus::Attack {
        return None;
    }
    let spec = config.attack(f.attack?);
    let frame = f.state_frame;
    if frame < spec.startup || frame >= spec.startup + spec.active {
        return None;
    }

    let mut x = f.x + f.facing as f64 * spec.hitbox_offset_x;
    if f.facing < 0 {
        x -= spec.hitbox_w;
    }
    Some(Rect {
        x,
        y: f.y + spec.hitbox_offset_y,
        w: spec.hitbox_w,
        h: spec.hitbox_h,
    })
}

/// One landed attack, clean or blocked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitOutcome {
    pub attacker: FighterId,
    pub damage: i32,
    pub blocked: bool,
}

pub struct CombatResult {
    pub fighters: [FighterState; 2],
    pub outcomes: Vec<HitOutcome>,
}

/// A block holds only when the defender faces the attacker's side.
fn is_blocking(defender: &FighterState, attacker: &FighterState) -> bool {
    if defender.status != FighterStatus::Block {
        return false;
    }
    let toward_attacker = if attacker.x < defender.x {
        facing::LEFT
    } else {
        facing::RIGHT
    };
    defender.facing == toward_attacker
}

/// Resolve both attacker→defender directions in fixed order (0→1 then
/// 1→0), reading from the pre-combat snapshot and writing damage,
/// knockback, and stun into the returned pair. Each attack instance
/// connects at most once, guarded by the has-hit flag.
pub fn resolve_hits(pair: &[FighterState; 2], config: &MatchConfig) -> CombatResult {
    let snapshot = *pair;
    let mut updated = *pair;
    let mut outcomes = Vec::new();

    for (ai, di) in [(0usize, 1usize), (1, 0)] {
        let attacker = &snapshot[ai];
        if attacker.has_hit {
            continue;
        }
        let hb = match current_hitbox(attacker, config) {
            Some(hb) => hb,
            None => continue,
        };
        let defender = &snapshot[di];
        let hurt = match hurtbox(defender) {
            Some(h) => h,
            None => continue,
        };
        if !overlap(&hb, &hurt) {
            continue;
        }
        let spec = match attacker.attack {
            Some(kind) => config.attack(kind),
            None => continue,
        };

        updated[ai].has_hit = true;

        let d = &mut updated[di];
        if is_blocking(defender, attacker) {
            let chip = config.chip_damage.min(defender.health);
            d.health = (defender.health - config.chip_damage).max(0);
            d.vx = attacker.facing as f64 * spec.knockback_x * config.block_knockback_scale;
            d.vy = 0.0;
            d.stun_ticks = spec.recovery;
            d.set_status(FighterStatus::BlockStun);
            outcomes.push(HitOutcome {
                attacker: attacker.id,
                damage: chip,
                blocked: true,
            });
        } else {
            let damage = spec.damage.min(defender.health);
            d.health = (defender.health - spec.damage).max(0);
            d.vx = attacker.facing as f64 * spec.knockback_x;
            d.vy = config.hit_launch_vy;
            d.stun_ticks = config.hitstun_ticks;
            d.set_status(FighterStatus::HitStun);
            outcomes.push(HitOutcome {
                attacker: attacker.id,
                damage,
                blocked: false,
            });
        }
    }

    CombatResult {
        fighters: updated,
        outcomes,
    }
}
