use crate::types::{AttackKind, AttackSpec};

// All values are per-tick at 60 Hz unless noted.

// Physics (pixels, seconds; y grows downward)
pub const TICK_RATE: u32 = 60;
pub const DT: f64 = 1.0 / TICK_RATE as f64;
pub const GRAVITY: f64 = 2000.0;
pub const MOVE_SPEED: f64 = 340.0;
pub const JUMP_VELOCITY: f64 = -900.0;

// Arena
pub const GROUND_Y: f64 = 520.0;
pub const ARENA_LEFT: f64 = 40.0;
pub const ARENA_RIGHT: f64 = 920.0;
pub const MIN_SEPARATION: f64 = 48.0;

// Fighter body silhouette (hurtbox), anchored at the feet
pub const HURTBOX_W: f64 = 36.0;
pub const HURTBOX_H: f64 = 90.0;

// Health / combat
pub const MAX_HEALTH: i32 = 100;
pub const HITSTUN_TICKS: i32 = 16;
pub const HIT_LAUNCH_VY: f64 = -240.0;
pub const CHIP_DAMAGE: i32 = 0;
pub const BLOCK_KNOCKBACK_SCALE: f64 = 0.5;

// Match rules
pub const ROUND_TICKS: u32 = 3600; // 60 seconds
pub const HIT_FREEZE_TICKS: i32 = 0;

// Default spawns
pub const SPAWN_X: [f64; 2] = [280.0, 680.0];

/// The default attack table, keyed by attack kind. `MatchConfig`
/// carries its own copy, so the tuning can be overridden per match.
pub fn attack_spec(kind: AttackKind) -> AttackSpec {
    match kind {
        AttackKind::Jab => AttackSpec {
            startup: 6,
            active: 4,
            recovery: 8,
            damage: 5,
            knockback_x: 20.0,
            hitbox_w: 80.0,
            hitbox_h: 30.0,
            hitbox_offset_x: 40.0,
            hitbox_offset_y: -75.0,
        },
        AttackKind::Kick => AttackSpec {
            startup: 8,
            active: 6,
            recovery: 12,
            damage: 8,
            knockback_x: 150.0,
            hitbox_w: 120.0,
            hitbox_h: 40.0,
            hitbox_offset_x: 20.0,
            hitbox_offset_y: -55.0,
        },
        AttackKind::Heavy => AttackSpec {
            startup: 12,
            active: 8,
            recovery: 20,
            damage: 15,
            knockback_x: 400.0,
            hitbox_w: 120.0,
            hitbox_h: 60.0,
            hitbox_offset_x: 60.0,
            hitbox_offset_y: -80.0,
        },
    }
}
