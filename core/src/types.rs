use serde::{Deserialize, Serialize};

// ── Primitives ──────────────────────────────────────────────

pub type FighterId = i32;
pub type Tick = u32;

/// Facing direction: Right = 1, Left = -1.
pub mod facing {
    pub const RIGHT: i32 = 1;
    pub const LEFT: i32 = -1;
}

// ── Actions ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackKind {
    Jab = 0,
    Kick = 1,
    Heavy = 2,
}

/// One discrete action per fighter per tick. Anything illegal for the
/// fighter's current state is silently a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Idle,
    MoveLeft,
    MoveRight,
    Jump,
    Attack(AttackKind),
    Block,
}

pub const NULL_ACTION: Action = Action::Idle;

impl Action {
    /// Stable byte encoding, used for transcript hashing.
    pub fn code(self) -> u8 {
        match self {
            Action::Idle => 0,
            Action::MoveLeft => 1,
            Action::MoveRight => 2,
            Action::Jump => 3,
            Action::Attack(AttackKind::Jab) => 4,
            Action::Attack(AttackKind::Kick) => 5,
            Action::Attack(AttackKind::Heavy) => 6,
            Action::Block => 7,
        }
    }

    pub fn from_code(v: u8) -> Option<Self> {
        match v {
            0 => Some(Action::Idle),
            1 => Some(Action::MoveLeft),
            2 => Some(Action::MoveRight),
            3 => Some(Action::Jump),
            4 => Some(Action::Attack(AttackKind::Jab)),
            5 => Some(Action::Attack(AttackKind::Kick)),
            6 => Some(Action::Attack(AttackKind::Heavy)),
            7 => Some(Action::Block),
            _ => None,
        }
    }
}

// ── Attacks ─────────────────────────────────────────────────

/// Per-attack timing and geometry. The config carries one definition
/// per `AttackKind`; fighters never store a copy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackSpec {
    /// Frames before the hitbox appears.
    pub startup: i32,
    /// Frames the hitbox is live.
    pub active: i32,
    /// Frames after the hitbox, action still locked.
    pub recovery: i32,
    pub damage: i32,
    pub knockback_x: f64,
    pub hitbox_w: f64,
    pub hitbox_h: f64,
    /// Horizontal offset from the fighter origin, mirrored when facing left.
    pub hitbox_offset_x: f64,
    pub hitbox_offset_y: f64,
}

impl AttackSpec {
    pub fn total(&self) -> i32 {
        self.startup + self.active + self.recovery
    }
}

// ── Fighter ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FighterStatus {
    Idle,
    Move,
    Jump,
    Attack,
    Block,
    BlockStun,
    HitStun,
    Dead,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FighterState {
    pub id: FighterId,
    /// Origin is at the fighter's feet; y grows downward.
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub facing: i32,
    pub health: i32,
    pub status: FighterStatus,
    /// Ticks spent in the current status, reset on every transition.
    pub state_frame: i32,
    /// Remaining hitstun/blockstun ticks.
    pub stun_ticks: i32,
    /// Set once the current attack instance has connected.
    pub has_hit: bool,
    pub grounded: bool,
    /// Which attack is in flight while `status == Attack`.
    pub attack: Option<AttackKind>,
}

impl FighterState {
    /// Transition to a new status, resetting the frame counter and the
    /// has-hit flag. Re-entering the current status is a no-op.
    pub fn set_status(&mut self, status: FighterStatus) {
        if self.status != status {
            self.status = status;
            self.state_frame = 0;
            self.has_hit = false;
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

// ── Match state ─────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Fighter(FighterId),
    Draw,
}

/// Match-controller phase. `HitFreeze` is the one authoritative source
/// of "the simulation is paused": while it holds, only the freeze
/// timer runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Active,
    HitFreeze { ticks_left: i32 },
    Over,
}

/// Discrete outcome tag for one tick, for scoring/broadcast/rendering
/// consumers. At most one per tick; match end takes precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    Hit { attacker: FighterId, damage: i32 },
    Blocked { attacker: FighterId, chip: i32 },
    DoubleHit,
    MatchOver { winner: Winner },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tick: Tick,
    pub fighters: [FighterState; 2],
    /// Round clock, counts down while the phase is `Active`.
    pub ticks_remaining: u32,
    pub phase: MatchPhase,
    pub winner: Option<Winner>,
}

// ── Config ──────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f64,
    pub facing: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub arena_left: f64,
    pub arena_right: f64,
    pub ground_y: f64,
    pub gravity: f64,
    /// Fixed timestep in seconds.
    pub dt: f64,
    pub move_speed: f64,
    pub jump_velocity: f64,
    /// Fighters are pushed apart to at least this horizontal distance.
    pub min_separation: f64,
    pub max_health: i32,
    pub round_ticks: u32,
    pub hitstun_ticks: i32,
    /// Upward impulse on an unblocked hit.
    pub hit_launch_vy: f64,
    /// Damage taken through a successful block.
    pub chip_damage: i32,
    pub block_knockback_scale: f64,
    /// Post-hit freeze duration; 0 disables the freeze entirely.
    pub hit_freeze_ticks: i32,
    /// Attack definitions, indexed by `AttackKind`. A definition with
    /// `active == 0` is legal and simply never produces a hitbox.
    pub attacks: [AttackSpec; 3],
    pub spawns: [SpawnPoint; 2],
}

impl MatchConfig {
    pub fn attack(&self, kind: AttackKind) -> &AttackSpec {
        &self.attacks[kind as usize]
    }
}

// ── Replay I/O ──────────────────────────────────────────────

/// Input to the replay driver: config + one action pair per tick.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplayInput {
    pub config: MatchConfig,
    pub transcript: Vec<[Action; 2]>,
}

/// Summary emitted after a replay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayOutput {
    pub winner: Option<Winner>,
    pub final_health: [i32; 2],
    pub ticks: Tick,
    /// SHA-256 hash of the full action transcript.
    pub transcript_hash: [u8; 32],
}
