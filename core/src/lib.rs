//! brawl-core: deterministic, frame-stepped two-fighter combat engine.
//!
//! One tick is one atomic, pure state transformation: given the
//! previous state and one action per fighter, `step` resolves the
//! state machine, physics, collision, combat, and match rules with no
//! I/O and no randomness. Identical inputs always replay to
//! bit-identical states.

pub mod combat;
pub mod constants;
pub mod fsm;
pub mod geom;
pub mod hash;
pub mod init;
pub mod physics;
pub mod rules;
pub mod session;
pub mod step;
pub mod types;

pub use combat::{current_hitbox, hurtbox, resolve_hits};
pub use constants::*;
pub use fsm::{advance_timers, apply_action};
pub use geom::{overlap, Rect};
pub use physics::{apply_gravity, integrate, separate};
pub use hash::{hash_snapshot, hash_transcript};
pub use init::{create_initial_state, default_config};
pub use session::Session;
pub use step::step;
pub use types::*;
