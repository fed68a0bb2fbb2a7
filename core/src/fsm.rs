//! Fighter state machine: which actions are legal in which status, and
//! the frame-gated timer transitions that run every tick.

use crate::types::*;

/// A fighter accepts new actions only while idle, moving, or blocking.
/// Mid-attack, stunned, airborne, and dead fighters ignore input.
pub fn accepts_input(f: &FighterState) -> bool {
    matches!(
        f.status,
        FighterStatus::Idle | FighterStatus::Move | FighterStatus::Block
    )
}

/// Apply one requested action. Illegal requests are dropped silently,
/// never an error.
pub fn apply_action(prev: &FighterState, action: Action, config: &MatchConfig) -> FighterState {
    if !accepts_input(prev) {
        return *prev;
    }

    let mut f = *prev;

    // Releasing block: any non-block action drops back to idle first,
    // then applies normally this same tick.
    if f.status == FighterStatus::Block && action != Action::Block {
        f.set_status(FighterStatus::Idle);
    }

    match action {
        Action::Idle => {
            f.vx = 0.0;
            if f.grounded && f.status == FighterStatus::Move {
                f.set_status(FighterStatus::Idle);
            }
        }
        Action::MoveLeft | Action::MoveRight => {
            let dir = if action == Action::MoveLeft { -1.0 } else { 1.0 };
            f.vx = dir * config.move_speed;
            if f.grounded {
                f.set_status(FighterStatus::Move);
            }
        }
        Action::Jump => {
            if f.grounded {
                f.vy = config.jump_velocity;
                f.set_status(FighterStatus::Jump);
            }
        }
        Action::Attack(kind) => {
            f.attack = Some(kind);
            f.set_status(FighterStatus::Attack);
            f.vx = 0.0;
        }
        Action::Block => {
            f.set_status(FighterStatus::Block);
            f.vx = 0.0;
        }
    }

    f
}

/// Advance the per-status frame counter, decrement stun, and perform
/// the forced reversions: attack completion, stun expiry, landing.
/// Health ≤ 0 overrides everything with `Dead`.
pub fn advance_timers(prev: &FighterState, config: &MatchConfig) -> FighterState {
    let mut f = *prev;
    f.state_frame += 1;

    match f.status {
        FighterStatus::HitStun | FighterStatus::BlockStun => {
            f.stun_ticks -= 1;
            if f.stun_ticks <= 0 && !f.is_dead() {
                f.set_status(FighterStatus::Idle);
            }
        }
        FighterStatus::Attack => {
            let total = f.attack.map(|k| config.attack(k).total()).unwrap_or(0);
            if f.state_frame >= total {
                f.attack = None;
                f.set_status(FighterStatus::Idle);
            }
        }
        FighterStatus::Jump => {
            if f.grounded {
                f.set_status(FighterStatus::Idle);
            }
        }
        _ => {}
    }

    if f.is_dead() && f.status != FighterStatus::Dead {
        f.set_status(FighterStatus::Dead);
        f.vx = 0.0;
    }

    f
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GROUND_Y, MAX_HEALTH};
    use crate::init::default_config;

    fn grounded_fighter(id: i32, x: f64) -> FighterState {
        FighterState {
            id,
            x,
            y: GROUND_Y,
            vx: 0.0,
            vy: 0.0,
            facing: facing::RIGHT,
            health: MAX_HEALTH,
            status: FighterStatus::Idle,
            state_frame: 0,
            stun_ticks: 0,
            has_hit: false,
            grounded: true,
            attack: None,
        }
    }

    #[test]
    fn attack_from_idle() {
        let config = default_config();
        let f = grounded_fighter(0, 300.0);
        let result = apply_action(&f, Action::Attack(AttackKind::Jab), &config);
        assert_eq!(result.status, FighterStatus::Attack);
        assert_eq!(result.attack, Some(AttackKind::Jab));
        assert_eq!(result.state_frame, 0);
        assert!(!result.has_hit);
        assert_eq!(result.vx, 0.0);
    }

    #[test]
    fn attack_ignored_while_attacking() {
        let config = default_config();
        let mut f = grounded_fighter(0, 300.0);
        f.set_status(FighterStatus::Attack);
        f.attack = Some(AttackKind::Jab);
        f.state_frame = 3;
        let result = apply_action(&f, Action::Attack(AttackKind::Heavy), &config);
        assert_eq!(result.attack, Some(AttackKind::Jab));
        assert_eq!(result.state_frame, 3);
    }

    #[test]
    fn input_ignored_while_stunned_or_dead() {
        let config = default_config();
        for status in [
            FighterStatus::HitStun,
            FighterStatus::BlockStun,
            FighterStatus::Dead,
        ] {
            let mut f = grounded_fighter(0, 300.0);
            f.set_status(status);
            let result = apply_action(&f, Action::MoveRight, &config);
            assert_eq!(result.status, status);
            assert_eq!(result.vx, 0.0);
        }
    }

    #[test]
    fn movement_sets_velocity_and_state() {
        let config = default_config();
        let f = grounded_fighter(0, 300.0);
        let result = apply_action(&f, Action::MoveRight, &config);
        assert_eq!(result.vx, config.move_speed);
        assert_eq!(result.status, FighterStatus::Move);

        let result = apply_action(&f, Action::MoveLeft, &config);
        assert_eq!(result.vx, -config.move_speed);
    }

    #[test]
    fn airborne_movement_is_ignored() {
        let config = default_config();
        let mut f = grounded_fighter(0, 300.0);
        f.grounded = false;
        f.set_status(FighterStatus::Jump);
        // Jump state ignores input entirely
        let result = apply_action(&f, Action::MoveRight, &config);
        assert_eq!(result.status, FighterStatus::Jump);
        assert_eq!(result.vx, 0.0);
    }

    #[test]
    fn jump_only_when_grounded() {
        let config = default_config();
        let f = grounded_fighter(0, 300.0);
        let result = apply_action(&f, Action::Jump, &config);
        assert_eq!(result.vy, config.jump_velocity);
        assert_eq!(result.status, FighterStatus::Jump);

        let mut airborne = grounded_fighter(0, 300.0);
        airborne.grounded = false;
        let result2 = apply_action(&airborne, Action::Jump, &config);
        assert_eq!(result2.vy, 0.0);
        assert_ne!(result2.status, FighterStatus::Jump);
    }

    #[test]
    fn block_and_release() {
        let config = default_config();
        let f = grounded_fighter(0, 300.0);
        let blocking = apply_action(&f, Action::Block, &config);
        assert_eq!(blocking.status, FighterStatus::Block);
        assert_eq!(blocking.vx, 0.0);

        // Holding block keeps the state and its frame counter
        let held = apply_action(&blocking, Action::Block, &config);
        assert_eq!(held.status, FighterStatus::Block);

        // Releasing returns to idle
        let released = apply_action(&blocking, Action::Idle, &config);
        assert_eq!(released.status, FighterStatus::Idle);

        // Releasing straight into an attack works the same tick
        let counter = apply_action(&blocking, Action::Attack(AttackKind::Kick), &config);
        assert_eq!(counter.status, FighterStatus::Attack);
    }

    #[test]
    fn attack_reverts_to_idle_after_total_frames() {
        let config = default_config();
        let mut f = grounded_fighter(0, 300.0);
        f.set_status(FighterStatus::Attack);
        f.attack = Some(AttackKind::Jab);
        let total = config.attack(AttackKind::Jab).total();

        for _ in 0..total - 1 {
            f = advance_timers(&f, &config);
            assert_eq!(f.status, FighterStatus::Attack);
        }
        f = advance_timers(&f, &config);
        assert_eq!(f.status, FighterStatus::Idle);
        assert_eq!(f.attack, None);
    }

    #[test]
    fn stun_expires_to_idle() {
        let config = default_config();
        let mut f = grounded_fighter(0, 300.0);
        f.set_status(FighterStatus::HitStun);
        f.stun_ticks = 3;
        f = advance_timers(&f, &config);
        f = advance_timers(&f, &config);
        assert_eq!(f.status, FighterStatus::HitStun);
        f = advance_timers(&f, &config);
        assert_eq!(f.status, FighterStatus::Idle);
    }

    #[test]
    fn dead_fighter_stays_dead() {
        let config = default_config();
        let mut f = grounded_fighter(0, 300.0);
        f.health = 0;
        f.set_status(FighterStatus::HitStun);
        f.stun_ticks = 1;
        f = advance_timers(&f, &config);
        assert_eq!(f.status, FighterStatus::Dead);
        assert_eq!(f.vx, 0.0);

        let after = advance_timers(&f, &config);
        assert_eq!(after.status, FighterStatus::Dead);
    }

    #[test]
    fn landing_ends_jump() {
        let config = default_config();
        let mut f = grounded_fighter(0, 300.0);
        f.set_status(FighterStatus::Jump);
        f.grounded = false;
        f = advance_timers(&f, &config);
        assert_eq!(f.status, FighterStatus::Jump);
        f.grounded = true;
        f = advance_timers(&f, &config);
        assert_eq!(f.status, FighterStatus::Idle);
    }
}
