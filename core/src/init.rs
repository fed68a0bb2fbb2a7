use crate::constants::*;
use crate::types::*;

/// Create the initial game state from a match config.
pub fn create_initial_state(config: &MatchConfig) -> GameState {
    let mut fighters = [FighterState {
        id: 0,
        x: 0.0,
        y: config.ground_y,
        vx: 0.0,
        vy: 0.0,
        facing: facing::RIGHT,
        health: config.max_health,
        status: FighterStatus::Idle,
        state_frame: 0,
        stun_ticks: 0,
        has_hit: false,
        grounded: true,
        attack: None,
    }; 2];

    for (i, f) in fighters.iter_mut().enumerate() {
        f.id = i as FighterId;
        f.x = config.spawns[i].x;
        f.facing = config.spawns[i].facing;
    }

    GameState {
        tick: 0,
        fighters,
        ticks_remaining: config.round_ticks,
        phase: MatchPhase::Active,
        winner: None,
    }
}

/// Default config: the standard arena and tuning constants.
pub fn default_config() -> MatchConfig {
    MatchConfig {
        arena_left: ARENA_LEFT,
        arena_right: ARENA_RIGHT,
        ground_y: GROUND_Y,
        gravity: GRAVITY,
        dt: DT,
        move_speed: MOVE_SPEED,
        jump_velocity: JUMP_VELOCITY,
        min_separation: MIN_SEPARATION,
        max_health: MAX_HEALTH,
        round_ticks: ROUND_TICKS,
        hitstun_ticks: HITSTUN_TICKS,
        hit_launch_vy: HIT_LAUNCH_VY,
        chip_damage: CHIP_DAMAGE,
        block_knockback_scale: BLOCK_KNOCKBACK_SCALE,
        hit_freeze_ticks: HIT_FREEZE_TICKS,
        attacks: [
            attack_spec(AttackKind::Jab),
            attack_spec(AttackKind::Kick),
            attack_spec(AttackKind::Heavy),
        ],
        spawns: [
            SpawnPoint {
                x: SPAWN_X[0],
                facing: facing::RIGHT,
            },
            SpawnPoint {
                x: SPAWN_X[1],
                facing: facing::LEFT,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_correct() {
        let config = default_config();
        let state = create_initial_state(&config);
        assert_eq!(state.tick, 0);
        assert_eq!(state.ticks_remaining, config.round_ticks);
        assert_eq!(state.phase, MatchPhase::Active);
        assert_eq!(state.winner, None);

        assert_eq!(state.fighters[0].id, 0);
        assert_eq!(state.fighters[0].x, SPAWN_X[0]);
        assert_eq!(state.fighters[0].facing, facing::RIGHT);
        assert_eq!(state.fighters[0].health, MAX_HEALTH);
        assert_eq!(state.fighters[0].status, FighterStatus::Idle);
        assert!(state.fighters[0].grounded);

        assert_eq!(state.fighters[1].id, 1);
        assert_eq!(state.fighters[1].x, SPAWN_X[1]);
        assert_eq!(state.fighters[1].facing, facing::LEFT);
    }

    #[test]
    fn default_config_carries_the_attack_table() {
        let config = default_config();
        for kind in [AttackKind::Jab, AttackKind::Kick, AttackKind::Heavy] {
            assert_eq!(*config.attack(kind), attack_spec(kind));
        }
    }

    #[test]
    fn spawns_respect_min_separation() {
        let config = default_config();
        let state = create_initial_state(&config);
        let dist = (state.fighters[1].x - state.fighters[0].x).abs();
        assert!(dist >= config.min_separation);
    }
}
