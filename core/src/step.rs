use crate::combat;
use crate::fsm;
use crate::physics;
use crate::rules;
use crate::types::*;

/// Core deterministic transition function.
///
/// Sub-step order:
///  0. Early return if the match is over (terminal state is idempotent)
///  1. Hit-freeze phase: only the freeze timer runs
///  2. Auto-face the opponent (skipped mid-attack / in stun / dead)
///  3. State machine: apply one action per fighter
///  4. Physics: gravity, integration, ground + arena clamp
///  5. Minimum-separation push-apart
///  6. Combat resolution, both directions, pre-combat snapshot
///  7. Timers: frame advance, stun/attack expiry, landing, death override
///  8. Match controller: round clock + winner
pub fn step(
    prev: &GameState,
    actions: &[Action; 2],
    config: &MatchConfig,
) -> (GameState, Option<TickEvent>) {
    // 0. Terminal match — further steps change nothing
    if prev.phase == MatchPhase::Over {
        return (*prev, None);
    }

    // 1. Post-hit freeze — skip gameplay, just tick the timer
    if let MatchPhase::HitFreeze { ticks_left } = prev.phase {
        let mut s = *prev;
        s.tick += 1;
        let left = ticks_left - 1;
        s.phase = if left <= 0 {
            MatchPhase::Active
        } else {
            MatchPhase::HitFreeze { ticks_left: left }
        };
        return (s, None);
    }

    let mut fighters = prev.fighters;

    // 2. Face each other
    for i in 0..2 {
        let can_turn = !matches!(
            fighters[i].status,
            FighterStatus::Attack
                | FighterStatus::HitStun
                | FighterStatus::BlockStun
                | FighterStatus::Dead
        );
        if can_turn {
            let dx = fighters[1 - i].x - fighters[i].x;
            if dx > 0.0 {
                fighters[i].facing = facing::RIGHT;
            } else if dx < 0.0 {
                fighters[i].facing = facing::LEFT;
            }
        }
    }

    // 3. State machine
    for i in 0..2 {
        fighters[i] = fsm::apply_action(&fighters[i], actions[i], config);
    }

    // 4. Physics
    for i in 0..2 {
        fighters[i] = physics::apply_gravity(&fighters[i], config);
        fighters[i] = physics::integrate(&fighters[i], config);
    }

    // 5. Keep the pair apart
    fighters = physics::separate(&fighters, config);

    // 6. Combat, both directions
    let combat = combat::resolve_hits(&fighters, config);
    fighters = combat.fighters;

    // 7. Timers and forced reversions
    for i in 0..2 {
        fighters[i] = fsm::advance_timers(&fighters[i], config);
    }

    // 8. Match controller
    let verdict = rules::evaluate_round(prev.ticks_remaining, &fighters);
    let (phase, winner) = match verdict.winner {
        Some(w) => (MatchPhase::Over, Some(w)),
        None if !combat.outcomes.is_empty() && config.hit_freeze_ticks > 0 => (
            MatchPhase::HitFreeze {
                ticks_left: config.hit_freeze_ticks,
            },
            None,
        ),
        None => (MatchPhase::Active, None),
    };

    let event = if let Some(w) = winner {
        Some(TickEvent::MatchOver { winner: w })
    } else if combat.outcomes.len() == 2 {
        Some(TickEvent::DoubleHit)
    } else {
        combat.outcomes.first().map(|o| {
            if o.blocked {
                TickEvent::Blocked {
                    attacker: o.attacker,
                    chip: o.damage,
                }
            } else {
                TickEvent::Hit {
                    attacker: o.attacker,
                    damage: o.damage,
                }
            }
        })
    };

    let next = GameState {
        tick: prev.tick + 1,
        fighters,
        ticks_remaining: verdict.ticks_remaining,
        phase,
        winner,
    };
    (next, event)
}
