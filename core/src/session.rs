//! Stateful facade over the pure transition function, for drivers that
//! latch inputs asynchronously (input devices, AI controllers, network
//! peers) and step on their own cadence.

use crate::init::create_initial_state;
use crate::step::step;
use crate::types::*;

pub struct Session {
    config: MatchConfig,
    state: GameState,
    latched: [Option<Action>; 2],
}

impl Session {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            state: create_initial_state(&config),
            latched: [None, None],
        }
    }

    /// Latch a fighter's next action. Overwrites any previously latched
    /// action for that fighter; ids outside 0..2 are ignored.
    pub fn latch(&mut self, id: FighterId, action: Action) {
        if let Ok(i) = usize::try_from(id) {
            if i < 2 {
                self.latched[i] = Some(action);
            }
        }
    }

    /// Step one tick from whatever is latched; a missing action is a
    /// no-op, never a wait. Clears the latch.
    pub fn step_latched(&mut self) -> Option<TickEvent> {
        let actions = [
            self.latched[0].take().unwrap_or(NULL_ACTION),
            self.latched[1].take().unwrap_or(NULL_ACTION),
        ];
        self.step(actions)
    }

    /// Step one tick with explicit actions.
    pub fn step(&mut self, actions: [Action; 2]) -> Option<TickEvent> {
        let (next, event) = step(&self.state, &actions, &self.config);
        self.state = next;
        event
    }

    /// Discard the current match and start a fresh one.
    pub fn reset(&mut self, config: MatchConfig) {
        self.config = config;
        self.state = create_initial_state(&self.config);
        self.latched = [None, None];
    }

    /// Read-only view of the current state, for rendering/broadcast.
    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::default_config;

    #[test]
    fn latched_step_defaults_to_idle() {
        let mut session = Session::new(default_config());
        session.step_latched();
        assert_eq!(session.snapshot().tick, 1);
        assert_eq!(session.snapshot().fighters[0].status, FighterStatus::Idle);
    }

    #[test]
    fn latch_is_consumed_once() {
        let mut session = Session::new(default_config());
        session.latch(0, Action::Attack(AttackKind::Jab));
        session.step_latched();
        assert_eq!(session.snapshot().fighters[0].status, FighterStatus::Attack);

        // Nothing latched anymore: the attack runs out on its own
        // timeline and no new one starts after it.
        let total = crate::constants::attack_spec(AttackKind::Jab).total();
        for _ in 0..total {
            session.step_latched();
        }
        assert_eq!(session.snapshot().fighters[0].status, FighterStatus::Idle);
    }

    #[test]
    fn latch_overwrite_keeps_last() {
        let mut session = Session::new(default_config());
        session.latch(1, Action::MoveLeft);
        session.latch(1, Action::Jump);
        session.step_latched();
        assert_eq!(session.snapshot().fighters[1].status, FighterStatus::Jump);
    }

    #[test]
    fn out_of_range_id_ignored() {
        let mut session = Session::new(default_config());
        session.latch(-1, Action::Jump);
        session.latch(2, Action::Jump);
        session.step_latched();
        assert_eq!(session.snapshot().fighters[0].status, FighterStatus::Idle);
        assert_eq!(session.snapshot().fighters[1].status, FighterStatus::Idle);
    }

    #[test]
    fn reset_reconstructs_fresh_match() {
        let config = default_config();
        let mut session = Session::new(config);
        for _ in 0..50 {
            session.step([Action::MoveRight, Action::Idle]);
        }
        assert_ne!(session.snapshot().fighters[0].x, config.spawns[0].x);

        session.reset(config);
        assert_eq!(session.snapshot().tick, 0);
        assert_eq!(session.snapshot().fighters[0].x, config.spawns[0].x);
        assert_eq!(session.snapshot().winner, None);
    }
}
