//! Dependency tracking for the effects that follow session mutations.
//!
//! Each effect declares which parts of the session it depends on. After
//! every event the tracker compares the current dependency values with the
//! ones each effect last observed and reports only the effects whose inputs
//! changed and whose guard holds.

use super::state::Session;
use std::collections::HashMap;
use tracing::debug;

/// Effects that run because session state changed, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Fills the main screen's selectors once the user has entered.
    MainScreenLayout,
    /// Fills the roster and category selectors for the logged-in team.
    UnlockInitialization,
}

impl Effect {
    pub const ORDER: [Effect; 2] = [Effect::MainScreenLayout, Effect::UnlockInitialization];

    fn dependencies(&self, session: &Session) -> DependencyKey {
        match self {
            Effect::MainScreenLayout => DependencyKey {
                has_entered: session.has_entered(),
                selected_team: None,
            },
            Effect::UnlockInitialization => DependencyKey {
                has_entered: session.has_entered(),
                selected_team: session.selected_team().map(str::to_string),
            },
        }
    }

    fn guard(&self, session: &Session) -> bool {
        match self {
            Effect::MainScreenLayout => session.has_entered(),
            Effect::UnlockInitialization => {
                session.has_entered() && session.selected_team().is_some()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DependencyKey {
    has_entered: bool,
    selected_team: Option<String>,
}

#[derive(Debug, Default)]
pub struct EffectTracker {
    last_seen: HashMap<Effect, DependencyKey>,
}

impl EffectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects due for the current session state. Records what each effect
    /// observed, so calling again without a state change returns nothing.
    pub fn due(&mut self, session: &Session) -> Vec<Effect> {
        let mut due = Vec::new();
        for effect in Effect::ORDER {
            let key = effect.dependencies(session);
            let changed = self.last_seen.get(&effect) != Some(&key);
            if changed {
                self.last_seen.insert(effect, key);
                if effect.guard(session) {
                    due.push(effect);
                } else {
                    debug!("{effect:?} dependencies changed but guard does not hold");
                }
            }
        }
        due
    }
}
