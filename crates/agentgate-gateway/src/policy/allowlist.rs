//! Module allowlist and restricted-action set, compiled for O(1) lookup.
//!
//! Matching is exact and case-sensitive. An empty module list denies every
//! module (strict deny).

use std::collections::HashSet;

use crate::config::PolicyConfig;

#[derive(Debug, Clone, Default)]
pub struct Allowlist {
    modules: HashSet<String>,
    restricted: HashSet<String>,
}

impl Allowlist {
    pub fn compile(cfg: &PolicyConfig) -> Self {
        Self {
            modules: cfg.allowed_modules.iter().cloned().collect(),
            restricted: cfg.restricted_actions.iter().cloned().collect(),
        }
    }

    pub fn is_module_allowed(&self, module: &str) -> bool {
        self.modules.contains(module)
    }

    pub fn is_action_restricted(&self, action: &str) -> bool {
        self.restricted.contains(action)
    }
}
