//! Hierarchy accumulator with the current State/LGA cursor.

use ward_hierarchy_core::WardHierarchy;

/// Owns the hierarchy under construction and the insertion cursor.
#[derive(Debug, Clone)]
pub struct Accumulator {
    hierarchy: WardHierarchy,
    current_state: String,
    current_lga: Option<String>,
}

impl Accumulator {
    /// Starts with `default_state` active so rows before the first header
    /// still have a home.
    pub fn new(default_state: &str) -> Self {
        let mut hierarchy = WardHierarchy::new();
        let current_state = hierarchy
            .ensure_state(default_state)
            .unwrap_or_else(|| crate::config::DEFAULT_STATE.to_string());
        hierarchy.ensure_state(&current_state);
        Self {
            hierarchy,
            current_state,
            current_lga: None,
        }
    }

    /// Makes `state` current and clears the LGA cursor.
    pub fn enter_state(&mut self, state: &str) {
        if let Some(key) = self.hierarchy.ensure_state(state) {
            self.current_state = key;
        }
        self.current_lga = None;
    }

    /// Makes `name` the current LGA of the current state.
    ///
    /// Returns `false` when the name is blank; the cursor is left unchanged.
    pub fn start_lga(&mut self, name: &str) -> bool {
        match self.hierarchy.ensure_lga(&self.current_state, name) {
            Some(key) => {
                self.current_lga = Some(key);
                true
            }
            None => false,
        }
    }

    /// Appends a ward to the current LGA.
    pub fn add_ward(&mut self, name: &str) -> bool {
        match &self.current_lga {
            Some(lga) => self.hierarchy.push_ward(&self.current_state, lga, name),
            None => false,
        }
    }

    pub fn has_active_lga(&self) -> bool {
        self.current_lga.is_some()
    }

    pub fn current_state(&self) -> &str {
        &self.current_state
    }

    pub fn current_lga(&self) -> Option<&str> {
        self.current_lga.as_deref()
    }

    pub fn into_hierarchy(self) -> WardHierarchy {
        self.hierarchy
    }
}
