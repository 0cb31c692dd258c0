//! Button selection derived from the current clock state
//!
//! Nothing here is a source of truth.  Every refresh resets all
//! entries from the latest [`CurrentState`], so the highlighted button
//! can never drift away from what the daemon reports.

use crate::model::{
    param::{ParameterKind, ParameterValue},
    state::CurrentState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub value: u32,
    pub selected: bool,
}

/// Selection state of one kind's available values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    kind: ParameterKind,
    entries: Vec<Entry>,
}

impl Selection {
    /// A selection over the kind's available values with nothing selected
    pub fn new(kind: ParameterKind) -> Self {
        let entries = kind
            .available()
            .iter()
            .map(|&value| Entry {
                value,
                selected: false,
            })
            .collect();
        Self { kind, entries }
    }

    /// Mark exactly the entry matching `current`, deselect all others
    pub fn reconcile(&mut self, current: ParameterValue) {
        for entry in self.entries.iter_mut() {
            entry.selected = current == Some(entry.value);
        }
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<u32> {
        self.entries.iter().find(|e| e.selected).map(|e| e.value)
    }
}

/// Selection of both settable kinds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    rate: Selection,
    quantum: Selection,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            rate: Selection::new(ParameterKind::Rate),
            quantum: Selection::new(ParameterKind::Quantum),
        }
    }

    pub fn reconcile(&mut self, state: &CurrentState) {
        self.rate.reconcile(state.rate);
        self.quantum.reconcile(state.quantum);
    }

    pub fn get(&self, kind: ParameterKind) -> &Selection {
        match kind {
            ParameterKind::Rate => &self.rate,
            ParameterKind::Quantum => &self.quantum,
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_count(sel: &Selection) -> usize {
        sel.entries().iter().filter(|e| e.selected).count()
    }

    #[test]
    fn selects_matching_member() {
        let mut sel = Selection::new(ParameterKind::Quantum);
        sel.reconcile(Some(256));
        assert_eq!(sel.selected(), Some(256));
        assert_eq!(selected_count(&sel), 1);
    }

    #[test]
    fn moving_value_deselects_previous() {
        let mut sel = Selection::new(ParameterKind::Rate);
        sel.reconcile(Some(44100));
        sel.reconcile(Some(96000));
        assert_eq!(sel.selected(), Some(96000));
        assert_eq!(selected_count(&sel), 1);
    }

    #[test]
    fn unknown_or_foreign_value_selects_nothing() {
        let mut sel = Selection::new(ParameterKind::Rate);
        sel.reconcile(Some(48000));
        sel.reconcile(None);
        assert_eq!(sel.selected(), None);

        sel.reconcile(Some(48000));
        sel.reconcile(Some(22050));
        assert_eq!(sel.selected(), None);
        assert_eq!(selected_count(&sel), 0);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let state = CurrentState {
            rate: Some(192000),
            quantum: Some(1000),
        };
        let mut once = SelectionState::new();
        once.reconcile(&state);
        let mut twice = once.clone();
        twice.reconcile(&state);
        assert_eq!(once, twice);
        assert_eq!(twice.get(ParameterKind::Rate).selected(), Some(192000));
        assert_eq!(twice.get(ParameterKind::Quantum).selected(), None);
    }

    #[test]
    fn entries_follow_available_order() {
        let sel = Selection::new(ParameterKind::Quantum);
        let values: Vec<u32> = sel.entries().iter().map(|e| e.value).collect();
        assert_eq!(values, ParameterKind::Quantum.available());
        assert_eq!(sel.kind(), ParameterKind::Quantum);
    }
}
