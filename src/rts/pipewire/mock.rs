//! Test doubles for the clock store.
//!
//! Neither of these spawns a process, so controller and model tests
//! stay deterministic.

use super::{CommandRunner, ParameterStore, Slot};
use crate::{
    error::CommandError,
    model::param::{ParameterKind, ParameterValue},
};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

/// Records command lines and replays pre-configured responses in order
pub struct MockRunner {
    responses: RefCell<Vec<Result<String, CommandError>>>,
    commands: RefCell<Vec<String>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::with_responses(Vec::new())
    }

    pub fn with_responses(mut responses: Vec<Result<String, CommandError>>) -> Self {
        responses.reverse();
        Self {
            responses: RefCell::new(responses),
            commands: RefCell::new(Vec::new()),
        }
    }

    pub fn executed_commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        let mut line = vec![program.to_string()];
        line.extend(args.iter().cloned());
        self.commands.borrow_mut().push(line.join(" "));
        self.responses
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

/// In-memory daemon: mutations land in the override slot
#[derive(Default)]
pub struct FakeStore {
    values: RefCell<HashMap<(ParameterKind, Slot), u32>>,
    mutations: RefCell<Vec<(ParameterKind, u32)>>,
    /// Report success but keep the old value, like a daemon ignoring the write
    reject: Cell<bool>,
    /// Report failure for every mutation
    fail: Cell<bool>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, kind: ParameterKind, slot: Slot, value: u32) {
        self.values.borrow_mut().insert((kind, slot), value);
    }

    pub fn clear(&self, kind: ParameterKind, slot: Slot) {
        self.values.borrow_mut().remove(&(kind, slot));
    }

    pub fn reject_silently(&self, reject: bool) {
        self.reject.set(reject);
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn mutations(&self) -> Vec<(ParameterKind, u32)> {
        self.mutations.borrow().clone()
    }
}

impl ParameterStore for FakeStore {
    fn query(&self, kind: ParameterKind, slot: Slot) -> ParameterValue {
        self.values.borrow().get(&(kind, slot)).copied()
    }

    fn mutate(&self, kind: ParameterKind, value: u32) -> bool {
        if self.fail.get() {
            return false;
        }
        self.mutations.borrow_mut().push((kind, value));
        if !self.reject.get() {
            self.set(kind, Slot::Override, value);
        }
        true
    }
}

mod tests {
    use super::*;

    #[test]
    fn default_runner_answers_empty() {
        let runner = MockRunner::default();
        assert_eq!(runner.run("pw-metadata", &[]).unwrap(), "");
        assert_eq!(runner.executed_commands(), vec!["pw-metadata"]);
    }

    #[test]
    fn flags_toggle_mutation_outcome() {
        let store = FakeStore::new();
        store.fail_mutations(true);
        assert!(!store.mutate(ParameterKind::Rate, 48000));
        assert!(store.mutations().is_empty());

        store.fail_mutations(false);
        store.reject_silently(true);
        assert!(store.mutate(ParameterKind::Rate, 48000));
        assert_eq!(store.query(ParameterKind::Rate, Slot::Override), None);

        store.reject_silently(false);
        assert!(store.mutate(ParameterKind::Rate, 96000));
        assert_eq!(store.query(ParameterKind::Rate, Slot::Override), Some(96000));
        assert_eq!(store.mutations().len(), 2);
    }
}
