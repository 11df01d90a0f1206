//! Command history resource for tracking undo state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HISTORY_CAPACITY;

use super::commands::EditorCommand;

/// When a push evicts the oldest command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionPolicy {
    /// Evict as soon as the length reaches the capacity, so at most
    /// `capacity - 1` commands survive a push.
    #[default]
    AtCapacity,
    /// Evict only once the length exceeds the capacity.
    OverCapacity,
}

impl EvictionPolicy {
    /// Smallest capacity that still leaves the latest push undoable.
    pub fn min_capacity(self) -> usize {
        match self {
            EvictionPolicy::AtCapacity => 2,
            EvictionPolicy::OverCapacity => 1,
        }
    }

    fn should_evict(self, len: usize, capacity: usize) -> bool {
        match self {
            EvictionPolicy::AtCapacity => len >= capacity,
            EvictionPolicy::OverCapacity => len > capacity,
        }
    }
}

/// Resource holding the commands that can be undone, most recent last.
///
/// There is no redo stack: an undone command is dropped.
#[derive(Resource, Debug)]
pub struct CommandHistory {
    undo_stack: Vec<EditorCommand>,
    capacity: usize,
    policy: EvictionPolicy,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY, EvictionPolicy::default())
    }
}

impl CommandHistory {
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Self {
        Self {
            undo_stack: Vec::new(),
            capacity: capacity.max(policy.min_capacity()),
            policy,
        }
    }

    /// Push a new command, returning the oldest one if it had to be evicted.
    pub fn push(&mut self, command: EditorCommand) -> Option<EditorCommand> {
        self.undo_stack.push(command);

        if self.policy.should_evict(self.undo_stack.len(), self.capacity) {
            Some(self.undo_stack.remove(0))
        } else {
            None
        }
    }

    /// Pop the most recent command for undo
    pub fn pop_undo(&mut self) -> Option<EditorCommand> {
        self.undo_stack.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Labels of the stored commands, oldest first.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.undo_stack.iter().map(EditorCommand::label)
    }

    /// Change the bound, evicting oldest commands until the new bound holds.
    pub fn set_limits(&mut self, capacity: usize, policy: EvictionPolicy) -> Vec<EditorCommand> {
        self.capacity = capacity.max(policy.min_capacity());
        self.policy = policy;

        let mut evicted = Vec::new();
        while !self.undo_stack.is_empty()
            && self.policy.should_evict(self.undo_stack.len(), self.capacity)
        {
            evicted.push(self.undo_stack.remove(0));
        }
        evicted
    }

    /// Drop all history (scene reload or session teardown)
    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }
}
