//! Platform capability interfaces
//!
//! The host picks concrete implementations at session construction; the core
//! only ever sees these traits and the canonical input event. Host-specific
//! event shapes (touch lists, mouse coordinates) are adapted at the boundary,
//! never inside the sim.

#[cfg(target_arch = "wasm32")]
pub mod web;

use std::collections::HashMap;

/// Canonical pointer input delivered to the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A press began at the given x
    Start { x: f32 },
    /// The pointer moved while held
    Move { x: f32 },
}

/// Minimal persistent numeric store; the game keeps exactly one value in it
/// (the best score). Failures degrade to "absent", never to the player.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<u64>;
    fn set(&mut self, key: &str, value: u64);
}

/// In-memory store for native runs and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) {
        self.values.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("best"), None);
        store.set("best", 420);
        assert_eq!(store.get("best"), Some(420));
        store.set("best", 9000);
        assert_eq!(store.get("best"), Some(9000));
    }
}
