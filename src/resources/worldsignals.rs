//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource provides a world-wide signal map for
//! cross-system communication without entity queries.
//!
//! Use cases include:
//! - The `quit_game` flag checked by the main loop
//! - The current scene name
//! - Recording the last activated external link

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Resource, Default)]
pub struct WorldSignals {
    /// String signals addressed by string keys.
    strings: FxHashMap<String, String>,
    /// Presence-only boolean flags; a key being present means "true".
    flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set a string signal value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Get a string signal by key.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.strings.get(key)
    }

    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    /// Remove a flag (make it false/absent).
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }

    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_roundtrip() {
        let mut signals = WorldSignals::default();
        assert!(!signals.has_flag("quit_game"));
        signals.set_flag("quit_game");
        assert!(signals.has_flag("quit_game"));
        signals.clear_flag("quit_game");
        assert!(!signals.has_flag("quit_game"));
    }

    #[test]
    fn test_strings_overwrite() {
        let mut signals = WorldSignals::default();
        signals.set_string("scene", "menu");
        signals.set_string("scene", "playing");
        assert_eq!(signals.get_string("scene").map(String::as_str), Some("playing"));
    }

    #[test]
    fn test_missing_string_is_none() {
        let signals = WorldSignals::default();
        assert!(signals.get_string("missing").is_none());
    }
}
