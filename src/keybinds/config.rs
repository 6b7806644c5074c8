//! Configuration for keybinds.

use super::actions::PageAction;
use super::keys::parse_key_string;
use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Keybind mappings, keyed by action name.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeybindConfig {
    pub keybinds: HashMap<String, KeybindDef>,
}

/// Keybind definition - can be single key, multiple keys, or disabled.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum KeybindDef {
    /// Single keybind
    Single(String),
    /// Multiple alternative keybinds for the same action
    Multiple(Vec<String>),
}

/// Map from parsed key events to actions
pub type KeybindMap = HashMap<KeyEvent, PageAction>;

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            keybinds: default_keybinds(),
        }
    }
}

fn default_keybinds() -> HashMap<String, KeybindDef> {
    let single = |key: &str| KeybindDef::Single(key.to_string());
    let mut keybinds = HashMap::new();

    // Search
    keybinds.insert(
        PageAction::FocusSearch.name().to_string(),
        KeybindDef::Multiple(vec!["ctrl-k".to_string(), "super-k".to_string()]),
    );
    keybinds.insert(PageAction::ClearSearch.name().to_string(), single("esc"));
    keybinds.insert(PageAction::SubmitSearch.name().to_string(), single("enter"));

    // Posts
    keybinds.insert(PageAction::NextPost.name().to_string(), single("down"));
    keybinds.insert(PageAction::PrevPost.name().to_string(), single("up"));
    keybinds.insert(PageAction::SelectTag.name().to_string(), single("ctrl-t"));
    keybinds.insert(PageAction::Comment.name().to_string(), single("ctrl-o"));
    keybinds.insert(PageAction::Share.name().to_string(), single("ctrl-s"));

    // Page
    keybinds.insert(PageAction::ToggleMenu.name().to_string(), single("ctrl-g"));
    keybinds.insert(PageAction::ScrollTop.name().to_string(), single("home"));

    // System
    keybinds.insert(PageAction::ShowHelp.name().to_string(), single("f1"));
    keybinds.insert(PageAction::Quit.name().to_string(), single("ctrl-c"));

    keybinds
}

impl KeybindConfig {
    /// Get the keybind(s) for a given action.
    ///
    /// Returns an empty list if the action is not configured.
    #[must_use]
    pub fn get(&self, action: PageAction) -> Vec<String> {
        self.keybinds
            .get(action.name())
            .map_or_else(Vec::new, |def| match def {
                KeybindDef::Single(key) => vec![key.clone()],
                KeybindDef::Multiple(keys) => keys.clone(),
            })
    }

    /// Check if a keybind is disabled for an action.
    #[must_use]
    pub fn is_disabled(&self, action: PageAction) -> bool {
        self.keybinds.get(action.name()).is_some_and(|def| match def {
            KeybindDef::Single(key) => key == "none",
            KeybindDef::Multiple(keys) => keys.iter().all(|k| k == "none"),
        })
    }

    /// Overlay user settings on the defaults
    ///
    /// Actions the user did not mention keep their default keys.
    #[must_use]
    pub fn merged_with_defaults(mut self) -> Self {
        for (name, def) in default_keybinds() {
            self.keybinds.entry(name).or_insert(def);
        }
        self
    }

    /// Parse every configured key into a lookup map
    ///
    /// Unknown action names and unparsable keys are skipped with a warning.
    /// A key claimed by several actions goes to the one listed first in
    /// [`PageAction::ALL`]; the other claims are skipped with a warning.
    #[must_use]
    pub fn keymap(&self) -> KeybindMap {
        let mut map = KeybindMap::new();

        for name in self.keybinds.keys() {
            if PageAction::from_name(name).is_none() {
                tracing::warn!(action = %name, "ignoring keybind for unknown action");
            }
        }

        for action in PageAction::ALL {
            let keys = match self.keybinds.get(action.name()) {
                Some(KeybindDef::Single(key)) => std::slice::from_ref(key),
                Some(KeybindDef::Multiple(keys)) => keys.as_slice(),
                None => continue,
            };
            for key in keys.iter().filter(|k| *k != "none") {
                let Some(event) = parse_key_string(key) else {
                    tracing::warn!(key = %key, action = action.name(), "ignoring unparsable key");
                    continue;
                };
                match map.entry(event) {
                    Entry::Vacant(slot) => {
                        slot.insert(action);
                    }
                    Entry::Occupied(taken) if *taken.get() != action => tracing::warn!(
                        key = %key,
                        action = action.name(),
                        bound_to = taken.get().name(),
                        "ignoring key already bound to another action"
                    ),
                    Entry::Occupied(_) => {}
                }
            }
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_default_keybinds() {
        let config = KeybindConfig::default();
        assert_eq!(config.get(PageAction::FocusSearch), vec!["ctrl-k", "super-k"]);
        assert_eq!(config.get(PageAction::ClearSearch), vec!["esc"]);
    }

    #[test]
    fn test_every_action_has_a_default() {
        let config = KeybindConfig::default();
        for action in PageAction::ALL {
            assert!(!config.get(action).is_empty(), "{} unbound", action.name());
        }
    }

    #[test]
    fn test_keybind_def_parsing() {
        let toml = r#"
            focus_search = "ctrl-f"
            share = ["ctrl-s", "F2"]
        "#;

        let config: KeybindConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.get(PageAction::FocusSearch), vec!["ctrl-f"]);
        assert_eq!(config.get(PageAction::Share), vec!["ctrl-s", "F2"]);

        let merged = config.merged_with_defaults();
        assert_eq!(merged.get(PageAction::FocusSearch), vec!["ctrl-f"]);
        assert_eq!(merged.get(PageAction::ClearSearch), vec!["esc"]);
    }

    #[test]
    fn test_is_disabled() {
        let mut keybinds = HashMap::new();
        keybinds.insert("share".to_string(), KeybindDef::Single("none".to_string()));
        keybinds.insert("comment".to_string(), KeybindDef::Single("ctrl-o".to_string()));

        let config = KeybindConfig { keybinds };

        assert!(config.is_disabled(PageAction::Share));
        assert!(!config.is_disabled(PageAction::Comment));
        assert!(!config.keymap().values().any(|a| *a == PageAction::Share));
    }

    #[test]
    fn test_keymap_resolves_defaults() {
        let map = KeybindConfig::default().keymap();

        assert_eq!(
            map.get(&KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)),
            Some(&PageAction::FocusSearch)
        );
        assert_eq!(
            map.get(&KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER)),
            Some(&PageAction::FocusSearch)
        );
        assert_eq!(
            map.get(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(&PageAction::ClearSearch)
        );
    }

    #[test]
    fn test_keymap_skips_unknown() {
        let mut keybinds = HashMap::new();
        keybinds.insert("launch_rocket".to_string(), KeybindDef::Single("ctrl-r".to_string()));
        keybinds.insert("share".to_string(), KeybindDef::Single("ctrl-nope".to_string()));

        assert!(KeybindConfig { keybinds }.keymap().is_empty());
    }

    #[test]
    fn test_colliding_key_resolves_the_same_way_every_time() {
        let toml = r#"share = "ctrl-k""#;
        let config: KeybindConfig = toml::from_str(toml).unwrap();
        let config = config.merged_with_defaults();
        let ctrl_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);

        for _ in 0..8 {
            let map = config.keymap();
            assert_eq!(map.get(&ctrl_k), Some(&PageAction::FocusSearch));
            assert!(!map.values().any(|a| *a == PageAction::Share));
        }
    }
}
