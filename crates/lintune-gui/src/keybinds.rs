use egui::Key;
use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;

#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Action {
    IncreaseSlope,
    DecreaseSlope,
    IncreaseIntercept,
    DecreaseIntercept,
    ResetParameters,
    ToggleShowSettings,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::IncreaseSlope,
        Action::DecreaseSlope,
        Action::IncreaseIntercept,
        Action::DecreaseIntercept,
        Action::ResetParameters,
        Action::ToggleShowSettings,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::IncreaseSlope => write!(f, "Increase slope"),
            Action::DecreaseSlope => write!(f, "Decrease slope"),
            Action::IncreaseIntercept => write!(f, "Increase intercept"),
            Action::DecreaseIntercept => write!(f, "Decrease intercept"),
            Action::ResetParameters => write!(f, "Reset parameters"),
            Action::ToggleShowSettings => write!(f, "Toggle settings panel"),
        }
    }
}

/// Outcome of one frame of input while an action waits for a new key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rebind {
    Pending,
    Cancelled,
    Bound(Key),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct KeyBindings {
    bindings: HashMap<Action, Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(Action::IncreaseSlope, Key::ArrowRight);
        bindings.insert(Action::DecreaseSlope, Key::ArrowLeft);
        bindings.insert(Action::IncreaseIntercept, Key::ArrowUp);
        bindings.insert(Action::DecreaseIntercept, Key::ArrowDown);
        bindings.insert(Action::ResetParameters, Key::R);
        bindings.insert(Action::ToggleShowSettings, Key::F1);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Bind `new_key` to `action`, unbinding whatever else held that key.
    pub fn set(&mut self, action: Action, new_key: Key) {
        self.bindings.retain(|_, &mut k| k != new_key);
        self.bindings.insert(action, new_key);
    }
    pub fn remove(&mut self, action: &Action) {
        self.bindings.remove(action);
    }

    /// Bind `action` to the first key pressed in `events`. Escape cancels.
    pub fn rebind_from_events(&mut self, action: Action, events: &[egui::Event]) -> Rebind {
        let pressed = events.iter().find_map(|event| match event {
            egui::Event::Key { key, pressed: true, .. } => Some(*key),
            _ => None,
        });
        match pressed {
            None => Rebind::Pending,
            Some(Key::Escape) => Rebind::Cancelled,
            Some(key) => {
                self.set(action, key);
                Rebind::Bound(key)
            },
        }
    }

    pub fn key_for(&self, action: Action) -> Option<Key> {
        self.bindings.get(&action).copied()
    }

    pub fn action_triggered(&self, action: Action, input: &egui::InputState) -> bool {
        if let Some(&key) = self.bindings.get(&action) {
            input.key_pressed(key)
        } else {
            false
        }
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn Error>> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let parsed: Self = serde_json::from_str(&content)?;
        Ok(parsed)
    }

    /// Saved bindings, or the defaults when the file is missing or unreadable.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(k) => k,
            Err(e) => {
                log::warn!("using default keybindings, could not read {path}: {e}");
                Self::default()
            },
        }
    }
}
