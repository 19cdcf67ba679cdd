//! Per-chat conversation state for the menu dialogue.

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

pub type MenuDialogue = Dialogue<MenuState, InMemStorage<MenuState>>;
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Position of a chat in the menu flow. `Idle` is the implicit "not started"
/// state; selections ride along in the variants so handlers never reach for
/// ambient per-user storage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum MenuState {
    #[default]
    Idle,
    AwaitingLanguage,
    AwaitingLevel {
        language: String,
    },
    AwaitingMaterial {
        language: String,
        level: String,
    },
}

impl MenuState {
    pub fn language(&self) -> Option<&str> {
        match self {
            MenuState::Idle | MenuState::AwaitingLanguage => None,
            MenuState::AwaitingLevel { language } => Some(language),
            MenuState::AwaitingMaterial { language, .. } => Some(language),
        }
    }

    pub fn level(&self) -> Option<&str> {
        match self {
            MenuState::AwaitingMaterial { level, .. } => Some(level),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_are_visible_through_accessors() {
        assert_eq!(MenuState::Idle.language(), None);
        assert_eq!(MenuState::AwaitingLanguage.level(), None);

        let state = MenuState::AwaitingMaterial {
            language: "English".to_string(),
            level: "Advanced".to_string(),
        };
        assert_eq!(state.language(), Some("English"));
        assert_eq!(state.level(), Some("Advanced"));
    }
}
