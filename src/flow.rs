//! Pure routing for the menu conversation: maps (current state, input) to the
//! replies to send and the state to move to. No transport calls happen here,
//! which keeps every transition testable without a running bot.

use std::path::PathBuf;

use teloxide::utils::command::BotCommands;

use crate::bot::commands::BotCommand;
use crate::dialogue::MenuState;
use crate::materials::MaterialLibrary;

/// Button labels shared by the router and the keyboard builders.
pub mod labels {
    pub const ENGLISH: &str = "English language";
    pub const RUSSIAN: &str = "Russian language";
    pub const BOOK: &str = "📚 Book";
    pub const AUDIO: &str = "🎧 Audio materials";
    pub const BACK: &str = "🔙 Back";
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Menu {
    Language,
    Level,
    Material,
}

/// One outbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Menu { text: String, menu: Menu },
    Document(PathBuf),
    RemoveKeyboard(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Stay,
    To(MenuState),
    Clear,
}

/// The outcome of one routed input: replies are sent in order, then the
/// transition is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub replies: Vec<Reply>,
    pub transition: Transition,
}

impl Step {
    fn stay(replies: Vec<Reply>) -> Self {
        Self {
            replies,
            transition: Transition::Stay,
        }
    }

    fn to(next: MenuState, replies: Vec<Reply>) -> Self {
        Self {
            replies,
            transition: Transition::To(next),
        }
    }

    fn clear(replies: Vec<Reply>) -> Self {
        Self {
            replies,
            transition: Transition::Clear,
        }
    }
}

fn language_prompt(text: &str) -> Reply {
    Reply::Menu {
        text: text.to_string(),
        menu: Menu::Language,
    }
}

/// Commands are valid in every state.
pub fn handle_command(state: &MenuState, cmd: &BotCommand) -> Step {
    match cmd {
        BotCommand::Start => Step::to(
            MenuState::AwaitingLanguage,
            vec![language_prompt("Welcome! Please select your language:")],
        ),
        BotCommand::Restart => Step::to(
            MenuState::AwaitingLanguage,
            vec![language_prompt("Starting over. Please select your language:")],
        ),
        BotCommand::Reset => Step::clear(vec![Reply::Text(
            "Your selections have been cleared. Send /start to begin again.".to_string(),
        )]),
        BotCommand::Exit => Step::clear(vec![Reply::RemoveKeyboard(
            "Goodbye! Send /start whenever you want to continue studying.".to_string(),
        )]),
        BotCommand::Status => Step::stay(vec![Reply::Text(format!(
            "Language: {}\nLevel: {}",
            state.language().unwrap_or("Not selected"),
            state.level().unwrap_or("Not selected"),
        ))]),
        BotCommand::Help => Step::stay(vec![Reply::Text(
            BotCommand::descriptions().to_string(),
        )]),
        BotCommand::Settings => Step::stay(vec![Reply::Text(
            "There is nothing to configure yet. The bot always speaks English \
             and serves the books it has on disk."
                .to_string(),
        )]),
        BotCommand::About => Step::stay(vec![Reply::Text(
            "I hand out study materials for English learners: pick a language, \
             a level and a material type, and I will send you the matching book."
                .to_string(),
        )]),
    }
}

/// Plain-text input. `None` means the message is not expected in the current
/// state and stays unanswered.
pub fn handle_text(state: &MenuState, text: &str, library: &MaterialLibrary) -> Option<Step> {
    match state {
        // Without a session only commands do anything.
        MenuState::Idle => None,

        MenuState::AwaitingLanguage => match text {
            labels::ENGLISH => Some(Step::to(
                MenuState::AwaitingLevel {
                    language: "English".to_string(),
                },
                vec![Reply::Menu {
                    text: "You selected English. Now, please select your level:".to_string(),
                    menu: Menu::Level,
                }],
            )),
            labels::RUSSIAN => Some(Step::stay(vec![language_prompt(
                "You selected Russian. The bot will be in Russian soon!",
            )])),
            _ => None,
        },

        MenuState::AwaitingLevel { language } => {
            if MaterialLibrary::is_level(text) {
                return Some(Step::to(
                    MenuState::AwaitingMaterial {
                        language: language.clone(),
                        level: text.to_string(),
                    },
                    vec![Reply::Menu {
                        text: format!(
                            "You selected {} level. Now, choose your learning materials:",
                            text
                        ),
                        menu: Menu::Material,
                    }],
                ));
            }
            if text == labels::BACK {
                return Some(Step::to(
                    MenuState::AwaitingLanguage,
                    vec![language_prompt(
                        "You are back at the language selection. Please choose a language:",
                    )],
                ));
            }
            None
        }

        MenuState::AwaitingMaterial { language, level } => match text {
            labels::BOOK => Some(book_step(level, library)),
            labels::AUDIO => Some(Step::stay(vec![Reply::Text(
                "You selected Audio materials. Here are the audio resources for your level!"
                    .to_string(),
            )])),
            labels::BACK => Some(Step::to(
                MenuState::AwaitingLevel {
                    language: language.clone(),
                },
                vec![Reply::Menu {
                    text: "You are back at the level selection. Please select your level:"
                        .to_string(),
                    menu: Menu::Level,
                }],
            )),
            _ => None,
        },
    }
}

/// Book requests never change state. A missing mapping and a missing file are
/// user-visible messages, not errors.
fn book_step(level: &str, library: &MaterialLibrary) -> Step {
    match library.resolve(level) {
        None => Step::stay(vec![Reply::Text(format!(
            "No book has been added for the {} level yet.",
            level
        ))]),
        Some(path) if !path.exists() => Step::stay(vec![Reply::Text(
            "Sorry, the requested book is not available.".to_string(),
        )]),
        Some(path) => Step::stay(vec![
            Reply::Document(path),
            Reply::Text(format!("Here is your {} book!", level)),
        ]),
    }
}
