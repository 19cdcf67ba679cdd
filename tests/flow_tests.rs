//! End-to-end walks through the menu flow, driving the pure router the same
//! way the dispatcher does: route, send (collected here), then transition.

use english_study_bot::bot::commands::BotCommand;
use english_study_bot::dialogue::MenuState;
use english_study_bot::flow::{self, labels, Menu, Reply, Step, Transition};
use english_study_bot::materials::MaterialLibrary;

struct Script {
    state: MenuState,
    library: MaterialLibrary,
}

impl Script {
    fn new(library: MaterialLibrary) -> Self {
        Self {
            state: MenuState::default(),
            library,
        }
    }

    fn command(&mut self, cmd: BotCommand) -> Vec<Reply> {
        let step = flow::handle_command(&self.state, &cmd);
        self.apply(step)
    }

    /// Panics when the input would be silently ignored; tests that expect the
    /// silence assert on `flow::handle_text` directly.
    fn say(&mut self, text: &str) -> Vec<Reply> {
        let step = flow::handle_text(&self.state, text, &self.library)
            .unwrap_or_else(|| panic!("{:?} was ignored in state {:?}", text, self.state));
        self.apply(step)
    }

    fn apply(&mut self, step: Step) -> Vec<Reply> {
        match step.transition {
            Transition::Stay => {}
            Transition::To(next) => self.state = next,
            Transition::Clear => self.state = MenuState::default(),
        }
        step.replies
    }
}

#[test]
fn happy_path_serves_the_beginner_book() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("beginner.pdf"), b"%PDF-1.4").unwrap();
    let mut script = Script::new(MaterialLibrary::new(dir.path()));

    script.command(BotCommand::Start);
    script.say(labels::ENGLISH);
    script.say("Beginner");

    let replies = script.say(labels::BOOK);
    assert_eq!(
        replies,
        vec![
            Reply::Document(dir.path().join("beginner.pdf")),
            Reply::Text("Here is your Beginner book!".to_string()),
        ]
    );
    assert_eq!(
        script.state,
        MenuState::AwaitingMaterial {
            language: "English".to_string(),
            level: "Beginner".to_string(),
        }
    );
}

#[test]
fn missing_book_file_yields_an_apology_and_no_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut script = Script::new(MaterialLibrary::new(dir.path()));

    script.command(BotCommand::Start);
    script.say(labels::ENGLISH);
    script.say("Beginner");

    let replies = script.say(labels::BOOK);
    assert_eq!(
        replies,
        vec![Reply::Text(
            "Sorry, the requested book is not available.".to_string()
        )]
    );
}

#[test]
fn back_navigation_walks_up_the_menus_in_order() {
    let mut script = Script::new(MaterialLibrary::new("./books"));

    script.command(BotCommand::Start);
    script.say(labels::ENGLISH);
    script.say("Advanced");
    assert!(matches!(script.state, MenuState::AwaitingMaterial { .. }));

    let replies = script.say(labels::BACK);
    assert!(matches!(
        replies.as_slice(),
        [Reply::Menu {
            menu: Menu::Level,
            ..
        }]
    ));
    assert_eq!(
        script.state,
        MenuState::AwaitingLevel {
            language: "English".to_string()
        }
    );

    let replies = script.say(labels::BACK);
    assert!(matches!(
        replies.as_slice(),
        [Reply::Menu {
            menu: Menu::Language,
            ..
        }]
    ));
    assert_eq!(script.state, MenuState::AwaitingLanguage);
}

#[test]
fn reset_forgets_selections_for_status() {
    let mut script = Script::new(MaterialLibrary::new("./books"));

    script.command(BotCommand::Start);
    script.say(labels::ENGLISH);
    script.say("Upper Intermediate");

    let replies = script.command(BotCommand::Status);
    assert_eq!(
        replies,
        vec![Reply::Text(
            "Language: English\nLevel: Upper Intermediate".to_string()
        )]
    );

    script.command(BotCommand::Reset);
    assert_eq!(script.state, MenuState::Idle);

    let replies = script.command(BotCommand::Status);
    assert_eq!(
        replies,
        vec![Reply::Text(
            "Language: Not selected\nLevel: Not selected".to_string()
        )]
    );
}

#[test]
fn restart_goes_straight_back_to_the_language_menu() {
    let mut script = Script::new(MaterialLibrary::new("./books"));

    script.command(BotCommand::Start);
    script.say(labels::ENGLISH);
    script.say("Intermediate");

    let replies = script.command(BotCommand::Restart);
    assert!(matches!(
        replies.as_slice(),
        [Reply::Menu {
            menu: Menu::Language,
            ..
        }]
    ));
    assert_eq!(script.state, MenuState::AwaitingLanguage);
}

#[test]
fn chatter_is_ignored_before_start() {
    let library = MaterialLibrary::new("./books");
    assert_eq!(flow::handle_text(&MenuState::Idle, "hello", &library), None);
    assert_eq!(
        flow::handle_text(&MenuState::Idle, labels::ENGLISH, &library),
        None
    );
}
