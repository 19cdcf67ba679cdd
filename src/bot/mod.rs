pub mod commands;
pub mod handlers;
pub mod keyboards;

use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use crate::config::AppConfig;
use crate::db::Database;
use crate::dialogue::MenuState;
use crate::materials::MaterialLibrary;

/// Shared application state, accessible from all handlers.
pub struct AppState {
    pub config: AppConfig,
    pub db: Database,
    pub library: MaterialLibrary,
}

/// Build the teloxide update handler tree. Commands are routed first; any
/// other message goes through the menu router.
pub fn build_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    let message_handler = Update::filter_message()
        .enter_dialogue::<Message, InMemStorage<MenuState>, MenuState>()
        .branch(
            dptree::entry()
                .filter_command::<commands::BotCommand>()
                .endpoint(commands::handle_command),
        )
        .branch(dptree::endpoint(handlers::handle_message));

    dptree::entry().branch(message_handler)
}
