use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::handlers::apply_step;
use crate::dialogue::{HandlerResult, MenuDialogue};
use crate::flow;

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommand {
    #[command(description = "start the bot and pick a language")]
    Start,
    #[command(description = "show your current language and level")]
    Status,
    #[command(description = "clear your selections")]
    Reset,
    #[command(description = "start over from the language menu")]
    Restart,
    #[command(description = "leave the menu")]
    Exit,
    #[command(description = "show this help")]
    Help,
    #[command(description = "bot settings")]
    Settings,
    #[command(description = "what this bot does")]
    About,
}

pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: BotCommand,
    dialogue: MenuDialogue,
) -> HandlerResult {
    let current = dialogue.get().await?.unwrap_or_default();
    tracing::info!("Command {:?} from chat {} in state {:?}", cmd, msg.chat.id, current);

    let step = flow::handle_command(&current, &cmd);
    apply_step(&bot, msg.chat.id, &dialogue, step).await
}
