use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{ChatId, InputFile, KeyboardRemove};

use crate::bot::{keyboards, AppState};
use crate::dialogue::{HandlerResult, MenuDialogue};
use crate::flow::{self, Reply, Step, Transition};

/// Endpoint for plain-text messages, i.e. menu selections.
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    dialogue: MenuDialogue,
    state: Arc<AppState>,
) -> HandlerResult {
    let text = match msg.text() {
        Some(text) => text,
        // Stickers, photos etc. are not part of any menu.
        None => return Ok(()),
    };

    let current = dialogue.get().await?.unwrap_or_default();
    match flow::handle_text(&current, text, &state.library) {
        Some(step) => apply_step(&bot, msg.chat.id, &dialogue, step).await,
        None => {
            tracing::debug!(
                "Ignoring {:?} from chat {} in state {:?}",
                text,
                msg.chat.id,
                current
            );
            Ok(())
        }
    }
}

/// Send every reply of a step in order, then apply the state transition.
pub async fn apply_step(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MenuDialogue,
    step: Step,
) -> HandlerResult {
    for reply in step.replies {
        match reply {
            Reply::Text(text) => {
                bot.send_message(chat_id, text).await?;
            }
            Reply::Menu { text, menu } => {
                bot.send_message(chat_id, text)
                    .reply_markup(keyboards::markup_for(&menu))
                    .await?;
            }
            Reply::Document(path) => {
                tracing::info!("Sending {} to chat {}", path.display(), chat_id);
                bot.send_document(chat_id, InputFile::file(path)).await?;
            }
            Reply::RemoveKeyboard(text) => {
                bot.send_message(chat_id, text)
                    .reply_markup(KeyboardRemove::new())
                    .await?;
            }
        }
    }

    match step.transition {
        Transition::Stay => {}
        Transition::To(next) => dialogue.update(next).await?,
        Transition::Clear => dialogue.exit().await?,
    }

    Ok(())
}
