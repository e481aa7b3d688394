//! Telegram bot wiring
//!
//! Validates the token, builds the dispatcher and polls for updates until
//! shutdown. The settlement manager is injected into handlers as a
//! dispatcher dependency.

use crate::config::Settings;
use crate::errors::{BotError, BotResult};
use crate::logger::{self, LogTag};
use crate::settlements::SettlementManager;
use crate::telegram::commands::{self, Command};
use std::sync::Arc;
use teloxide::dptree;
use teloxide::prelude::*;

/// Run the bot until it is stopped (ctrl-c)
pub async fn run(settings: &Settings, manager: Arc<SettlementManager>) -> BotResult<()> {
    let bot = Bot::new(&settings.bot_token);

    // Validate the token by calling getMe before we start polling
    match bot.get_me().await {
        Ok(me) => {
            logger::info(
                LogTag::Telegram,
                &format!(
                    "Bot initialized: @{} (ID: {})",
                    me.username.as_deref().unwrap_or("unknown"),
                    me.id
                ),
            );
        }
        Err(e) => {
            return Err(BotError::Telegram(format!("Invalid bot token: {}", e)));
        }
    }

    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(commands::handle_command);

    logger::info(LogTag::Telegram, "Polling for updates...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![manager])
        // Non-command chatter is ignored
        .default_handler(|_| async {})
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    logger::info(LogTag::Telegram, "Bot stopped");
    Ok(())
}
