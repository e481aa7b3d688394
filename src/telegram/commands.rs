//! Command handlers
//!
//! Each command maps to one handler. Replies go out one message per logical
//! line; a failed send is logged and the remaining lines still go out.

use crate::logger::{self, LogTag};
use crate::settlements::{self, SettlementManager};
use crate::telegram::formatters;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Comandos disponíveis:")]
pub enum Command {
    #[command(description = "exibe o manual de utilização.")]
    Start,
    #[command(description = "lista todas as mercadorias.")]
    Listar,
    #[command(description = "mostra os dados de um contrato, ex: /info VALEOG20.")]
    Info(String),
}

/// Dispatcher endpoint for all commands
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    manager: Arc<SettlementManager>,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    match cmd {
        Command::Start => handle_start(&bot, chat_id).await,
        Command::Listar => handle_listar(&bot, chat_id, &manager).await,
        Command::Info(arg) => handle_info(&bot, chat_id, &manager, &arg).await,
    }
    Ok(())
}

/// Return the manual of utilization
async fn handle_start(bot: &Bot, chat_id: ChatId) {
    for line in formatters::HELP_LINES {
        send_line(bot, chat_id, line).await;
    }
}

/// List all commodities in chat
async fn handle_listar(bot: &Bot, chat_id: ChatId, manager: &SettlementManager) {
    let snapshot = match manager.get_all_data().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            logger::error(LogTag::Telegram, &format!("/listar failed: {}", e));
            send_line(bot, chat_id, formatters::FETCH_FAILURE).await;
            return;
        }
    };

    send_line(bot, chat_id, formatters::LIST_HEADER).await;
    for name in formatters::distinct_sorted_names(&snapshot) {
        send_line(bot, chat_id, &name).await;
    }
}

/// Return the information of one contract
async fn handle_info(bot: &Bot, chat_id: ChatId, manager: &SettlementManager, arg: &str) {
    // Only the first token counts, like any other argument the bot takes
    let code = arg.split_whitespace().next().unwrap_or("");

    let (acronym, due_date) = match formatters::split_info_code(code) {
        Ok(parts) => parts,
        Err(e) => {
            logger::debug(LogTag::Telegram, &format!("/info rejected: {}", e));
            send_line(bot, chat_id, formatters::USAGE_HINT).await;
            return;
        }
    };

    let snapshot = match manager.get_all_data().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            logger::error(LogTag::Telegram, &format!("/info failed: {}", e));
            send_line(bot, chat_id, formatters::FETCH_FAILURE).await;
            return;
        }
    };

    let matches = settlements::filter_by_code(&snapshot, acronym, due_date);
    if matches.is_empty() {
        send_line(bot, chat_id, &formatters::not_found_message(acronym, due_date)).await;
        return;
    }

    for commodity in matches {
        for line in formatters::detail_lines(commodity) {
            send_line(bot, chat_id, &line).await;
        }
    }
}

/// Send one line, fire-and-forget: failures are logged, never fatal
async fn send_line(bot: &Bot, chat_id: ChatId, text: &str) {
    if let Err(e) = bot.send_message(chat_id, text).await {
        logger::error(
            LogTag::Telegram,
            &format!("Failed to send message to {}: {}", chat_id, e),
        );
    }
}
