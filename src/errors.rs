use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")] Config(String),

    #[error("Network error: {0}")] Network(String),

    #[error("HTTP error: {0}")] Http(String),

    #[error("Parse error: {0}")] Parse(String),

    #[error("Invalid input: {0}")] UserInput(String),

    #[error("Telegram error: {0}")] Telegram(String),
}

impl BotError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            BotError::Network(_) => true,
            BotError::Http(_) => true,
            BotError::Telegram(_) => true,
            _ => false,
        }
    }
}

pub type BotResult<T> = Result<T, BotError>;
