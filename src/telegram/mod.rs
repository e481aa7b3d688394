//! Telegram integration
//!
//! ```text
//! telegram/
//! ├── mod.rs           # This file - public API
//! ├── bot.rs           # Token validation + dispatcher loop
//! ├── commands.rs      # Command handlers
//! └── formatters.rs    # Reply text formatting
//! ```

pub mod bot;
pub mod commands;
pub mod formatters;

pub use commands::Command;
