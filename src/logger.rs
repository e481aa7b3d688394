//! Tag-based console logging
//!
//! Small logging API with per-subsystem tags and standard levels.
//! Debug output is gated behind the AJUSTEBOT_DEBUG environment variable.

use chrono::Utc;
use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Subsystem tag attached to every log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    System,
    Config,
    Telegram,
    Fetch,
    Parse,
    Cache,
}

impl LogTag {
    fn label(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Config => "CONFIG",
            LogTag::Telegram => "TELEGRAM",
            LogTag::Fetch => "FETCH",
            LogTag::Parse => "PARSE",
            LogTag::Cache => "CACHE",
        }
    }
}

/// Initialize the logger system
///
/// Call once at startup, before any logging occurs. Reads AJUSTEBOT_DEBUG
/// to decide whether debug-level lines are printed.
pub fn init() {
    let enabled = std::env::var("AJUSTEBOT_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
}

fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    println!(
        "{} {} {} {}",
        "ℹ".blue().bold(),
        format!("[{}]", timestamp()).dimmed(),
        format!("[{}]", tag.label()).cyan(),
        message
    );
}

/// Log at WARNING level (important issues)
pub fn warning(tag: LogTag, message: &str) {
    println!(
        "{} {} {} {}",
        "⚠".yellow().bold(),
        format!("[{}]", timestamp()).dimmed(),
        format!("[{}]", tag.label()).cyan(),
        message.yellow()
    );
}

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    println!(
        "{} {} {} {}",
        "❌".red().bold(),
        format!("[{}]", timestamp()).dimmed(),
        format!("[{}]", tag.label()).cyan(),
        message.red()
    );
}

/// Log at DEBUG level (only with AJUSTEBOT_DEBUG set)
pub fn debug(tag: LogTag, message: &str) {
    if !DEBUG_ENABLED.load(Ordering::SeqCst) {
        return;
    }
    println!(
        "{} {} {} {}",
        "🐛".purple().bold(),
        format!("[{}]", timestamp()).dimmed(),
        format!("[{}]", tag.label()).cyan(),
        message.dimmed()
    );
}
