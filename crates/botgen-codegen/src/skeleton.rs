//! The fixed, block-independent parts of every generated program.
//!
//! ```text
//! HEADER           imports + logging setup
//! TOKEN_SECTION    token placeholder + bot instance
//! metadata         BOT_NAME / BOT_DESCRIPTION (escaped)
//! <fragments>      one per surviving block, input order
//! <registrations>  catch-all handlers, registered last
//! ENTRY_POINT      polling loop with Ctrl+C handling
//! ```

use botgen_types::BotMetadata;

use crate::escape::quote;

/// The literal the caller replaces with a real bot token. It appears
/// exactly once in every generated program.
pub const TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN_HERE";

/// Names bound at module level by the skeleton itself.
pub const SKELETON_IDENTIFIERS: &[&str] = &[
    "logging",
    "telebot",
    "types",
    "logger",
    "TOKEN",
    "bot",
    "BOT_NAME",
    "BOT_DESCRIPTION",
];

/// Imports and logging setup.
pub const HEADER: &str = r#"# Generated by botgen. Regenerate from the bot configuration instead of editing by hand.
import logging

import telebot
from telebot import types

logging.basicConfig(
    format="%(asctime)s - %(name)s - %(levelname)s - %(message)s",
    level=logging.INFO,
)
logger = logging.getLogger(__name__)
"#;

/// Token placeholder and bot instance.
pub const TOKEN_SECTION: &str = r#"# Bot token - replace with your actual token
TOKEN = "YOUR_BOT_TOKEN_HERE"
bot = telebot.TeleBot(TOKEN)
"#;

/// Program entry: start polling, stop cleanly on Ctrl+C.
pub const ENTRY_POINT: &str = r#"if __name__ == "__main__":
    logger.info("Starting %s", BOT_NAME)
    print(f"Starting {BOT_NAME}...")
    print("Bot is running. Press Ctrl+C to stop.")
    try:
        bot.polling(none_stop=True)
    except KeyboardInterrupt:
        print("Bot stopped.")
"#;

/// `BOT_NAME` / `BOT_DESCRIPTION` constants.
pub fn metadata_section(metadata: &BotMetadata) -> String {
    format!(
        "# Bot configuration\nBOT_NAME = {}\nBOT_DESCRIPTION = {}\n",
        quote(&metadata.name),
        quote(&metadata.description)
    )
}
