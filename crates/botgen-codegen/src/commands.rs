//! Command handlers: `/start`, `/help`, `/about`.
//!
//! Each of these binds a fixed function name, so at most one block of each
//! kind can contribute a fragment per program.

use botgen_types::{BotMetadata, LiteralPolicy};

use crate::error::CodegenResult;
use crate::escape::{check_single_line, quote};
use crate::ident::ReservedIdents;

pub const WELCOME_HANDLER: &str = "send_welcome";
pub const HELP_HANDLER: &str = "send_help";
pub const ABOUT_HANDLER: &str = "send_about";

/// Labels on the reply keyboard shown with the welcome message.
pub const WELCOME_BUTTONS: [&str; 2] = ["Help", "About"];

/// Static `/help` reply. Lists every command whether or not the matching
/// block is configured.
pub const HELP_TEXT: &str = "Available commands:\n\
/start - Start the bot\n\
/help - Show this help message\n\
/about - About the bot";

/// Attribution line closing the `/about` reply.
pub const ABOUT_ATTRIBUTION: &str = "This bot was created using Bot Creator Platform.";

/// `/start`: welcome message, bot description and a greeting, plus a
/// two-button reply keyboard.
pub fn welcome(
    message: &str,
    metadata: &BotMetadata,
    used: &mut ReservedIdents,
    policy: LiteralPolicy,
) -> CodegenResult<(String, String)> {
    check_single_line("message", message, policy)?;
    let welcome_text = quote(&format!(
        "{message}\n\n{}\n\nWelcome to {}! I'm here to help you.",
        metadata.description, metadata.name
    ));
    used.reserve(WELCOME_HANDLER)?;

    let [first, second] = WELCOME_BUTTONS.map(quote);
    let text = format!(
        r#"@bot.message_handler(commands=["start"])
def {WELCOME_HANDLER}(message):
    """Handle /start command"""
    welcome_text = {welcome_text}
    markup = types.ReplyKeyboardMarkup(resize_keyboard=True)
    markup.add(types.KeyboardButton({first}), types.KeyboardButton({second}))
    bot.reply_to(message, welcome_text, reply_markup=markup)
"#
    );
    Ok((WELCOME_HANDLER.to_string(), text))
}

/// `/help`: fixed command listing.
pub fn help(used: &mut ReservedIdents) -> CodegenResult<(String, String)> {
    used.reserve(HELP_HANDLER)?;
    let help_text = quote(HELP_TEXT);
    let text = format!(
        r#"@bot.message_handler(commands=["help"])
def {HELP_HANDLER}(message):
    """Handle /help command"""
    help_text = {help_text}
    bot.reply_to(message, help_text)
"#
    );
    Ok((HELP_HANDLER.to_string(), text))
}

/// `/about`: the block's description followed by an attribution line.
pub fn about(
    description: &str,
    used: &mut ReservedIdents,
    policy: LiteralPolicy,
) -> CodegenResult<(String, String)> {
    check_single_line("description", description, policy)?;
    let about_text = quote(&format!("{description}\n\n{ABOUT_ATTRIBUTION}"));
    used.reserve(ABOUT_HANDLER)?;

    let text = format!(
        r#"@bot.message_handler(commands=["about"])
def {ABOUT_HANDLER}(message):
    """Handle /about command"""
    about_text = {about_text}
    bot.reply_to(message, about_text)
"#
    );
    Ok((ABOUT_HANDLER.to_string(), text))
}
