//! Free-text message handlers: custom trigger/reply pairs and echo.

use botgen_types::LiteralPolicy;

use crate::error::CodegenResult;
use crate::escape::literal;
use crate::ident::{custom_handler_name, ReservedIdents};

pub const ECHO_HANDLER: &str = "echo_all";

/// Reply with `reply` whenever an incoming text message contains `trigger`,
/// ignoring case.
///
/// The trigger is lower-cased here and compared against
/// `message.text.lower()` in the generated predicate.
pub fn custom_response(
    trigger: &str,
    reply: &str,
    index: usize,
    used: &mut ReservedIdents,
    policy: LiteralPolicy,
) -> CodegenResult<(String, String)> {
    let needle = literal("trigger", &trigger.to_lowercase(), policy)?;
    let doc = literal("trigger", &format!("Custom response to: {trigger}"), policy)?;
    let reply = literal("reply", reply, policy)?;
    let name = used.reserve_unique(&custom_handler_name(trigger, index));

    let text = format!(
        r#"@bot.message_handler(func=lambda message: message.text is not None and {needle} in message.text.lower())
def {name}(message):
    {doc}
    bot.reply_to(message, {reply})
"#
    );
    Ok((name, text))
}

/// Catch-all handler that repeats the incoming text back.
///
/// The function is not decorated. telebot tries handlers in registration
/// order and stops at the first match, so the assembler registers it with
/// [`echo_registration`] after every other handler.
pub fn echo(used: &mut ReservedIdents) -> CodegenResult<(String, String)> {
    used.reserve(ECHO_HANDLER)?;
    let text = format!(
        r#"def {ECHO_HANDLER}(message):
    """Echo all messages"""
    bot.reply_to(message, message.text)
"#
    );
    Ok((ECHO_HANDLER.to_string(), text))
}

/// Statement that registers the echo handler as a catch-all.
pub fn echo_registration() -> String {
    format!("bot.register_message_handler({ECHO_HANDLER}, func=lambda message: True)")
}
