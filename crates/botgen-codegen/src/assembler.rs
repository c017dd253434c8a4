//! Program assembler: skeleton + fragments → one source text.
//!
//! Layout is fixed:
//! 1. header (imports, logging)
//! 2. token placeholder and bot instance
//! 3. metadata constants
//! 4. fragments, in the order given
//! 5. deferred registrations (catch-all handlers)
//! 6. entry point
//!
//! Sections are separated by one blank line; top-level definitions by two.

use botgen_types::BotMetadata;

use crate::emitter::Fragment;
use crate::skeleton::{metadata_section, ENTRY_POINT, HEADER, TOKEN_SECTION};

/// Heads the deferred registrations. telebot stops at the first matching
/// handler, so catch-alls are registered after everything else.
pub const REGISTRATION_HEADER: &str = "# Catch-all handlers, registered after every other handler\n";

/// Assemble a complete program. With no fragments the result is the bare
/// skeleton, which is still a runnable (no-op) bot.
pub fn assemble(metadata: &BotMetadata, fragments: &[Fragment]) -> String {
    let metadata = metadata_section(metadata);
    let body_len: usize = fragments.iter().map(|f| f.text.len() + 2).sum();
    let mut out = String::with_capacity(
        HEADER.len() + TOKEN_SECTION.len() + metadata.len() + body_len + ENTRY_POINT.len() + 8,
    );

    out.push_str(HEADER);
    out.push('\n');
    out.push_str(TOKEN_SECTION);
    out.push('\n');
    out.push_str(&metadata);

    for fragment in fragments {
        out.push_str("\n\n");
        out.push_str(&fragment.text);
    }

    let mut registrations = fragments
        .iter()
        .filter_map(|f| f.registration.as_deref())
        .peekable();
    if registrations.peek().is_some() {
        out.push_str("\n\n");
        out.push_str(REGISTRATION_HEADER);
        for registration in registrations {
            out.push_str(registration);
            out.push('\n');
        }
    }

    out.push_str("\n\n");
    out.push_str(ENTRY_POINT);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use botgen_types::BlockKind;

    fn fragment(index: usize, name: &str) -> Fragment {
        Fragment {
            index,
            id: None,
            kind: BlockKind::CustomResponse,
            identifier: name.to_string(),
            text: format!("def {name}(message):\n    pass\n"),
            registration: None,
        }
    }

    #[test]
    fn empty_program_is_skeleton_only() {
        let text = assemble(&BotMetadata::default(), &[]);
        assert!(text.starts_with(HEADER));
        assert!(text.ends_with(ENTRY_POINT));
        assert!(text.contains("BOT_NAME = \"My Bot\""));
        assert!(!text.contains("@bot.message_handler"));
    }

    #[test]
    fn fragments_keep_given_order() {
        let text = assemble(
            &BotMetadata::default(),
            &[fragment(0, "zeta"), fragment(1, "alpha")],
        );
        let zeta = text.find("def zeta").unwrap();
        let alpha = text.find("def alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn top_level_definitions_separated_by_two_blank_lines() {
        let text = assemble(&BotMetadata::default(), &[fragment(0, "a")]);
        assert!(text.contains("\"A helpful bot\"\n\n\ndef a(message):"));
        assert!(text.contains("    pass\n\n\nif __name__ == \"__main__\":"));
    }

    #[test]
    fn registrations_follow_every_fragment() {
        let mut first = fragment(0, "echo_all");
        first.kind = BlockKind::Echo;
        first.registration = Some("bot.register_message_handler(echo_all)".into());
        let text = assemble(&BotMetadata::default(), &[first, fragment(1, "later")]);

        let def = text.find("def echo_all").unwrap();
        let later = text.find("def later").unwrap();
        let registered = text.find("bot.register_message_handler(echo_all)").unwrap();
        assert!(def < later && later < registered);
        assert!(text.contains(&format!(
            "    pass\n\n\n{REGISTRATION_HEADER}bot.register_message_handler(echo_all)\n\n\nif __name__"
        )));
    }

    #[test]
    fn no_registration_section_without_registrations() {
        let text = assemble(&BotMetadata::default(), &[fragment(0, "a")]);
        assert!(!text.contains(REGISTRATION_HEADER));
    }

    #[test]
    fn no_trailing_blank_lines() {
        let text = assemble(&BotMetadata::default(), &[fragment(0, "a")]);
        assert!(text.ends_with("print(\"Bot stopped.\")\n"));
    }
}
