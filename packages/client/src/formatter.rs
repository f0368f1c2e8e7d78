//! Message formatting utilities for client display.

/// Separator drawn around the chat panel header
const SEPARATOR: &str = "============================================================";

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format an inbound chat message as a single list entry
    ///
    /// # Arguments
    ///
    /// * `username` - The sender as reported by the server
    /// * `msg` - The message text
    ///
    /// # Returns
    ///
    /// The literal text `"<username>: <msg>"`
    pub fn format_chat_line(username: &str, msg: &str) -> String {
        format!("{}: {}", username, msg)
    }

    /// Header printed when the chat panel is revealed
    pub fn format_chat_panel_header() -> String {
        format!("\n{}\nChat\n{}\n", SEPARATOR, SEPARATOR)
    }

    /// Hint shown once the client is connected
    pub fn format_start_hint() -> String {
        "Type /join <username> <room> to enter a room, /help for commands.".to_string()
    }

    /// Usage text for the input commands
    pub fn format_help() -> String {
        [
            "Commands:",
            "  /join [<username> [<room>]]  fill the join form and join",
            "  /help                        show this help",
            "  /quit                        exit",
            "  //text                       send a message starting with '/'",
            "Any other line is sent to the current room.",
        ]
        .join("\n")
    }

    /// Neutralise terminal control sequences so text is shown, never interpreted
    ///
    /// Control characters (escape, carriage return, newline, ...) and bidi
    /// embedding/override/isolate marks are replaced by their escaped form,
    /// e.g. `\u{1b}` or `\u{202e}`.
    pub fn to_plain_text(text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_control() || is_bidi_control(c) {
                output.extend(c.escape_default());
            } else {
                output.push(c);
            }
        }
        output
    }
}

/// Bidi formatting characters that can reorder the rest of a terminal line
fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
}
