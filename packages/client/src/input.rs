//! Parsing of lines typed at the prompt.
//!
//! Pure functions, no side effects.

/// What a line of input asks the client to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Fill the given form fields, then join with the current field values
    Join {
        username: Option<String>,
        room: Option<String>,
    },
    /// Send the line as the message field value
    Send(String),
    Help,
    Quit,
    /// A `/command` that doesn't exist
    Unknown(String),
}

/// Parse one line of input.
///
/// - `/join [<username> [<room>]]`: the room is everything after the username
/// - `/help`, `/quit` (or `/exit`)
/// - `//text` sends `/text`
/// - anything else, including an empty line, is sent verbatim
pub fn parse_input(line: &str) -> InputCommand {
    if let Some(escaped) = line.strip_prefix("//") {
        return InputCommand::Send(format!("/{}", escaped));
    }

    let Some(command_line) = line.strip_prefix('/') else {
        return InputCommand::Send(line.to_string());
    };

    let (command, args) = command_line
        .trim_start()
        .split_once(char::is_whitespace)
        .unwrap_or((command_line.trim(), ""));

    match command {
        "join" => {
            let (username, room) = args
                .trim()
                .split_once(char::is_whitespace)
                .map(|(username, room)| (username, room.trim()))
                .unwrap_or((args.trim(), ""));
            InputCommand::Join {
                username: non_empty(username),
                room: non_empty(room),
            }
        }
        "help" => InputCommand::Help,
        "quit" | "exit" => InputCommand::Quit,
        other => InputCommand::Unknown(other.to_string()),
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
