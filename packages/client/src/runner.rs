//! Client execution logic.

use std::ops::ControlFlow;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

use crate::{
    error::ClientError,
    formatter::MessageFormatter,
    input::{InputCommand, parse_input},
    session::ChatSession,
    transport::Transport,
    view::{ChatView, ConsoleView, Field, PROMPT},
    websocket::connect,
};

/// Client configuration collected from the command line
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// WebSocket server URL
    pub url: String,
    /// Initial value of the username field
    pub username: Option<String>,
    /// Initial value of the room field
    pub room: Option<String>,
}

impl ClientConfig {
    /// Join right away when both form fields are given on the command line
    pub fn joins_on_start(&self) -> bool {
        self.username.is_some() && self.room.is_some()
    }
}

/// Apply one parsed input command to the session
///
/// Returns `ControlFlow::Break` when the user asked to quit.
pub fn apply_command<T: Transport, V: ChatView>(
    session: &mut ChatSession<T, V>,
    command: InputCommand,
) -> ControlFlow<()> {
    match command {
        InputCommand::Join { username, room } => {
            if let Some(username) = username {
                session.view_mut().set_field(Field::Username, username);
            }
            if let Some(room) = room {
                session.view_mut().set_field(Field::Room, room);
            }
            session.join();
        }
        InputCommand::Send(msg) => {
            session.view_mut().set_field(Field::Message, msg);
            session.send();
        }
        InputCommand::Help => {
            session.view_mut().notice(&MessageFormatter::format_help());
        }
        InputCommand::Unknown(command) => {
            session.view_mut().notice(&format!(
                "Unknown command '/{}'\n{}",
                command,
                MessageFormatter::format_help()
            ));
        }
        InputCommand::Quit => return ControlFlow::Break(()),
    }

    ControlFlow::Continue(())
}

/// Create the session, show the start hint and join when asked to
fn start_session<T: Transport, V: ChatView>(
    transport: T,
    view: V,
    joins_on_start: bool,
) -> ChatSession<T, V> {
    let mut session = ChatSession::new(transport, view);
    session
        .view_mut()
        .notice(&MessageFormatter::format_start_hint());
    if joins_on_start {
        session.join();
    }
    session
}

/// Spawn a blocking thread running rustyline (synchronous readline)
///
/// Lines are forwarded unchanged, empty ones included. The channel closes on
/// Ctrl+C, Ctrl+D or a readline error.
fn spawn_line_reader() -> mpsc::UnboundedReceiver<String> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    if input_tx.send(line).is_err() {
                        // Channel closed, exit thread
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    input_rx
}

/// Run the chat client until the user quits or the connection is lost
pub async fn run_client(config: ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Connecting to {}", config.url);
    let (transport, mut inbound) = connect(&config.url).await?;

    let joins_on_start = config.joins_on_start();
    let mut view = ConsoleView::stdout();
    if let Some(username) = config.username {
        view.set_field(Field::Username, username);
    }
    if let Some(room) = config.room {
        view.set_field(Field::Room, room);
    }

    let mut session = start_session(transport, view, joins_on_start);
    let mut input_rx = spawn_line_reader();

    loop {
        tokio::select! {
            line = input_rx.recv() => {
                let Some(line) = line else {
                    tracing::info!("Input closed");
                    break;
                };
                if apply_command(&mut session, parse_input(&line)).is_break() {
                    break;
                }
            }
            event = inbound.recv() => {
                match event {
                    Some(event) => session.handle_event(event),
                    None => return Err(Box::new(ClientError::ConnectionLost)),
                }
            }
        }
    }

    session.unsubscribe();
    tracing::info!("Client session ended normally");

    Ok(())
}
