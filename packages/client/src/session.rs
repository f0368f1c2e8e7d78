//! Chat session: the state shared by the join, send and render handlers.

use roomchat_shared::protocol::{
    ClientEvent, JoinPayload, MessagePayload, SendMessagePayload, ServerEvent,
};

use crate::{
    formatter::MessageFormatter,
    transport::Transport,
    view::{ChatView, Field},
};

/// Name of the inbound event rendered by the session
pub const MESSAGE_EVENT: &str = "message";

/// Whether `join` has been called yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotJoined,
    Joined,
}

/// Inbound subscription held by a session
///
/// Created together with the session and routed to [`ChatSession::on_message`].
#[derive(Debug)]
pub struct Subscription {
    event: &'static str,
}

impl Subscription {
    fn new(event: &'static str) -> Self {
        tracing::debug!("Subscribed to '{}' events", event);
        Self { event }
    }

    pub fn event(&self) -> &'static str {
        self.event
    }

    /// Stop listening for inbound events.
    ///
    /// No-op: the subscription lives as long as the connection.
    pub fn unsubscribe(&self) {
        tracing::debug!("Unsubscribe from '{}' events requested", self.event);
    }
}

/// Chat session client
///
/// Owns the transport handle, the view, and the username/room chosen at the
/// last `join`. Every handler runs on the caller's task, one at a time.
pub struct ChatSession<T, V> {
    transport: T,
    view: V,
    username: String,
    room: String,
    phase: SessionPhase,
    subscription: Subscription,
}

impl<T: Transport, V: ChatView> ChatSession<T, V> {
    pub fn new(transport: T, view: V) -> Self {
        Self {
            transport,
            view,
            username: String::new(),
            room: String::new(),
            phase: SessionPhase::NotJoined,
            subscription: Subscription::new(MESSAGE_EVENT),
        }
    }

    /// Join the room named in the form.
    ///
    /// Stores the `username` and `room` field values, emits `join` and reveals
    /// the chat panel. Joining again overwrites both values; no leave event is
    /// sent for the previous room.
    pub fn join(&mut self) {
        let username = self.view.field_value(Field::Username);
        let room = self.view.field_value(Field::Room);

        self.username = username.clone();
        self.room = room.clone();

        self.emit(ClientEvent::Join(JoinPayload { username, room }));
        self.view.show_chat();
        self.phase = SessionPhase::Joined;

        tracing::info!("Joined room '{}' as '{}'", self.room, self.username);
    }

    /// Send the `message` field to the current room and clear the field.
    ///
    /// Uses the username and room stored by the last `join`; before any join
    /// both are empty and the event is emitted anyway.
    pub fn send(&mut self) {
        let msg = self.view.field_value(Field::Message);

        self.emit(ClientEvent::SendMessage(SendMessagePayload {
            username: self.username.clone(),
            msg,
            room: self.room.clone(),
        }));

        self.view.clear_field(Field::Message);
    }

    /// Render an inbound `message` event as `"<username>: <msg>"`
    pub fn on_message(&mut self, message: MessagePayload) {
        let line = MessageFormatter::format_chat_line(&message.username, &message.msg);
        self.view.append_message(line);
    }

    /// Dispatch an event delivered by the transport
    pub fn handle_event(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::Message(message) => self.on_message(message),
            ServerEvent::Error(error) => match error.error {
                Some(detail) => tracing::warn!("Server reported an error: {} ({})", error.msg, detail),
                None => tracing::warn!("Server reported an error: {}", error.msg),
            },
        }
    }

    pub fn unsubscribe(&self) {
        self.subscription.unsubscribe();
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn emit(&self, event: ClientEvent) {
        let name = event.name();
        if let Err(e) = self.transport.emit(event) {
            tracing::warn!("Failed to emit '{}': {}", name, e);
        }
    }
}
