//! UI boundary of the chat client.
//!
//! The view plays the part of the page: three named input fields, a chat
//! panel that starts hidden and an append-only list of rendered messages.

use std::io::{Stdout, Write};

use crate::formatter::MessageFormatter;

/// Prompt shown by the line editor
pub const PROMPT: &str = "> ";

/// Input fields of the join/send form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Room,
    Message,
}

/// Host UI the chat session reads from and renders into
pub trait ChatView {
    /// Current value of a field (empty when never set)
    fn field_value(&self, field: Field) -> String;

    /// Overwrite a field, as typing into it would
    fn set_field(&mut self, field: Field, value: String);

    fn clear_field(&mut self, field: Field);

    /// Reveal the chat panel
    fn show_chat(&mut self);

    /// Append one entry to the message list
    fn append_message(&mut self, text: String);

    /// Out-of-band text for the user (help, hints); not part of the message list
    fn notice(&mut self, text: &str);
}

/// Terminal rendition of the chat page
///
/// Entries are kept verbatim in [`ConsoleView::messages`] and written to the
/// terminal as plain text. Entries appended while the chat panel is hidden are
/// printed once it is revealed.
pub struct ConsoleView<W: Write> {
    username: String,
    room: String,
    message: String,
    chat_visible: bool,
    messages: Vec<String>,
    out: W,
}

impl ConsoleView<Stdout> {
    /// Create a view rendering to stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            username: String::new(),
            room: String::new(),
            message: String::new(),
            chat_visible: false,
            messages: Vec::new(),
            out,
        }
    }

    pub fn is_chat_visible(&self) -> bool {
        self.chat_visible
    }

    /// Entries rendered so far, in arrival order
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Room => &mut self.room,
            Field::Message => &mut self.message,
        }
    }

    fn render_entry(&mut self, text: &str) {
        let plain = MessageFormatter::to_plain_text(text);
        write!(self.out, "\n{}\n", plain).ok();
    }

    /// Redisplay the prompt after writing above it
    fn redisplay_prompt(&mut self) {
        write!(self.out, "{}", PROMPT).ok();
        self.out.flush().ok();
    }
}

impl<W: Write> ChatView for ConsoleView<W> {
    fn field_value(&self, field: Field) -> String {
        match field {
            Field::Username => self.username.clone(),
            Field::Room => self.room.clone(),
            Field::Message => self.message.clone(),
        }
    }

    fn set_field(&mut self, field: Field, value: String) {
        *self.field_mut(field) = value;
    }

    fn clear_field(&mut self, field: Field) {
        self.field_mut(field).clear();
    }

    fn show_chat(&mut self) {
        if self.chat_visible {
            return;
        }
        self.chat_visible = true;

        write!(self.out, "{}", MessageFormatter::format_chat_panel_header()).ok();
        let pending = self.messages.clone();
        for text in &pending {
            self.render_entry(text);
        }
        self.redisplay_prompt();
    }

    fn append_message(&mut self, text: String) {
        if self.chat_visible {
            self.render_entry(&text);
            self.redisplay_prompt();
        }
        self.messages.push(text);
    }

    fn notice(&mut self, text: &str) {
        write!(self.out, "\n{}\n", text).ok();
        self.redisplay_prompt();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(view: &ConsoleView<Vec<u8>>) -> String {
        String::from_utf8_lossy(view.output()).into_owned()
    }

    #[test]
    fn test_fields_start_empty() {
        // テスト項目: 初期状態では全フィールドが空で、チャットパネルは非表示
        // given (前提条件):
        let view = ConsoleView::new(Vec::new());

        // when (操作):
        let values: Vec<String> = [Field::Username, Field::Room, Field::Message]
            .into_iter()
            .map(|field| view.field_value(field))
            .collect();

        // then (期待する結果):
        assert!(values.iter().all(String::is_empty));
        assert!(!view.is_chat_visible());
        assert!(view.messages().is_empty());
    }

    #[test]
    fn test_clear_field_only_clears_target() {
        // テスト項目: clear_field は指定したフィールドのみを空にする
        // given (前提条件):
        let mut view = ConsoleView::new(Vec::new());
        view.set_field(Field::Username, "alice".to_string());
        view.set_field(Field::Message, "hello".to_string());

        // when (操作):
        view.clear_field(Field::Message);

        // then (期待する結果):
        assert_eq!(view.field_value(Field::Message), "");
        assert_eq!(view.field_value(Field::Username), "alice");
    }

    #[test]
    fn test_messages_hidden_until_chat_shown() {
        // テスト項目: パネル非表示中のメッセージは保持され、表示時に出力される
        // given (前提条件):
        let mut view = ConsoleView::new(Vec::new());
        view.append_message("System: early".to_string());
        assert!(!rendered(&view).contains("System: early"));

        // when (操作):
        view.show_chat();

        // then (期待する結果):
        assert!(view.is_chat_visible());
        assert!(rendered(&view).contains("System: early"));
        assert_eq!(view.messages(), ["System: early".to_string()]);
    }

    #[test]
    fn test_show_chat_twice_prints_header_once() {
        // テスト項目: 2 回目の show_chat ではヘッダーが再出力されない
        // given (前提条件):
        let mut view = ConsoleView::new(Vec::new());
        view.show_chat();

        // when (操作):
        view.show_chat();

        // then (期待する結果):
        assert_eq!(rendered(&view).matches("Chat\n").count(), 1);
    }

    #[test]
    fn test_append_keeps_literal_text_but_renders_plain() {
        // テスト項目: メッセージ一覧には原文を保持し、端末には制御文字をエスケープして出力する
        // given (前提条件):
        let mut view = ConsoleView::new(Vec::new());
        view.show_chat();
        let text = "eve: \u{1b}[31mred".to_string();

        // when (操作):
        view.append_message(text.clone());

        // then (期待する結果):
        assert_eq!(view.messages(), [text]);
        let output = rendered(&view);
        assert!(!output.contains('\u{1b}'));
        assert!(output.contains("eve: \\u{1b}[31mred"));
    }

    #[test]
    fn test_notice_is_not_a_message() {
        // テスト項目: notice は出力されるがメッセージ一覧には追加されない
        // given (前提条件):
        let mut view = ConsoleView::new(Vec::new());

        // when (操作):
        view.notice("hint");

        // then (期待する結果):
        assert!(rendered(&view).contains("hint"));
        assert!(view.messages().is_empty());
    }
}
