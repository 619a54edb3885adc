use portfolio_types::{ChatMessage, ChatReply, ChatRequest};

use crate::knowledge::{
    CONNECTION_FALLBACK, GREETING, MISSING_REPLY_FALLBACK, PROFILE_KNOWLEDGE, SYSTEM_INSTRUCTIONS,
};
use crate::transport::TransportError;

/// In-memory state of the chat widget
///
/// Lives as long as the page. The transcript only grows; reloading the page
/// is the only way to clear it.
#[derive(Debug, Clone)]
pub struct WidgetState {
    is_open: bool,
    is_loading: bool,
    transcript: Vec<ChatMessage>,
    input: String,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetState {
    pub fn new() -> Self {
        Self {
            is_open: false,
            is_loading: false,
            transcript: vec![ChatMessage::assistant(GREETING)],
            input: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Open or close the panel, returning the new visibility
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether a send would do anything right now
    pub fn can_send(&self) -> bool {
        !self.is_loading && !self.input.trim().is_empty()
    }

    /// The panel must be scrolled to its end whenever it is visible
    pub fn should_scroll_to_end(&self) -> bool {
        self.is_open
    }

    /// Enter submits, Shift+Enter does not
    pub fn should_submit(key: &str, shift: bool) -> bool {
        key == "Enter" && !shift
    }

    /// Start a turn: append the user message and build the relay payload.
    ///
    /// Returns `None` without touching anything when the input is blank or a
    /// reply is still pending.
    pub fn begin_send(&mut self) -> Option<ChatRequest> {
        if !self.can_send() {
            return None;
        }

        let content = self.input.trim().to_string();
        self.transcript.push(ChatMessage::user(content));
        self.input.clear();
        self.is_loading = true;

        Some(self.build_request())
    }

    /// Finish a turn. Always appends exactly one assistant message.
    pub fn finish_send(&mut self, result: Result<ChatReply, TransportError>) {
        let content = match result {
            Ok(ChatReply { reply: Some(reply) }) => reply,
            Ok(ChatReply { reply: None }) => MISSING_REPLY_FALLBACK.to_string(),
            Err(_) => CONNECTION_FALLBACK.to_string(),
        };

        self.transcript.push(ChatMessage::assistant(content));
        self.is_loading = false;
    }

    /// `[instructions, knowledge, ...transcript]`
    pub fn build_request(&self) -> ChatRequest {
        let mut messages = Vec::with_capacity(self.transcript.len() + 2);
        messages.push(ChatMessage::system(SYSTEM_INSTRUCTIONS));
        messages.push(ChatMessage::system(PROFILE_KNOWLEDGE));
        messages.extend(self.transcript.iter().cloned());
        ChatRequest { messages }
    }
}
