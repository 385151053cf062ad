//! The chat transcript: an append-only sequence of messages.
//!
//! The transcript is the only state the application keeps. It lives in memory
//! for the lifetime of the view and is seeded with a single welcome message so
//! the chat never renders empty.

/// Seed message shown before the user has said anything.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your assistant. How can I help you today?";

/// Shown in place of a summary when the analysis endpoint returns none.
pub const ANALYSIS_FALLBACK: &str = "File analysis failed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn css_class(&self) -> &'static str {
        match self {
            Role::User => "human-message",
            Role::Assistant => "ai-message",
        }
    }
}

/// Metadata carried by messages that originated from a file upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub summary: Option<String>,
}

/// A single chat-log entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub role: Role,
    pub timestamp: u64,
    pub file: Option<FileMeta>,
}

/// Ordered message sequence. Append-only; generation order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
    seq: u64,
}

impl Transcript {
    pub fn new() -> Self {
        let mut t = Self {
            messages: Vec::new(),
            seq: 0,
        };
        t.messages.push(Message {
            id: "welcome".into(),
            content: WELCOME_MESSAGE.into(),
            role: Role::Assistant,
            timestamp: now_millis(),
            file: None,
        });
        t
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        let msg = self.build(content.into(), Role::User, None);
        self.messages.push(msg);
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        let msg = self.build(content.into(), Role::Assistant, None);
        self.messages.push(msg);
    }

    /// Appends the assistant message produced by a file analysis. The summary
    /// doubles as the message content; when the backend returns none, a fixed
    /// fallback string is shown instead.
    pub fn push_analysis(&mut self, file_name: impl Into<String>, summary: Option<String>) {
        let content = summary
            .clone()
            .unwrap_or_else(|| ANALYSIS_FALLBACK.to_string());
        let msg = self.build(
            content,
            Role::Assistant,
            Some(FileMeta {
                name: file_name.into(),
                summary,
            }),
        );
        self.messages.push(msg);
    }

    fn build(&mut self, content: String, role: Role, file: Option<FileMeta>) -> Message {
        let timestamp = now_millis();
        // Ids are time-derived; the sequence counter keeps them unique when
        // two messages land in the same millisecond.
        self.seq += 1;
        Message {
            id: format!("{timestamp}-{}", self.seq),
            content,
            role,
            timestamp,
            file,
        }
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}
