//! Chat session state: the transcript plus the single in-flight request flag.
//!
//! The UI drives these transitions synchronously around its two network calls,
//! so the whole send/upload lifecycle can be exercised without a renderer.
//! The only states are idle -> sending -> idle and idle -> uploading -> idle.

use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    transcript: Transcript,
    busy: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            busy: false,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// A text send goes out only when the input has content and no request is
    /// already in flight.
    pub fn can_send(&self, text: &str) -> bool {
        !self.busy && !text.trim().is_empty()
    }

    /// Appends the user's message and marks the chat request in flight.
    pub fn begin_send(&mut self, text: &str) {
        self.transcript.push_user(text);
        self.busy = true;
    }

    /// Appends the assistant reply and returns to idle.
    pub fn complete_send(&mut self, content: String) {
        self.transcript.push_assistant(content);
        self.busy = false;
    }

    /// Marks a file upload in flight. Uploads append nothing up front; the
    /// busy flag is their only footprint until the analysis comes back.
    pub fn begin_upload(&mut self) {
        self.busy = true;
    }

    /// Appends the analysis result for the uploaded file and returns to idle.
    pub fn complete_upload(&mut self, file_name: &str, summary: Option<String>) {
        self.transcript.push_analysis(file_name, summary);
        self.busy = false;
    }

    /// A failed request appends nothing; the flag is cleared unconditionally.
    pub fn fail_request(&mut self) {
        self.busy = false;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::{ANALYSIS_FALLBACK, Role};

    #[test]
    fn new_session_is_idle_with_seed_message() {
        let s = ChatSession::new();
        assert!(!s.is_busy());
        assert_eq!(s.transcript().len(), 1);
    }

    #[test]
    fn blank_input_is_not_sendable() {
        let s = ChatSession::new();
        assert!(!s.can_send(""));
        assert!(!s.can_send("   \t\n"));
        assert!(s.can_send("hello"));
    }

    #[test]
    fn busy_session_refuses_a_second_send() {
        let mut s = ChatSession::new();
        s.begin_send("first");
        assert!(s.is_busy());
        assert!(!s.can_send("second"));
    }

    #[test]
    fn successful_send_appends_user_then_assistant() {
        let mut s = ChatSession::new();
        s.begin_send("hello");
        assert_eq!(s.transcript().len(), 2);
        s.complete_send("Hi".to_string());
        assert_eq!(s.transcript().len(), 3);
        let reply = s.transcript().last().unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "Hi");
        assert!(!s.is_busy());
    }

    #[test]
    fn failed_send_leaves_only_the_user_message() {
        let mut s = ChatSession::new();
        s.begin_send("hello");
        s.fail_request();
        assert_eq!(s.transcript().len(), 2);
        assert_eq!(s.transcript().last().unwrap().role, Role::User);
        assert!(!s.is_busy());
    }

    #[test]
    fn upload_appends_nothing_until_the_analysis_lands() {
        let mut s = ChatSession::new();
        s.begin_upload();
        assert!(s.is_busy());
        assert_eq!(s.transcript().len(), 1);
        s.complete_upload("a.pdf", Some("Report of 3 pages".to_string()));
        assert!(!s.is_busy());
        let msg = s.transcript().last().unwrap();
        assert_eq!(msg.content, "Report of 3 pages");
        assert_eq!(msg.file.as_ref().unwrap().name, "a.pdf");
    }

    #[test]
    fn upload_without_summary_shows_the_fallback() {
        let mut s = ChatSession::new();
        s.begin_upload();
        s.complete_upload("b.docx", None);
        assert_eq!(s.transcript().last().unwrap().content, ANALYSIS_FALLBACK);
    }

    #[test]
    fn failed_upload_appends_nothing() {
        let mut s = ChatSession::new();
        s.begin_upload();
        s.fail_request();
        assert_eq!(s.transcript().len(), 1);
        assert!(!s.is_busy());
    }
}
