//! Session state for the active chat, kept separate from the reactive layer
//! so the transition rules and transcript bookkeeping stay plainly testable.

use crate::models::{Message, Role};

/// Shown in the transcript when a chat request fails. Not part of the
/// conversation sent to the backend.
pub const ERROR_NOTICE: &str = "An error occurred. Please try again.";

/// Layout mode: the centered intro form shown before anything has happened,
/// or the standard chat layout. The transition is one-way per page session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiMode {
    FirstMessage,
    Normal,
}

/// One rendered transcript item. `id` is a stable per-session identifier
/// assigned at creation; `notice` marks the transient error bubble, which is
/// rendered (and counted when computing feedback positions) but never sent
/// back to the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptEntry {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub notice: bool,
}

/// In-memory state of the active chat: the ordered transcript plus the
/// first-message layout flag. Reset wholesale when an existing chat is
/// loaded; discarded on navigation.
#[derive(Clone, Debug)]
pub struct ChatSession {
    entries: Vec<TranscriptEntry>,
    next_id: u64,
    mode: UiMode,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self { entries: Vec::new(), next_id: 0, mode: UiMode::FirstMessage }
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Leaves the first-message layout. Idempotent; there is no way back.
    pub fn mark_started(&mut self) {
        self.mode = UiMode::Normal;
    }

    /// Appends the user's message, trimmed. Whitespace-only input is a no-op
    /// and returns `None`.
    pub fn push_user(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.push(Role::User, text.to_string(), false))
    }

    pub fn push_assistant(&mut self, content: String) -> u64 {
        self.push(Role::Assistant, content, false)
    }

    /// Appends the fixed error bubble. It shows up in the transcript like an
    /// assistant message but is excluded from `conversation()`.
    pub fn push_error_notice(&mut self) -> u64 {
        self.push(Role::Assistant, ERROR_NOTICE.to_string(), true)
    }

    /// Drops the current transcript (chat load resets the window before the
    /// history fetch resolves).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replaces the transcript with a fetched history, in order.
    pub fn replace_with_history(&mut self, messages: Vec<Message>) {
        self.entries.clear();
        for msg in messages {
            self.push(msg.role, msg.content, false);
        }
    }

    /// The conversation as sent to `/chat`: every non-notice entry, in
    /// transcript order.
    pub fn conversation(&self) -> Vec<Message> {
        self.entries
            .iter()
            .filter(|e| !e.notice)
            .map(|e| Message::new(e.role, e.content.clone()))
            .collect()
    }

    /// Zero-based position of an entry among all rendered entries, notices
    /// included. This is the `message_idx` the feedback endpoint expects.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn push(&mut self, role: Role, content: String, notice: bool) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(TranscriptEntry { id, role, content, notice });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_user_appends_exactly_one_record() {
        let mut session = ChatSession::new();
        let id = session.push_user("  show failed logins  ").unwrap();
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].id, id);
        assert_eq!(session.entries()[0].role, Role::User);
        assert_eq!(session.entries()[0].content, "show failed logins");
        assert_eq!(
            session.conversation(),
            vec![Message::new(Role::User, "show failed logins")]
        );
    }

    #[test]
    fn whitespace_only_input_is_a_no_op() {
        let mut session = ChatSession::new();
        assert_eq!(session.push_user(""), None);
        assert_eq!(session.push_user("   \n\t"), None);
        assert!(session.entries().is_empty());
        assert!(session.conversation().is_empty());
    }

    #[test]
    fn assistant_reply_lands_at_the_end_of_the_conversation() {
        let mut session = ChatSession::new();
        session.push_user("hello");
        session.push_assistant("hi".to_string());
        let convo = session.conversation();
        assert_eq!(convo.last(), Some(&Message::new(Role::Assistant, "hi")));
        assert_eq!(convo.len(), 2);
    }

    #[test]
    fn error_notice_renders_but_stays_out_of_the_conversation() {
        let mut session = ChatSession::new();
        session.push_user("hello");
        session.push_error_notice();
        assert_eq!(session.entries().len(), 2);
        assert_eq!(session.entries()[1].content, ERROR_NOTICE);
        assert!(session.entries()[1].notice);
        // conversation still contains only the user turn
        assert_eq!(session.conversation(), vec![Message::new(Role::User, "hello")]);
    }

    #[test]
    fn position_counts_every_rendered_entry_including_notices() {
        let mut session = ChatSession::new();
        session.push_user("a");
        session.push_error_notice();
        session.push_user("b");
        let id = session.push_assistant("reply".to_string());
        assert_eq!(session.position_of(id), Some(3));
    }

    #[test]
    fn position_of_unknown_id_is_none() {
        let session = ChatSession::new();
        assert_eq!(session.position_of(99), None);
    }

    #[test]
    fn history_replaces_the_transcript_in_order() {
        let mut session = ChatSession::new();
        session.push_user("stale");
        session.replace_with_history(vec![
            Message::new(Role::User, "first"),
            Message::new(Role::Assistant, "second"),
            Message::new(Role::User, "third"),
        ]);
        assert_eq!(
            session.conversation(),
            vec![
                Message::new(Role::User, "first"),
                Message::new(Role::Assistant, "second"),
                Message::new(Role::User, "third"),
            ]
        );
        // fresh ids, no leftovers from the stale entry
        assert_eq!(session.entries().len(), 3);
        assert_eq!(session.position_of(session.entries()[2].id), Some(2));
    }

    #[test]
    fn ids_stay_unique_across_a_reset() {
        let mut session = ChatSession::new();
        let before = session.push_user("one").unwrap();
        session.replace_with_history(vec![Message::new(Role::User, "two")]);
        assert_ne!(session.entries()[0].id, before);
    }

    #[test]
    fn first_message_transition_is_one_way() {
        let mut session = ChatSession::new();
        assert_eq!(session.mode(), UiMode::FirstMessage);
        session.mark_started();
        assert_eq!(session.mode(), UiMode::Normal);
        session.mark_started();
        assert_eq!(session.mode(), UiMode::Normal);
        session.clear();
        assert_eq!(session.mode(), UiMode::Normal);
    }
}
