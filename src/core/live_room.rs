//! Chat and poll state of a live session
//!
//! Owned locally by the live class and the control room views; nothing here
//! is shared across screens.

use chrono::Utc;
use std::collections::BTreeSet;

use super::ids::{IdKind, new_id};
use super::models::{ChatMessage, Poll, User};

/// How many recent chat lines are sent to the AI for summaries and context
pub const AI_CONTEXT_LINES: usize = 20;

/// Chat transcript plus moderation state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatRoom {
    messages: Vec<ChatMessage>,
    muted: BTreeSet<String>,
}

impl ChatRoom {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            muted: BTreeSet::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Post a message as `user`. Blank text and muted senders are ignored.
    pub fn send(&mut self, user: &User, text: &str) -> Option<ChatMessage> {
        let text = text.trim();
        if text.is_empty() || self.is_muted(&user.id) {
            return None;
        }
        let message = ChatMessage {
            id: new_id(IdKind::Message),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            text: text.to_string(),
            timestamp: Utc::now(),
            is_admin: user.role.is_admin(),
        };
        self.messages.push(message.clone());
        Some(message)
    }

    /// Remove a message by id. Returns whether anything was removed.
    pub fn delete(&mut self, message_id: &str) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != message_id);
        self.messages.len() != before
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Flip the mute flag for a user; returns the new state
    pub fn toggle_mute(&mut self, user_id: &str) -> bool {
        if self.muted.remove(user_id) {
            false
        } else {
            self.muted.insert(user_id.to_string());
            true
        }
    }

    pub fn is_muted(&self, user_id: &str) -> bool {
        self.muted.contains(user_id)
    }

    /// The last `n` messages as "Name: text" lines, oldest first
    pub fn recent_lines(&self, n: usize) -> Vec<String> {
        let start = self.messages.len().saturating_sub(n);
        self.messages[start..]
            .iter()
            .map(|m| format!("{}: {}", m.user_name, m.text))
            .collect()
    }
}

/// Reply prefix the moderator gets when answering someone
pub fn mention(user_name: &str) -> String {
    format!("@{} ", user_name)
}

/// Polls launched during a session, most recent first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollBoard {
    polls: Vec<Poll>,
}

impl PollBoard {
    pub fn new(polls: Vec<Poll>) -> Self {
        Self { polls }
    }

    pub fn polls(&self) -> &[Poll] {
        &self.polls
    }

    pub fn launch(&mut self, poll: Poll) {
        self.polls.insert(0, poll);
    }

    /// Stop accepting votes on a poll; returns false if it does not exist
    pub fn close(&mut self, poll_id: &str) -> bool {
        match self.polls.iter_mut().find(|p| p.id == poll_id) {
            Some(poll) => {
                poll.is_active = false;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, poll_id: &str) -> bool {
        let before = self.polls.len();
        self.polls.retain(|p| p.id != poll_id);
        self.polls.len() != before
    }

    /// Count one vote; only active polls and in-range options are accepted
    pub fn vote(&mut self, poll_id: &str, option: usize) -> bool {
        self.polls
            .iter_mut()
            .find(|p| p.id == poll_id)
            .is_some_and(|p| p.record_vote(option))
    }

    /// The most recent poll still accepting votes
    pub fn active(&self) -> Option<&Poll> {
        self.polls.iter().find(|p| p.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forms::PollDraft;
    use crate::core::mock_data::{mock_admin, mock_student, seed_chat, seed_poll};

    #[test]
    fn test_send_ignores_blank_text() {
        let mut room = ChatRoom::default();
        assert!(room.send(&mock_student(), "   ").is_none());
        assert!(room.is_empty());
    }

    #[test]
    fn test_send_sets_admin_flag_from_role() {
        let mut room = ChatRoom::default();
        let student = room.send(&mock_student(), "hello").unwrap();
        let admin = room.send(&mock_admin(), "welcome").unwrap();
        assert!(!student.is_admin);
        assert!(admin.is_admin);
        assert_eq!(room.len(), 2);
        assert_ne!(student.id, admin.id);
    }

    #[test]
    fn test_muted_user_cannot_send() {
        let mut room = ChatRoom::default();
        let student = mock_student();
        assert!(room.toggle_mute(&student.id));
        assert!(room.send(&student, "spam").is_none());
        assert!(!room.toggle_mute(&student.id));
        assert!(room.send(&student, "sorry").is_some());
    }

    #[test]
    fn test_delete_message() {
        let mut room = ChatRoom::new(seed_chat(Utc::now()));
        assert!(room.delete("2"));
        assert!(!room.delete("2"));
        assert_eq!(room.len(), 3);
        assert!(room.messages().iter().all(|m| m.id != "2"));
    }

    #[test]
    fn test_recent_lines_takes_tail() {
        let room = ChatRoom::new(seed_chat(Utc::now()));
        let lines = room.recent_lines(2);
        assert_eq!(
            lines,
            vec![
                "Aryan Singh: Quantum theory is so interesting!".to_string(),
                "Sneha J.: Is this topic in the upcoming test?".to_string(),
            ]
        );
        assert_eq!(room.recent_lines(50).len(), 4);
    }

    #[test]
    fn test_mention_prefix() {
        assert_eq!(mention("Rahul V."), "@Rahul V. ");
    }

    #[test]
    fn test_launch_prepends() {
        let mut board = PollBoard::new(vec![seed_poll()]);
        let mut draft = PollDraft {
            question: "Best unit?".to_string(),
            ..Default::default()
        };
        draft.set_option(0, "SI");
        draft.set_option(1, "CGS");
        let poll = draft.validate().unwrap();
        let id = poll.id.clone();
        board.launch(poll);
        assert_eq!(board.polls()[0].id, id);
        assert_eq!(board.active().map(|p| p.id.clone()), Some(id));
    }

    #[test]
    fn test_vote_only_on_active_polls() {
        let mut board = PollBoard::new(vec![seed_poll()]);
        assert!(board.vote("p1", 1));
        assert_eq!(board.polls()[0].votes_for(1), 13);
        assert!(!board.vote("p1", 9));
        assert!(!board.vote("missing", 0));

        assert!(board.close("p1"));
        assert!(!board.vote("p1", 1));
        assert!(board.active().is_none());
    }

    #[test]
    fn test_delete_poll() {
        let mut board = PollBoard::new(vec![seed_poll()]);
        assert!(board.delete("p1"));
        assert!(!board.delete("p1"));
        assert!(board.polls().is_empty());
    }
}
