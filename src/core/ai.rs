//! AI tutor shared types
//!
//! Request/response bodies exchanged with the server proxy, prompt
//! templates, the fixed fallback texts shown when a call fails, and the
//! tutor chat session state.

use serde::{Deserialize, Serialize};

use super::models::{Batch, User};

/// Proxy endpoint for chat summaries
pub const SUMMARIZE_ENDPOINT: &str = "/api/ai/summarize";

/// Proxy endpoint for expert answers
pub const ASK_ENDPOINT: &str = "/api/ai/ask";

pub const NO_MESSAGES_REPLY: &str = "No messages to summarize.";
pub const TUTOR_FALLBACK: &str =
    "I'm having trouble connecting right now. Please try again later.";
pub const SUMMARY_FALLBACK: &str = "AI summarizing failed. Please try again later.";
pub const EMPTY_ANSWER_FALLBACK: &str = "I'm sorry, I couldn't process that request.";

/// Quick prompts offered while the conversation is short
pub const TUTOR_SUGGESTIONS: [&str; 3] = [
    "Explain Physics concepts",
    "Chemistry doubts",
    "Calculus help",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub messages: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub context: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiReply {
    pub text: String,
}

/// Error body returned by the proxy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiErrorBody {
    pub error: String,
    pub code: u16,
}

pub fn summarize_prompt(lines: &[String]) -> String {
    format!(
        "Summarize the following student discussion from a live class into 3 key takeaways: \n\n{}",
        lines.join("\n")
    )
}

pub fn ask_prompt(question: &str, context: &str) -> String {
    format!(
        "Context: {}\n\nStudent Question: {}\n\nAct as a professional educator. Provide a clear, concise, and helpful answer.",
        context, question
    )
}

/// Context string describing what the student is enrolled in
pub fn tutor_context(batches: &[Batch]) -> String {
    let list = batches
        .iter()
        .map(|b| format!("{} ({})", b.name, b.subject))
        .collect::<Vec<_>>()
        .join(", ");
    format!("The student is enrolled in the following batches: {}.", list)
}

/// Context string for questions asked from inside a live class
pub fn live_class_context(batch: &Batch, chat_lines: &[String]) -> String {
    format!(
        "Live class '{}' ({}) taught by {}. Recent chat:\n{}",
        batch.name,
        batch.subject,
        batch.teacher,
        chat_lines.join("\n")
    )
}

pub fn tutor_greeting(user: &User, batches: &[Batch]) -> String {
    let subjects = batches
        .iter()
        .map(|b| b.subject.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Hi {}! I'm your NextToppers AI Tutor. I can help you with topics from your batches like {}. What would you like to learn today?",
        user.name, subjects
    )
}

/// Who wrote a tutor transcript entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TutorRole {
    User,
    Ai,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TutorMessage {
    pub role: TutorRole,
    pub text: String,
}

impl TutorMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TutorRole::User,
            text: text.into(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            role: TutorRole::Ai,
            text: text.into(),
        }
    }
}

/// Why a new question was not sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AskRejected {
    #[error("Question is empty")]
    Empty,

    #[error("A question is already being answered")]
    Busy,
}

/// Tutor conversation with at most one call in flight
#[derive(Clone, Debug, PartialEq)]
pub struct AiChatSession {
    transcript: Vec<TutorMessage>,
    loading: bool,
}

impl AiChatSession {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            transcript: vec![TutorMessage::ai(greeting)],
            loading: false,
        }
    }

    pub fn transcript(&self) -> &[TutorMessage] {
        &self.transcript
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record the question and mark the session busy. Returns the trimmed
    /// question to send.
    pub fn begin(&mut self, input: &str) -> Result<String, AskRejected> {
        if self.loading {
            return Err(AskRejected::Busy);
        }
        let question = input.trim();
        if question.is_empty() {
            return Err(AskRejected::Empty);
        }
        self.transcript.push(TutorMessage::user(question));
        self.loading = true;
        Ok(question.to_string())
    }

    /// Record the outcome of the call: exactly one AI entry is appended and
    /// the loading flag is cleared.
    pub fn finish(&mut self, result: Result<String, String>) {
        let text = note_text(NoteKind::Answer, result);
        self.transcript.push(TutorMessage::ai(text));
        self.loading = false;
    }

    pub fn show_suggestions(&self) -> bool {
        self.transcript.len() < 3 && !self.loading
    }
}

/// Which AI helper produced a reply
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteKind {
    Summary,
    Answer,
}

impl NoteKind {
    pub fn title(&self) -> &'static str {
        match self {
            NoteKind::Summary => "Class Summary",
            NoteKind::Answer => "AI Answer",
        }
    }
}

/// Text to show for a finished AI call. A blank reply and a failed call get
/// different fixed texts.
pub fn note_text(kind: NoteKind, result: Result<String, String>) -> String {
    match (kind, result) {
        (_, Ok(text)) if !text.trim().is_empty() => text,
        (NoteKind::Summary, _) => SUMMARY_FALLBACK.to_string(),
        (NoteKind::Answer, Ok(_)) => EMPTY_ANSWER_FALLBACK.to_string(),
        (NoteKind::Answer, Err(_)) => TUTOR_FALLBACK.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassNote {
    pub kind: NoteKind,
    pub text: String,
}

/// AI panel of a live class: one call in flight, the latest note shown
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassAssistant {
    note: Option<ClassNote>,
    busy: bool,
}

impl ClassAssistant {
    pub fn note(&self) -> Option<&ClassNote> {
        self.note.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Mark the panel busy; false when a call is already running
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Replace the note with the outcome of the call and clear busy
    pub fn finish(&mut self, kind: NoteKind, result: Result<String, String>) {
        self.note = Some(ClassNote {
            kind,
            text: note_text(kind, result),
        });
        self.busy = false;
    }

    pub fn dismiss(&mut self) {
        self.note = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock_data::{mock_student, seed_batches};

    #[test]
    fn test_summarize_prompt_joins_lines() {
        let prompt = summarize_prompt(&["A: hi".to_string(), "B: lag".to_string()]);
        assert!(prompt.starts_with("Summarize the following student discussion"));
        assert!(prompt.ends_with("A: hi\nB: lag"));
    }

    #[test]
    fn test_ask_prompt_layout() {
        let prompt = ask_prompt("What is inertia?", "Physics batch");
        assert!(prompt.starts_with("Context: Physics batch\n\nStudent Question: What is inertia?"));
        assert!(prompt.contains("Act as a professional educator"));
    }

    #[test]
    fn test_tutor_context_lists_batches() {
        let context = tutor_context(&seed_batches());
        assert!(context.contains("Physics Excellence 2024 (Physics)"));
        assert!(context.contains("Advanced Calculus Bootcamp (Mathematics)"));
        assert!(context.ends_with('.'));
    }

    #[test]
    fn test_greeting_mentions_subjects() {
        let greeting = tutor_greeting(&mock_student(), &seed_batches());
        assert!(greeting.starts_with("Hi Alex Johnson!"));
        assert!(greeting.contains("Physics, Chemistry, Mathematics"));
    }

    #[test]
    fn test_begin_rejects_blank_and_concurrent() {
        let mut session = AiChatSession::new("hi");
        assert_eq!(session.begin("  "), Err(AskRejected::Empty));
        assert_eq!(session.begin(" What is GOC? "), Ok("What is GOC?".to_string()));
        assert!(session.is_loading());
        assert_eq!(session.begin("another"), Err(AskRejected::Busy));
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn test_network_failure_adds_one_fallback_entry() {
        let mut session = AiChatSession::new("hi");
        session.begin("Explain torque").unwrap();
        let before = session.transcript().len();

        session.finish(Err("Fetch failed: network error".to_string()));

        assert_eq!(session.transcript().len(), before + 1);
        let last = session.transcript().last().unwrap();
        assert_eq!(last.role, TutorRole::Ai);
        assert_eq!(last.text, TUTOR_FALLBACK);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_empty_answer_uses_fallback() {
        let mut session = AiChatSession::new("hi");
        session.begin("?").unwrap();
        session.finish(Ok("  ".to_string()));
        assert_eq!(
            session.transcript().last().map(|m| m.text.as_str()),
            Some(EMPTY_ANSWER_FALLBACK)
        );
    }

    #[test]
    fn test_summary_failure_shows_summary_fallback() {
        let mut panel = ClassAssistant::default();
        assert!(panel.begin());
        assert!(!panel.begin());

        panel.finish(NoteKind::Summary, Err("AI request timed out".to_string()));

        let note = panel.note().unwrap();
        assert_eq!(note.kind, NoteKind::Summary);
        assert_eq!(note.text, SUMMARY_FALLBACK);
        assert!(!panel.is_busy());
    }

    #[test]
    fn test_class_question_failure_shows_connection_fallback() {
        let mut panel = ClassAssistant::default();
        panel.begin();
        panel.finish(NoteKind::Answer, Err("Fetch failed: network error".to_string()));

        assert_eq!(panel.note().map(|n| n.text.as_str()), Some(TUTOR_FALLBACK));
        assert!(!panel.is_busy());
    }

    #[test]
    fn test_blank_class_answer_is_not_a_connection_error() {
        let mut panel = ClassAssistant::default();
        panel.begin();
        panel.finish(NoteKind::Answer, Ok(" ".to_string()));
        assert_eq!(panel.note().map(|n| n.text.as_str()), Some(EMPTY_ANSWER_FALLBACK));

        panel.begin();
        panel.finish(NoteKind::Summary, Ok("1. Forces".to_string()));
        assert_eq!(panel.note().map(|n| n.text.as_str()), Some("1. Forces"));

        panel.dismiss();
        assert!(panel.note().is_none());
    }

    #[test]
    fn test_suggestions_hide_once_conversation_grows() {
        let mut session = AiChatSession::new("hi");
        assert!(session.show_suggestions());
        session.begin("q").unwrap();
        assert!(!session.show_suggestions());
        session.finish(Ok("a".to_string()));
        assert!(!session.show_suggestions());
    }
}
