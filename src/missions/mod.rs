//! Mission controllers.
//!
//! Controllers hold the view-local state of a mission (typed input,
//! selected item or operation, feedback line) and translate player intent
//! into store actions. They contain no rendering code, so the terminal
//! screens and the tests drive them the same way.

mod mission1;
mod mission2;

pub use mission1::{Mission1, Mission1Step, auto_place};
pub use mission2::{ArrayOperation, GuessError, GuessOutcome, Mission2};

/// Tone of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Neutral hint.
    Info,
    /// The player did the right thing.
    Success,
    /// The player has to correct something.
    Error,
}

/// A one-line message shown under the mission controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Tone of the message.
    pub kind: FeedbackKind,
    /// Text shown to the player.
    pub text: String,
}

impl Feedback {
    /// Creates an informational message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Info,
            text: text.into(),
        }
    }

    /// Creates a success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: text.into(),
        }
    }

    /// Creates an error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }
}
