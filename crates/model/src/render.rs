use alloc::{boxed::Box, vec::Vec};

/// Outcome of a single question in the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// The user never answered this question. Scored as incorrect.
    Unanswered,
}

impl Verdict {
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub question: Box<str>,
    pub verdict: Verdict,
    /// Text the user supplied, if any.
    pub answer: Option<Box<str>>,
}

/// Scored report of a finished or abandoned quiz, in question order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub entries: Vec<Entry>,
    pub correct: usize,
    pub incorrect: usize,
}

/// Instructions for the render sink. Turning these into buttons and markup is
/// left to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    /// One-time greeting when a quiz begins from an idle chat.
    Welcome,
    /// Usage help after a chat has been closed.
    Greeting,
    Question {
        text: Box<str>,
        options: Box<[Box<str>]>,
        show_back: bool,
        show_exit: bool,
    },
    Prompt(Box<str>),
    Summary(Summary),
}
