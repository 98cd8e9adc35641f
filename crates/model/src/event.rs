use alloc::boxed::Box;

/// Inbound user actions, already stripped of any platform specifics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin a fresh attempt, discarding any running one.
    StartQuiz,
    /// Candidate answer for the current question, recorded verbatim.
    SubmitAnswer(Box<str>),
    GoBack,
    Exit,
    /// Input that cannot be an answer (e.g. a sticker or an empty message).
    UnrecognizedInput,
    /// Silently drop any running quiz and greet the user.
    Close,
}
