use core::fmt::{self, Display};

/// A step index that does not point into the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub step: usize,
    pub len: usize,
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { step, len } = self;
        write!(f, "Step {step} is out of range for a bank of {len} questions.")
    }
}

/// Reasons for rejecting a question bank at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankError {
    /// The bank has no questions at all.
    Empty,
    /// The question at this index offers no choices.
    NoChoices(usize),
    /// The question at this index has no correct choice.
    NoAnswer(usize),
    /// The question at this index has more than one correct choice.
    ManyAnswers(usize),
}

impl Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Empty => f.write_str("The question bank is empty."),
            Self::NoChoices(step) => write!(f, "Question {step} has no choices."),
            Self::NoAnswer(step) => write!(f, "Question {step} has no correct choice."),
            Self::ManyAnswers(step) => write!(f, "Question {step} has more than one correct choice."),
        }
    }
}

pub type Result<T, E = OutOfRange> = core::result::Result<T, E>;
