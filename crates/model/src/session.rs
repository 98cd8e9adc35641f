use alloc::{boxed::Box, collections::BTreeMap};
use core::fmt::{self, Display};
use serde::{Deserialize, Serialize};

/// Identifier of the chat that owns a session. Group chats may carry negative IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Literal answer text keyed by step index.
pub type Answers = BTreeMap<usize, Box<str>>;

/// Progress of a single chat through the quiz.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    /// Question currently awaiting an answer. Absent while idle.
    pub step: Option<usize>,
    /// Answers recorded so far. Going back does not remove them.
    pub answers: Answers,
}

impl Session {
    pub const fn state(&self) -> State {
        match self.step {
            Some(step) => State::AwaitingAnswer(step),
            None => State::Idle,
        }
    }
}

/// Flow state derived from a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    AwaitingAnswer(usize),
}
