use dashmap::DashMap;

pub use model::{Answers, ChatId, Session, State};

/// In-memory session store. Records only exist while a quiz is running.
///
/// Every method touches a single chat, so sessions never observe each other.
/// Callers are expected to hold the chat's lock across a read-modify-write.
#[derive(Debug, Default)]
pub struct Database(DashMap<ChatId, Session>);

impl Database {
    /// Returns a snapshot of the session, or an empty one if the chat is idle.
    pub fn get(&self, chat: ChatId) -> Session {
        self.0.get(&chat).map(|session| session.clone()).unwrap_or_default()
    }

    pub fn state(&self, chat: ChatId) -> State {
        self.0.get(&chat).map_or(State::Idle, |session| session.state())
    }

    pub fn set_step(&self, chat: ChatId, step: usize) {
        self.0.entry(chat).or_default().step = Some(step);
    }

    /// Stores the answer for the step, returning the one it replaced.
    pub fn record_answer(&self, chat: ChatId, step: usize, answer: Box<str>) -> Option<Box<str>> {
        self.0.entry(chat).or_default().answers.insert(step, answer)
    }

    pub fn get_answers(&self, chat: ChatId) -> Answers {
        self.0.get(&chat).map(|session| session.answers.clone()).unwrap_or_default()
    }

    /// Drops the whole record so that nothing leaks into the next attempt.
    pub fn clear(&self, chat: ChatId) -> Option<Session> {
        self.0.remove(&chat).map(|(_, session)| session)
    }

    /// Number of chats with a quiz in progress.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
