//! Quiz flow controller.
//!
//! Each inbound event is decided by the pure [`transition`] function and the
//! resulting effects are applied to the session store and the render sink,
//! all while holding the chat's lock.

mod transition;

#[cfg(test)]
mod proptests;

pub use transition::{transition, Effect, Transition, HINT, REPROMPT};

use crate::{error, lock::Serializer, score};
use db::Database;
use model::{Bank, ChatId, Event, Render, State};
use std::{sync::Arc, time::Duration};

/// Receives render instructions in the order they must be shown to the chat.
pub trait Sink {
    fn render(&mut self, render: Render);
}

impl Sink for Vec<Render> {
    fn render(&mut self, render: Render) {
        self.push(render);
    }
}

pub struct Controller {
    bank: Arc<Bank>,
    db: Database,
    serializer: Serializer,
}

impl Controller {
    pub fn new(bank: impl Into<Arc<Bank>>, timeout: Duration) -> Self {
        Self { bank: bank.into(), db: Database::default(), serializer: Serializer::new(timeout) }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Processes one event for the chat and returns the state it settled in.
    /// Fails only when the chat's lock cannot be acquired, in which case the
    /// event had no effect at all.
    pub async fn on_event<S: Sink>(&self, chat: ChatId, event: Event, sink: &mut S) -> error::Result<State> {
        self.serializer.with_session_lock(chat, || async move { self.apply(chat, event, sink) }).await
    }

    /// Must only be called while holding the chat's lock.
    fn apply(&self, chat: ChatId, event: Event, sink: &mut impl Sink) -> State {
        let state = self.db.state(chat);
        let Transition { next, effects } = transition(state, self.bank.len(), event);
        log::debug!("Chat {chat} moved from {state:?} to {next:?}.");

        for effect in effects {
            match effect {
                Effect::Reset => {
                    self.db.clear(chat);
                }
                Effect::Record { step, answer } => {
                    self.db.record_answer(chat, step, answer);
                }
                Effect::Enter(step) => self.enter(chat, step, sink),
                Effect::Finish => self.finish(chat, sink),
                Effect::Render(render) => sink.render(render),
            }
        }

        debug_assert_eq!(self.db.state(chat), next);
        next
    }

    fn enter(&self, chat: ChatId, step: usize, sink: &mut impl Sink) {
        let question = match self.bank.get(step) {
            Ok(question) => question,
            Err(err) => {
                log::debug!("{err} Treating it as completion for chat {chat}.");
                return self.finish(chat, sink);
            }
        };

        self.db.set_step(chat, step);
        sink.render(Render::Question {
            text: question.text.clone(),
            options: question.choices.iter().map(|choice| choice.text.clone()).collect(),
            show_back: step > 0,
            show_exit: true,
        });
    }

    fn finish(&self, chat: ChatId, sink: &mut impl Sink) {
        // The report must reflect the final answers, so clear only afterwards.
        let answers = self.db.get_answers(chat);
        let summary = score::summarize(&self.bank, &answers);
        self.db.clear(chat);

        log::info!("Chat {chat} finished the quiz with {} of {} correct.", summary.correct, self.bank.len());
        sink.render(Render::Summary(summary));
    }
}
