//! Pure decision logic of the quiz flow.

use model::{Event, Render, State};

pub const HINT: &str = "There is no quiz running. Use the /quiz command to start one.";
pub const REPROMPT: &str = "Please select one of the answers.";

/// Side effects the controller carries out, in order, after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Drop the session without reporting on it.
    Reset,
    /// Store the answer for the step, replacing any earlier one.
    Record { step: usize, answer: Box<str> },
    /// Persist the step and present its question.
    Enter(usize),
    /// Score the session, report it, then clear it.
    Finish,
    Render(Render),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: State,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn stay(state: State, render: Render) -> Self {
        Self { next: state, effects: vec![Effect::Render(render)] }
    }

    fn finish() -> Self {
        Self { next: State::Idle, effects: vec![Effect::Finish] }
    }

    /// Moves to `step`, which completes the quiz once it runs past the last question.
    fn enter(step: usize, count: usize, mut effects: Vec<Effect>) -> Self {
        if step < count {
            effects.push(Effect::Enter(step));
            Self { next: State::AwaitingAnswer(step), effects }
        } else {
            effects.push(Effect::Finish);
            Self { next: State::Idle, effects }
        }
    }
}

/// Decides the next state of a chat holding `count` questions. Performs no I/O.
pub fn transition(state: State, count: usize, event: Event) -> Transition {
    use State::{AwaitingAnswer, Idle};
    match (state, event) {
        (_, Event::Close) => Transition {
            next: Idle,
            effects: vec![Effect::Reset, Effect::Render(Render::Greeting)],
        },
        (Idle, Event::StartQuiz) => Transition::enter(0, count, vec![Effect::Reset, Effect::Render(Render::Welcome)]),
        (AwaitingAnswer(_), Event::StartQuiz) => Transition::enter(0, count, vec![Effect::Reset]),
        (Idle, _) => Transition::stay(Idle, Render::Prompt(HINT.into())),
        (AwaitingAnswer(step), Event::SubmitAnswer(answer)) => {
            Transition::enter(step + 1, count, vec![Effect::Record { step, answer }])
        }
        (AwaitingAnswer(0), Event::GoBack) | (AwaitingAnswer(_), Event::Exit) => Transition::finish(),
        (AwaitingAnswer(step), Event::GoBack) => Transition::enter(step - 1, count, Vec::new()),
        (state @ AwaitingAnswer(_), Event::UnrecognizedInput) => Transition::stay(state, Render::Prompt(REPROMPT.into())),
    }
}
