//! Property-based tests for the quiz flow.

use super::tests::controller;
use super::{transition, Controller, Effect, Transition};
use model::{ChatId, Event, Render, State};
use proptest::prelude::*;

const CHAT: ChatId = ChatId(7);
const ANSWERS: &[&str] = &["Paris", "Madrid", "Berlin", "London", "Rome"];

fn arb_answer() -> impl Strategy<Value = Box<str>> {
    prop_oneof![
        prop::sample::select(ANSWERS).prop_map(Box::<str>::from),
        "[a-zA-Z ]{0,12}".prop_map(String::into_boxed_str),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        2 => Just(Event::StartQuiz),
        8 => arb_answer().prop_map(Event::SubmitAnswer),
        3 => Just(Event::GoBack),
        1 => Just(Event::Exit),
        1 => Just(Event::UnrecognizedInput),
        1 => Just(Event::Close),
    ]
}

fn arb_state_and_count() -> impl Strategy<Value = (State, usize)> {
    (1usize..8).prop_flat_map(|count| {
        let state = prop_oneof![Just(State::Idle), (0..count).prop_map(State::AwaitingAnswer)];
        (state, Just(count))
    })
}

/// Feeds the events to the controller, checking the invariants after each one.
fn replay(flow: &Controller, events: Vec<Event>) -> Result<Vec<Render>, TestCaseError> {
    let count = flow.bank().len();
    let mut all = Vec::new();
    for event in events {
        let mut renders = Vec::new();
        let state = flow.apply(CHAT, event, &mut renders);
        prop_assert_eq!(state, flow.database().state(CHAT));

        if let State::AwaitingAnswer(step) = state {
            prop_assert!(step < count);
        }

        for render in &renders {
            if let Render::Summary(summary) = render {
                prop_assert_eq!(summary.correct + summary.incorrect, count);
                prop_assert_eq!(summary.entries.len(), count);
                prop_assert!(flow.database().is_empty());
            }
        }

        prop_assert!(flow.database().get_answers(CHAT).keys().all(|&step| step < count));
        all.extend(renders);
    }
    Ok(all)
}

proptest! {
    #[test]
    fn transitions_stay_within_the_bank((state, count) in arb_state_and_count(), event in arb_event()) {
        let Transition { next, effects } = transition(state, count, event);
        if let State::AwaitingAnswer(step) = next {
            prop_assert!(step < count);
        }

        let finishes = effects.iter().filter(|effect| matches!(effect, Effect::Finish)).count();
        prop_assert!(finishes <= 1);
        if finishes == 1 {
            prop_assert_eq!(next, State::Idle);
        }
    }

    #[test]
    fn random_sessions_keep_invariants(events in prop::collection::vec(arb_event(), 0..64)) {
        let flow = controller();
        replay(&flow, events)?;
    }

    #[test]
    fn full_runs_add_up(answers in prop::collection::vec(arb_answer(), 5)) {
        let flow = controller();
        let expected = flow
            .bank()
            .iter()
            .zip(&answers)
            .filter(|&((_, correct), answer)| &**answer == correct)
            .count();

        let events = core::iter::once(Event::StartQuiz).chain(answers.into_iter().map(Event::SubmitAnswer)).collect();
        let renders = replay(&flow, events)?;

        let summaries: Vec<_> = renders
            .iter()
            .filter_map(|render| match render {
                Render::Summary(summary) => Some(summary),
                _ => None,
            })
            .collect();
        prop_assert_eq!(summaries.len(), 1);
        prop_assert_eq!(summaries[0].correct, expected);
        prop_assert_eq!(summaries[0].correct + summaries[0].incorrect, flow.bank().len());
    }

    #[test]
    fn restart_forgets_previous_attempt(events in prop::collection::vec(arb_event(), 0..32)) {
        let flow = controller();
        replay(&flow, events)?;

        let mut renders = Vec::new();
        let state = flow.apply(CHAT, Event::StartQuiz, &mut renders);
        prop_assert_eq!(state, State::AwaitingAnswer(0));
        prop_assert!(flow.database().get_answers(CHAT).is_empty());
        prop_assert!(!renders.iter().any(|render| matches!(render, Render::Summary(_))));
    }

    #[test]
    fn back_at_first_question_matches_exit(answers in prop::collection::vec(arb_answer(), 0..5)) {
        let depth = answers.len();
        let history: Vec<_> = core::iter::once(Event::StartQuiz)
            .chain(answers.into_iter().map(Event::SubmitAnswer))
            .chain(core::iter::repeat(Event::GoBack).take(depth))
            .collect();

        let back = controller();
        let exit = controller();
        replay(&back, history.clone())?;
        replay(&exit, history)?;
        prop_assert_eq!(back.database().state(CHAT), State::AwaitingAnswer(0));

        let back_renders = replay(&back, vec![Event::GoBack])?;
        let exit_renders = replay(&exit, vec![Event::Exit])?;
        prop_assert_eq!(back_renders, exit_renders);
        prop_assert!(back.database().is_empty());
        prop_assert!(exit.database().is_empty());
    }
}
