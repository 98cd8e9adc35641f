use crate::inbound::{BACK, EXIT};
use model::{Render, Summary};
use serde::Serialize;

pub const WELCOME: &str = "Welcome to the quiz!";
pub const GREETING: &str = "Hi! This is a quiz bot. To start the quiz, use the /quiz command.";

type Row = Vec<Box<str>>;

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Keyboard {
    /// Replace the chat's keyboard with these rows of buttons.
    Show(Vec<Row>),
    /// Hide any keyboard shown earlier.
    Remove,
}

/// Outbound chat message.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<Keyboard>,
}

impl From<Render> for Reply {
    fn from(render: Render) -> Self {
        match render {
            Render::Welcome => Self { text: WELCOME.into(), keyboard: None },
            Render::Greeting => Self { text: GREETING.into(), keyboard: Some(Keyboard::Remove) },
            Render::Prompt(text) => Self { text, keyboard: None },
            Render::Question { text, options, show_back, show_exit } => {
                let mut rows: Vec<Row> = options.into_vec().into_iter().map(|option| vec![option]).collect();
                let nav: Row = [(show_back, BACK), (show_exit, EXIT)]
                    .into_iter()
                    .filter_map(|(shown, label)| shown.then(|| Box::from(label)))
                    .collect();
                if !nav.is_empty() {
                    rows.push(nav);
                }
                Self { text, keyboard: Some(Keyboard::Show(rows)) }
            }
            Render::Summary(summary) => Self { text: report(&summary).into(), keyboard: Some(Keyboard::Remove) },
        }
    }
}

fn report(Summary { entries, correct, incorrect }: &Summary) -> String {
    let lines: Vec<_> = entries
        .iter()
        .zip(1..)
        .map(|(entry, num)| {
            let mark = if entry.verdict.is_correct() { '✅' } else { '❌' };
            let answer = entry.answer.as_deref().unwrap_or("no answer");
            format!("{num}. {}\n{mark} {answer}", entry.question)
        })
        .collect();
    format!("Your answers:\n\n{}\n\nCorrect answers: {correct}\nIncorrect answers: {incorrect}", lines.join("\n\n"))
}
