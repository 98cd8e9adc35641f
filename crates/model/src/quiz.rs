use crate::error::{self, BankError, OutOfRange};
use alloc::{boxed::Box, vec::Vec};
use serde::{Deserialize, Serialize};

/// One of the answers offered for a question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    /// Label shown to the user. Answers are scored by comparing against this text.
    pub text: Box<str>,
    /// Whether this is the expected answer.
    #[serde(default)]
    pub correct: bool,
}

impl Choice {
    pub fn wrong(text: &str) -> Self {
        Self { text: text.into(), correct: false }
    }

    pub fn right(text: &str) -> Self {
        Self { text: text.into(), correct: true }
    }
}

/// Acceptable schema for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    /// Question to be displayed in chat.
    pub text: Box<str>,
    /// Possible answers to select from, in display order.
    pub choices: Box<[Choice]>,
}

impl Question {
    pub fn new(text: &str, choices: impl Into<Box<[Choice]>>) -> Self {
        Self { text: text.into(), choices: choices.into() }
    }
}

/// Ordered and immutable collection of questions. Every question is guaranteed
/// to carry exactly one correct choice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct Bank {
    questions: Box<[Question]>,
    /// Index of the correct choice for each question.
    answers: Box<[usize]>,
}

impl TryFrom<Vec<Question>> for Bank {
    type Error = BankError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let answers = questions
            .iter()
            .enumerate()
            .map(|(step, question)| {
                if question.choices.is_empty() {
                    return Err(BankError::NoChoices(step));
                }

                let mut correct = question.choices.iter().enumerate().filter(|(_, choice)| choice.correct);
                let (index, _) = correct.next().ok_or(BankError::NoAnswer(step))?;
                if correct.next().is_some() {
                    return Err(BankError::ManyAnswers(step));
                }

                Ok(index)
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { questions: questions.into_boxed_slice(), answers })
    }
}

impl From<Bank> for Vec<Question> {
    fn from(bank: Bank) -> Self {
        bank.questions.into_vec()
    }
}

impl Bank {
    /// Number of questions in the bank.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false` since construction rejects empty banks.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, step: usize) -> error::Result<&Question> {
        self.questions.get(step).ok_or(OutOfRange { step, len: self.len() })
    }

    pub fn correct_answer_of(&self, step: usize) -> error::Result<&str> {
        let question = self.get(step)?;
        Ok(&question.choices[self.answers[step]].text)
    }

    /// Iterates over each question alongside the text of its correct choice.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Question, &str)> {
        self.questions
            .iter()
            .zip(self.answers.iter())
            .map(|(question, &answer)| (question, question.choices[answer].text.as_ref()))
    }
}
