use model::{Answers, Bank, Entry, Summary, Verdict};

/// Grades the final answers of a session against the bank. Questions without
/// a recorded answer are reported as unanswered and count as incorrect.
pub fn summarize(bank: &Bank, answers: &Answers) -> Summary {
    let mut summary = Summary { entries: Vec::with_capacity(bank.len()), ..Default::default() };
    for (step, (question, correct)) in bank.iter().enumerate() {
        let answer = answers.get(&step).cloned();
        let verdict = match answer.as_deref() {
            Some(text) if text == correct => Verdict::Correct,
            Some(_) => Verdict::Incorrect,
            None => Verdict::Unanswered,
        };

        if verdict.is_correct() {
            summary.correct += 1;
        } else {
            summary.incorrect += 1;
        }

        summary.entries.push(Entry { question: question.text.clone(), verdict, answer });
    }
    summary
}
