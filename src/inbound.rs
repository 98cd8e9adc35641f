use model::Event;

pub const BACK: &str = "🔙 Back";
pub const EXIT: &str = "🚫 Exit";

/// Maps the text of an inbound chat message onto a flow event. Messages
/// without any text (stickers, photos, etc.) can never be answers.
pub fn parse(text: Option<&str>) -> Event {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return Event::UnrecognizedInput;
    };

    match command(text) {
        Some("quiz") => return Event::StartQuiz,
        Some("start") => return Event::Close,
        _ => (),
    }

    match text {
        BACK => Event::GoBack,
        EXIT => Event::Exit,
        _ => Event::SubmitAnswer(text.into()),
    }
}

/// Extracts the command name, dropping the `@bot` mention and any arguments.
fn command(text: &str) -> Option<&str> {
    let word = text.trim_start().strip_prefix('/')?.split_whitespace().next()?;
    Some(word.split_once('@').map_or(word, |(name, _)| name))
}

#[cfg(test)]
mod tests {
    use super::{parse, BACK, EXIT};
    use model::Event;

    #[test]
    fn commands() {
        assert_eq!(parse(Some("/quiz")), Event::StartQuiz);
        assert_eq!(parse(Some("/quiz@capitals_bot")), Event::StartQuiz);
        assert_eq!(parse(Some("/start")), Event::Close);
        assert_eq!(parse(Some("/start deep-link")), Event::Close);
    }

    #[test]
    fn navigation_buttons() {
        assert_eq!(parse(Some(BACK)), Event::GoBack);
        assert_eq!(parse(Some(EXIT)), Event::Exit);
    }

    #[test]
    fn everything_else_is_an_answer() {
        assert_eq!(parse(Some("Paris")), Event::SubmitAnswer("Paris".into()));
        assert_eq!(parse(Some("Back")), Event::SubmitAnswer("Back".into()));
        assert_eq!(parse(Some("/quizzes")), Event::SubmitAnswer("/quizzes".into()));
        assert_eq!(parse(Some("  ")), Event::SubmitAnswer("  ".into()));
        assert_eq!(parse(Some(" \n")), Event::SubmitAnswer(" \n".into()));
    }

    #[test]
    fn missing_text_is_unrecognized() {
        assert_eq!(parse(None), Event::UnrecognizedInput);
        assert_eq!(parse(Some("")), Event::UnrecognizedInput);
    }
}
