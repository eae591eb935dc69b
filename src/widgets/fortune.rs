//! Magic 8 Ball: maps a question to a canned answer by checksum.

use tracing::debug;

use crate::error::WidgetError;
use crate::model::Answer;
use crate::widgets::ToolReply;

pub const ANSWER_TABLE: [&str; 15] = [
    "As I see it, yes",
    "Don't count on it",
    "It is certain",
    "It is decidedly so",
    "Most likely",
    "My reply is no",
    "My sources say no",
    "Outlook good",
    "Outlook not so good",
    "Signs point to yes",
    "Very doubtful",
    "Without a doubt",
    "Yes definitely",
    "Yes",
    "You may rely on it",
];

/// Deterministic responder over a fixed answer table.
#[derive(Debug, Clone)]
pub struct MagicEightBall {
    answers: Vec<String>,
}

impl Default for MagicEightBall {
    fn default() -> Self {
        Self::new(ANSWER_TABLE.iter().map(|a| a.to_string()).collect())
    }
}

impl MagicEightBall {
    pub fn new(answers: Vec<String>) -> Self {
        Self { answers }
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Sum of the question's UTF-16 code units.
    pub fn checksum(question: &str) -> u64 {
        question
            .encode_utf16()
            .fold(0u64, |acc, unit| acc.wrapping_add(u64::from(unit)))
    }

    pub fn answer(&self, question: &str) -> Result<ToolReply<Answer>, WidgetError> {
        if self.answers.is_empty() {
            return Err(WidgetError::internal("answer table is empty"));
        }

        let index = (Self::checksum(question) % self.answers.len() as u64) as usize;
        let answer = self.answers[index].clone();
        debug!(index, "magic-8-ball answered");

        Ok(ToolReply::new(Answer { answer }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn empty_question_maps_to_first_answer() {
        let ball = MagicEightBall::default();
        let reply = ball.answer("").unwrap();
        assert_eq!(reply.structured.answer, "As I see it, yes");
        assert!(reply.summary.is_none());
    }

    #[test]
    fn same_question_same_answer() {
        let ball = MagicEightBall::default();
        let first = ball.answer("Will it rain tomorrow?").unwrap();
        let second = ball.answer("Will it rain tomorrow?").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn checksum_picks_index() {
        // 'a' = 97, 97 % 15 = 7
        let ball = MagicEightBall::default();
        assert_eq!(ball.answer("a").unwrap().structured.answer, "Outlook good");
        // "ab" = 195, 195 % 15 = 0
        assert_eq!(ball.answer("ab").unwrap().structured.answer, "As I see it, yes");
        // "z" = 122, 122 % 15 = 2
        assert_eq!(ball.answer("z").unwrap().structured.answer, "It is certain");
    }

    #[test]
    fn answers_always_come_from_table() {
        let ball = MagicEightBall::default();
        for question in ["Should I?", "🎱 really?", "é", "   ", "Is 42 the answer"] {
            let answer = ball.answer(question).unwrap().structured.answer;
            assert!(ANSWER_TABLE.contains(&answer.as_str()), "{answer}");
        }
    }

    #[test]
    fn astral_characters_count_as_surrogate_pairs() {
        // U+1F3B1 encodes as 0xD83C 0xDFB1
        assert_eq!(MagicEightBall::checksum("🎱"), 0xD83C + 0xDFB1);
    }

    #[test]
    fn empty_table_is_an_internal_error() {
        let ball = MagicEightBall::new(Vec::new());
        let err = ball.answer("anything").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
    }
}
