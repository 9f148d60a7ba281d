use crate::interpreter::processor::Question;
use itertools::Itertools;

/// Splits a document into its questions.
///
/// Questions are separated by delimiter lines: lines whose trimmed text is at
/// least four characters long and consists solely of `-`. Blocks that contain
/// only whitespace are dropped. Every question carries the default
/// numeral-base hint of 10.
///
/// # Arguments
///
/// * `document`: The full text of an input document.
///
/// returns: The document's questions, in order.
///
/// # Examples
///
/// ```
/// use question_calculator::document::split_questions;
///
/// let questions = split_questions("1 + 1\n----\n2 + 2");
/// assert_eq!(questions.len(), 2);
/// assert_eq!(questions[0].text, "1 + 1");
/// ```
pub fn split_questions(document: &str) -> Vec<Question> {
    let groups = document.lines().group_by(|line| is_delimiter(line));
    groups
        .into_iter()
        .filter(|(is_delimiter, _)| !is_delimiter)
        .map(|(_, lines)| lines.collect::<Vec<_>>().join("\n"))
        .filter(|block| !block.trim().is_empty())
        .map(Question::new)
        .collect()
}

fn is_delimiter(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 4 && line.chars().all(|character| character == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_lines_separate_questions() {
        let questions = split_questions("x = 1\nx + 1\n----\n2 * 3");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "x = 1\nx + 1");
        assert_eq!(questions[1].text, "2 * 3");
    }

    #[test]
    fn longer_rulers_also_delimit() {
        let questions = split_questions("1\n----------------------------------------\n2");
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn short_dash_runs_are_question_text_not_delimiters() {
        // "---" is three dashes: part of the question (it will fail to parse
        // there, which is the driver's concern, not the splitter's).
        let questions = split_questions("1\n---\n2");
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn whitespace_only_blocks_are_dropped() {
        let questions = split_questions("----\n\n----\n1 + 1\n----");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "1 + 1");
    }

    #[test]
    fn document_without_delimiters_is_one_question() {
        let questions = split_questions("x = 2\nx ^ 10");
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn questions_carry_the_default_base_hint() {
        let questions = split_questions("1 + 1");
        assert_eq!(questions[0].base, 10);
    }
}
