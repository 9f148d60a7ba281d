use crate::interpreter::context::Context;
use crate::interpreter::error::EvalError;
use crate::interpreter::evaluator::Evaluator;
use crate::interpreter::parse_line;
use log::{trace, warn};

/// One delimiter-separated block of input text: an independent multi-line
/// calculation with its own variable scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The raw multi-line text of the question.
    pub text: String,
    /// The question's numeral-base hint. Threaded into the variable
    /// environment but not consulted anywhere during evaluation.
    pub base: u32,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Question {
        Question::with_base(text, 10)
    }

    pub fn with_base(text: impl Into<String>, base: u32) -> Question {
        Question {
            text: text.into(),
            base,
        }
    }
}

/// Evaluates a question and produces its single outcome.
///
/// Each line is independently tokenized, parsed, and evaluated against the
/// question's shared context. A line that fails to parse is skipped with a
/// logged warning and the remaining lines still run; a line that parses but
/// fails to evaluate aborts the question immediately with that error. The
/// question's result is the value of the last successfully evaluated line.
///
/// # Arguments
///
/// * `question`: The question to evaluate.
///
/// returns: The value of the question's last successful line.
///
/// # Examples
///
/// ```
/// use question_calculator::interpreter::processor::{process, Question};
///
/// let question = Question::new("x = 5\nx + 1");
/// let answer = process(&question).unwrap();
/// assert_eq!(answer, 6.0);
/// ```
pub fn process(question: &Question) -> Result<f64, EvalError> {
    let mut context = Context::with_base(question.base);
    let mut evaluator = Evaluator::new(&mut context);

    let mut last_value = None;
    for (line_number, line) in question.text.lines().enumerate() {
        let line_number = line_number + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let statement = match parse_line(line) {
            Ok(statement) => statement,
            Err(error) => {
                warn!("Skipping line {line_number}: {error}");
                continue;
            }
        };
        trace!("Line {line_number} parsed as:\n{statement}");

        last_value = Some(evaluator.evaluate(&statement)?);
    }

    last_value.ok_or(EvalError::EmptyQuestion)
}
