pub mod builtin;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod processor;
pub mod syntax;
pub mod token;

use crate::debug;
use crate::interpreter::error::ParseError;
use crate::interpreter::token::{Token, TokenKind};
use anyhow::{Context, Result};
use string_builder::Builder;
use syntax::expression_tree::Node;

/// Converts one line of question text into an equivalent expression tree,
/// which is easier to evaluate than the original string.
///
/// # Arguments
///
/// * `line`: The text of one statement: an assignment or an expression.
///
/// returns: The root of the equivalent expression tree.
///
/// # Examples
///
/// ```
/// use question_calculator::interpreter::parse_line;
///
/// let statement = parse_line("2 + 3 * 4").unwrap();
/// ```
pub fn parse_line(line: &str) -> Result<Node, ParseError> {
    let tokens = lexer::tokenize(line);
    let statement = parser::parse(tokens)?;
    debug!(&statement);
    Ok(statement)
}

/// Pretty-prints the given tokens with normalized whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use question_calculator::interpreter::lexer::tokenize;
/// use question_calculator::interpreter::tokens_to_string;
///
/// let pretty = tokens_to_string(&tokenize("x=5+3")).unwrap();
/// assert_eq!(pretty, "x = 5 + 3");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token.kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Assign => {
                builder.append(" ");
                builder.append(token.lexeme.as_str());
                builder.append(" ");
            }
            TokenKind::Comma => builder.append(", "),
            TokenKind::End => {}
            _ => builder.append(token.lexeme.as_str()),
        }
    }

    builder.string().context("Failed to build token string")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::EvalError;
    use crate::interpreter::processor::{process, Question};
    use parameterized_macro::parameterized;

    #[parameterized(
    text = {
    "12_000.5",
    "12000.5",
    "0xFF",
    "FF",
    "0b101",
    "0b_1_0_1",
    "2^3^2",
    "2+3*4",
    "(2+3)*4",
    "x = 5\nx + 1",
    "cos(0)",
    },
    expected_answer = {
    12000.5,
    12000.5,
    255.0,
    255.0,
    5.0,
    5.0,
    512.0,
    14.0,
    20.0,
    6.0,
    1.0,
    }
    )]
    fn question_evaluates_to_expected_answer(text: &str, expected_answer: f64) {
        let answer = process(&Question::new(text)).unwrap();
        assert_eq!(answer, expected_answer);
    }

    #[test]
    fn prefixed_and_bare_hex_produce_the_identical_lexeme() {
        let prefixed = lexer::tokenize("0xFF");
        let bare = lexer::tokenize("FF");
        assert_eq!(prefixed[0].lexeme, bare[0].lexeme);
    }

    #[test]
    fn undeclared_function_fails_the_question() {
        let outcome = process(&Question::new("conjure(1)"));
        assert_eq!(
            outcome.unwrap_err(),
            EvalError::UnknownFunction {
                name: "conjure".into()
            }
        );
    }

    #[test]
    fn known_function_with_wrong_argument_count_fails_the_question() {
        let outcome = process(&Question::new("cos(0, 1)"));
        assert!(matches!(
            outcome.unwrap_err(),
            EvalError::ArityMismatch { .. }
        ));
    }

    #[test]
    fn tokens_to_string_normalizes_spacing() {
        let tokens = lexer::tokenize("y=max( 1,2 )*3");
        let pretty = tokens_to_string(&tokens).unwrap();
        assert_eq!(pretty, "y = max(1, 2) * 3");
    }
}
