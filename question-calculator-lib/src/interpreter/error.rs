use std::error::Error;
use std::fmt;
use std::fmt::Formatter;

/// Errors that can occur while parsing one statement.
///
/// A parse failure rejects the statement as a whole; the question driver
/// downgrades it to a per-line skip, so these never escape a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token appeared somewhere the grammar does not allow it.
    UnexpectedToken {
        /// The offending token's lexeme. Empty at end of input.
        lexeme: String,
        /// Character position within the line.
        offset: usize,
    },
    /// A `)` was expected but not found.
    ExpectedClosingParen {
        /// Character position within the line.
        offset: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { lexeme, offset } if lexeme.is_empty() => {
                write!(f, "Unexpected end of input at offset {offset}")
            }
            Self::UnexpectedToken { lexeme, offset } => {
                write!(f, "Unexpected token '{lexeme}' at offset {offset}")
            }
            Self::ExpectedClosingParen { offset } => {
                write!(f, "Expected closing parenthesis ')' at offset {offset}")
            }
        }
    }
}

impl Error for ParseError {}

/// Errors that can occur while evaluating a parsed statement.
///
/// Unlike parse errors these are not recoverable per line: the first one
/// aborts the owning question and becomes its outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A variable was read before any line assigned it.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// A call named a function not present in the built-in table.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// A known function was called with the wrong number of arguments.
    ArityMismatch {
        /// The name of the function.
        name: String,
        /// The number of arguments the function requires.
        expected: usize,
        /// The number of arguments the call supplied.
        found: usize,
    },
    /// The right-hand operand of a division was exactly zero.
    DivisionByZero,
    /// An operation has no real-valued result, e.g. a negative base raised
    /// to a non-integer exponent.
    DomainError {
        /// A rendering of the offending operation.
        operation: String,
    },
    /// A numeral lexeme failed base-specific parsing. The tokenizer only
    /// emits syntactically valid literals, so this surfaces solely for
    /// magnitudes beyond the integer parser's range.
    InvalidNumericLiteral {
        /// The offending lexeme.
        lexeme: String,
    },
    /// No line of the question evaluated successfully.
    EmptyQuestion,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Variable '{name}' has not been assigned a value")
            }
            Self::UnknownFunction { name } => write!(f, "Unknown function '{name}'"),
            Self::ArityMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "Function '{name}' expects {expected} argument(s) but was given {found}"
            ),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::DomainError { operation } => {
                write!(f, "No real-valued result for {operation}")
            }
            Self::InvalidNumericLiteral { lexeme } => {
                write!(f, "Invalid numeric literal '{lexeme}'")
            }
            Self::EmptyQuestion => write!(f, "Empty question"),
        }
    }
}

impl Error for EvalError {}
