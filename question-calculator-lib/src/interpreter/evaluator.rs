use crate::interpreter::builtin::Builtins;
use crate::interpreter::context::Context;
use crate::interpreter::error::EvalError;
use crate::interpreter::syntax::expression_tree::Node;
use itertools::Itertools;

/// Walks expression trees against a question's [`Context`].
///
/// Each tree is walked in a single pass and evaluated exactly once.
pub struct Evaluator<'a> {
    context: &'a mut Context,
    builtins: Builtins,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over the given context with the standard
    /// built-in function table.
    pub fn new(context: &'a mut Context) -> Evaluator<'a> {
        Evaluator::with_builtins(context, Builtins::standard())
    }

    pub fn with_builtins(context: &'a mut Context, builtins: Builtins) -> Evaluator<'a> {
        Evaluator { context, builtins }
    }

    /// Evaluates one statement's expression tree to a number.
    ///
    /// # Arguments
    ///
    /// * `statement`: The root of the tree to evaluate.
    ///
    /// returns: The statement's numeric value.
    ///
    /// # Examples
    ///
    /// ```
    /// use question_calculator::interpreter::context::Context;
    /// use question_calculator::interpreter::evaluator::Evaluator;
    /// use question_calculator::interpreter::parse_line;
    ///
    /// let statement = parse_line("2 + 3 * 4").unwrap();
    /// let mut context = Context::new();
    /// let value = Evaluator::new(&mut context).evaluate(&statement).unwrap();
    /// assert_eq!(value, 14.0);
    /// ```
    pub fn evaluate(&mut self, statement: &Node) -> Result<f64, EvalError> {
        match statement {
            Node::Number(lexeme) => parse_number(lexeme),
            Node::Variable(name) => {
                self.context
                    .get(name)
                    .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone() })
            }
            Node::Assignment { name, value } => {
                let value = self.evaluate(value)?;
                self.context.set(name.clone(), value);
                Ok(value)
            }
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                let left = self.evaluate(left_operand)?;
                let right = self.evaluate(right_operand)?;
                operator.evaluate(left, right)
            }
            Node::UnaryOperation { operator, operand } => {
                let operand = self.evaluate(operand)?;
                Ok(operator.evaluate(operand))
            }
            Node::FunctionCall { name, arguments } => self.evaluate_call(name, arguments),
        }
    }

    /// Resolves the name against the built-in table and checks arity before
    /// any argument is evaluated; arguments then evaluate strictly left to
    /// right, so an assignment nested in an argument mutates the context
    /// before the function body runs.
    fn evaluate_call(&mut self, name: &str, arguments: &[Node]) -> Result<f64, EvalError> {
        let function = match self.builtins.lookup(name) {
            Some(function) => *function,
            None => {
                return Err(EvalError::UnknownFunction {
                    name: name.to_string(),
                })
            }
        };
        if arguments.len() != function.arity() {
            return Err(EvalError::ArityMismatch {
                name: name.to_string(),
                expected: function.arity(),
                found: arguments.len(),
            });
        }

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.evaluate(argument)?);
        }

        let result = function.apply(&values);
        if result.is_nan() {
            return Err(EvalError::DomainError {
                operation: format!(
                    "{}({})",
                    name,
                    values.iter().map(|value| value.to_string()).join(", ")
                ),
            });
        }
        Ok(result)
    }
}

/// Parses a numeral lexeme per its notation: a `0b` prefix as a base-2
/// integer, a `0x` prefix as a base-16 integer, otherwise base-10 with an
/// optional fractional part. Precision loss beyond the mantissa's integer
/// range is accepted.
fn parse_number(lexeme: &str) -> Result<f64, EvalError> {
    let invalid = || EvalError::InvalidNumericLiteral {
        lexeme: lexeme.to_string(),
    };
    if let Some(digits) = lexeme.strip_prefix("0b") {
        return i64::from_str_radix(digits, 2)
            .map(|value| value as f64)
            .map_err(|_| invalid());
    }
    if let Some(digits) = lexeme.strip_prefix("0x") {
        return i64::from_str_radix(digits, 16)
            .map(|value| value as f64)
            .map_err(|_| invalid());
    }
    lexeme.parse::<f64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parse_line;
    use parameterized_macro::parameterized;

    fn evaluate_line(line: &str, context: &mut Context) -> Result<f64, EvalError> {
        let statement = parse_line(line).unwrap();
        Evaluator::new(context).evaluate(&statement)
    }

    fn evaluate_one(line: &str) -> Result<f64, EvalError> {
        evaluate_line(line, &mut Context::new())
    }

    #[parameterized(
    line = {
    "12_000.5",
    "0b101",
    "0b_1_0_1",
    "0xFF",
    "FACE",
    "2+3*4",
    "(2+3)*4",
    "2^3^2",
    "10-2-3",
    "-2^2",
    "cos(0)",
    "sqrt(9)",
    "min(2, 3)",
    "abs(-4)",
    "ln(1)",
    "pow(2, 10)",
    },
    expected = {
    12000.5,
    5.0,
    5.0,
    255.0,
    64206.0,
    14.0,
    20.0,
    512.0,
    5.0,
    4.0,
    1.0,
    3.0,
    2.0,
    4.0,
    0.0,
    1024.0,
    }
    )]
    fn expressions_evaluate_to_their_value(line: &str, expected: f64) {
        assert_eq!(evaluate_one(line).unwrap(), expected);
    }

    #[test]
    fn assignment_binds_and_yields_the_value() {
        let mut context = Context::new();
        assert_eq!(evaluate_line("x = 5", &mut context).unwrap(), 5.0);
        assert_eq!(context.get("x"), Some(5.0));
        assert_eq!(evaluate_line("x + 1", &mut context).unwrap(), 6.0);
    }

    #[test]
    fn assignment_right_hand_side_is_evaluated_first() {
        let mut context = Context::new();
        let error = evaluate_line("x = 1/0", &mut context).unwrap_err();
        assert_eq!(error, EvalError::DivisionByZero);
        assert_eq!(context.get("x"), None);
    }

    #[test]
    fn reading_an_unassigned_variable_fails() {
        let error = evaluate_one("y").unwrap_err();
        assert_eq!(
            error,
            EvalError::UndefinedVariable { name: "y".into() }
        );
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(evaluate_one("1/0").unwrap_err(), EvalError::DivisionByZero);
    }

    #[test]
    fn power_without_a_real_result_fails() {
        let error = evaluate_one("(-2)^0.5").unwrap_err();
        assert!(matches!(error, EvalError::DomainError { .. }));
    }

    #[test]
    fn unknown_function_fails() {
        let error = evaluate_one("summon(1)").unwrap_err();
        assert_eq!(
            error,
            EvalError::UnknownFunction {
                name: "summon".into()
            }
        );
    }

    #[test]
    fn wrong_argument_count_fails_before_arguments_run() {
        // The second argument would divide by zero, but arity is checked
        // before any argument is evaluated.
        let error = evaluate_one("sqrt(4, 1/0)").unwrap_err();
        assert_eq!(
            error,
            EvalError::ArityMismatch {
                name: "sqrt".into(),
                expected: 1,
                found: 2,
            }
        );
    }

    #[test]
    fn builtin_without_a_real_result_fails() {
        let error = evaluate_one("sqrt(-1)").unwrap_err();
        assert!(matches!(error, EvalError::DomainError { .. }));
    }

    #[test]
    fn hex_magnitude_beyond_the_integer_parser_fails() {
        let error = evaluate_one("0xFFFFFFFFFFFFFFFFFF").unwrap_err();
        assert!(matches!(error, EvalError::InvalidNumericLiteral { .. }));
    }
}
