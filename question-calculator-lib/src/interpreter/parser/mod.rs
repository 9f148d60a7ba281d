use crate::interpreter::error::ParseError;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::{Token, TokenKind};

/// Parses the given tokens into an equivalent expression tree,
/// which is easier to evaluate than the original line of text.
///
/// The grammar is recursive descent with one method per precedence level:
///
/// ```text
/// statement  := (Identifier '=' expression) | expression
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := primary ('^' factor)?
/// primary    := Number
///             | Identifier ['(' (expression (',' expression)*)? ')']
///             | '(' expression ')'
///             | '-' primary
/// ```
///
/// The first failure rejects the statement as a whole; there is no recovery.
///
/// # Arguments
///
/// * `tokens`: The tokens of one line, terminated by an End token.
///
/// returns: The root of the statement's expression tree.
///
/// # Examples
///
/// ```
/// use question_calculator::interpreter::lexer::tokenize;
/// use question_calculator::interpreter::parser::parse;
///
/// let tokens = tokenize("x = 2 + 3 * 4");
/// let statement = parse(tokens).unwrap();
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    let mut parser = Parser::new(tokens);
    parser.parse_statement()
}

struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Parser {
        Parser { tokens, index: 0 }
    }

    fn peek(&self) -> Token {
        self.tokens
            .get(self.index)
            .cloned()
            .unwrap_or_else(|| Token::end(0))
    }

    fn advance(&mut self) -> Token {
        let token = self.peek();
        if self.index < self.tokens.len() {
            self.index += 1;
        }
        token
    }

    /// An assignment is detected with one token of lookahead: an Identifier
    /// immediately followed by '='. Otherwise the identifier is rewound and
    /// the statement falls through to general expression parsing.
    fn parse_statement(&mut self) -> Result<Node, ParseError> {
        if self.peek().kind == TokenKind::Identifier {
            let identifier = self.advance();
            if self.peek().kind == TokenKind::Assign {
                self.advance();
                let value = self.parse_expression()?;
                return Ok(Node::new_assignment(identifier.lexeme, value));
            }
            self.index -= 1; // put back the identifier
        }
        self.parse_expression()
    }

    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_term()?;
        loop {
            let operator = match self.peek().kind {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = Node::new_binary_operation(operator, left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_factor()?;
        loop {
            let operator = match self.peek().kind {
                TokenKind::Star => BinaryOperator::Multiply,
                TokenKind::Slash => BinaryOperator::Divide,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor()?;
            left = Node::new_binary_operation(operator, left, right);
        }
        Ok(left)
    }

    /// Exponentiation is right-associative: the right-hand side recurses back
    /// into this level instead of looping.
    fn parse_factor(&mut self) -> Result<Node, ParseError> {
        let left = self.parse_primary()?;
        if self.peek().kind == TokenKind::Caret {
            self.advance();
            let right = self.parse_factor()?;
            return Ok(Node::new_binary_operation(
                BinaryOperator::Exponentiate,
                left,
                right,
            ));
        }
        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let token = self.peek();
        match token.kind {
            TokenKind::Number => {
                self.advance();
                Ok(Node::new_number(token.lexeme))
            }
            TokenKind::Identifier => {
                self.advance();
                if self.peek().kind == TokenKind::LParen {
                    return self.parse_call_arguments(token.lexeme);
                }
                Ok(Node::new_variable(token.lexeme))
            }
            TokenKind::LParen => {
                self.advance();
                let expression = self.parse_expression()?;
                self.expect_closing_paren()?;
                Ok(expression)
            }
            TokenKind::Minus => {
                self.advance();
                let operand = self.parse_primary()?;
                Ok(Node::new_unary_operation(UnaryOperator::Negate, operand))
            }
            _ => Err(ParseError::UnexpectedToken {
                lexeme: token.lexeme,
                offset: token.offset,
            }),
        }
    }

    /// Parses the parenthesized argument list of a function call. Zero
    /// arguments are syntactically valid; the argument count is fixed here,
    /// at parse time.
    fn parse_call_arguments(&mut self, name: String) -> Result<Node, ParseError> {
        self.advance(); // '('
        let mut arguments = Vec::new();
        if self.peek().kind != TokenKind::RParen {
            loop {
                arguments.push(self.parse_expression()?);
                if self.peek().kind == TokenKind::Comma {
                    self.advance();
                    continue;
                }
                break;
            }
        }
        self.expect_closing_paren()?;
        Ok(Node::new_function_call(name, arguments))
    }

    fn expect_closing_paren(&mut self) -> Result<(), ParseError> {
        let token = self.peek();
        if token.kind != TokenKind::RParen {
            return Err(ParseError::ExpectedClosingParen {
                offset: token.offset,
            });
        }
        self.advance();
        Ok(())
    }
}
