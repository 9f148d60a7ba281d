use crate::interpreter::token::{Token, TokenKind};

/// Converts one line of a question into tokens.
///
/// Tokenizing never fails: whitespace is skipped, and an unrecognized
/// character degrades to a terminal [`TokenKind::End`] token carrying that
/// character as its lexeme instead of raising a lexical error.
pub struct Lexer {
    characters: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(line: &str) -> Lexer {
        Lexer {
            characters: line.chars().collect(),
            position: 0,
        }
    }

    /// Returns the next token without advancing the cursor.
    pub fn peek(&mut self) -> Token {
        let saved = self.position;
        let token = self.next_token();
        self.position = saved;
        token
    }

    /// Returns the next token and advances the cursor past it.
    ///
    /// Reaching the end of the line yields an [`TokenKind::End`] token with an
    /// empty lexeme; callers must stop requesting tokens after seeing it.
    pub fn next_token(&mut self) -> Token {
        while self.current().map_or(false, char::is_whitespace) {
            self.position += 1;
        }
        let start = self.position;
        let character = match self.current() {
            Some(character) => character,
            None => return Token::end(start),
        };

        if character.is_ascii_digit() {
            return self.lex_number(start);
        }
        if character.is_ascii_alphabetic() || character == '_' {
            return self.lex_word(start);
        }

        self.position += 1;
        let kind = match character {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '%' => TokenKind::Percent,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '=' => TokenKind::Assign,
            unrecognized => return Token::new(TokenKind::End, unrecognized, start),
        };
        Token::new(kind, character, start)
    }

    fn current(&self) -> Option<char> {
        self.characters.get(self.position).copied()
    }

    /// Lexes a digit-leading numeral: `0b`/`0x`-prefixed (case-insensitive on
    /// the letter) or plain decimal with an optional fractional part.
    /// Underscore separators are consumed but stripped from the lexeme.
    fn lex_number(&mut self, start: usize) -> Token {
        if self.current() == Some('0') {
            if let Some(prefix_letter) = self.characters.get(start + 1) {
                match prefix_letter.to_ascii_lowercase() {
                    'b' => {
                        if let Some(token) = self.lex_prefixed(start, "0b", |c| c == '0' || c == '1')
                        {
                            return token;
                        }
                    }
                    'x' => {
                        if let Some(token) =
                            self.lex_prefixed(start, "0x", |c| c.is_ascii_hexdigit())
                        {
                            return token;
                        }
                    }
                    _ => {}
                }
            }
        }

        let mut lexeme = String::new();
        let mut has_dot = false;
        while let Some(character) = self.current() {
            if character.is_ascii_digit() {
                lexeme.push(character);
            } else if character == '.' {
                // A second dot terminates the literal.
                if has_dot {
                    break;
                }
                has_dot = true;
                lexeme.push('.');
            } else if character != '_' {
                break;
            }
            self.position += 1;
        }
        Token::new(TokenKind::Number, lexeme, start)
    }

    /// Lexes a `0b`/`0x`-prefixed numeral, or returns `None` when no digit of
    /// the base follows the prefix, in which case the leading `0` lexes as a
    /// plain decimal literal instead. This keeps every emitted numeral lexeme
    /// syntactically valid.
    fn lex_prefixed(
        &mut self,
        start: usize,
        prefix: &str,
        is_digit: impl Fn(char) -> bool,
    ) -> Option<Token> {
        let mut index = start + 2;
        let mut lexeme = String::from(prefix);
        while let Some(&character) = self.characters.get(index) {
            if is_digit(character) {
                lexeme.push(character);
            } else if character != '_' {
                break;
            }
            index += 1;
        }
        if lexeme.len() == prefix.len() {
            return None;
        }
        self.position = index;
        Some(Token::new(TokenKind::Number, lexeme, start))
    }

    /// Lexes a letter-leading word: a candidate identifier, reclassified as a
    /// bare hex numeral if and only if every character is a valid hexadecimal
    /// digit and at least one is an alphabetic hex digit. This is what lets
    /// `cos` stay an identifier while `FACE` becomes a numeral.
    fn lex_word(&mut self, start: usize) -> Token {
        let mut candidate = String::new();
        while let Some(character) = self.current() {
            if !character.is_ascii_alphanumeric() && character != '_' {
                break;
            }
            candidate.push(character);
            self.position += 1;
        }

        let all_hex = candidate.chars().all(|c| c.is_ascii_hexdigit());
        let has_hex_letter = candidate
            .chars()
            .any(|c| matches!(c.to_ascii_lowercase(), 'a'..='f'));
        if all_hex && has_hex_letter {
            return Token::new(TokenKind::Number, format!("0x{candidate}"), start);
        }
        Token::new(TokenKind::Identifier, candidate, start)
    }
}

/// Tokenizes one full line of a question.
///
/// The returned sequence always terminates with an [`TokenKind::End`] token.
///
/// # Arguments
///
/// * `line`: One line of question text.
///
/// returns: The line's tokens, in source order.
///
/// # Examples
///
/// ```
/// use question_calculator::interpreter::lexer::tokenize;
/// use question_calculator::interpreter::token::TokenKind;
///
/// let tokens = tokenize("x = 0xFF");
/// assert_eq!(tokens[2].kind, TokenKind::Number);
/// assert_eq!(tokens[2].lexeme, "0xFF");
/// ```
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(line);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_end = token.kind == TokenKind::End;
        tokens.push(token);
        if is_end {
            break;
        }
    }
    tokens
}
