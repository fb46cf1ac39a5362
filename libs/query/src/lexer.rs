//! Query lexer - tokenizes query expressions
//!
//! Converts a query string into a stream of tokens. Keywords are not
//! distinguished here; the parser decides what a word means from its position.

use crate::error::{Error, Result};
use crate::token::{Token, TokenType};

/// The query lexer
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    /// Create a new lexer for the given input
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();
        Self {
            chars,
            position: 0,
            current_char,
        }
    }

    /// Tokenize the whole input, ending with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.token_type == TokenType::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.chars.get(self.position).copied();
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char, Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// Produce the next token
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        let start = self.position;

        let Some(c) = self.current_char else {
            return Ok(Token::new(TokenType::Eof, "", start));
        };

        match c {
            '(' => {
                self.advance();
                Ok(Token::new(TokenType::OpenParen, "(", start))
            }
            ')' => {
                self.advance();
                Ok(Token::new(TokenType::CloseParen, ")", start))
            }
            '=' => {
                self.advance();
                if self.current_char == Some('=') {
                    self.advance();
                    return Ok(Token::new(TokenType::Equal, "==", start));
                }
                Ok(Token::new(TokenType::Equal, "=", start))
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.advance();
                    return Ok(Token::new(TokenType::NotEqual, "!=", start));
                }
                Err(Error::UnexpectedToken {
                    token: "!".to_string(),
                    position: start,
                    expected: "'!='".to_string(),
                })
            }
            '<' => {
                self.advance();
                if self.current_char == Some('=') {
                    self.advance();
                    return Ok(Token::new(TokenType::LessThanOrEqual, "<=", start));
                }
                Ok(Token::new(TokenType::LessThan, "<", start))
            }
            '>' => {
                self.advance();
                if self.current_char == Some('=') {
                    self.advance();
                    return Ok(Token::new(TokenType::GreaterThanOrEqual, ">=", start));
                }
                Ok(Token::new(TokenType::GreaterThan, ">", start))
            }
            '\'' | '"' => self.read_string(c),
            _ => Ok(self.read_word()),
        }
    }

    fn read_string(&mut self, quote: char) -> Result<Token> {
        let start = self.position;
        self.advance(); // opening quote

        let mut value = String::new();
        while let Some(c) = self.current_char {
            match c {
                '\\' => {
                    let escape_pos = self.position;
                    self.advance();
                    match self.current_char {
                        Some(e @ ('\\' | '\'' | '"')) => {
                            value.push(e);
                            self.advance();
                        }
                        Some(other) => {
                            return Err(Error::InvalidEscape {
                                escape: other,
                                position: escape_pos,
                            })
                        }
                        None => return Err(Error::UnterminatedString { position: start }),
                    }
                }
                c if c == quote => {
                    self.advance();
                    return Ok(Token::new(TokenType::StringLiteral, value, start));
                }
                _ => {
                    value.push(c);
                    self.advance();
                }
            }
        }

        Err(Error::UnterminatedString { position: start })
    }

    fn read_word(&mut self) -> Token {
        let start = self.position;
        while let Some(c) = self.current_char {
            if c.is_whitespace() || matches!(c, '(' | ')' | '\'' | '"' | '=' | '!' | '<' | '>') {
                break;
            }
            self.advance();
        }
        let value: String = self.chars[start..self.position].iter().collect();
        Token::new(TokenType::Word, value, start)
    }
}
