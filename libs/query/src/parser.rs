//! Recursive-descent parser for query expressions
//!
//! ```text
//! filter     := and_expr ( "or" and_expr )*
//! and_expr   := unary ( "and" unary )*
//! unary      := "not" "(" filter ")" | "(" filter ")" | comparison
//! comparison := FIELD operator value
//! ```
//!
//! Nesting depth and the number of comparisons are bounded, so every input
//! either parses or fails with an [`Error`].

use crate::ast::{CompareOp, Comparison, Expr, Literal};
use crate::error::{Error, Result};
use crate::lexer::Lexer;
use crate::token::{Token, TokenType};

/// Words that cannot be used as a field name or an unquoted value.
const RESERVED: &[&str] = &["and", "or", "not"];

/// Deepest allowed nesting of `(` and `not(`.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Most comparisons one query may hold.
pub const MAX_CONDITIONS: usize = 256;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    conditions: usize,
}

impl Parser {
    pub fn new(input: &str) -> Result<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self {
            tokens,
            pos: 0,
            depth: 0,
            conditions: 0,
        })
    }

    /// Parse the whole input as one filter expression.
    pub fn parse(&mut self) -> Result<Expr> {
        let expr = self.parse_or()?;
        let trailing = self.peek();
        if trailing.token_type != TokenType::Eof {
            return Err(unexpected(trailing, "'and', 'or' or end of query"));
        }
        Ok(expr)
    }

    fn peek(&self) -> &Token {
        // The lexer always terminates the stream with Eof.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn next(&mut self) -> Token {
        let token = self.peek().clone();
        if token.token_type != TokenType::Eof {
            self.pos += 1;
        }
        token
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.peek().is_keyword(keyword) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token_type: TokenType, expected: &str) -> Result<Token> {
        let token = self.next();
        if token.token_type == token_type {
            Ok(token)
        } else {
            Err(unexpected(&token, expected))
        }
    }

    fn parse_or(&mut self) -> Result<Expr> {
        let mut left = self.parse_and()?;
        while self.eat_keyword("or") {
            let right = self.parse_and()?;
            left = Expr::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr> {
        let mut left = self.parse_unary()?;
        while self.eat_keyword("and") {
            let right = self.parse_unary()?;
            left = Expr::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        if self.eat_keyword("not") {
            let open = self.expect(TokenType::OpenParen, "'(' after 'not'")?;
            let inner = self.parse_group(&open)?;
            return Ok(Expr::Not(Box::new(inner)));
        }

        if self.peek().token_type == TokenType::OpenParen {
            let open = self.next();
            return self.parse_group(&open);
        }

        self.parse_comparison()
    }

    /// Parse `filter ")"` after an opening parenthesis.
    fn parse_group(&mut self, open: &Token) -> Result<Expr> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::NestingTooDeep {
                position: open.position,
                limit: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;
        let inner = self.parse_or()?;
        self.expect(TokenType::CloseParen, "')'")?;
        self.depth -= 1;
        Ok(inner)
    }

    fn parse_comparison(&mut self) -> Result<Expr> {
        let field = self.next();
        if field.token_type != TokenType::Word || is_reserved(&field.value) {
            return Err(unexpected(&field, "field name"));
        }
        if self.conditions >= MAX_CONDITIONS {
            return Err(Error::TooManyConditions {
                token: field.display(),
                position: field.position,
                limit: MAX_CONDITIONS,
            });
        }
        self.conditions += 1;

        let op_token = self.next();
        let op = match op_token.token_type {
            TokenType::Equal => CompareOp::Eq,
            TokenType::NotEqual => CompareOp::Ne,
            TokenType::LessThan => CompareOp::Lt,
            TokenType::LessThanOrEqual => CompareOp::Le,
            TokenType::GreaterThan => CompareOp::Gt,
            TokenType::GreaterThanOrEqual => CompareOp::Ge,
            TokenType::Word => CompareOp::from_word(&op_token.value)
                .ok_or_else(|| unexpected(&op_token, "comparison operator"))?,
            _ => return Err(unexpected(&op_token, "comparison operator")),
        };

        let value_token = self.next();
        let value = match value_token.token_type {
            TokenType::StringLiteral => Literal::Quoted(value_token.value),
            TokenType::Word if !is_reserved(&value_token.value) => Literal::Bare(value_token.value),
            _ => return Err(unexpected(&value_token, "value")),
        };

        Ok(Expr::Comparison(Comparison {
            field: field.value,
            op,
            op_token: op_token.value,
            value,
        }))
    }
}

/// Parse a query expression into its untyped syntax tree.
pub fn parse(input: &str) -> Result<Expr> {
    Parser::new(input)?.parse()
}

fn is_reserved(word: &str) -> bool {
    RESERVED.iter().any(|r| word.eq_ignore_ascii_case(r))
}

fn unexpected(token: &Token, expected: &str) -> Error {
    if token.token_type == TokenType::Eof {
        Error::UnexpectedEnd {
            expected: expected.to_string(),
        }
    } else {
        Error::UnexpectedToken {
            token: token.display(),
            position: token.position,
            expected: expected.to_string(),
        }
    }
}
