//! Token types for the query lexer

/// Token types for the query lexer
#[derive(Debug, PartialEq, Clone, Eq)]
pub enum TokenType {
    /// Run of characters without whitespace, quotes, parentheses or comparison symbols.
    /// Field names, keywords, word operators and unquoted values all lex as words.
    Word,
    /// Quoted string literal; the token value holds the unescaped contents.
    StringLiteral,

    OpenParen,          // (
    CloseParen,         // )
    Equal,              // = or ==
    NotEqual,           // !=
    LessThan,           // <
    LessThanOrEqual,    // <=
    GreaterThan,        // >
    GreaterThanOrEqual, // >=

    Eof,
}

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    /// Token text as written (unescaped contents for string literals)
    pub value: String,
    /// Character offset of the first character of the token
    pub position: usize,
}

impl Token {
    pub fn new(token_type: TokenType, value: impl Into<String>, position: usize) -> Self {
        Self {
            token_type,
            value: value.into(),
            position,
        }
    }

    /// True when this is a word equal to `keyword`, ignoring ASCII case.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.token_type == TokenType::Word && self.value.eq_ignore_ascii_case(keyword)
    }

    /// Text used when reporting this token in an error.
    pub fn display(&self) -> String {
        match self.token_type {
            TokenType::Eof => "end of input".to_string(),
            TokenType::StringLiteral => format!("'{}'", self.value),
            _ => self.value.clone(),
        }
    }
}
