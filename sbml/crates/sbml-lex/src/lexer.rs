//! Lexer for the SBML scripting language.
//!
//! The lexer transforms source text into a flat [`Vec<SpannedToken>`], one
//! entry per token plus a trailing [`Token::Eof`]. There is no error
//! recovery: the first unrecognized character, unterminated string, or
//! malformed number literal raises [`SbmlError::Syntax`] and stops
//! tokenization immediately, matching the reference lexer's fail-fast
//! behavior.

use sbml_util::{SbmlError, SbmlResult, Span, Symbol};

use crate::cursor::Cursor;
use crate::token::{keyword_from_ident, Token};

/// A token together with the source span it was scanned from.
#[derive(Clone, Debug, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

/// Scans an entire source string into a flat token stream.
///
/// The returned vector always ends with a [`Token::Eof`] entry.
pub fn tokenize(source: &str) -> SbmlResult<Vec<SpannedToken>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let spanned = lexer.next_token()?;
        let is_eof = matches!(spanned.token, Token::Eof);
        tokens.push(spanned);
        if is_eof {
            break;
        }
    }
    Ok(tokens)
}

/// The SBML lexer.
///
/// Scans one token at a time from a [`Cursor`] over the source text.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Scans and returns the next token, skipping whitespace and comments first.
    pub fn next_token(&mut self) -> SbmlResult<SpannedToken> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(self.spanned(Token::Eof));
        }

        let token = match self.cursor.current_char() {
            '(' => {
                self.cursor.advance();
                Token::LParen
            }
            ')' => {
                self.cursor.advance();
                Token::RParen
            }
            '[' => {
                self.cursor.advance();
                Token::LBracket
            }
            ']' => {
                self.cursor.advance();
                Token::RBracket
            }
            '{' => {
                self.cursor.advance();
                Token::LBrace
            }
            '}' => {
                self.cursor.advance();
                Token::RBrace
            }
            ',' => {
                self.cursor.advance();
                Token::Comma
            }
            ';' => {
                self.cursor.advance();
                Token::Semicolon
            }
            '#' => {
                self.cursor.advance();
                Token::Hash
            }
            '+' => {
                self.cursor.advance();
                Token::Plus
            }
            '-' => {
                self.cursor.advance();
                Token::Minus
            }
            '*' => self.lex_star(),
            '/' => {
                // A line comment starting here was already consumed by
                // skip_whitespace_and_comments, so a lone '/' reaching this
                // point is always the division operator.
                self.cursor.advance();
                Token::Slash
            }
            '=' => self.lex_equals()?,
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            ':' => self.lex_colon()?,
            '"' | '\'' => self.lex_string()?,
            c if c.is_ascii_digit() => self.lex_number()?,
            '.' if self.cursor.peek_char(1).is_ascii_digit() => self.lex_number()?,
            c if c.is_ascii_alphabetic() => self.lex_identifier(),
            _ => return Err(self.advance_and_fail()),
        };

        Ok(self.spanned(token))
    }

    fn spanned(&self, token: Token) -> SpannedToken {
        SpannedToken {
            token,
            span: Span::new(
                self.token_start,
                self.cursor.position(),
                self.token_start_line,
                self.token_start_column,
            ),
        }
    }

    fn advance_and_fail(&mut self) -> SbmlError {
        self.cursor.advance();
        SbmlError::Syntax
    }

    /// `*` or `**`.
    fn lex_star(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('*') {
            Token::StarStar
        } else {
            Token::Star
        }
    }

    /// `=` or `==`.
    fn lex_equals(&mut self) -> SbmlResult<Token> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Ok(Token::EqEq)
        } else {
            Ok(Token::Assign)
        }
    }

    /// `<`, `<=`, or `<>`.
    fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::Le
        } else if self.cursor.match_char('>') {
            Token::Ne
        } else {
            Token::Lt
        }
    }

    /// `>` or `>=`.
    fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::Ge
        } else {
            Token::Gt
        }
    }

    /// `::`. A bare `:` is not part of the grammar and is a syntax error.
    fn lex_colon(&mut self) -> SbmlResult<Token> {
        self.cursor.advance();
        if self.cursor.match_char(':') {
            Ok(Token::Cons)
        } else {
            Err(SbmlError::Syntax)
        }
    }

    /// An identifier, keyword, word-operator, or boolean literal.
    ///
    /// Keywords and word-operators shadow the identifier rule by exact
    /// spelling match; anything else becomes `Token::Ident`.
    fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(self.token_start);
        keyword_from_ident(text).unwrap_or_else(|| Token::Ident(Symbol::intern(text)))
    }

    /// An INTEGER or REAL literal.
    ///
    /// `INTEGER` is `[0-9]+`. `REAL` requires a `.` with at least one digit
    /// on one side (`3.`, `.5`, `3.14` all valid; a bare `.` is not a number
    /// at all) and an optional `[eE][+-]?[0-9]+` exponent.
    fn lex_number(&mut self) -> SbmlResult<Token> {
        let start = self.cursor.position();

        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let had_leading_digits = self.cursor.position() > start;

        let mut is_real = false;

        if self.cursor.current_char() == '.'
            && (had_leading_digits || self.cursor.peek_char(1).is_ascii_digit())
        {
            is_real = true;
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        if self.cursor.current_char() == 'e' || self.cursor.current_char() == 'E' {
            let mut lookahead = 1;
            if self.cursor.peek_char(lookahead) == '+' || self.cursor.peek_char(lookahead) == '-' {
                lookahead += 1;
            }
            if self.cursor.peek_char(lookahead).is_ascii_digit() {
                is_real = true;
                self.cursor.advance(); // e/E
                if self.cursor.current_char() == '+' || self.cursor.current_char() == '-' {
                    self.cursor.advance();
                }
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
            }
        }

        let text = self.cursor.slice_from(start);
        if is_real {
            text.parse::<f64>()
                .map(Token::Real)
                .map_err(|_| SbmlError::Syntax)
        } else {
            text.parse::<i64>()
                .map(Token::Integer)
                .map_err(|_| SbmlError::Syntax)
        }
    }

    /// A single- or double-quoted string literal.
    ///
    /// Escape sequences are stored raw: `\"` inside the literal is kept as
    /// the two characters backslash-quote rather than being decoded, so an
    /// escaped quote or backslash never terminates the literal early.
    fn lex_string(&mut self) -> SbmlResult<Token> {
        let quote = self.cursor.current_char();
        self.cursor.advance();
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                return Err(SbmlError::Syntax);
            }
            let c = self.cursor.current_char();
            if c == '\\' {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    return Err(SbmlError::Syntax);
                }
                self.cursor.advance();
                continue;
            }
            if c == quote {
                break;
            }
            self.cursor.advance();
        }

        let content = self.cursor.slice_from(content_start);
        self.cursor.advance(); // closing quote
        Ok(Token::Str(Symbol::intern(content)))
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.cursor.skip_whitespace();

            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '/' {
                while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                    self.cursor.advance();
                }
                continue;
            }

            break;
        }
    }
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
