//! Parses a typed line into a [`Calculation`]
//!
//! Accepted forms:
//!
//! ```text
//! line ::= NUMBER op NUMBER                    // 6 + 3, 6 ÷ 0, 2 ^ 10, 2 ** 10
//!        | name NUMBER | name '(' NUMBER ')'   // sqrt 16, Square Root 4, sin(90)
//!        | pow NUMBER [','] NUMBER             // pow 2 10, pow(2, 10)
//! op   ::= '+' | '-' | '×' | '*' | 'x' | '÷' | '/' | '^' | '**'
//! name ::= WORD+ | '√'
//! ```

use crate::core::{BasicOp, CalcError, CalcResult, Calculation, ScientificFn};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal, sign included
    Number(f64),
    /// Operator or symbol such as `+`, `÷`, `**`, `√`
    Symbol(String),
    /// Alphanumeric word such as `sqrt` or `log10`
    Word(String),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
    /// Argument separator
    Comma,
}

impl Token {
    /// Returns true if a signed number may follow this token
    const fn expects_operand(&self) -> bool {
        !matches!(self, Self::Number(_) | Self::RightParen)
    }
}

/// Tokenizer for converting input lines to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    last: Option<Token>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            last: None,
        }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let operand_position = self.last.as_ref().map_or(true, Token::expects_operand);

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '-' | '−' | '+' if operand_position && self.next_is_numeric() => self.read_number()?,
            c if c.is_alphabetic() => self.read_word(),
            '*' => {
                self.advance();
                if self.current_char() == Some('*') {
                    self.advance();
                    Token::Symbol("**".into())
                } else {
                    Token::Symbol("*".into())
                }
            }
            '+' | '-' | '−' | '×' | '÷' | '/' | '^' | '√' => {
                self.advance();
                Token::Symbol(ch.to_string())
            }
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            ',' => {
                self.advance();
                Token::Comma
            }
            _ => {
                return Err(CalcError::Parse(format!("unexpected character '{ch}'")));
            }
        };

        self.last = Some(token.clone());
        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn next_is_numeric(&self) -> bool {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        matches!(chars.next(), Some(c) if c.is_ascii_digit() || c == '.')
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn read_word(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.current_char(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        Token::Word(self.input[start..self.pos].to_string())
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let negative = match self.current_char() {
            Some('-' | '−') => {
                self.advance();
                true
            }
            Some('+') => {
                self.advance();
                false
            }
            _ => false,
        };

        let start = self.pos;
        let mut has_dot = false;
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }
        self.read_exponent();

        let num_str = &self.input[start..self.pos];
        let value: f64 = num_str
            .parse()
            .map_err(|_| CalcError::Parse(format!("invalid number '{num_str}'")))?;

        Ok(Token::Number(if negative { -value } else { value }))
    }

    /// Consumes an `e[+-]digits` suffix when one is present
    fn read_exponent(&mut self) {
        let rest = &self.input[self.pos..];
        let mut chars = rest.chars();
        if !matches!(chars.next(), Some('e' | 'E')) {
            return;
        }
        let mut len = 1;
        let mut next = chars.next();
        if let Some(sign @ ('+' | '-')) = next {
            len += sign.len_utf8();
            next = chars.next();
        }
        if !matches!(next, Some(c) if c.is_ascii_digit()) {
            return;
        }
        self.pos += len;
        while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
    }
}

/// Parser for one calculator input line
#[derive(Debug)]
pub struct LineParser {
    tokens: Vec<Token>,
    pos: usize,
}

impl LineParser {
    /// Creates a new parser from tokens
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a line into a calculation
    pub fn parse_str(input: &str) -> CalcResult<Calculation> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CalcError::EmptyInput);
        }

        let tokens = Tokenizer::new(trimmed).tokenize()?;
        let mut parser = Self::new(tokens);
        let calculation = parser.parse()?;

        if let Some(token) = parser.current() {
            return Err(CalcError::Parse(format!(
                "unexpected {} at position {}",
                describe(token),
                parser.pos
            )));
        }

        Ok(calculation)
    }

    /// Parses tokens into a calculation
    pub fn parse(&mut self) -> CalcResult<Calculation> {
        match self.current() {
            None => Err(CalcError::EmptyInput),
            Some(Token::Number(_)) => self.parse_binary(),
            Some(Token::Word(_) | Token::Symbol(_)) => self.parse_function(),
            Some(token) => Err(CalcError::Parse(format!(
                "unexpected {} at start of input",
                describe(token)
            ))),
        }
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.current() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_number(&mut self) -> CalcResult<f64> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(n),
            Some(other) => Err(CalcError::Parse(format!(
                "expected a number, found {}",
                describe(&other)
            ))),
            None => Err(CalcError::Parse("expected a number".into())),
        }
    }

    /// "Log Base 10" tokenizes its `10` as a number; it belongs to the name
    /// only when an operand still follows
    fn at_log_base_suffix(&self) -> bool {
        self.current() == Some(&Token::Number(10.0))
            && matches!(
                self.tokens.get(self.pos + 1),
                Some(Token::Number(_) | Token::LeftParen)
            )
    }

    fn parse_binary(&mut self) -> CalcResult<Calculation> {
        let lhs = self.expect_number()?;
        let op = match self.advance() {
            Some(Token::Symbol(s) | Token::Word(s)) => s,
            Some(other) => {
                return Err(CalcError::Parse(format!(
                    "expected an operator, found {}",
                    describe(&other)
                )))
            }
            None => return Err(CalcError::Parse("expected an operator".into())),
        };
        let rhs = self.expect_number()?;

        if op == "^" || op == "**" {
            return Ok(Calculation::power(lhs, rhs));
        }
        Ok(Calculation::basic(lhs, op.parse::<BasicOp>()?, rhs))
    }

    fn parse_function(&mut self) -> CalcResult<Calculation> {
        let mut words = Vec::new();
        while let Some(Token::Word(w) | Token::Symbol(w)) = self.current() {
            words.push(w.clone());
            self.pos += 1;
        }
        let mut name = words.join(" ");
        if name.eq_ignore_ascii_case("log base") && self.at_log_base_suffix() {
            self.pos += 1;
            name.push_str(" 10");
        }

        let parenthesized = self.eat(&Token::LeftParen);
        let calculation = if matches!(name.to_ascii_lowercase().as_str(), "pow" | "power") {
            let base = self.expect_number()?;
            self.eat(&Token::Comma);
            let exponent = self.expect_number()?;
            Calculation::power(base, exponent)
        } else {
            let function = name.parse::<ScientificFn>()?;
            Calculation::scientific(function, self.expect_number()?)
        };

        if parenthesized && !self.eat(&Token::RightParen) {
            return Err(CalcError::Parse("missing closing parenthesis".into()));
        }
        Ok(calculation)
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(n) => format!("number {n}"),
        Token::Symbol(s) | Token::Word(s) => format!("'{s}'"),
        Token::LeftParen => "'('".into(),
        Token::RightParen => "')'".into(),
        Token::Comma => "','".into(),
    }
}

/// Parses a line into a calculation
pub fn parse_line(input: &str) -> CalcResult<Calculation> {
    LineParser::parse_str(input)
}
