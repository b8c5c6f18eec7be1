// src/parser.rs

use crate::ast::{BinOp, Expr};
use crate::builtins;
use crate::error::{ParseError, ParseErrorKind};

// --- The Parser ---
//
// list   = expr {"," expr}
// expr   = term {("+" | "-") term}
// term   = factor {("*" | "/" | "%") factor}
// factor = power {"^" power}
// power  = {"+" | "-"} base
// base   = number | variable | fn0 ["(" ")"] | fn1 power
//        | fn2 "(" expr "," expr ")" | "(" list ")"
pub struct Parser<'a> {
    input: Vec<char>,
    pos: usize,
    variables: &'a [(&'a str, f64)],
}

impl<'a> Parser<'a> {
    /// `variables` are the names an identifier may resolve to before the
    /// builtin table is consulted.
    pub fn new(input: &str, variables: &'a [(&'a str, f64)]) -> Self {
        Parser { input: input.chars().collect(), pos: 0, variables }
    }

    fn current_char(&self) -> Option<char> { self.input.get(self.pos).copied() }
    fn peek_char(&self, offset: usize) -> Option<char> { self.input.get(self.pos + offset).copied() }
    fn advance(&mut self) { self.pos += 1; }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError { kind, col: self.pos + 1 }
    }

    // Skips whitespace, then consumes `c` if it is next.
    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.current_char() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char) -> Result<(), ParseError> {
        if self.eat(c) {
            return Ok(());
        }
        match self.current_char() {
            Some(other) => Err(self.error(ParseErrorKind::UnexpectedChar(other))),
            None => Err(self.error(ParseErrorKind::UnexpectedEnd)),
        }
    }

    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_list()?;
        self.skip_whitespace();
        if let Some(c) = self.current_char() {
            Err(self.error(ParseErrorKind::UnexpectedChar(c)))
        } else {
            Ok(expr)
        }
    }

    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_expr()?;
        while self.eat(',') {
            let rhs = self.parse_expr()?;
            lhs = Expr::Binary(BinOp::Comma, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_term()?;
        loop {
            let op = if self.eat('+') {
                BinOp::Add
            } else if self.eat('-') {
                BinOp::Sub
            } else {
                break;
            };
            let rhs = self.parse_term()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_factor()?;
        loop {
            let op = if self.eat('*') {
                BinOp::Mul
            } else if self.eat('/') {
                BinOp::Div
            } else if self.eat('%') {
                BinOp::Rem
            } else {
                break;
            };
            let rhs = self.parse_factor()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    // Exponentiation is left-associative: 2^3^2 == (2^3)^2.
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_power()?;
        while self.eat('^') {
            let rhs = self.parse_power()?;
            lhs = Expr::Binary(BinOp::Pow, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    // Prefix signs bind tighter than '^': -2^2 == 4.
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let mut negate = false;
        loop {
            if self.eat('-') {
                negate = !negate;
            } else if !self.eat('+') {
                break;
            }
        }
        let base = self.parse_base()?;
        Ok(if negate { Expr::Neg(Box::new(base)) } else { base })
    }

    fn parse_base(&mut self) -> Result<Expr, ParseError> {
        self.skip_whitespace();
        match self.current_char() {
            Some(c) if c.is_ascii_digit() || c == '.' => self.parse_number(),
            Some(c) if c.is_ascii_alphabetic() => self.parse_identifier(),
            Some('(') => {
                self.advance();
                let inner = self.parse_list()?;
                self.expect(')')?;
                Ok(inner)
            }
            Some(c) => Err(self.error(ParseErrorKind::UnexpectedChar(c))),
            None => Err(self.error(ParseErrorKind::UnexpectedEnd)),
        }
    }

    fn parse_number(&mut self) -> Result<Expr, ParseError> {
        let start_col = self.pos + 1;
        let mut s = String::new();

        // Digits before decimal
        while let Some(c) = self.current_char().filter(|c| c.is_ascii_digit()) {
            s.push(c);
            self.advance();
        }

        // Decimal part
        if self.current_char() == Some('.') {
            s.push('.');
            self.advance();
            while let Some(c) = self.current_char().filter(|c| c.is_ascii_digit()) {
                s.push(c);
                self.advance();
            }
        }

        // Exponent, only when digits actually follow: "2e" leaves 'e' unread.
        if matches!(self.current_char(), Some('e' | 'E')) {
            let sign_len = match self.peek_char(1) {
                Some('+' | '-') => 1,
                _ => 0,
            };
            if self.peek_char(1 + sign_len).map_or(false, |c| c.is_ascii_digit()) {
                for _ in 0..=sign_len {
                    if let Some(c) = self.current_char() {
                        s.push(c);
                    }
                    self.advance();
                }
                while let Some(c) = self.current_char().filter(|c| c.is_ascii_digit()) {
                    s.push(c);
                    self.advance();
                }
            }
        }

        s.parse::<f64>()
            .map(Expr::Number)
            .map_err(|_| ParseError { kind: ParseErrorKind::InvalidNumber(s), col: start_col })
    }

    fn parse_identifier(&mut self) -> Result<Expr, ParseError> {
        let start_col = self.pos + 1;
        let mut name = String::new();
        while let Some(c) = self.current_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }

        if self.variables.iter().any(|(var, _)| *var == name) {
            return Ok(Expr::Var(name));
        }

        let Some(def) = builtins::lookup(&name) else {
            return Err(ParseError { kind: ParseErrorKind::UnknownIdentifier(name), col: start_col });
        };

        match def.arity {
            0 => {
                // Optional empty call: `pi` or `pi()`.
                if self.eat('(') {
                    self.expect(')')?;
                }
                Ok(Expr::Call(def.name, Vec::new()))
            }
            1 => {
                let arg = self.parse_power()?;
                Ok(Expr::Call(def.name, vec![arg]))
            }
            arity => {
                self.expect('(')?;
                let mut args = Vec::with_capacity(arity);
                for i in 0..arity {
                    if i > 0 {
                        self.expect(',')?;
                    }
                    args.push(self.parse_expr()?);
                }
                self.expect(')')?;
                Ok(Expr::Call(def.name, args))
            }
        }
    }
}

// Convenience function for parsing
pub fn parse(input: &str, variables: &[(&str, f64)]) -> Result<Expr, ParseError> {
    Parser::new(input, variables).parse()
}
