//! Expression parsing.
//!
//! Expressions are parsed with one layered function per precedence tier,
//! mirroring the grammar directly:
//!
//! - `expression` - at most one relational operator (non-associative)
//! - `simple` - `+`, `-`, `or` (left-associative)
//! - `term` - `*`, `div`, `and` (left-associative)
//! - `factor` - literals, variables, calls, parentheses, `not`, unary `-`
//!
//! The non-associative tier is why `a < b < c` is a syntax error: after
//! one relational operator the parser returns, and the second `<` is
//! reported by whatever construct surrounds the expression.

use super::Parser;
use super::error::ParseError;
use crate::ast::{BinaryOp, Expr, ExprKind, FunctionCall, UnaryOp, Var};
use crate::token::{Span, TokenKind};

/// Returns the relational operator for a token kind, if it is one.
fn relational_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Equal => Some(BinaryOp::Equal),
        TokenKind::NotEqual => Some(BinaryOp::NotEqual),
        TokenKind::Less => Some(BinaryOp::Less),
        TokenKind::LessEqual => Some(BinaryOp::LessEqual),
        TokenKind::Greater => Some(BinaryOp::Greater),
        TokenKind::GreaterEqual => Some(BinaryOp::GreaterEqual),
        _ => None,
    }
}

/// Returns the additive-tier operator for a token kind, if it is one.
fn additive_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Or => Some(BinaryOp::Or),
        _ => None,
    }
}

/// Returns the multiplicative-tier operator for a token kind, if it is one.
fn multiplicative_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Div => Some(BinaryOp::Div),
        TokenKind::And => Some(BinaryOp::And),
        _ => None,
    }
}

/// Joins two operands under a binary operator, with a span covering both.
fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    let span = Span::new(
        left.span.start,
        right.span.end,
        left.span.line,
        left.span.column,
    );
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

impl Parser {
    /// Parses an expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expression → simple (relop simple)?
    /// relop      → '=' | '<>' | '<' | '<=' | '>' | '>='
    /// ```
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_simple()?;

        let Some(op) = relational_op(self.current_kind()) else {
            return Ok(left);
        };
        self.advance();
        let right = self.parse_simple()?;
        Ok(binary(left, op, right))
    }

    /// Parses a simple expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// simple → term (('+' | '-' | "or") term)*
    /// ```
    fn parse_simple(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;
        while let Some(op) = additive_op(self.current_kind()) {
            self.advance();
            let right = self.parse_term()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses a term.
    ///
    /// # Grammar
    ///
    /// ```text
    /// term → factor (('*' | "div" | "and") factor)*
    /// ```
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;
        while let Some(op) = multiplicative_op(self.current_kind()) {
            self.advance();
            let right = self.parse_factor()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses a factor.
    ///
    /// # Grammar
    ///
    /// ```text
    /// factor → var | number | "true" | "false"
    ///        | '(' expression ')'
    ///        | "not" factor
    ///        | '-' factor
    ///        | id '(' expr_list? ')'
    /// ```
    ///
    /// The unary operators recurse into `factor`, making them
    /// right-associative and the tightest-binding tier.
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Number(value) => {
                let value = *value;
                self.advance();
                Ok(Expr::new(ExprKind::Number(value), span))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::new(ExprKind::Boolean(true), span))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::new(ExprKind::Boolean(false), span))
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(expr)
            }
            TokenKind::Not => {
                self.advance();
                let operand = self.parse_factor()?;
                let span = Span::new(span.start, operand.span.end, span.line, span.column);
                Ok(Expr::new(
                    ExprKind::Unary {
                        op: UnaryOp::Not,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }
            TokenKind::Minus => {
                self.advance();
                let operand = self.parse_factor()?;
                let span = Span::new(span.start, operand.span.end, span.line, span.column);
                Ok(Expr::new(
                    ExprKind::Unary {
                        op: UnaryOp::Negate,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }
            TokenKind::Identifier(_) => {
                if matches!(self.peek().kind, TokenKind::LeftParen) {
                    self.parse_function_call()
                } else {
                    let (name, span) = self.expect_identifier()?;
                    Ok(Expr::new(ExprKind::Variable(Var::new(name, span)), span))
                }
            }
            _ => Err(ParseError::unexpected(self.current())),
        }
    }

    /// Parses `id '(' expr_list? ')'` in factor position.
    fn parse_function_call(&mut self) -> Result<Expr, ParseError> {
        let (name, name_span) = self.expect_identifier()?;
        self.expect(&TokenKind::LeftParen)?;
        let args = if matches!(self.current_kind(), TokenKind::RightParen) {
            Vec::new()
        } else {
            self.parse_expr_list()?
        };
        let close_span = self.current_span();
        self.expect(&TokenKind::RightParen)?;

        let span = Span::new(
            name_span.start,
            close_span.end,
            name_span.line,
            name_span.column,
        );
        Ok(Expr::new(
            ExprKind::Call(FunctionCall {
                name,
                args,
                entry: None,
            }),
            span,
        ))
    }

    /// Parses a comma-separated, nonempty expression list.
    pub(super) fn parse_expr_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut values = vec![self.parse_expression()?];
        while matches!(self.current_kind(), TokenKind::Comma) {
            self.advance();
            values.push(self.parse_expression()?);
        }
        Ok(values)
    }
}
