//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{
    Assignment, CompoundStatement, IfStmt, ProcedureCall, ReadStmt, Stmt, Var, WhileStmt,
    WriteStmt,
};
use crate::token::TokenKind;

impl Parser {
    /// Parses a `begin ... end` statement sequence.
    ///
    /// # Grammar
    ///
    /// ```text
    /// compound → "begin" statement (';' statement)* "end"
    /// ```
    pub(super) fn parse_compound(&mut self) -> Result<CompoundStatement, ParseError> {
        self.expect(&TokenKind::Begin)?;
        let mut statements = vec![self.parse_statement()?];
        while matches!(self.current_kind(), TokenKind::Semicolon) {
            self.advance();
            statements.push(self.parse_statement()?);
        }
        self.expect(&TokenKind::End)?;
        Ok(CompoundStatement { statements })
    }

    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// statement → assignment | if | while | read | write
    ///           | proc_call | compound | ε
    /// ```
    ///
    /// The empty production applies wherever a statement is expected and
    /// the current token already belongs to the surrounding construct
    /// (`;`, `end`, `else`), so `begin ; end` and a missing `else` arm
    /// both parse.
    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Begin => Ok(Stmt::Compound(self.parse_compound()?)),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Read => self.parse_read(),
            TokenKind::Write => self.parse_write(),
            TokenKind::Identifier(_) => self.parse_assignment_or_call(),
            TokenKind::Semicolon | TokenKind::End | TokenKind::Else => Ok(Stmt::Empty),
            _ => Err(ParseError::unexpected(self.current())),
        }
    }

    /// Parses a statement that starts with an identifier.
    ///
    /// One token of lookahead decides the production: `:=` starts an
    /// assignment, `(` a procedure call. A bare identifier is not a call,
    /// so anything else is reported at the token after the identifier.
    fn parse_assignment_or_call(&mut self) -> Result<Stmt, ParseError> {
        match self.peek().kind {
            TokenKind::Assign => self.parse_assignment(),
            TokenKind::LeftParen => self.parse_call(),
            _ => Err(ParseError::unexpected(self.peek())),
        }
    }

    /// Parses `id ':=' expression`.
    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let (name, span) = self.expect_identifier()?;
        self.expect(&TokenKind::Assign)?;
        let value = self.parse_expression()?;
        Ok(Stmt::Assign(Assignment {
            target: Var::new(name, span),
            value,
        }))
    }

    /// Parses `id '(' expr_list? ')'` in statement position.
    fn parse_call(&mut self) -> Result<Stmt, ParseError> {
        let (name, span) = self.expect_identifier()?;
        self.expect(&TokenKind::LeftParen)?;
        let args = if matches!(self.current_kind(), TokenKind::RightParen) {
            Vec::new()
        } else {
            self.parse_expr_list()?
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(Stmt::Call(ProcedureCall {
            name,
            args,
            span,
            entry: None,
        }))
    }

    /// Parses `if expression then statement (else statement)?`.
    ///
    /// A dangling `else` binds to the nearest `if`, which recursive
    /// descent produces naturally.
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::If)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::Then)?;
        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if matches!(self.current_kind(), TokenKind::Else) {
            self.advance();
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Stmt::If(IfStmt {
            condition,
            then_branch,
            else_branch,
        }))
    }

    /// Parses `while expression do statement`.
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::While)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::Do)?;
        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::While(WhileStmt { condition, body }))
    }

    /// Parses `read '(' id_list ')'`.
    fn parse_read(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Read)?;
        self.expect(&TokenKind::LeftParen)?;
        let targets = self.parse_id_list()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Stmt::Read(ReadStmt { targets }))
    }

    /// Parses `write '(' expr_list ')'`.
    fn parse_write(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Write)?;
        self.expect(&TokenKind::LeftParen)?;
        let values = self.parse_expr_list()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Stmt::Write(WriteStmt { values }))
    }
}
