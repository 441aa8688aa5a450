//! Declaration parsing: blocks, `var` sections, subroutines, and
//! parameter lists.

use super::Parser;
use super::error::ParseError;
use crate::ast::{
    Block, FunctionDecl, ProcedureDecl, SubroutineDecl, TypeName, Var, VarDeclaration,
};
use crate::token::TokenKind;

impl Parser {
    /// Parses a block: declaration sections followed by the compound body.
    ///
    /// # Grammar
    ///
    /// ```text
    /// block    → (var_section | proc_decl ';' | func_decl ';')* compound
    /// ```
    ///
    /// `var` sections and subroutine declarations may interleave; the
    /// lists in [`Block`] each keep source order.
    pub(super) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let mut var_decls = Vec::new();
        let mut sub_decls = Vec::new();

        loop {
            match self.current_kind() {
                TokenKind::Var => self.parse_var_section(&mut var_decls)?,
                TokenKind::Procedure => {
                    let decl = self.parse_procedure()?;
                    sub_decls.push(SubroutineDecl::Procedure(decl));
                    self.expect(&TokenKind::Semicolon)?;
                }
                TokenKind::Function => {
                    let decl = self.parse_function()?;
                    sub_decls.push(SubroutineDecl::Function(decl));
                    self.expect(&TokenKind::Semicolon)?;
                }
                _ => break,
            }
        }

        let body = self.parse_compound()?;
        Ok(Block {
            var_decls,
            sub_decls,
            body,
        })
    }

    /// Parses a `var` section: one or more declaration groups, each
    /// terminated by a semicolon.
    ///
    /// # Grammar
    ///
    /// ```text
    /// var_section → "var" (id_list ':' type ';')+
    /// ```
    fn parse_var_section(
        &mut self,
        var_decls: &mut Vec<VarDeclaration>,
    ) -> Result<(), ParseError> {
        self.expect(&TokenKind::Var)?;
        loop {
            let decl = self.parse_var_declaration()?;
            self.expect(&TokenKind::Semicolon)?;
            var_decls.push(decl);
            if !matches!(self.current_kind(), TokenKind::Identifier(_)) {
                break;
            }
        }
        Ok(())
    }

    /// Parses one declaration group `a, b, c : integer`.
    fn parse_var_declaration(&mut self) -> Result<VarDeclaration, ParseError> {
        let names = self.parse_id_list()?;
        self.expect(&TokenKind::Colon)?;
        let ty = self.parse_type()?;
        Ok(VarDeclaration { names, ty })
    }

    /// Parses a comma-separated, nonempty identifier list.
    pub(super) fn parse_id_list(&mut self) -> Result<Vec<Var>, ParseError> {
        let mut names = Vec::new();
        let (name, span) = self.expect_identifier()?;
        names.push(Var::new(name, span));
        while matches!(self.current_kind(), TokenKind::Comma) {
            self.advance();
            let (name, span) = self.expect_identifier()?;
            names.push(Var::new(name, span));
        }
        Ok(names)
    }

    /// Parses a type name.
    fn parse_type(&mut self) -> Result<TypeName, ParseError> {
        match self.current_kind() {
            TokenKind::Integer => {
                self.advance();
                Ok(TypeName::Integer)
            }
            TokenKind::Boolean => {
                self.advance();
                Ok(TypeName::Boolean)
            }
            _ => Err(ParseError::unexpected(self.current())),
        }
    }

    /// Parses a procedure declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// proc_decl → "procedure" id params? ';' block
    /// ```
    fn parse_procedure(&mut self) -> Result<ProcedureDecl, ParseError> {
        self.expect(&TokenKind::Procedure)?;
        let (name, span) = self.expect_identifier()?;
        let params = self.parse_params()?;
        self.expect(&TokenKind::Semicolon)?;
        let block = self.parse_block()?;
        Ok(ProcedureDecl {
            name,
            params,
            block,
            span,
            entry: None,
        })
    }

    /// Parses a function declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// func_decl → "function" id params? ':' type ';' block
    /// ```
    fn parse_function(&mut self) -> Result<FunctionDecl, ParseError> {
        self.expect(&TokenKind::Function)?;
        let (name, span) = self.expect_identifier()?;
        let params = self.parse_params()?;
        self.expect(&TokenKind::Colon)?;
        let return_type = self.parse_type()?;
        self.expect(&TokenKind::Semicolon)?;
        let block = self.parse_block()?;
        Ok(FunctionDecl {
            name,
            params,
            return_type,
            block,
            span,
            entry: None,
        })
    }

    /// Parses an optional parameter list.
    ///
    /// # Grammar
    ///
    /// ```text
    /// params → '(' id_list ':' type (';' id_list ':' type)* ')'
    /// ```
    ///
    /// Absent parentheses mean no parameters; empty parentheses are a
    /// syntax error.
    fn parse_params(&mut self) -> Result<Vec<VarDeclaration>, ParseError> {
        if !matches!(self.current_kind(), TokenKind::LeftParen) {
            return Ok(Vec::new());
        }
        self.advance();

        let mut groups = vec![self.parse_var_declaration()?];
        while matches!(self.current_kind(), TokenKind::Semicolon) {
            self.advance();
            groups.push(self.parse_var_declaration()?);
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(groups)
    }
}
