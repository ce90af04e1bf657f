//! Tolerant recursive-descent parser for definition documents.
//!
//! Builds a rowan GreenNode tree from tokens. The tree is lossless (all
//! trivia is kept) and the parser recovers from anything an incomplete
//! document can throw at it: dangling keys, missing values, stray tokens,
//! trailing dots. Errors are collected, never raised.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder};
use text_size::{TextRange, TextSize};

use super::lexer::{Lexer, Token};
use super::ParseError;
use crate::syntax::{SyntaxKind, SyntaxNode};

/// Parse result containing the green tree and any errors
#[derive(Debug)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<ParseError>,
}

impl Parse {
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse source text into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_program();
    parser.finish()
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // === Token inspection ===

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Kind of the next non-trivia token, without consuming anything.
    fn peek_kind(&self) -> SyntaxKind {
        self.tokens[self.pos..]
            .iter()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    fn can_start_expression(&self) -> bool {
        matches!(
            self.current_kind(),
            SyntaxKind::IDENT
                | SyntaxKind::STRING
                | SyntaxKind::NUMBER
                | SyntaxKind::TRUE_KW
                | SyntaxKind::FALSE_KW
                | SyntaxKind::NULL_KW
                | SyntaxKind::THIS_KW
                | SyntaxKind::FUNCTION_KW
                | SyntaxKind::NEW_KW
                | SyntaxKind::L_BRACE
                | SyntaxKind::L_BRACKET
                | SyntaxKind::L_PAREN
                | SyntaxKind::PLUS
                | SyntaxKind::MINUS
                | SyntaxKind::BANG
        )
    }

    // === Token consumption ===

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    // === Error handling ===

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(TextSize::new(0)));
        self.errors.push(ParseError::new(message, range));
    }

    /// Report an error and consume one token inside an ERROR node so the
    /// parser always makes progress.
    fn error_bump(&mut self, message: impl Into<String>) {
        self.error(message);
        self.builder.start_node(SyntaxKind::ERROR.into());
        self.bump();
        self.builder.finish_node();
    }

    // === Node building ===

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn checkpoint(&self) -> Checkpoint {
        self.builder.checkpoint()
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // === Grammar ===

    fn parse_program(&mut self) {
        self.start_node(SyntaxKind::PROGRAM);
        self.skip_trivia();
        while !self.at_eof() {
            self.parse_statement();
            self.skip_trivia();
        }
        self.finish_node();
    }

    fn parse_statement(&mut self) {
        match self.current_kind() {
            SyntaxKind::VAR_KW => self.parse_var_stmt(),
            SyntaxKind::RETURN_KW => self.parse_return_stmt(),
            SyntaxKind::SEMICOLON => self.bump(),
            _ if self.can_start_expression() => {
                self.start_node(SyntaxKind::EXPR_STMT);
                self.parse_expr();
                if self.peek_kind() == SyntaxKind::SEMICOLON {
                    self.skip_trivia();
                    self.bump();
                }
                self.finish_node();
            }
            _ => self.error_bump("expected a statement"),
        }
    }

    fn parse_var_stmt(&mut self) {
        self.start_node(SyntaxKind::VAR_STMT);
        self.bump(); // var
        self.skip_trivia();
        loop {
            if !self.eat(SyntaxKind::IDENT) {
                self.error("expected a variable name");
                break;
            }
            if self.peek_kind() == SyntaxKind::EQ {
                self.skip_trivia();
                self.bump(); // =
                self.skip_trivia();
                if self.can_start_expression() {
                    self.parse_expr();
                } else {
                    self.error("expected an initializer");
                }
            }
            if self.peek_kind() == SyntaxKind::COMMA {
                self.skip_trivia();
                self.bump();
                self.skip_trivia();
                continue;
            }
            break;
        }
        if self.peek_kind() == SyntaxKind::SEMICOLON {
            self.skip_trivia();
            self.bump();
        }
        self.finish_node();
    }

    fn parse_return_stmt(&mut self) {
        self.start_node(SyntaxKind::RETURN_STMT);
        self.bump(); // return
        self.skip_trivia();
        if self.can_start_expression() {
            self.parse_expr();
        }
        if self.peek_kind() == SyntaxKind::SEMICOLON {
            self.skip_trivia();
            self.bump();
        }
        self.finish_node();
    }

    fn parse_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_postfix();
        if self.peek_kind() == SyntaxKind::EQ {
            self.start_node_at(checkpoint, SyntaxKind::ASSIGN_EXPR);
            self.skip_trivia();
            self.bump(); // =
            self.skip_trivia();
            if self.can_start_expression() {
                self.parse_expr();
            } else {
                self.error("expected an expression after `=`");
            }
            self.finish_node();
        }
    }

    fn parse_postfix(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_primary();
        loop {
            match self.peek_kind() {
                SyntaxKind::DOT => {
                    self.start_node_at(checkpoint, SyntaxKind::MEMBER_EXPR);
                    self.skip_trivia();
                    self.bump(); // .
                    // A trailing dot is fine: the member just has no name yet.
                    if self.peek_kind() == SyntaxKind::IDENT {
                        self.skip_trivia();
                        self.bump();
                    }
                    self.finish_node();
                }
                SyntaxKind::L_PAREN => {
                    self.start_node_at(checkpoint, SyntaxKind::CALL_EXPR);
                    self.skip_trivia();
                    self.parse_arg_list();
                    self.finish_node();
                }
                _ => break,
            }
        }
    }

    fn parse_arg_list(&mut self) {
        self.start_node(SyntaxKind::ARG_LIST);
        self.bump(); // (
        self.skip_trivia();
        while !self.at(SyntaxKind::R_PAREN) && !self.at_eof() {
            if self.at(SyntaxKind::COMMA) {
                self.bump();
            } else if self.can_start_expression() {
                self.parse_expr();
            } else {
                self.error_bump("expected an argument");
            }
            self.skip_trivia();
        }
        if !self.eat(SyntaxKind::R_PAREN) {
            self.error("missing `)`");
        }
        self.finish_node();
    }

    fn parse_primary(&mut self) {
        match self.current_kind() {
            SyntaxKind::L_BRACE => self.parse_object(),
            SyntaxKind::L_BRACKET => self.parse_array(),
            SyntaxKind::STRING
            | SyntaxKind::NUMBER
            | SyntaxKind::TRUE_KW
            | SyntaxKind::FALSE_KW
            | SyntaxKind::NULL_KW => {
                self.start_node(SyntaxKind::LITERAL);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::IDENT => {
                self.start_node(SyntaxKind::NAME_REF);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::THIS_KW => {
                self.start_node(SyntaxKind::THIS_EXPR);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::FUNCTION_KW => self.parse_function(),
            SyntaxKind::NEW_KW => {
                self.start_node(SyntaxKind::NEW_EXPR);
                self.bump();
                self.skip_trivia();
                if self.can_start_expression() {
                    self.parse_postfix();
                } else {
                    self.error("expected an expression after `new`");
                }
                self.finish_node();
            }
            SyntaxKind::L_PAREN => {
                self.start_node(SyntaxKind::PAREN_EXPR);
                self.bump();
                self.skip_trivia();
                if self.can_start_expression() {
                    self.parse_expr();
                } else {
                    self.error("expected an expression");
                }
                self.skip_trivia();
                if !self.eat(SyntaxKind::R_PAREN) {
                    self.error("missing `)`");
                }
                self.finish_node();
            }
            SyntaxKind::PLUS | SyntaxKind::MINUS | SyntaxKind::BANG => {
                self.start_node(SyntaxKind::UNARY_EXPR);
                self.bump();
                self.skip_trivia();
                if self.can_start_expression() {
                    self.parse_postfix();
                } else {
                    self.error("expected an operand");
                }
                self.finish_node();
            }
            _ => self.error("expected an expression"),
        }
    }

    fn parse_object(&mut self) {
        self.start_node(SyntaxKind::OBJECT_EXPR);
        self.bump(); // {
        self.skip_trivia();
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::COMMA | SyntaxKind::SEMICOLON => self.bump(),
                k if k.is_key() => self.parse_property(),
                _ => self.error_bump("expected a property"),
            }
            self.skip_trivia();
        }
        if !self.eat(SyntaxKind::R_BRACE) {
            self.error("missing `}`");
        }
        self.finish_node();
    }

    fn parse_property(&mut self) {
        self.start_node(SyntaxKind::PROPERTY);
        self.bump(); // key
        if self.peek_kind() == SyntaxKind::COLON {
            self.skip_trivia();
            self.bump(); // :
            self.skip_trivia();
            if self.can_start_expression() {
                self.parse_expr();
            } else {
                self.error("expected a property value");
            }
        }
        // A dangling key with no colon is left as a key-only property.
        self.finish_node();
    }

    fn parse_array(&mut self) {
        self.start_node(SyntaxKind::ARRAY_EXPR);
        self.bump(); // [
        self.skip_trivia();
        while !self.at(SyntaxKind::R_BRACKET) && !self.at_eof() {
            if self.at(SyntaxKind::COMMA) {
                self.bump();
            } else if self.can_start_expression() {
                self.parse_expr();
            } else {
                self.error_bump("expected an array element");
            }
            self.skip_trivia();
        }
        if !self.eat(SyntaxKind::R_BRACKET) {
            self.error("missing `]`");
        }
        self.finish_node();
    }

    fn parse_function(&mut self) {
        self.start_node(SyntaxKind::FUNCTION_EXPR);
        self.bump(); // function
        self.skip_trivia();
        self.eat(SyntaxKind::IDENT); // optional name
        self.skip_trivia();
        if self.at(SyntaxKind::L_PAREN) {
            self.start_node(SyntaxKind::PARAM_LIST);
            self.bump();
            self.skip_trivia();
            while !self.at(SyntaxKind::R_PAREN) && !self.at_eof() {
                if self.at(SyntaxKind::IDENT) || self.at(SyntaxKind::COMMA) {
                    self.bump();
                } else {
                    self.error_bump("expected a parameter");
                }
                self.skip_trivia();
            }
            if !self.eat(SyntaxKind::R_PAREN) {
                self.error("missing `)`");
            }
            self.finish_node();
        } else {
            self.error("expected a parameter list");
        }
        self.skip_trivia();
        if self.at(SyntaxKind::L_BRACE) {
            self.start_node(SyntaxKind::BLOCK);
            self.bump();
            self.skip_trivia();
            while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
                self.parse_statement();
                self.skip_trivia();
            }
            if !self.eat(SyntaxKind::R_BRACE) {
                self.error("missing `}`");
            }
            self.finish_node();
        } else {
            self.error("expected a function body");
        }
        self.finish_node();
    }
}
