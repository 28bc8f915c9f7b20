// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Recursive-descent statement parser.
//!
//! The parser is permissive at the document level and strict at the
//! statement level: the token stream is split into logical lines, and each
//! line either parses completely as an expression statement or a single
//! assignment within the closed node variant set, or it is skipped. A
//! skipped line never produces a partial node.

mod errors;

pub use errors::ParserError;

use crate::nodes::{
    Arg, Assign, Attribute, Call, Collection, CollectionElement, CollectionKind, ExprStatement,
    Expression, Literal, Module, Name, StarKind, Statement,
};
use crate::tokenizer::{tokenize, TokKind, Token};

/// Parse source text into a [`Module`].
///
/// Logical lines outside the supported statement surface are skipped;
/// document-level tokenization failures are returned as errors.
///
/// # Example
///
/// ```
/// use callswap_python_cst::parse_module;
///
/// let module = parse_module("obj = foo(bar, thing=None)").expect("parse error");
/// assert_eq!(module.body.len(), 1);
/// ```
pub fn parse_module(source: &str) -> Result<Module<'_>, ParserError> {
    let tokens = tokenize(source)?;
    let mut body = Vec::new();
    for line in logical_lines(&tokens) {
        if let Some(statement) = StatementParser::new(source, line).parse() {
            body.push(statement);
        }
    }
    Ok(Module { body })
}

/// Split the token stream into logical lines, dropping empty ones.
fn logical_lines<'t, 'a>(tokens: &'t [Token<'a>]) -> impl Iterator<Item = &'t [Token<'a>]> {
    tokens
        .split(|t| matches!(t.kind, TokKind::Newline | TokKind::EndMarker))
        .filter(|line| !line.is_empty())
}

/// Marker for a logical line the parser declines to handle.
struct Unsupported;

type ParseResult<T> = Result<T, Unsupported>;

struct StatementParser<'t, 'a> {
    source: &'a str,
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'t, 'a> StatementParser<'t, 'a> {
    fn new(source: &'a str, tokens: &'t [Token<'a>]) -> Self {
        StatementParser {
            source,
            tokens,
            pos: 0,
        }
    }

    /// Parse the logical line as a statement, or `None` if it falls
    /// outside the supported surface.
    fn parse(mut self) -> Option<Statement<'a>> {
        let line = self.tokens.first()?.line;
        let expr = self.parse_expression().ok()?;
        if self.at_end() {
            return Some(Statement::Expr(ExprStatement { value: expr, line }));
        }
        if self.eat_op("=") {
            let value = self.parse_expression().ok()?;
            if self.at_end() {
                return Some(Statement::Assign(Assign {
                    target: expr,
                    value,
                    line,
                }));
            }
        }
        None
    }

    // ------------------------------------------------------------------
    // Token access
    // ------------------------------------------------------------------

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_at(&self, n: usize) -> Option<Token<'a>> {
        self.tokens.get(self.pos + n).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn eat_op(&mut self, text: &str) -> bool {
        if self.peek().is_some_and(|t| t.is_op(text)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_op(&mut self, text: &str) -> ParseResult<()> {
        if self.eat_op(text) {
            Ok(())
        } else {
            Err(Unsupported)
        }
    }

    fn expect_name(&mut self) -> ParseResult<Name<'a>> {
        let tok = self.peek().ok_or(Unsupported)?;
        if tok.kind != TokKind::Name {
            return Err(Unsupported);
        }
        self.pos += 1;
        Ok(Name {
            value: tok.text,
            line: tok.line,
        })
    }

    // ------------------------------------------------------------------
    // Grammar
    // ------------------------------------------------------------------

    fn parse_expression(&mut self) -> ParseResult<Expression<'a>> {
        let mut expr = self.parse_atom()?;
        loop {
            if self.eat_op(".") {
                let attr = self.expect_name()?;
                expr = Expression::Attribute(Attribute {
                    value: Box::new(expr),
                    attr,
                });
            } else if self.eat_op("(") {
                let line = expr.start_line();
                let args = self.parse_args()?;
                expr = Expression::Call(Call {
                    func: Box::new(expr),
                    args,
                    line,
                });
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn parse_atom(&mut self) -> ParseResult<Expression<'a>> {
        let tok = self.peek().ok_or(Unsupported)?;
        match tok.kind {
            TokKind::Name => {
                self.pos += 1;
                Ok(Expression::Name(Name {
                    value: tok.text,
                    line: tok.line,
                }))
            }
            TokKind::Number => {
                self.pos += 1;
                Ok(Expression::Literal(Literal {
                    value: tok.text,
                    line: tok.line,
                }))
            }
            TokKind::String => {
                self.pos += 1;
                let mut end = tok.end();
                // Implicitly concatenated string literals fold into one
                // literal spanning the original slice.
                while let Some(next) = self.peek() {
                    if next.kind == TokKind::String && next.line == tok.line {
                        end = next.end();
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                Ok(Expression::Literal(Literal {
                    value: &self.source[tok.start..end],
                    line: tok.line,
                }))
            }
            TokKind::Op => match tok.text {
                "(" => self.parse_paren(tok),
                "[" => self.parse_list(tok),
                "{" => self.parse_brace(tok),
                "-" | "+" => self.parse_signed(tok),
                _ => Err(Unsupported),
            },
            TokKind::Newline | TokKind::EndMarker => Err(Unsupported),
        }
    }

    /// A signed numeric literal, e.g. `-1` or `+2.5`.
    fn parse_signed(&mut self, sign: Token<'a>) -> ParseResult<Expression<'a>> {
        self.pos += 1;
        let tok = self.peek().ok_or(Unsupported)?;
        if tok.kind != TokKind::Number {
            return Err(Unsupported);
        }
        self.pos += 1;
        Ok(Expression::Literal(Literal {
            value: &self.source[sign.start..tok.end()],
            line: sign.line,
        }))
    }

    /// `(...)`: the empty tuple, a parenthesized expression, or a tuple
    /// display.
    fn parse_paren(&mut self, open: Token<'a>) -> ParseResult<Expression<'a>> {
        self.pos += 1;
        if self.eat_op(")") {
            return Ok(Expression::Collection(Collection {
                kind: CollectionKind::Tuple,
                elements: vec![],
                line: open.line,
            }));
        }
        let first = self.parse_expression()?;
        if self.eat_op(")") {
            // Plain parentheses around a single expression.
            return Ok(first);
        }
        self.expect_op(",")?;
        let mut elements = vec![CollectionElement::Item(first)];
        while !self.eat_op(")") {
            elements.push(CollectionElement::Item(self.parse_expression()?));
            if !self.eat_op(",") {
                self.expect_op(")")?;
                break;
            }
        }
        Ok(Expression::Collection(Collection {
            kind: CollectionKind::Tuple,
            elements,
            line: open.line,
        }))
    }

    fn parse_list(&mut self, open: Token<'a>) -> ParseResult<Expression<'a>> {
        self.pos += 1;
        let mut elements = Vec::new();
        while !self.eat_op("]") {
            elements.push(CollectionElement::Item(self.parse_expression()?));
            if !self.eat_op(",") {
                self.expect_op("]")?;
                break;
            }
        }
        Ok(Expression::Collection(Collection {
            kind: CollectionKind::List,
            elements,
            line: open.line,
        }))
    }

    /// `{...}`: a dict display (empty or keyed) or a set display.
    fn parse_brace(&mut self, open: Token<'a>) -> ParseResult<Expression<'a>> {
        self.pos += 1;
        if self.eat_op("}") {
            return Ok(Expression::Collection(Collection {
                kind: CollectionKind::Dict,
                elements: vec![],
                line: open.line,
            }));
        }
        let first = self.parse_expression()?;
        if self.eat_op(":") {
            let value = self.parse_expression()?;
            let mut elements = vec![CollectionElement::Pair { key: first, value }];
            loop {
                if self.eat_op("}") {
                    break;
                }
                self.expect_op(",")?;
                if self.eat_op("}") {
                    break;
                }
                let key = self.parse_expression()?;
                self.expect_op(":")?;
                let value = self.parse_expression()?;
                elements.push(CollectionElement::Pair { key, value });
            }
            return Ok(Expression::Collection(Collection {
                kind: CollectionKind::Dict,
                elements,
                line: open.line,
            }));
        }
        let mut elements = vec![CollectionElement::Item(first)];
        loop {
            if self.eat_op("}") {
                break;
            }
            self.expect_op(",")?;
            if self.eat_op("}") {
                break;
            }
            elements.push(CollectionElement::Item(self.parse_expression()?));
        }
        Ok(Expression::Collection(Collection {
            kind: CollectionKind::Set,
            elements,
            line: open.line,
        }))
    }

    /// Arguments after a consumed `(`, through the matching `)`.
    fn parse_args(&mut self) -> ParseResult<Vec<Arg<'a>>> {
        let mut args = Vec::new();
        if self.eat_op(")") {
            return Ok(args);
        }
        loop {
            args.push(self.parse_arg()?);
            if self.eat_op(",") {
                if self.eat_op(")") {
                    break;
                }
            } else {
                self.expect_op(")")?;
                break;
            }
        }
        Ok(args)
    }

    fn parse_arg(&mut self) -> ParseResult<Arg<'a>> {
        let star = if self.eat_op("**") {
            StarKind::DoubleStar
        } else if self.eat_op("*") {
            StarKind::Star
        } else {
            StarKind::None
        };
        if star == StarKind::None {
            if let (Some(name_tok), Some(eq_tok)) = (self.peek(), self.peek_at(1)) {
                if name_tok.kind == TokKind::Name && eq_tok.is_op("=") {
                    self.pos += 2;
                    let value = self.parse_expression()?;
                    return Ok(Arg {
                        star,
                        keyword: Some(Name {
                            value: name_tok.text,
                            line: name_tok.line,
                        }),
                        value,
                    });
                }
            }
        }
        let value = self.parse_expression()?;
        Ok(Arg {
            star,
            keyword: None,
            value,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::Codegen;

    fn only_statement(source: &str) -> Statement<'_> {
        let module = parse_module(source).expect("parse error");
        assert_eq!(module.body.len(), 1, "expected one statement in {:?}", source);
        module.body.into_iter().next().unwrap()
    }

    mod statements {
        use super::*;

        #[test]
        fn bare_call_statement() {
            let stmt = only_statement("foo(bar, thing=None)");
            assert_eq!(stmt.to_code(), "foo(bar, thing=None)");
            assert_eq!(stmt.start_line(), 1);
        }

        #[test]
        fn assignment_statement() {
            let stmt = only_statement("obj = foo(bar, thing=None)");
            match &stmt {
                Statement::Assign(assign) => {
                    assert_eq!(assign.target.to_code(), "obj");
                    assert_eq!(assign.value.to_code(), "foo(bar, thing=None)");
                }
                other => panic!("expected assignment, got {:?}", other),
            }
        }

        #[test]
        fn attribute_target_assignment() {
            let stmt = only_statement("self.result = compute(1)");
            assert_eq!(stmt.to_code(), "self.result = compute(1)");
        }

        #[test]
        fn multi_line_call_keeps_start_line() {
            let stmt = only_statement("foo(\n    bar,\n    fizz,\n)");
            assert_eq!(stmt.start_line(), 1);
            assert_eq!(stmt.to_code(), "foo(bar, fizz)");
        }

        #[test]
        fn statements_outside_the_surface_are_skipped() {
            let source = "def process():\n    foo(1)\nreturn foo(2)\nx += foo(3)\na, b = foo(4)\n";
            let module = parse_module(source).expect("parse error");
            // Only the indented call statement parses.
            assert_eq!(module.body.len(), 1);
            assert_eq!(module.body[0].to_code(), "foo(1)");
            assert_eq!(module.body[0].start_line(), 2);
        }

        #[test]
        fn chained_assignment_is_skipped() {
            let module = parse_module("a = b = foo(1)").expect("parse error");
            assert!(module.body.is_empty());
        }

        #[test]
        fn tokenizer_failure_propagates() {
            assert!(parse_module("foo('unterminated\n)").is_err());
        }
    }

    mod expressions {
        use super::*;

        #[test]
        fn nested_call_round_trips() {
            let stmt = only_statement("foo(bar(1), baz(2))");
            assert_eq!(stmt.to_code(), "foo(bar(1), baz(2))");
        }

        #[test]
        fn collection_arguments() {
            let stmt = only_statement("foo(bar, another={'a': [1, 2]})");
            assert_eq!(stmt.to_code(), "foo(bar, another={'a': [1, 2]})");
        }

        #[test]
        fn weird_whitespace_normalizes() {
            let stmt = only_statement("foo(   bar,     thing=None  )");
            assert_eq!(stmt.to_code(), "foo(bar, thing=None)");
        }

        #[test]
        fn method_callee() {
            let stmt = only_statement("obj.method(1, key=2)");
            assert_eq!(stmt.to_code(), "obj.method(1, key=2)");
        }

        #[test]
        fn starred_args() {
            let stmt = only_statement("foo(a, *rest, key=1, **extra)");
            assert_eq!(stmt.to_code(), "foo(a, *rest, key=1, **extra)");
        }

        #[test]
        fn signed_number_argument() {
            let stmt = only_statement("foo(-1, +2.5)");
            assert_eq!(stmt.to_code(), "foo(-1, +2.5)");
        }

        #[test]
        fn tuple_forms() {
            assert_eq!(only_statement("foo(())").to_code(), "foo(())");
            assert_eq!(only_statement("foo((1,))").to_code(), "foo((1,))");
            assert_eq!(only_statement("foo((1, 2))").to_code(), "foo((1, 2))");
            // Plain parentheses around an expression are dropped.
            assert_eq!(only_statement("foo((bar))").to_code(), "foo(bar)");
        }

        #[test]
        fn set_and_dict_forms() {
            assert_eq!(only_statement("foo({1, 2})").to_code(), "foo({1, 2})");
            assert_eq!(only_statement("foo({})").to_code(), "foo({})");
            assert_eq!(
                only_statement("foo({'a': 1, 'b': 2})").to_code(),
                "foo({'a': 1, 'b': 2})"
            );
        }

        #[test]
        fn trailing_commas_accepted() {
            assert_eq!(only_statement("foo(a, b,)").to_code(), "foo(a, b)");
            assert_eq!(only_statement("foo([1, 2,])").to_code(), "foo([1, 2])");
            assert_eq!(only_statement("foo({'a': 1,})").to_code(), "foo({'a': 1})");
        }

        #[test]
        fn implicit_string_concatenation_folds() {
            let stmt = only_statement("foo('a' 'b')");
            assert_eq!(stmt.to_code(), "foo('a' 'b')");
        }

        #[test]
        fn operator_expressions_are_skipped() {
            let module = parse_module("foo(1) + bar(2)").expect("parse error");
            assert!(module.body.is_empty());
        }
    }
}
