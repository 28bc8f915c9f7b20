// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Statement nodes.

use super::expression::Expression;
use super::traits::{Codegen, CodegenState};

/// A single assignment: `target = value`.
///
/// Only the single-target, single-`=` form is represented; chained and
/// augmented assignments are outside the parsed surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign<'a> {
    pub target: Expression<'a>,
    pub value: Expression<'a>,
    /// 1-indexed source line of the target's first token.
    pub line: usize,
}

/// An expression used as a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprStatement<'a> {
    pub value: Expression<'a>,
    /// 1-indexed source line of the expression's first token.
    pub line: usize,
}

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    Expr(ExprStatement<'a>),
    Assign(Assign<'a>),
}

impl<'a> Statement<'a> {
    /// 1-indexed line of the statement's first token.
    pub fn start_line(&self) -> usize {
        match self {
            Statement::Expr(e) => e.line,
            Statement::Assign(a) => a.line,
        }
    }

    /// The statement's value expression (the assignment right-hand side,
    /// or the expression itself).
    pub fn value(&self) -> &Expression<'a> {
        match self {
            Statement::Expr(e) => &e.value,
            Statement::Assign(a) => &a.value,
        }
    }
}

/// A parsed module: the statements the parser recognized, in source order.
///
/// Logical lines outside the supported statement surface are not recorded;
/// they simply yield no toggle candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module<'a> {
    pub body: Vec<Statement<'a>>,
}

// ============================================================================
// Codegen
// ============================================================================

impl<'a> Codegen for Assign<'a> {
    fn codegen(&self, state: &mut CodegenState) {
        self.target.codegen(state);
        state.add_token(" = ");
        self.value.codegen(state);
    }
}

impl<'a> Codegen for Statement<'a> {
    fn codegen(&self, state: &mut CodegenState) {
        match self {
            Statement::Expr(e) => e.value.codegen(state),
            Statement::Assign(a) => a.codegen(state),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
