// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for node traversal.
//!
//! Traversal is pre-order (parent before children, callee before
//! arguments), which gives deterministic candidate ordering for position
//! lookups. The [`CallCollector`] visitor gathers every call in an
//! expression tree together with its call-nesting depth.

use crate::nodes::{
    Assign, Attribute, Call, Collection, CollectionElement, Expression, Literal, Module, Name,
    Statement,
};

// ============================================================================
// Visitor Trait
// ============================================================================

/// Result of visiting a node - controls traversal behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue traversal into children.
    #[default]
    Continue,
    /// Skip children, continue with siblings.
    SkipChildren,
    /// Stop traversal entirely.
    Stop,
}

/// A visitor over the closed node variant set.
///
/// `'m` is the borrow of the parsed tree, `'a` the borrow of the source
/// text. All methods default to continuing traversal.
pub trait Visitor<'m, 'a> {
    fn visit_name(&mut self, _node: &'m Name<'a>) -> VisitResult {
        VisitResult::Continue
    }

    fn visit_literal(&mut self, _node: &'m Literal<'a>) -> VisitResult {
        VisitResult::Continue
    }

    fn visit_collection(&mut self, _node: &'m Collection<'a>) -> VisitResult {
        VisitResult::Continue
    }

    fn visit_attribute(&mut self, _node: &'m Attribute<'a>) -> VisitResult {
        VisitResult::Continue
    }

    fn visit_call(&mut self, _node: &'m Call<'a>) -> VisitResult {
        VisitResult::Continue
    }

    fn leave_call(&mut self, _node: &'m Call<'a>) {}

    fn visit_assign(&mut self, _node: &'m Assign<'a>) -> VisitResult {
        VisitResult::Continue
    }
}

// ============================================================================
// Walk Functions
// ============================================================================

/// Walk a module. Returns `false` if a visitor requested `Stop`.
pub fn walk_module<'m, 'a>(
    visitor: &mut impl Visitor<'m, 'a>,
    module: &'m Module<'a>,
) -> bool {
    for statement in &module.body {
        if !walk_statement(visitor, statement) {
            return false;
        }
    }
    true
}

/// Walk a statement. Returns `false` if a visitor requested `Stop`.
pub fn walk_statement<'m, 'a>(
    visitor: &mut impl Visitor<'m, 'a>,
    statement: &'m Statement<'a>,
) -> bool {
    match statement {
        Statement::Expr(expr) => walk_expression(visitor, &expr.value),
        Statement::Assign(assign) => match visitor.visit_assign(assign) {
            VisitResult::Continue => {
                walk_expression(visitor, &assign.target)
                    && walk_expression(visitor, &assign.value)
            }
            VisitResult::SkipChildren => true,
            VisitResult::Stop => false,
        },
    }
}

/// Walk an expression tree. Returns `false` if a visitor requested `Stop`.
pub fn walk_expression<'m, 'a>(
    visitor: &mut impl Visitor<'m, 'a>,
    expression: &'m Expression<'a>,
) -> bool {
    match expression {
        Expression::Name(name) => visitor.visit_name(name) != VisitResult::Stop,
        Expression::Literal(literal) => visitor.visit_literal(literal) != VisitResult::Stop,
        Expression::Collection(collection) => match visitor.visit_collection(collection) {
            VisitResult::Continue => collection.elements.iter().all(|element| match element {
                CollectionElement::Item(item) => walk_expression(visitor, item),
                CollectionElement::Pair { key, value } => {
                    walk_expression(visitor, key) && walk_expression(visitor, value)
                }
            }),
            VisitResult::SkipChildren => true,
            VisitResult::Stop => false,
        },
        Expression::Attribute(attribute) => match visitor.visit_attribute(attribute) {
            VisitResult::Continue => walk_expression(visitor, &attribute.value),
            VisitResult::SkipChildren => true,
            VisitResult::Stop => false,
        },
        Expression::Call(call) => match visitor.visit_call(call) {
            VisitResult::Continue => {
                let keep_going = walk_expression(visitor, &call.func)
                    && call
                        .args
                        .iter()
                        .all(|arg| walk_expression(visitor, &arg.value));
                visitor.leave_call(call);
                keep_going
            }
            VisitResult::SkipChildren => {
                visitor.leave_call(call);
                true
            }
            VisitResult::Stop => false,
        },
    }
}

// ============================================================================
// Call Collector
// ============================================================================

/// A call found in an expression tree.
#[derive(Debug, Clone, Copy)]
pub struct CallSite<'m, 'a> {
    /// The call node.
    pub call: &'m Call<'a>,
    /// Call-nesting depth: 0 for the outermost call of the expression,
    /// incremented for each enclosing call.
    pub depth: usize,
}

/// Collects every call in an expression, in pre-order, with nesting depth.
#[derive(Debug, Default)]
pub struct CallCollector<'m, 'a> {
    depth: usize,
    calls: Vec<CallSite<'m, 'a>>,
}

impl<'m, 'a> CallCollector<'m, 'a> {
    /// Collect all call sites in the given expression.
    pub fn collect(expression: &'m Expression<'a>) -> Vec<CallSite<'m, 'a>> {
        let mut collector = CallCollector {
            depth: 0,
            calls: Vec::new(),
        };
        walk_expression(&mut collector, expression);
        collector.calls
    }
}

impl<'m, 'a> Visitor<'m, 'a> for CallCollector<'m, 'a> {
    fn visit_call(&mut self, node: &'m Call<'a>) -> VisitResult {
        self.calls.push(CallSite {
            call: node,
            depth: self.depth,
        });
        self.depth += 1;
        VisitResult::Continue
    }

    fn leave_call(&mut self, _node: &'m Call<'a>) {
        self.depth -= 1;
    }
}

// ============================================================================
// Tests
// ============================================================================
