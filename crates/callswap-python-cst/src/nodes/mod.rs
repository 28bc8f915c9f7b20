// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Syntax node types for the statement surface callswap operates on.
//!
//! The node set is deliberately closed: {Call, Assign, Name, Literal,
//! Collection, Attribute}. Everything a toggle operation touches is
//! expressible in these variants; statements using other syntax are not
//! produced by the parser.

mod expression;
mod statement;
pub mod traits;

pub use expression::{
    Arg, Attribute, Call, Collection, CollectionElement, CollectionKind, Expression, Literal,
    Name, StarKind,
};
pub use statement::{Assign, ExprStatement, Module, Statement};
pub use traits::{Codegen, CodegenState};
