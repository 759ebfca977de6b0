//! # String Constraint AST
//!
//! This module defines the abstract syntax tree for string-theory constraint
//! expressions, the kind found in SMT-LIB input fed to string solvers during
//! fuzz testing.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[literals]** - Boolean, integer and string literal leaves
//! - **[names]** - Sorts, settings, identifiers and the empty argument marker
//! - **[expressions]** - Generic applied expressions and the fixed-arity string operations
//! - **[node]** - The closed [`Node`] sum type tying every kind together
//!
//! ## Core Concepts
//!
//! ### Ownership
//!
//! A tree is a strict ownership hierarchy. Every child is owned by exactly one
//! parent, there is no sharing and no back-references, and there is no API to
//! mutate a node after it is built. Trees are built bottom-up by a parser and
//! traversed read-only afterwards.
//!
//! ### Generic vs. specific expressions
//!
//! ```text
//! (str.++ a b)        Expr<str.++ Id<a> Id<b>>
//! Concat(a, b)        Concat<Id<a> Id<b>>
//! ```
//!
//! A generic [`Expression`] accepts any non-empty symbol and any number of
//! children. [`Concat`], [`At`] and [`Length`] fix both their symbol and their
//! arity in their type, so a wrong number of operands does not compile.
//!
//! ## Examples
//!
//! ```
//! use stringfuzz_ast::ast::{Concat, Identifier, Node};
//!
//! let node: Node = Concat::new(Identifier::new("a"), Identifier::new("b")).into();
//! assert_eq!(node.to_string(), "Concat<Id<a> Id<b>>");
//! ```
pub mod expressions;
pub mod literals;
pub mod names;
pub mod node;

pub use expressions::{At, Concat, Expression, Length};
pub use literals::{BoolLiteral, IntLiteral, StringLiteral};
pub use names::{Args, Identifier, Setting, Sort};
pub use node::{AstNode, Node};
