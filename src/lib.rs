//! AST node model for string-theory constraint expressions.
//!
//! A parser builds trees bottom-up through the constructors in [`ast`];
//! mutators, generators and printers then walk them read-only, by hand or
//! through [`traversal`]. Every node renders to a stable debug representation
//! (see [`repr`]).
pub mod ast;
pub mod error;
#[cfg(feature = "json")]
pub mod output;
pub mod repr;
pub mod traversal;

pub use ast::{
    Args, At, AstNode, BoolLiteral, Concat, Expression, Identifier, IntLiteral, Length, Node,
    Setting, Sort, StringLiteral,
};
pub use error::{MalformedNodeError, Result};
#[cfg(feature = "json")]
pub use output::{to_json, to_json_pretty, to_json_string};
pub use traversal::{TraversalCmd, bottom_up, count_nodes, top_down};
