use tracing::debug;

use crate::{
    ast::{AstNode, Node},
    error::{MalformedNodeError, Result},
};

/// Generic applied expression.
///
/// The symbol is the operator or function name heading the expression and is
/// never empty.
///
/// # Examples
/// ```
/// use stringfuzz_ast::ast::{BoolLiteral, Expression, IntLiteral};
///
/// let expr = Expression::new(
///     "foo",
///     vec![IntLiteral::new(1).into(), BoolLiteral::new(true).into()],
/// )
/// .unwrap();
/// assert_eq!(expr.to_string(), "Expr<foo IntLit<1> BoolLit<true>>");
///
/// assert!(Expression::new("", vec![]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    symbol: String,
    body: Vec<Node>,
}

impl Expression {
    /// Builds an expression, rejecting an empty symbol.
    pub fn new(symbol: impl Into<String>, body: Vec<Node>) -> Result<Self> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            debug!(arity = body.len(), "rejected expression without a symbol");
            return Err(MalformedNodeError::EmptySymbol { arity: body.len() });
        }
        Ok(Expression { symbol, body })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }

    /// Takes the expression apart, handing ownership of the body to the caller.
    pub fn into_parts(self) -> (String, Vec<Node>) {
        (self.symbol, self.body)
    }

    pub(crate) fn body_mut(&mut self) -> &mut [Node] {
        &mut self.body
    }
}

/// String concatenation of exactly two operands
///
/// # Example
/// ```text
/// (str.++ a b)
/// ```
#[derive(Debug, Clone)]
pub struct Concat {
    operands: Box<[Node; 2]>,
}

impl Concat {
    pub const SYMBOL: &'static str = "Concat";

    pub fn new(left: impl AstNode, right: impl AstNode) -> Self {
        Concat {
            operands: Box::new([left.into(), right.into()]),
        }
    }

    pub fn left(&self) -> &Node {
        &self.operands[0]
    }

    pub fn right(&self) -> &Node {
        &self.operands[1]
    }

    pub fn operands(&self) -> &[Node] {
        &self.operands[..]
    }

    pub(crate) fn operands_mut(&mut self) -> &mut [Node] {
        &mut self.operands[..]
    }
}

/// Character access at an index
///
/// # Example
/// ```text
/// (str.at s 0)
/// ```
#[derive(Debug, Clone)]
pub struct At {
    operands: Box<[Node; 2]>,
}

impl At {
    pub const SYMBOL: &'static str = "At";

    pub fn new(base: impl AstNode, index: impl AstNode) -> Self {
        At {
            operands: Box::new([base.into(), index.into()]),
        }
    }

    pub fn base(&self) -> &Node {
        &self.operands[0]
    }

    pub fn index(&self) -> &Node {
        &self.operands[1]
    }

    pub fn operands(&self) -> &[Node] {
        &self.operands[..]
    }

    pub(crate) fn operands_mut(&mut self) -> &mut [Node] {
        &mut self.operands[..]
    }
}

/// String length of a single operand
///
/// # Example
/// ```text
/// (str.len s)
/// ```
#[derive(Debug, Clone)]
pub struct Length {
    operand: Box<Node>,
}

impl Length {
    pub const SYMBOL: &'static str = "Length";

    pub fn new(operand: impl AstNode) -> Self {
        Length {
            operand: Box::new(operand.into()),
        }
    }

    pub fn operand(&self) -> &Node {
        &self.operand
    }

    pub fn operands(&self) -> &[Node] {
        std::slice::from_ref(&*self.operand)
    }

    pub(crate) fn operands_mut(&mut self) -> &mut [Node] {
        std::slice::from_mut(&mut *self.operand)
    }
}
