use crate::ast::{
    Args, At, BoolLiteral, Concat, Expression, Identifier, IntLiteral, Length, Setting, Sort,
    StringLiteral,
};

mod sealed {
    pub trait Sealed {}
}

/// Marker implemented by [`Node`] and by every node payload type.
///
/// Lets constructors accept any node kind as a child without the caller
/// wrapping it in [`Node`] first. It carries no behavior of its own.
pub trait AstNode: Into<Node> + sealed::Sealed {}

/// Abstract syntax tree node.
///
/// The closed set of node kinds. Every child in a tree is a `Node` owned by
/// exactly one parent.
///
/// Dropping a tree does not recurse, so trees of any depth can be discarded.
/// `Display` and `Clone` do recurse and are bounded by the call stack: walk
/// deep trees with [`crate::traversal`] instead.
#[derive(Debug, Clone)]
pub enum Node {
    // Literals
    BoolLiteral(BoolLiteral),
    IntLiteral(IntLiteral),
    StringLiteral(StringLiteral),

    // Names
    Sort(Sort),
    Setting(Setting),
    Identifier(Identifier),
    Args(Args),

    // Expressions
    Expression(Expression),
    Concat(Concat),
    At(At),
    Length(Length),
}

impl Node {
    /// Tag used by the debug representation, e.g. `"Id"` or `"Concat"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::BoolLiteral(_) => "BoolLit",
            Node::IntLiteral(_) => "IntLit",
            Node::StringLiteral(_) => "StringLit",
            Node::Sort(_) => "Sort",
            Node::Setting(_) => "Setting",
            Node::Identifier(_) => "Id",
            Node::Args(_) => "Args",
            Node::Expression(_) => "Expr",
            Node::Concat(_) => Concat::SYMBOL,
            Node::At(_) => At::SYMBOL,
            Node::Length(_) => Length::SYMBOL,
        }
    }

    /// Symbol heading an expression, generic or specific.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Node::Expression(e) => Some(e.symbol()),
            Node::Concat(_) => Some(Concat::SYMBOL),
            Node::At(_) => Some(At::SYMBOL),
            Node::Length(_) => Some(Length::SYMBOL),
            _ => None,
        }
    }

    /// Ordered children; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Expression(e) => e.body(),
            Node::Concat(c) => c.operands(),
            Node::At(a) => a.operands(),
            Node::Length(l) => l.operands(),
            _ => &[],
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Node::BoolLiteral(_) | Node::IntLiteral(_) | Node::StringLiteral(_)
        )
    }

    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            Node::Expression(_) | Node::Concat(_) | Node::At(_) | Node::Length(_)
        )
    }

    pub fn as_string_literal(&self) -> Option<&StringLiteral> {
        match self {
            Node::StringLiteral(s) => Some(s),
            _ => None,
        }
    }

    fn children_mut(&mut self) -> &mut [Node] {
        match self {
            Node::Expression(e) => e.body_mut(),
            Node::Concat(c) => c.operands_mut(),
            Node::At(a) => a.operands_mut(),
            Node::Length(l) => l.operands_mut(),
            _ => &mut [],
        }
    }

    /// Moves every child that has children of its own onto `out`, leaving an
    /// [`Args`] leaf in its place.
    fn detach_subtrees(&mut self, out: &mut Vec<Node>) {
        for child in self.children_mut() {
            if !child.children().is_empty() {
                out.push(std::mem::replace(child, Node::Args(Args)));
            }
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut todo = Vec::new();
        self.detach_subtrees(&mut todo);
        while let Some(mut node) = todo.pop() {
            node.detach_subtrees(&mut todo);
            // `node` now only holds leaves and drops without recursing.
        }
    }
}

macro_rules! node_kind {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$ty(node)
                }
            }

            impl sealed::Sealed for $ty {}
            impl AstNode for $ty {}
        )*
    };
}

node_kind!(
    BoolLiteral,
    IntLiteral,
    StringLiteral,
    Sort,
    Setting,
    Identifier,
    Args,
    Expression,
    Concat,
    At,
    Length,
);

impl sealed::Sealed for Node {}
impl AstNode for Node {}

// Completed trees are handed to concurrent read-only consumers.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Node>();
};
