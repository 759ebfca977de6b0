//! # Tree Traversals
//!
//! Non-recursive read-only walks over a [`Node`] tree. Both walkers keep an
//! explicit work stack, so arbitrarily deep trees produced by a fuzzer do not
//! exhaust the call stack. Dropping a tree is iterative as well; rendering or
//! cloning one recurses once per level.

use tracing::trace;

use crate::ast::Node;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TraversalCmd {
    Stop,
    Continue,
}

/// Visits nodes from top to bottom, left to right. Children of a node are not
/// explored if `f` returns [`TraversalCmd::Stop`] for it.
///
/// # Examples
/// ```
/// use stringfuzz_ast::ast::{Concat, Identifier, Node};
/// use stringfuzz_ast::traversal::{top_down, TraversalCmd};
///
/// let tree: Node = Concat::new(Identifier::new("a"), Identifier::new("b")).into();
/// let mut kinds = Vec::new();
/// top_down(&tree, |n| {
///     kinds.push(n.kind());
///     TraversalCmd::Continue
/// });
/// assert_eq!(kinds, ["Concat", "Id", "Id"]);
/// ```
pub fn top_down<'a>(root: &'a Node, mut f: impl FnMut(&'a Node) -> TraversalCmd) {
    let mut todo = vec![root];
    while let Some(node) = todo.pop() {
        match f(node) {
            TraversalCmd::Continue => todo.extend(node.children().iter().rev()),
            TraversalCmd::Stop => {
                trace!(kind = node.kind(), "pruned subtree");
            }
        }
    }
}

/// Visits nodes bottom up while propagating values. `f` receives a node
/// together with the values computed for its children, in child order, and
/// takes ownership of them.
///
/// # Examples
/// ```
/// use stringfuzz_ast::ast::{Concat, Identifier, Length, Node};
/// use stringfuzz_ast::traversal::bottom_up;
///
/// let tree: Node = Length::new(Concat::new(Identifier::new("a"), Identifier::new("b"))).into();
/// let depth = bottom_up(&tree, |_, children: Vec<usize>| {
///     1 + children.into_iter().max().unwrap_or(0)
/// });
/// assert_eq!(depth, 3);
/// ```
pub fn bottom_up<R>(root: &Node, mut f: impl FnMut(&Node, Vec<R>) -> R) -> R {
    let mut todo = vec![(root, false)];
    let mut stack: Vec<R> = Vec::with_capacity(4);

    while let Some((node, children_done)) = todo.pop() {
        let children = node.children();

        // Schedule the children first; the node is revisited once they are done.
        if !children_done && !children.is_empty() {
            todo.push((node, true));
            todo.extend(children.iter().rev().map(|c| (c, false)));
            continue;
        }

        let values = stack.split_off(stack.len() - children.len());
        let result = f(node, values);
        stack.push(result);
    }

    debug_assert_eq!(stack.len(), 1);
    stack.pop().expect("walk always yields a value for the root")
}

/// Number of nodes in the tree, the root included.
pub fn count_nodes(root: &Node) -> usize {
    let mut count = 0;
    top_down(root, |_| {
        count += 1;
        TraversalCmd::Continue
    });
    count
}
