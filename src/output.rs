//! JSON export of AST trees.
//!
//! Gives external tooling a structured view of a tree next to the textual
//! debug representation. Every node becomes an object tagged with its
//! [`Node::kind`]:
//!
//! ```text
//! {"kind": "Concat", "symbol": "Concat", "children": [{"kind": "Id", "name": "a"}, ...]}
//! ```
//!
//! This is a data export, not a rendering back to SMT-LIB source.
//!
//! # Examples
//!
//! ```
//! use stringfuzz_ast::ast::{IntLiteral, Node};
//! use stringfuzz_ast::output::to_json_string;
//!
//! let node: Node = IntLiteral::new(7).into();
//! assert_eq!(to_json_string(&node), r#"{"kind":"IntLit","value":7}"#);
//! ```

use serde_json::{Map, Value, json};

use crate::{ast::Node, traversal::bottom_up};

/// Converts a tree to a `serde_json::Value`.
pub fn to_json(node: &Node) -> Value {
    bottom_up(node, |node, children: Vec<Value>| {
        let mut obj = Map::new();
        obj.insert("kind".to_string(), json!(node.kind()));

        match node {
            Node::BoolLiteral(lit) => {
                obj.insert("value".to_string(), json!(lit.value()));
            }
            Node::IntLiteral(lit) => {
                obj.insert("value".to_string(), json!(lit.value()));
            }
            Node::StringLiteral(lit) => {
                obj.insert("value".to_string(), json!(lit.value()));
            }
            Node::Sort(sort) => {
                obj.insert("name".to_string(), json!(sort.name()));
            }
            Node::Setting(setting) => {
                obj.insert("name".to_string(), json!(setting.name()));
            }
            Node::Identifier(id) => {
                obj.insert("name".to_string(), json!(id.name()));
            }
            Node::Args(_) => {}
            Node::Expression(_) | Node::Concat(_) | Node::At(_) | Node::Length(_) => {
                obj.insert("symbol".to_string(), json!(node.symbol()));
                obj.insert("children".to_string(), Value::Array(children));
            }
        }

        Value::Object(obj)
    })
}

/// Converts a tree to compact JSON text.
pub fn to_json_string(node: &Node) -> String {
    to_json(node).to_string()
}

/// Converts a tree to JSON text with 2-space indentation.
pub fn to_json_pretty(node: &Node) -> String {
    format!("{:#}", to_json(node))
}
