// tests/output_tests.rs
#![cfg(feature = "json")]

use serde_json::json;
use stringfuzz_ast::ast::*;
use stringfuzz_ast::output::{to_json, to_json_pretty, to_json_string};

fn id(name: &str) -> Node {
    Identifier::new(name).into()
}

#[test]
fn test_leaf_json() {
    assert_eq!(
        to_json(&BoolLiteral::new(true).into()),
        json!({"kind": "BoolLit", "value": true})
    );
    assert_eq!(
        to_json(&StringLiteral::new("a'b").into()),
        json!({"kind": "StringLit", "value": "a'b"})
    );
    assert_eq!(
        to_json(&Sort::new("Int").into()),
        json!({"kind": "Sort", "name": "Int"})
    );
    assert_eq!(to_json(&Args::new().into()), json!({"kind": "Args"}));
}

#[test]
fn test_expression_json() {
    let tree: Node = Expression::new("=", vec![Length::new(id("x")).into(), IntLiteral::new(3).into()])
        .unwrap()
        .into();

    assert_eq!(
        to_json(&tree),
        json!({
            "kind": "Expr",
            "symbol": "=",
            "children": [
                {
                    "kind": "Length",
                    "symbol": "Length",
                    "children": [{"kind": "Id", "name": "x"}]
                },
                {"kind": "IntLit", "value": 3}
            ]
        })
    );
}

#[test]
fn test_json_string_is_compact() {
    let tree: Node = Concat::new(id("a"), id("b")).into();
    assert_eq!(
        to_json_string(&tree),
        r#"{"children":[{"kind":"Id","name":"a"},{"kind":"Id","name":"b"}],"kind":"Concat","symbol":"Concat"}"#
    );
}

#[test]
fn test_json_pretty() {
    let tree: Node = IntLiteral::new(1).into();
    assert_eq!(
        to_json_pretty(&tree),
        "{\n  \"kind\": \"IntLit\",\n  \"value\": 1\n}"
    );
}
