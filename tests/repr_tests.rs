// tests/repr_tests.rs

use stringfuzz_ast::ast::*;
use stringfuzz_ast::repr::quote;

fn id(name: &str) -> Node {
    Identifier::new(name).into()
}

fn repr(node: impl Into<Node>) -> String {
    node.into().to_string()
}

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn test_leaf_reprs() {
    assert_eq!(repr(BoolLiteral::new(true)), "BoolLit<true>");
    assert_eq!(repr(BoolLiteral::new(false)), "BoolLit<false>");
    assert_eq!(repr(IntLiteral::new(42)), "IntLit<42>");
    assert_eq!(repr(IntLiteral::new(-7)), "IntLit<-7>");
    assert_eq!(repr(Sort::new("String")), "Sort<String>");
    assert_eq!(repr(Setting::new("smtlib2_compliant")), "Setting<smtlib2_compliant>");
    assert_eq!(repr(Identifier::new("x")), "Id<x>");
}

#[test]
fn test_args_repr_is_constant() {
    assert_eq!(repr(Args::new()), "Args<()>");
    assert_eq!(repr(Args::new()), repr(Args::default()));
}

#[test]
fn test_payload_and_node_repr_agree() {
    let lit = StringLiteral::new("abc");
    assert_eq!(lit.to_string(), Node::from(lit.clone()).to_string());
}

// ============================================================================
// String literal quoting
// ============================================================================

#[test]
fn test_string_repr() {
    assert_eq!(repr(StringLiteral::new("abc")), "StringLit<'abc'>");
    assert_eq!(repr(StringLiteral::new("")), "StringLit<''>");
}

#[test]
fn test_quote_selection() {
    assert_eq!(quote("it's"), "\"it's\"");
    assert_eq!(quote("say \"hi\""), "'say \"hi\"'");
    // Both quote kinds present: single quotes, with the inner one escaped
    assert_eq!(quote("'\""), "'\\'\"'");
}

#[test]
fn test_quote_escapes() {
    assert_eq!(quote("a\\b"), "'a\\\\b'");
    assert_eq!(quote("a\tb\r\n"), "'a\\tb\\r\\n'");
    assert_eq!(quote("\u{0}"), "'\\x00'");
    assert_eq!(quote("\u{7f}"), "'\\x7f'");
    assert_eq!(quote("héllo"), "'héllo'");
}

#[test]
fn test_quote_escapes_invisible_characters() {
    // Format, separators, private use, unassigned
    assert_eq!(quote("\u{200b}"), "'\\u200b'");
    assert_eq!(quote("\u{a0}"), "'\\xa0'");
    assert_eq!(quote("\u{2028}"), "'\\u2028'");
    assert_eq!(quote("\u{2029}"), "'\\u2029'");
    assert_eq!(quote("\u{feff}"), "'\\ufeff'");
    assert_eq!(quote("\u{e000}"), "'\\ue000'");
    assert_eq!(quote("\u{10ffff}"), "'\\U0010ffff'");
    assert_eq!(quote("\u{e0001}"), "'\\U000e0001'");
}

#[test]
fn test_quote_keeps_printable_characters() {
    assert_eq!(quote("a b"), "'a b'");
    assert_eq!(quote("日本"), "'日本'");
    assert_eq!(quote("\u{1f600}"), "'\u{1f600}'");
}

#[test]
fn test_string_repr_escapes_zero_width_space() {
    assert_eq!(
        repr(StringLiteral::new("a\u{200b}b")),
        "StringLit<'a\\u200bb'>"
    );
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_concat_repr() {
    assert_eq!(repr(Concat::new(id("a"), id("b"))), "Concat<Id<a> Id<b>>");
}

#[test]
fn test_length_repr() {
    assert_eq!(
        repr(Length::new(StringLiteral::new("abc"))),
        "Length<StringLit<'abc'>>"
    );
}

#[test]
fn test_at_repr() {
    assert_eq!(
        repr(At::new(id("s"), IntLiteral::new(0))),
        "At<Id<s> IntLit<0>>"
    );
}

#[test]
fn test_expression_repr() {
    let expr = Expression::new(
        "foo",
        vec![IntLiteral::new(1).into(), BoolLiteral::new(true).into()],
    )
    .unwrap();
    assert_eq!(repr(expr), "Expr<foo IntLit<1> BoolLit<true>>");
}

#[test]
fn test_generic_concat_stays_generic() {
    let expr: Node = Expression::new("Concat", vec![id("a"), id("b")])
        .unwrap()
        .into();

    assert_eq!(expr.kind(), "Expr");
    assert_eq!(expr.to_string(), "Expr<Concat Id<a> Id<b>>");
    assert_eq!(
        repr(Concat::new(id("a"), id("b"))),
        "Concat<Id<a> Id<b>>"
    );
}

#[test]
fn test_expression_repr_without_body() {
    let expr = Expression::new("check-sat", vec![]).unwrap();
    assert_eq!(repr(expr), "Expr<check-sat>");
}

#[test]
fn test_nested_repr() {
    // (assert (= (str.len (str.++ x "ab")) 5))
    let len = Length::new(Concat::new(id("x"), StringLiteral::new("ab")));
    let eq = Expression::new("=", vec![len.into(), IntLiteral::new(5).into()]).unwrap();
    let assertion = Expression::new("assert", vec![eq.into()]).unwrap();

    assert_eq!(
        repr(assertion),
        "Expr<assert Expr<= Length<Concat<Id<x> StringLit<'ab'>>> IntLit<5>>>"
    );
}

#[test]
fn test_declaration_repr() {
    // (declare-fun x () String)
    let decl = Expression::new(
        "declare-fun",
        vec![id("x"), Args::new().into(), Sort::new("String").into()],
    )
    .unwrap();

    assert_eq!(repr(decl), "Expr<declare-fun Id<x> Args<()> Sort<String>>");
}

#[test]
fn test_repr_is_deterministic() {
    let build = || Concat::new(At::new(id("s"), IntLiteral::new(2)), StringLiteral::new("z"));
    assert_eq!(repr(build()), repr(build()));
}
