//! Canonical debug representation of AST nodes.
//!
//! Every node renders through [`fmt::Display`] into a deterministic form used
//! for logging, diffing and test assertions:
//!
//! | Node | Form |
//! |---|---|
//! | bool literal | `BoolLit<true>` |
//! | integer literal | `IntLit<42>` |
//! | string literal | `StringLit<'abc'>` |
//! | sort | `Sort<String>` |
//! | setting | `Setting<name>` |
//! | identifier | `Id<x>` |
//! | empty arguments | `Args<()>` |
//! | generic expression | `Expr<symbol child1 child2>` |
//! | concat / at / length | `Concat<child1 child2>` |
//!
//! Children are separated by single spaces with no trailing separator. The
//! form is presentational only and is never parsed back.

use std::fmt::{self, Display, Write};

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::ast::{
    Args, At, BoolLiteral, Concat, Expression, Identifier, IntLiteral, Length, Node, Setting,
    Sort, StringLiteral,
};

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::BoolLiteral(n) => Display::fmt(n, f),
            Node::IntLiteral(n) => Display::fmt(n, f),
            Node::StringLiteral(n) => Display::fmt(n, f),
            Node::Sort(n) => Display::fmt(n, f),
            Node::Setting(n) => Display::fmt(n, f),
            Node::Identifier(n) => Display::fmt(n, f),
            Node::Args(n) => Display::fmt(n, f),
            Node::Expression(n) => Display::fmt(n, f),
            Node::Concat(n) => Display::fmt(n, f),
            Node::At(n) => Display::fmt(n, f),
            Node::Length(n) => Display::fmt(n, f),
        }
    }
}

impl Display for BoolLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoolLit<{}>", self.value())
    }
}

impl Display for IntLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntLit<{}>", self.value())
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringLit<{}>", Quoted(self.value()))
    }
}

impl Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sort<{}>", self.name())
    }
}

impl Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Setting<{}>", self.name())
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id<{}>", self.name())
    }
}

impl Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Args<()>")
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr<{}", self.symbol())?;
        for child in self.body() {
            write!(f, " {}", child)?;
        }
        f.write_char('>')
    }
}

impl Display for Concat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_specific(f, Concat::SYMBOL, self.operands())
    }
}

impl Display for At {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_specific(f, At::SYMBOL, self.operands())
    }
}

impl Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_specific(f, Length::SYMBOL, self.operands())
    }
}

fn write_specific(f: &mut fmt::Formatter<'_>, kind: &str, children: &[Node]) -> fmt::Result {
    write!(f, "{}<", kind)?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{}", child)?;
    }
    f.write_char('>')
}

/// Printable characters are written as-is inside a quoted literal. The plain
/// space is the only printable separator.
fn is_printable(c: char) -> bool {
    use GeneralCategory::*;

    c == ' '
        || !matches!(
            get_general_category(c),
            Control
                | Format
                | Surrogate
                | PrivateUse
                | Unassigned
                | SpaceSeparator
                | LineSeparator
                | ParagraphSeparator
        )
}

/// Text rendered as a quoted literal.
struct Quoted<'a>(&'a str);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, self.0)
    }
}

/// Writes `s` as a quoted text literal.
///
/// Single quotes are preferred; double quotes are used when the text contains
/// a single quote and no double quote.
fn write_quoted(out: &mut impl Write, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c == quote => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c if !is_printable(c) => {
                let code = c as u32;
                if code <= 0xff {
                    write!(out, "\\x{:02x}", code)?;
                } else if code <= 0xffff {
                    write!(out, "\\u{:04x}", code)?;
                } else {
                    write!(out, "\\U{:08x}", code)?;
                }
            }
            c => out.write_char(c)?,
        }
    }
    out.write_char(quote)
}

/// Quotes `s` the way string literals appear in the debug representation.
///
/// # Examples
/// ```
/// use stringfuzz_ast::repr::quote;
///
/// assert_eq!(quote("abc"), "'abc'");
/// assert_eq!(quote("it's"), "\"it's\"");
/// assert_eq!(quote("a\nb"), "'a\\nb'");
/// assert_eq!(quote("a\u{200b}b"), "'a\\u200bb'");
/// ```
pub fn quote(s: &str) -> String {
    Quoted(s).to_string()
}
