/// Boolean literal
///
/// # Example
/// ```text
/// true
/// ```
#[derive(Debug, Clone)]
pub struct BoolLiteral {
    value: bool,
}

impl BoolLiteral {
    pub fn new(value: bool) -> Self {
        BoolLiteral { value }
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

/// Literal integer
///
/// # Example
/// ```text
/// 42
/// ```
#[derive(Debug, Clone)]
pub struct IntLiteral {
    value: i64,
}

impl IntLiteral {
    pub fn new(value: i64) -> Self {
        IntLiteral { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

/// String literal
///
/// The only node kind with a length.
///
/// # Example
/// ```
/// use stringfuzz_ast::ast::StringLiteral;
///
/// let lit = StringLiteral::new("abc");
/// assert_eq!(lit.length(), 3);
/// assert_eq!(lit.to_string(), "StringLit<'abc'>");
/// ```
#[derive(Debug, Clone)]
pub struct StringLiteral {
    value: String,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        StringLiteral {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of characters (Unicode scalar values) in the value.
    pub fn length(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
