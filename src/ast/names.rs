//! Named leaves: sorts, settings, identifiers, and the empty argument marker.

/// A value sort, e.g. `String` or `Int`.
#[derive(Debug, Clone)]
pub struct Sort {
    name: String,
}

impl Sort {
    pub fn new(name: impl Into<String>) -> Self {
        Sort { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A named solver or parser setting
///
/// # Example
/// ```text
/// :produce-models
/// ```
#[derive(Debug, Clone)]
pub struct Setting {
    name: String,
}

impl Setting {
    pub fn new(name: impl Into<String>) -> Self {
        Setting { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A bound or free name reference.
#[derive(Debug, Clone)]
pub struct Identifier {
    name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Empty argument list marker, e.g. the `()` in `(declare-fun x () String)`.
#[derive(Debug, Clone, Default)]
pub struct Args;

impl Args {
    pub fn new() -> Self {
        Args
    }
}
