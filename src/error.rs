use std::fmt;

use thiserror::Error;

/// Which kind of JSON object an input error was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Document,
    Trip,
    Flight,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Document => "document",
            ObjectKind::Trip => "trip",
            ObjectKind::Flight => "flight",
        };
        write!(f, "{}", name)
    }
}

/// Errors raised while loading a trip log document.
///
/// Every variant is fatal: the load runs in one transaction, so any of
/// these leaves the store with no rows at all.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An object carries a key outside its allow-list.
    #[error("unexpected key in {kind}: {key}")]
    Schema { kind: ObjectKind, key: String },

    /// A required field is absent.
    #[error("missing required field in {kind}: {field}")]
    MissingField {
        kind: ObjectKind,
        field: &'static str,
    },

    /// An object or field has the wrong JSON shape (wrong type,
    /// unparseable timestamp).
    #[error("malformed {kind} object: {detail}")]
    Malformed { kind: ObjectKind, detail: String },

    /// The underlying store rejected a statement.
    #[error("database error: {0}")]
    Storage(#[from] diesel::result::Error),
}
