//! Error types raised by the knowledge base.

use thiserror::Error;

/// Errors surfaced by knowledge base operations.
///
/// Unknown relations never show up here: on the read and retract paths an
/// unknown name behaves like an empty relation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateBookError {
    #[error("relation `{relation}` has arity {expected}, got {found} arguments")]
    ArityMismatch {
        relation: String,
        expected: usize,
        found: usize,
    },

    #[error("relation `{relation}` needs at least one argument")]
    EmptyArguments { relation: String },

    #[error("malformed fact `{input}`: expected `name:args`")]
    Parse { input: String },

    #[error("argument tuples are immutable (write at index {index})")]
    ImmutableViolation { index: usize },

    #[error("template for relation `{relation}` has {found} slots, relation arity is {expected}")]
    TemplateArityMismatch {
        relation: String,
        expected: usize,
        found: usize,
    },

    #[error("index {index} out of range for tuple of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, StateBookError>;
