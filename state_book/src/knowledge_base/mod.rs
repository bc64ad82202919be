//! Knowledge Base module - closed-world storage of predicate facts.
//!
//! The store consists of:
//! - **ArgTuple**: an immutable, ordered list of string arguments
//! - **Relation**: a named set of tuples sharing one arity
//! - **KnowledgeBase**: relation name -> Relation, owned by one agent

mod args;
mod book;
mod relation;

pub use args::*;
pub use book::*;
pub use relation::*;
