//! # StateBook
//!
//! The working memory of a bot: boolean predicate facts such as
//! `at:1 2 cane` or `holding:gun`, kept under the closed-world assumption.
//! Anything not asserted is false.
//!
//! ## Core Components
//!
//! - **knowledge_base**: argument tuples, fixed-arity relations and the
//!   per-agent store that owns them
//! - **pattern**: templates with variable slots that project bindings out
//!   of a single relation
//! - **error**: the failure taxonomy shared by both
//!
//! ```
//! use state_book::KnowledgeBase;
//!
//! let mut book = KnowledgeBase::new();
//! book.set("at:1 2 cane", true).unwrap();
//! book.set("at:3 5 cane", true).unwrap();
//!
//! assert!(book.get("at:1 2 cane").unwrap());
//! assert!(!book.get("holding:gun").unwrap());
//!
//! let mut spots: Vec<_> = book.matches_of("at", "$x $y cane").unwrap().collect();
//! spots.sort();
//! assert_eq!(spots, vec![vec!["1", "2"], vec!["3", "5"]]);
//! ```

pub mod error;
pub mod knowledge_base;
pub mod pattern;

pub use error::*;
pub use knowledge_base::*;
pub use pattern::*;
