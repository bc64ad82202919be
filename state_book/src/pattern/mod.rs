//! Pattern matching - projecting variable bindings out of a relation.
//!
//! A template is a list of slots, one per relation position:
//! 1. **Literal**: the tuple's argument must equal the token exactly
//! 2. **Variable**: a token starting with the sigil (`$x`); the tuple's
//!    argument is captured
//!
//! Every tuple whose literal positions all match yields its captured
//! arguments, in template order. This is a single-relation filter and
//! projection, not unification across relations.

mod matches;

pub use matches::*;

use bot_rules::{RepeatedVariables, Syntax};
use std::collections::HashMap;

use crate::error::{Result, StateBookError};
use crate::knowledge_base::{ArgTuple, Relation};

/// One position of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Must equal the argument at this position.
    Literal(String),
    /// Captures the argument at this position. Holds the full token, sigil included.
    Variable(String),
}

/// A parsed template such as `$x $y cane`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    slots: Vec<Slot>,
    repeated_variables: RepeatedVariables,
    separator: char,
}

impl Template {
    /// Parse a template, splitting tokens the same way fact arguments are split.
    pub fn parse(text: &str, syntax: &Syntax) -> Self {
        let slots = syntax
            .split_args(text)
            .into_iter()
            .map(|token| {
                if syntax.is_variable(&token) {
                    Slot::Variable(token)
                } else {
                    Slot::Literal(token)
                }
            })
            .collect();

        Self {
            slots,
            repeated_variables: syntax.repeated_variables,
            separator: syntax.arg_separator,
        }
    }

    /// Number of slots; must equal the arity of the matched relation.
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// Number of variable slots, which is the length of every binding.
    pub fn variable_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Variable(_)))
            .count()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Match a single tuple, returning the captured arguments.
    ///
    /// Returns `None` on the first literal mismatch, or when the tuple's
    /// length differs from the template's.
    pub fn bind(&self, tuple: &ArgTuple) -> Option<Vec<String>> {
        if tuple.len() != self.slots.len() {
            return None;
        }

        let mut binding = Vec::with_capacity(self.variable_count());
        let mut bound: HashMap<&str, &str> = HashMap::new();

        for (slot, arg) in self.slots.iter().zip(tuple.iter()) {
            match slot {
                Slot::Literal(literal) => {
                    if literal != arg {
                        return None;
                    }
                }
                Slot::Variable(name) => {
                    if self.repeated_variables == RepeatedVariables::Unify {
                        let previous = *bound.entry(name.as_str()).or_insert(arg);
                        if previous != arg {
                            return None;
                        }
                    }
                    binding.push(arg.to_owned());
                }
            }
        }

        Some(binding)
    }

    /// Enumerate the bindings of every tuple in `relation`.
    ///
    /// Works over a snapshot of the relation taken now. `relation_name`
    /// only labels the error when the template and relation arity differ.
    pub fn matches(self, relation_name: &str, relation: &Relation) -> Result<Matches> {
        if self.arity() != relation.arity() {
            return Err(StateBookError::TemplateArityMismatch {
                relation: relation_name.to_owned(),
                expected: relation.arity(),
                found: self.arity(),
            });
        }
        Ok(Matches::new(self, relation.iter_tuples()))
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.separator)?;
            }
            match slot {
                Slot::Literal(token) | Slot::Variable(token) => write!(f, "{}", token)?,
            }
        }
        Ok(())
    }
}
