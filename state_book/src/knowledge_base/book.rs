//! StateBook - the per-agent knowledge base.

use bot_rules::{AgentId, Syntax};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::{ArgTuple, Relation, RelationSnapshot};
use crate::error::{Result, StateBookError};
use crate::pattern::{Matches, Template};

/// The main knowledge base structure.
///
/// Maps relation names to relations. A relation is created by the first
/// assertion under its name, which also fixes its arity. Relations are
/// never dropped, so a relation whose facts were all retracted keeps its
/// arity and is still listed by [`KnowledgeBase::relation_names`].
///
/// Closed-world: any fact not stored is false. Reading or retracting under
/// an unknown name is never an error.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    owner: AgentId,
    syntax: Syntax,
    relations: HashMap<String, Relation>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    /// Create an empty knowledge base for a fresh agent.
    pub fn new() -> Self {
        Self::for_agent(AgentId::new())
    }

    /// Create an empty knowledge base owned by `owner`.
    pub fn for_agent(owner: AgentId) -> Self {
        Self::with_syntax(owner, Syntax::default())
    }

    /// Create an empty knowledge base with a custom fact syntax.
    pub fn with_syntax(owner: AgentId, syntax: Syntax) -> Self {
        Self {
            owner,
            syntax,
            relations: HashMap::new(),
        }
    }

    pub fn owner(&self) -> AgentId {
        self.owner
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Check whether a fact holds.
    pub fn query(&self, name: &str, args: impl Into<ArgTuple>) -> bool {
        let args = args.into();
        let holds = self
            .relations
            .get(name)
            .is_some_and(|relation| relation.contains(&args));
        tracing::trace!(owner = %self.owner, relation = name, %args, holds, "query");
        holds
    }

    /// Check whether a fact holds, with arguments given as one string.
    pub fn query_text(&self, name: &str, args: &str) -> bool {
        self.query(name, self.parse_args(args))
    }

    /// Set a fact to true.
    ///
    /// Returns true if the fact was not already present. Fails with
    /// [`StateBookError::ArityMismatch`] if `name` already has a different
    /// arity, and with [`StateBookError::EmptyArguments`] for a fact without
    /// arguments; the store is left untouched in both cases.
    pub fn assert_fact(&mut self, name: &str, args: impl Into<ArgTuple>) -> Result<bool> {
        let args = args.into();
        let owner = self.owner;

        match self.relations.get_mut(name) {
            Some(relation) => {
                if let Err(err) = relation.check_arity(name, &args) {
                    tracing::warn!(%owner, relation = name, %args, "rejected: {err}");
                    return Err(err);
                }
                if relation.contains(&args) {
                    return Ok(false);
                }
                tracing::debug!(%owner, relation = name, %args, "fact asserted");
                relation.insert(name, args)
            }
            None => {
                let mut relation = Relation::new(args.len());
                relation.check_arity(name, &args).inspect_err(|err| {
                    tracing::warn!(%owner, relation = name, "rejected: {err}");
                })?;
                tracing::debug!(%owner, relation = name, %args, "new relation, fact asserted");
                relation.insert(name, args)?;
                self.relations.insert(name.to_owned(), relation);
                Ok(true)
            }
        }
    }

    /// Set a fact to false.
    ///
    /// Returns true if the fact was present. Retracting under an unknown
    /// name, or a fact that is already false, is a no-op.
    pub fn retract_fact(&mut self, name: &str, args: impl Into<ArgTuple>) -> bool {
        let args = args.into();
        let removed = self
            .relations
            .get_mut(name)
            .is_some_and(|relation| relation.remove(&args));

        if removed {
            tracing::debug!(owner = %self.owner, relation = name, %args, "fact retracted");
        }
        removed
    }

    /// Evaluate a `name:args` string.
    pub fn get(&self, fact: &str) -> Result<bool> {
        let (name, args) = self.split_fact(fact)?;
        Ok(self.query(name, self.parse_args(args)))
    }

    /// Assert (`true`) or retract (`false`) a `name:args` string.
    pub fn set(&mut self, fact: &str, value: bool) -> Result<()> {
        let (name, args) = self.split_fact(fact)?;
        let args = self.parse_args(args);
        if value {
            self.assert_fact(name, args)?;
        } else {
            self.retract_fact(name, args);
        }
        Ok(())
    }

    /// Get a relation by name.
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    /// Arity of a relation, if it has ever been asserted.
    pub fn arity_of(&self, name: &str) -> Option<usize> {
        self.relations.get(name).map(Relation::arity)
    }

    /// Snapshot of all relation names, including emptied relations.
    pub fn relation_names(&self) -> std::vec::IntoIter<String> {
        self.relations.keys().cloned().collect::<Vec<_>>().into_iter()
    }

    /// Snapshot of every tuple in a relation. Empty for unknown names.
    pub fn tuples_of(&self, name: &str) -> impl Iterator<Item = Vec<String>> {
        self.relations
            .get(name)
            .map(Relation::iter_tuples)
            .unwrap_or_default()
            .map(ArgTuple::into_ordered_strings)
    }

    /// Bindings of every tuple in `name` that fits `template`.
    ///
    /// Unknown names yield no matches. A template whose slot count differs
    /// from the relation's arity fails with
    /// [`StateBookError::TemplateArityMismatch`].
    pub fn matches_of(&self, name: &str, template: &str) -> Result<Matches> {
        let template = Template::parse(template, &self.syntax);
        match self.relations.get(name) {
            Some(relation) => {
                tracing::trace!(owner = %self.owner, relation = name, %template, "match");
                template.matches(name, relation)
            }
            None => Ok(Matches::empty(template)),
        }
    }

    /// Total number of facts across all relations.
    pub fn len(&self) -> usize {
        self.relations.values().map(Relation::size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializable, deterministically ordered copy of the whole store.
    pub fn snapshot(&self) -> BookSnapshot {
        let relations = self
            .relations
            .iter()
            .map(|(name, relation)| (name.clone(), RelationSnapshot::from(relation)))
            .collect();

        BookSnapshot {
            owner: self.owner,
            relations,
        }
    }

    fn split_fact<'a>(&self, fact: &'a str) -> Result<(&'a str, &'a str)> {
        self.syntax
            .split_fact(fact)
            .ok_or_else(|| StateBookError::Parse {
                input: fact.to_owned(),
            })
    }

    fn parse_args(&self, args: &str) -> ArgTuple {
        ArgTuple::from(self.syntax.split_args(args))
    }
}

/// Point-in-time copy of a knowledge base, for inspection and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub owner: AgentId,
    pub relations: BTreeMap<String, RelationSnapshot>,
}
