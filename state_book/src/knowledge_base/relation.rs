//! Relations - named sets of fixed-arity fact tuples.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ArgTuple;
use crate::error::{Result, StateBookError};

/// Label used in errors for relations rebuilt from serialized data.
const UNNAMED: &str = "<deserialized>";

/// A set of argument tuples that all share one arity.
///
/// The relation does not know its own name; the owning knowledge base keys
/// it. Errors that need a name are labelled by the caller.
///
/// Serializes as a [`RelationSnapshot`]. Deserializing goes through
/// [`Relation::insert`], so malformed input is rejected instead of producing
/// members of the wrong length.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "RelationSnapshot", try_from = "RelationSnapshot")]
pub struct Relation {
    arity: usize,
    tuples: HashSet<ArgTuple>,
}

impl Relation {
    /// Create an empty relation with a fixed arity.
    pub fn new(arity: usize) -> Self {
        Self {
            arity,
            tuples: HashSet::new(),
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of tuples currently held.
    pub fn size(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn contains(&self, tuple: &ArgTuple) -> bool {
        self.tuples.contains(tuple)
    }

    /// Check that `tuple` could be inserted.
    ///
    /// Facts always carry at least one argument, and every member has the
    /// relation's arity.
    pub fn check_arity(&self, relation: &str, tuple: &ArgTuple) -> Result<()> {
        if tuple.is_empty() {
            return Err(StateBookError::EmptyArguments {
                relation: relation.to_owned(),
            });
        }
        if tuple.len() != self.arity {
            return Err(StateBookError::ArityMismatch {
                relation: relation.to_owned(),
                expected: self.arity,
                found: tuple.len(),
            });
        }
        Ok(())
    }

    /// Insert a tuple, returns true if newly inserted.
    ///
    /// The arity is checked before anything is touched; on failure the
    /// relation is unchanged. `relation` only labels the error.
    pub fn insert(&mut self, relation: &str, tuple: ArgTuple) -> Result<bool> {
        self.check_arity(relation, &tuple)?;
        Ok(self.tuples.insert(tuple))
    }

    /// Remove a tuple, returns true if it was present.
    pub fn remove(&mut self, tuple: &ArgTuple) -> bool {
        self.tuples.remove(tuple)
    }

    /// Borrowing iteration over the live set.
    pub fn iter(&self) -> impl Iterator<Item = &ArgTuple> {
        self.tuples.iter()
    }

    /// Snapshot of all member tuples, in no particular order.
    ///
    /// The returned iterator owns its copy, so the relation may be changed
    /// while it is being consumed.
    pub fn iter_tuples(&self) -> std::vec::IntoIter<ArgTuple> {
        self.tuples.iter().cloned().collect::<Vec<_>>().into_iter()
    }
}

/// Serialized form of a [`Relation`]; tuples are sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSnapshot {
    pub arity: usize,
    pub tuples: Vec<ArgTuple>,
}

impl From<&Relation> for RelationSnapshot {
    fn from(relation: &Relation) -> Self {
        let mut tuples: Vec<_> = relation.iter().cloned().collect();
        tuples.sort();
        Self {
            arity: relation.arity(),
            tuples,
        }
    }
}

impl From<Relation> for RelationSnapshot {
    fn from(relation: Relation) -> Self {
        Self::from(&relation)
    }
}

impl TryFrom<RelationSnapshot> for Relation {
    type Error = StateBookError;

    fn try_from(snapshot: RelationSnapshot) -> Result<Self> {
        if snapshot.arity == 0 {
            return Err(StateBookError::EmptyArguments {
                relation: UNNAMED.to_owned(),
            });
        }
        let mut relation = Relation::new(snapshot.arity);
        for tuple in snapshot.tuples {
            relation.insert(UNNAMED, tuple)?;
        }
        Ok(relation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut relation = Relation::new(3);

        assert!(relation.insert("at", ArgTuple::from_text("1 2 cane")).unwrap());
        assert_eq!(relation.size(), 1);

        assert!(relation.contains(&ArgTuple::from_text("1 2 cane")));
        assert!(!relation.contains(&ArgTuple::from_text("2 1 cane")));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut relation = Relation::new(1);

        assert!(relation.insert("holding", ArgTuple::from(["gun"])).unwrap());
        assert!(!relation.insert("holding", ArgTuple::from(["gun"])).unwrap());
        assert_eq!(relation.size(), 1);
    }

    #[test]
    fn test_insert_wrong_arity_leaves_relation_unchanged() {
        let mut relation = Relation::new(3);
        relation.insert("at", ArgTuple::from_text("1 2 cane")).unwrap();

        let result = relation.insert("at", ArgTuple::from_text("1 2"));
        assert_eq!(
            result,
            Err(StateBookError::ArityMismatch {
                relation: "at".to_owned(),
                expected: 3,
                found: 2,
            })
        );
        assert_eq!(relation.size(), 1);
        assert_eq!(relation.arity(), 3);
    }

    #[test]
    fn test_insert_empty_tuple_is_rejected() {
        let mut relation = Relation::new(0);

        assert_eq!(
            relation.insert("alive", ArgTuple::new(Vec::<String>::new())),
            Err(StateBookError::EmptyArguments {
                relation: "alive".to_owned()
            })
        );
        assert!(relation.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut relation = Relation::new(2);
        relation.insert("near", ArgTuple::from(["bot1", "door"])).unwrap();

        assert!(relation.remove(&ArgTuple::from(["bot1", "door"])));
        assert!(relation.is_empty());

        // Removing an absent tuple is a no-op
        assert!(!relation.remove(&ArgTuple::from(["bot1", "door"])));
        assert_eq!(relation.arity(), 2);
    }

    #[test]
    fn test_iter_tuples_is_a_snapshot() {
        let mut relation = Relation::new(1);
        relation.insert("seen", ArgTuple::from(["a"])).unwrap();
        relation.insert("seen", ArgTuple::from(["b"])).unwrap();

        let snapshot = relation.iter_tuples();
        relation.remove(&ArgTuple::from(["a"]));
        relation.insert("seen", ArgTuple::from(["c"])).unwrap();

        let mut seen: Vec<_> = snapshot.map(|t| t.to_string()).collect();
        seen.sort();
        assert_eq!(seen, vec!["a", "b"]);
        assert_eq!(relation.iter().count(), 2);
    }

    #[test]
    fn test_serialized_relation_round_trip() {
        let mut relation = Relation::new(2);
        relation.insert("near", ArgTuple::from(["bot2", "door"])).unwrap();
        relation.insert("near", ArgTuple::from(["bot1", "door"])).unwrap();

        let json = serde_json::to_string(&relation).unwrap();
        assert_eq!(
            json,
            r#"{"arity":2,"tuples":[["bot1","door"],["bot2","door"]]}"#
        );

        let restored: Relation = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.arity(), 2);
        assert!(restored.contains(&ArgTuple::from(["bot1", "door"])));
        assert_eq!(restored.size(), 2);
    }

    #[test]
    fn test_deserialize_rejects_wrong_length_members() {
        let result =
            serde_json::from_str::<Relation>(r#"{"arity":1,"tuples":[["a","b"],["c"]]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_zero_arity() {
        let result = serde_json::from_str::<Relation>(r#"{"arity":0,"tuples":[]}"#);
        assert!(result.is_err());
    }
}
