//! Argument tuples - the identity of one fact inside a relation.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::{Result, StateBookError};

/// An immutable, ordered sequence of string arguments.
///
/// Equality and hashing are structural and order-sensitive, so tuples can
/// be used directly as set keys. There is no mutable access to the tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgTuple {
    args: Vec<String>,
}

impl ArgTuple {
    /// Separator used by [`ArgTuple::from_text`].
    pub const DEFAULT_SEPARATOR: char = ' ';

    /// Build a tuple from an ordered list of tokens.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a tuple by splitting `text` on `separator`.
    ///
    /// Every separator splits, so `""` yields a single empty argument.
    pub fn parse(text: &str, separator: char) -> Self {
        Self::new(text.split(separator))
    }

    /// Build a tuple by splitting `text` on spaces.
    pub fn from_text(text: &str) -> Self {
        Self::parse(text, Self::DEFAULT_SEPARATOR)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Read the argument at `index`.
    pub fn get(&self, index: usize) -> Result<&str> {
        self.args
            .get(index)
            .map(String::as_str)
            .ok_or(StateBookError::IndexOutOfRange {
                index,
                len: self.args.len(),
            })
    }

    /// Writes are never allowed; this always fails with
    /// [`StateBookError::ImmutableViolation`].
    pub fn try_set(&self, index: usize, _value: impl Into<String>) -> Result<()> {
        Err(StateBookError::ImmutableViolation { index })
    }

    /// Iterate over the arguments in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(String::as_str)
    }

    /// Copy the arguments out. The returned vector is detached from the tuple.
    pub fn to_ordered_strings(&self) -> Vec<String> {
        self.args.clone()
    }

    pub(crate) fn into_ordered_strings(self) -> Vec<String> {
        self.args
    }
}

impl Index<usize> for ArgTuple {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.args[index]
    }
}

impl From<Vec<String>> for ArgTuple {
    fn from(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl From<&[&str]> for ArgTuple {
    fn from(args: &[&str]) -> Self {
        Self::new(args.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for ArgTuple {
    fn from(args: [&str; N]) -> Self {
        Self::new(args)
    }
}

impl From<&ArgTuple> for ArgTuple {
    fn from(args: &ArgTuple) -> Self {
        args.clone()
    }
}

impl std::fmt::Display for ArgTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tuple_from_text() {
        let tuple = ArgTuple::from_text("1 2 cane");
        assert_eq!(tuple.len(), 3);
        assert_eq!(tuple.get(0).unwrap(), "1");
        assert_eq!(&tuple[2], "cane");
    }

    #[test]
    fn test_tuple_custom_separator() {
        let tuple = ArgTuple::parse("1,2,cane", ',');
        assert_eq!(tuple, ArgTuple::from(["1", "2", "cane"]));
    }

    #[test]
    fn test_empty_text_is_one_empty_argument() {
        let tuple = ArgTuple::from_text("");
        assert_eq!(tuple.len(), 1);
        assert_eq!(tuple.get(0).unwrap(), "");
    }

    #[test]
    fn test_out_of_range_read() {
        let tuple = ArgTuple::from(["gun"]);
        assert_eq!(
            tuple.get(1),
            Err(StateBookError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_write_is_rejected() {
        let tuple = ArgTuple::from(["gun"]);
        assert_eq!(
            tuple.try_set(0, "knife"),
            Err(StateBookError::ImmutableViolation { index: 0 })
        );
        assert_eq!(&tuple[0], "gun");
    }

    #[test]
    fn test_ordered_strings_are_a_copy() {
        let tuple = ArgTuple::from(["1", "2"]);
        let mut copy = tuple.to_ordered_strings();
        copy[0] = "9".to_owned();

        assert_eq!(&tuple[0], "1");
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        assert_eq!(ArgTuple::from(["a", "b"]), ArgTuple::from_text("a b"));
        assert_ne!(ArgTuple::from(["a", "b"]), ArgTuple::from(["b", "a"]));
        assert_ne!(ArgTuple::from(["a"]), ArgTuple::from(["a", "a"]));
    }

    #[test]
    fn test_tuple_hash() {
        let mut set = HashSet::new();
        set.insert(ArgTuple::from_text("1 2 cane"));
        set.insert(ArgTuple::from(["1", "2", "cane"])); // Duplicate

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_tuple_display() {
        assert_eq!(ArgTuple::from(["1", "2", "cane"]).to_string(), "1 2 cane");
    }

    #[test]
    fn test_tuple_serializes_as_sequence() {
        let tuple = ArgTuple::from(["1", "2"]);
        assert_eq!(serde_json::to_string(&tuple).unwrap(), r#"["1","2"]"#);
    }
}
