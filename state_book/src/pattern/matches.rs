//! Lazy enumeration of template matches.

use super::Template;
use crate::knowledge_base::ArgTuple;

/// Iterator over the bindings produced by a [`Template`].
///
/// Owns a snapshot of the relation's tuples; each tuple is tested only when
/// the iterator is advanced. Later changes to the relation are not seen.
#[derive(Debug)]
pub struct Matches {
    template: Template,
    tuples: std::vec::IntoIter<ArgTuple>,
}

impl Matches {
    pub(crate) fn new(template: Template, tuples: std::vec::IntoIter<ArgTuple>) -> Self {
        Self { template, tuples }
    }

    /// Matches over an unknown relation: there are none.
    pub(crate) fn empty(template: Template) -> Self {
        Self::new(template, Vec::new().into_iter())
    }

    pub fn template(&self) -> &Template {
        &self.template
    }
}

impl Iterator for Matches {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let template = &self.template;
        self.tuples.by_ref().find_map(|tuple| template.bind(&tuple))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.tuples.size_hint().1)
    }
}

impl std::iter::FusedIterator for Matches {}
