//! In-memory triple collection with wildcard pattern lookup.

use std::collections::BTreeSet;

use crate::model::{Term, Triple};

/// A set of RDF triples backed by a `BTreeSet` for efficient storage and
/// retrieval. This is the indexing structure behind [`MemoryStore`]; it
/// knows nothing about graph URIs or the store lifecycle.
///
/// [`MemoryStore`]: crate::store::MemoryStore
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: BTreeSet<Triple>,
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Graph {
            triples: BTreeSet::new(),
        }
    }

    /// Adds a triple to the graph. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Removes a triple from the graph. Returns false if it was absent.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        self.triples.remove(triple)
    }

    /// Checks if a triple exists in the graph.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Queries triples matching the given pattern.
    ///
    /// `None` values act as wildcards matching any term.
    pub fn query(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Vec<Triple> {
        self.triples
            .iter()
            .filter(|triple| triple.matches(subject, predicate, object))
            .cloned()
            .collect()
    }

    /// Iterates over all triples.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Removes all triples from the graph.
    pub fn clear(&mut self) {
        self.triples.clear();
    }

    /// Returns the number of triples in the graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Checks if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(s: &str, p: &str, o: &str) -> Triple {
        Triple {
            subject: Term::resource(s),
            predicate: Term::resource(p),
            object: Term::resource(o),
        }
    }

    #[test]
    fn insert_is_set_semantics() {
        let mut graph = Graph::new();
        let t = triple("http://ex.org/a", "http://ex.org/p", "http://ex.org/b");
        assert!(graph.insert(t.clone()));
        assert!(!graph.insert(t.clone()));
        assert_eq!(graph.len(), 1);
        assert!(graph.contains(&t));
        assert!(graph.remove(&t));
        assert!(!graph.remove(&t));
        assert!(graph.is_empty());
    }

    #[test]
    fn query_honours_each_slot() {
        let mut graph = Graph::new();
        graph.insert(triple("http://ex.org/a", "http://ex.org/p", "http://ex.org/x"));
        graph.insert(triple("http://ex.org/a", "http://ex.org/q", "http://ex.org/y"));
        graph.insert(triple("http://ex.org/b", "http://ex.org/p", "http://ex.org/y"));

        assert_eq!(graph.query(None, None, None).len(), 3);
        let subject = Term::resource("http://ex.org/a");
        assert_eq!(graph.query(Some(&subject), None, None).len(), 2);
        let predicate = Term::resource("http://ex.org/p");
        assert_eq!(graph.query(None, Some(&predicate), None).len(), 2);
        let object = Term::resource("http://ex.org/y");
        assert_eq!(graph.query(None, None, Some(&object)).len(), 2);
        assert_eq!(graph.query(Some(&subject), Some(&predicate), None).len(), 1);
    }
}
