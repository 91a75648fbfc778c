//! Triple storage backends and the contract they satisfy.

mod blazegraph;
mod graph;
mod memory;
pub(crate) mod turtle;

pub use blazegraph::{BlazegraphEndpoint, BlazegraphStore, EndpointConfig};
pub use graph::Graph;
pub use memory::MemoryStore;

use std::io::Write;

use crate::model::{Term, Triple};
use crate::{OxowlError, Result};

/// Capability contract for triple storage backends.
///
/// A store is named by a base URI and owns a set of triples. Pattern slots
/// are `Option<&Term>` where `None` acts as a wildcard. Checked mutations
/// surface conflicts ([`OxowlError::TripleAlreadyExists`] /
/// [`OxowlError::TripleDoesNotExist`]); the unchecked variants absorb those
/// conditions as success. Checked bulk mutations apply one triple at a time
/// and roll back this call's changes on the first failure, so the externally
/// visible state is as if the call never ran.
///
/// Stores provide no internal locking; callers serialize access to one
/// instance themselves.
pub trait GraphStore {
    /// Returns the named graph URI. Empty after [`GraphStore::drop_store`].
    fn uri(&self) -> &str;

    /// Retrieves one triple matching the pattern, or `None`. No tie-break
    /// among multiple matches is defined.
    fn get_first_match(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Result<Option<Triple>>;

    /// Retrieves all triples matching the pattern.
    fn get_all_matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Result<Vec<Triple>>;

    /// Returns all triples in the store. Equivalent to an all-wildcard
    /// [`GraphStore::get_all_matches`].
    fn get_all_triples(&self) -> Result<Vec<Triple>> {
        self.get_all_matches(None, None, None)
    }

    /// Adds the given triple. Fails with
    /// [`OxowlError::TripleAlreadyExists`] if it is already present.
    fn add_triple(&mut self, triple: &Triple) -> Result<()>;

    /// Adds the given triple, treating an already-present triple as success.
    fn add_triple_unchecked(&mut self, triple: &Triple) -> Result<()>;

    /// Adds all triples in order. On the first failure every triple added by
    /// this call is removed again before the error is returned.
    fn add_triples(&mut self, triples: &[Triple]) -> Result<()> {
        let mut added: Vec<&Triple> = Vec::with_capacity(triples.len());
        for triple in triples {
            if let Err(err) = self.add_triple(triple) {
                tracing::debug!(count = added.len(), "rolling back partial bulk add");
                for rollback in added.into_iter().rev() {
                    let _ = self.delete_triple_unchecked(rollback);
                }
                return Err(err);
            }
            added.push(triple);
        }
        Ok(())
    }

    /// Adds all triples, treating already-present triples as success.
    fn add_triples_unchecked(&mut self, triples: &[Triple]) -> Result<()> {
        for triple in triples {
            self.add_triple_unchecked(triple)?;
        }
        Ok(())
    }

    /// Deletes the given triple. Fails with
    /// [`OxowlError::TripleDoesNotExist`] if it is not present.
    fn delete_triple(&mut self, triple: &Triple) -> Result<()>;

    /// Deletes the given triple, treating an absent triple as success.
    fn delete_triple_unchecked(&mut self, triple: &Triple) -> Result<()>;

    /// Deletes all triples in order. On the first failure every triple
    /// deleted by this call is restored before the error is returned.
    fn delete_triples(&mut self, triples: &[Triple]) -> Result<()> {
        let mut deleted: Vec<&Triple> = Vec::with_capacity(triples.len());
        for triple in triples {
            if let Err(err) = self.delete_triple(triple) {
                tracing::debug!(count = deleted.len(), "rolling back partial bulk delete");
                for rollback in deleted.into_iter().rev() {
                    let _ = self.add_triple_unchecked(rollback);
                }
                return Err(err);
            }
            deleted.push(triple);
        }
        Ok(())
    }

    /// Deletes all triples, treating absent triples as success.
    fn delete_triples_unchecked(&mut self, triples: &[Triple]) -> Result<()> {
        for triple in triples {
            self.delete_triple_unchecked(triple)?;
        }
        Ok(())
    }

    /// Deletes every triple matching the pattern. Zero matches is success.
    fn delete_all_matches(
        &mut self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Result<()> {
        let matches = self.get_all_matches(subject, predicate, object)?;
        self.delete_triples_unchecked(&matches)
    }

    /// Removes all triples and invalidates the store.
    fn drop_store(&mut self) -> Result<()>;

    /// Writes the entire store in Turtle format. Pretty mode emits a prefix
    /// block (rdf/rdfs/owl/xsd, the empty prefix bound to `<base>#`, and one
    /// prefix per ontology import), a `@base` line, abbreviated URIs and a
    /// blank line after every triple.
    fn serialize_to_turtle(&self, writer: &mut dyn Write, pretty: bool) -> Result<()>;

    /// Returns the total number of triples in the store.
    fn len(&self) -> Result<usize>;

    /// Checks if the store holds no triples.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Rejects patterns with a literal in the subject or predicate slot.
pub(crate) fn validate_pattern(subject: Option<&Term>, predicate: Option<&Term>) -> Result<()> {
    if let Some(s) = subject {
        if !s.is_resource() {
            return Err(OxowlError::Validation(format!(
                "subject pattern '{s}' is not a resource"
            )));
        }
    }
    if let Some(p) = predicate {
        if !p.is_resource() {
            return Err(OxowlError::Validation(format!(
                "predicate pattern '{p}' is not a resource"
            )));
        }
    }
    Ok(())
}
