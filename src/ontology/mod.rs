//! Structured ontology entities over a triple store.
//!
//! An [`OntologyGraph`] wraps any [`GraphStore`] and exposes the ontology
//! vocabulary as typed operations: metadata (version, imports, labels,
//! comments), entity upsert/retrieval and filtered individual queries. The
//! entity types map to and from triple sets deterministically; writes go
//! through [`OntologyGraph::upsert_resource`] which replaces the full
//! definition of a resource.

mod class;
mod data_property;
mod datatype;
mod filter;
mod individual;
mod literal;
mod object_property;
mod resource;

pub use class::OntologyClass;
pub use data_property::OntologyDataProperty;
pub use datatype::OntologyDatatype;
pub use filter::IndividualFilter;
pub use individual::OntologyIndividual;
pub use literal::GenericLiteral;
pub use object_property::OntologyObjectProperty;
pub use resource::OntologyResource;

use std::collections::BTreeMap;

use crate::model::{Term, Triple};
use crate::store::GraphStore;
use crate::vocab;
use crate::{OxowlError, Result};

use resource::annotation_term;

/// An ontology backed by a graph store, viewed at entity granularity.
///
/// Labels and comments of the ontology itself are held in a write-through
/// cache hydrated on [`OntologyGraph::load`]. The cache is only kept in sync
/// by mutations on this instance; a second instance over the same store, or
/// raw store writes, make it stale.
#[derive(Debug)]
pub struct OntologyGraph<S: GraphStore> {
    store: S,
    uri: String,
    labels: BTreeMap<String, String>,
    comments: BTreeMap<String, String>,
}

impl<S: GraphStore> OntologyGraph<S> {
    /// Initialises a fresh ontology on the store by writing the ontology
    /// marker triple. Fails with [`OxowlError::OntologyAlreadyExists`] if
    /// the marker is already present.
    pub fn init(mut store: S) -> Result<Self> {
        let uri = store.uri().to_string();
        let subject = Term::resource(uri.as_str());
        let existing = store.get_first_match(
            Some(&subject),
            Some(&vocab::rdf::TYPE),
            Some(&vocab::owl::ONTOLOGY),
        )?;
        if existing.is_some() {
            return Err(OxowlError::OntologyAlreadyExists);
        }
        store.add_triple_unchecked(&Triple {
            subject,
            predicate: vocab::rdf::TYPE.clone(),
            object: vocab::owl::ONTOLOGY.clone(),
        })?;
        tracing::debug!(uri = %uri, "initialised ontology graph");
        Ok(OntologyGraph {
            store,
            uri,
            labels: BTreeMap::new(),
            comments: BTreeMap::new(),
        })
    }

    /// Loads an existing ontology from the store. Fails with
    /// [`OxowlError::OntologyNotFound`] if the marker triple is absent;
    /// otherwise hydrates the label and comment caches.
    pub fn load(store: S) -> Result<Self> {
        let uri = store.uri().to_string();
        let subject = Term::resource(uri.as_str());
        let marker = store.get_first_match(
            Some(&subject),
            Some(&vocab::rdf::TYPE),
            Some(&vocab::owl::ONTOLOGY),
        )?;
        if marker.is_none() {
            return Err(OxowlError::OntologyNotFound);
        }

        let mut labels = BTreeMap::new();
        for triple in store.get_all_matches(Some(&subject), Some(&vocab::rdfs::LABEL), None)? {
            labels.insert(
                triple.object.language().to_string(),
                triple.object.value().to_string(),
            );
        }
        let mut comments = BTreeMap::new();
        for triple in store.get_all_matches(Some(&subject), Some(&vocab::rdfs::COMMENT), None)? {
            comments.insert(
                triple.object.language().to_string(),
                triple.object.value().to_string(),
            );
        }
        Ok(OntologyGraph {
            store,
            uri,
            labels,
            comments,
        })
    }

    /// Returns the base URI of the ontology.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Borrows the underlying store, e.g. for serialization.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the graph and returns the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns the ontology version, or empty if none is set.
    pub fn version(&self) -> Result<String> {
        let subject = Term::resource(self.uri.as_str());
        let triple =
            self.store
                .get_first_match(Some(&subject), Some(&vocab::owl::VERSION_INFO), None)?;
        Ok(triple.map(|t| t.object.value().to_string()).unwrap_or_default())
    }

    /// Sets the ontology version, replacing any previous version.
    pub fn set_version(&mut self, version: &str) -> Result<()> {
        let subject = Term::resource(self.uri.as_str());
        self.store
            .delete_all_matches(Some(&subject), Some(&vocab::owl::VERSION_INFO), None)?;
        self.store.add_triple_unchecked(&Triple {
            subject,
            predicate: vocab::owl::VERSION_INFO.clone(),
            object: Term::literal(version),
        })
    }

    /// Returns the URIs of all imported ontologies.
    pub fn imports(&self) -> Result<Vec<String>> {
        let subject = Term::resource(self.uri.as_str());
        let triples =
            self.store
                .get_all_matches(Some(&subject), Some(&vocab::owl::IMPORTS), None)?;
        Ok(triples
            .into_iter()
            .map(|t| t.object.value().to_string())
            .collect())
    }

    /// Adds an ontology to the list of imports. Fails with
    /// [`OxowlError::TripleAlreadyExists`] if the import is already present.
    pub fn add_import(&mut self, uri: &str) -> Result<()> {
        self.store.add_triple(&Triple {
            subject: Term::resource(self.uri.as_str()),
            predicate: vocab::owl::IMPORTS.clone(),
            object: Term::resource(uri),
        })
    }

    /// Returns the cached ontology label for a language, or empty.
    pub fn label(&self, lang: &str) -> &str {
        self.labels.get(lang).map(String::as_str).unwrap_or("")
    }

    /// Sets the ontology label for a language; an empty text removes it.
    pub fn set_label(&mut self, text: &str, lang: &str) -> Result<()> {
        set_annotation(
            &mut self.store,
            &self.uri,
            &mut self.labels,
            &vocab::rdfs::LABEL,
            text,
            lang,
        )
    }

    /// Returns the cached ontology comment for a language, or empty.
    pub fn comment(&self, lang: &str) -> &str {
        self.comments.get(lang).map(String::as_str).unwrap_or("")
    }

    /// Sets the ontology comment for a language; an empty text removes it.
    pub fn set_comment(&mut self, text: &str, lang: &str) -> Result<()> {
        set_annotation(
            &mut self.store,
            &self.uri,
            &mut self.comments,
            &vocab::rdfs::COMMENT,
            text,
            lang,
        )
    }

    /// Writes the full definition of a resource, replacing any previous
    /// definition under the same URI.
    ///
    /// The resource must live in this ontology's namespace: its URI
    /// truncated at the last `#` must equal the base URI, otherwise the call
    /// fails with [`OxowlError::ResourceDoesNotBelongToGraph`] and nothing
    /// is written.
    pub fn upsert_resource(&mut self, resource: &dyn OntologyResource) -> Result<()> {
        let prefix = resource.uri().rsplit_once('#').map(|(prefix, _)| prefix);
        if prefix != Some(self.uri.as_str()) {
            return Err(OxowlError::ResourceDoesNotBelongToGraph);
        }
        let subject = Term::resource(resource.uri());
        self.store.delete_all_matches(Some(&subject), None, None)?;
        self.store.add_triples_unchecked(&resource.to_triples())
    }

    /// Deletes a resource's definition and every inbound reference to it.
    pub fn delete_resource(&mut self, uri: &str) -> Result<()> {
        let term = Term::resource(uri);
        self.store.delete_all_matches(Some(&term), None, None)?;
        self.store.delete_all_matches(None, None, Some(&term))
    }

    /// Retrieves a class by URI.
    pub fn get_class(&self, uri: &str) -> Result<OntologyClass> {
        let triples = self.marked_triples(uri, &vocab::owl::CLASS)?;
        Ok(OntologyClass::from_triples(uri, &triples))
    }

    /// Retrieves an object property by URI.
    pub fn get_object_property(&self, uri: &str) -> Result<OntologyObjectProperty> {
        let triples = self.marked_triples(uri, &vocab::owl::OBJECT_PROPERTY)?;
        Ok(OntologyObjectProperty::from_triples(uri, &triples))
    }

    /// Retrieves a data property by URI.
    pub fn get_data_property(&self, uri: &str) -> Result<OntologyDataProperty> {
        let triples = self.marked_triples(uri, &vocab::owl::DATATYPE_PROPERTY)?;
        Ok(OntologyDataProperty::from_triples(uri, &triples))
    }

    /// Retrieves a datatype by URI.
    pub fn get_datatype(&self, uri: &str) -> Result<OntologyDatatype> {
        let triples = self.marked_triples(uri, &vocab::rdfs::DATATYPE)?;
        Ok(OntologyDatatype::from_triples(uri, &triples))
    }

    /// Retrieves an individual by URI.
    pub fn get_individual(&self, uri: &str) -> Result<OntologyIndividual> {
        let triples = self.marked_triples(uri, &vocab::owl::NAMED_INDIVIDUAL)?;
        Ok(OntologyIndividual::from_triples(uri, &triples))
    }

    /// Retrieves all individuals matching the filter, or every individual
    /// when the filter is absent or empty. Order follows discovery order;
    /// no further ordering is guaranteed.
    ///
    /// Reconstruction stops at the first failing candidate: the returned
    /// vector holds every individual resolved before the failure, and the
    /// error slot carries the failure itself. A `None` error means the
    /// result is complete.
    pub fn get_individuals(
        &self,
        filter: Option<&IndividualFilter>,
    ) -> (Vec<OntologyIndividual>, Option<OxowlError>) {
        let candidates = match filter {
            Some(filter) if !filter.is_empty() => self.filter_candidates(filter),
            _ => self
                .store
                .get_all_matches(
                    None,
                    Some(&vocab::rdf::TYPE),
                    Some(&vocab::owl::NAMED_INDIVIDUAL),
                )
                .map(|triples| {
                    triples
                        .into_iter()
                        .map(|t| t.subject.value().to_string())
                        .collect()
                }),
        };
        let candidates = match candidates {
            Ok(candidates) => candidates,
            Err(err) => return (Vec::new(), Some(err)),
        };

        let mut individuals = Vec::with_capacity(candidates.len());
        for uri in &candidates {
            match self.get_individual(uri) {
                Ok(individual) => individuals.push(individual),
                Err(err) => return (individuals, Some(err)),
            }
        }
        (individuals, None)
    }

    /// Evaluates the filter: per AND-group, intersect the subject sets of
    /// its patterns (short-circuiting when the pool empties), then union the
    /// group pools in first-seen order.
    fn filter_candidates(&self, filter: &IndividualFilter) -> Result<Vec<String>> {
        let mut candidates: Vec<String> = Vec::new();
        for group in filter.groups() {
            let mut pool: Vec<String> = Vec::new();
            for (i, pattern) in group.iter().enumerate() {
                let subjects: Vec<String> = self
                    .store
                    .get_all_matches(None, Some(&pattern.predicate), Some(&pattern.object))?
                    .into_iter()
                    .map(|t| t.subject.value().to_string())
                    .collect();
                if i == 0 {
                    pool = subjects;
                } else {
                    pool.retain(|uri| subjects.contains(uri));
                }
                if pool.is_empty() {
                    break;
                }
            }
            for uri in pool {
                if !candidates.contains(&uri) {
                    candidates.push(uri);
                }
            }
        }
        Ok(candidates)
    }

    /// Fetches all triples rooted at a URI, requiring the given type marker
    /// among them.
    fn marked_triples(&self, uri: &str, marker: &Term) -> Result<Vec<Triple>> {
        let subject = Term::resource(uri);
        let triples = self.store.get_all_matches(Some(&subject), None, None)?;
        let marked = triples
            .iter()
            .any(|t| t.predicate == *vocab::rdf::TYPE && t.object == *marker);
        if !marked {
            return Err(OxowlError::ResourceNotFound);
        }
        Ok(triples)
    }
}

fn set_annotation<S: GraphStore>(
    store: &mut S,
    uri: &str,
    cache: &mut BTreeMap<String, String>,
    predicate: &Term,
    text: &str,
    lang: &str,
) -> Result<()> {
    let subject = Term::resource(uri);
    if let Some(old) = cache.get(lang) {
        store.delete_triple_unchecked(&Triple {
            subject: subject.clone(),
            predicate: predicate.clone(),
            object: annotation_term(old, lang),
        })?;
    }
    if text.is_empty() {
        cache.remove(lang);
        return Ok(());
    }
    store.add_triple_unchecked(&Triple {
        subject,
        predicate: predicate.clone(),
        object: annotation_term(text, lang),
    })?;
    cache.insert(lang.to_string(), text.to_string());
    Ok(())
}
