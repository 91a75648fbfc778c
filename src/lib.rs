//! # oxowl
//!
//! OWL ontology management over pluggable RDF triple-store backends.
//!
//! The crate is layered bottom-up:
//!
//! - [`model`] — terms and triples with a canonical N-Triples text codec
//! - [`vocab`] — the fixed RDF/RDFS/OWL/XSD vocabulary
//! - [`store`] — the [`GraphStore`] contract plus an in-memory backend
//!   ([`MemoryStore`]) and a remote SPARQL backend ([`BlazegraphStore`])
//! - [`ontology`] — structured entities (classes, properties, datatypes,
//!   individuals) mapped to and from triple sets, and an OR-of-AND filter
//!   for querying individuals
//!
//! ## Example
//!
//! ```rust
//! use oxowl::{MemoryStore, OntologyGraph, OntologyClass};
//!
//! # fn main() -> oxowl::Result<()> {
//! let store = MemoryStore::new("https://example.org/zoo");
//! let mut ont = OntologyGraph::init(store)?;
//! ont.upsert_resource(&OntologyClass {
//!     uri: "https://example.org/zoo#Animal".into(),
//!     ..Default::default()
//! })?;
//! let animal = ont.get_class("https://example.org/zoo#Animal")?;
//! assert_eq!(animal.uri, "https://example.org/zoo#Animal");
//! # Ok(())
//! # }
//! ```

pub mod model;
pub mod ontology;
pub mod store;
pub mod vocab;

pub use model::{Term, Triple};
pub use ontology::{
    GenericLiteral, IndividualFilter, OntologyClass, OntologyDataProperty, OntologyDatatype,
    OntologyGraph, OntologyIndividual, OntologyObjectProperty, OntologyResource,
};
pub use store::{BlazegraphEndpoint, BlazegraphStore, EndpointConfig, GraphStore, MemoryStore};

/// Core error type for oxowl operations.
///
/// Callers branch on variant identity, never on message text. The conflict
/// variants (`TripleAlreadyExists` through `ResourceDoesNotBelongToGraph`)
/// are surfaced only by checked APIs; the unchecked mutation APIs absorb the
/// conflict they are designed to tolerate.
#[derive(Debug, thiserror::Error)]
pub enum OxowlError {
    /// Malformed term or triple (e.g. a literal in a predicate slot).
    #[error("validation error: {0}")]
    Validation(String),
    /// Checked add of a triple that is already present.
    #[error("triple already exists")]
    TripleAlreadyExists,
    /// Checked delete of a triple that is not present.
    #[error("triple does not exist")]
    TripleDoesNotExist,
    /// Ontology initialisation over a store that already carries a marker.
    #[error("ontology already exists")]
    OntologyAlreadyExists,
    /// Ontology load from a store without a marker triple.
    #[error("ontology not found")]
    OntologyNotFound,
    /// Entity reconstruction for a URI without the required type marker.
    #[error("resource not found")]
    ResourceNotFound,
    /// Upsert of a resource whose URI prefix differs from the ontology base.
    #[error("resource does not belong to graph")]
    ResourceDoesNotBelongToGraph,
    /// Typed literal conversion against a different recorded datatype.
    #[error("literal type mismatch")]
    LiteralTypeMismatch,
    /// Opaque transport or storage failure from a backend.
    #[error("backend error: {0}")]
    Backend(String),
    /// Malformed serialized input or literal lexical form.
    #[error("parse error: {0}")]
    Parse(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for oxowl operations.
pub type Result<T> = std::result::Result<T, OxowlError>;
