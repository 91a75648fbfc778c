//! In-memory triple store backend.

use std::io::Write;

use rio_api::model as rio;
use rio_api::parser::TriplesParser;
use rio_turtle::{TurtleError, TurtleParser};

use crate::model::{Term, Triple};
use crate::store::{turtle, validate_pattern, GraphStore};
use crate::vocab;
use crate::{OxowlError, Result};

impl From<TurtleError> for OxowlError {
    fn from(err: TurtleError) -> Self {
        OxowlError::Parse(err.to_string())
    }
}

/// A [`GraphStore`] holding its triples in process memory.
///
/// Suitable for tests, tooling and small ontologies; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    uri: String,
    graph: super::Graph,
    dropped: bool,
}

impl MemoryStore {
    /// Creates an empty store named by the given graph URI.
    pub fn new(uri: impl Into<String>) -> Self {
        MemoryStore {
            uri: uri.into(),
            graph: super::Graph::new(),
            dropped: false,
        }
    }

    /// Builds a store from a Turtle document.
    ///
    /// The graph URI is taken from the subject of an
    /// `(?s, rdf:type, owl:Ontology)` statement if one is present, otherwise
    /// from the subject of the first statement. Documents with no statements
    /// or with blank nodes are rejected.
    pub fn from_turtle(data: &str) -> Result<Self> {
        let mut triples = Vec::new();
        let mut parser = TurtleParser::new(data.as_bytes(), None);
        parser.parse_all(&mut |statement| -> Result<()> {
            triples.push(convert_statement(statement)?);
            Ok(())
        })?;

        let uri = triples
            .iter()
            .find(|t| {
                t.predicate == *vocab::rdf::TYPE && t.object == *vocab::owl::ONTOLOGY
            })
            .or_else(|| triples.first())
            .map(|t| t.subject.value().to_string())
            .ok_or_else(|| OxowlError::Parse("document contains no statements".into()))?;

        tracing::debug!(uri = %uri, triples = triples.len(), "parsed turtle document");
        Ok(MemoryStore {
            uri,
            graph: triples.into_iter().collect(),
            dropped: false,
        })
    }

    fn ensure_live(&self) -> Result<()> {
        if self.dropped {
            return Err(OxowlError::Backend("store has been dropped".into()));
        }
        Ok(())
    }
}

fn convert_statement(statement: rio::Triple<'_>) -> Result<Triple> {
    let subject = match statement.subject {
        rio::Subject::NamedNode(node) => Term::resource(node.iri),
        _ => {
            return Err(OxowlError::Parse(
                "blank node subjects are not supported".into(),
            ))
        }
    };
    let predicate = Term::resource(statement.predicate.iri);
    let object = match statement.object {
        rio::Term::NamedNode(node) => Term::resource(node.iri),
        rio::Term::Literal(rio::Literal::Simple { value }) => Term::literal(value),
        rio::Term::Literal(rio::Literal::LanguageTaggedString { value, language }) => {
            Term::literal_with_language(value, language)
        }
        rio::Term::Literal(rio::Literal::Typed { value, datatype }) => {
            Term::literal_with_datatype(value, datatype.iri)
        }
        _ => {
            return Err(OxowlError::Parse(
                "blank node objects are not supported".into(),
            ))
        }
    };
    Ok(Triple {
        subject,
        predicate,
        object,
    })
}

impl GraphStore for MemoryStore {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn get_first_match(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Result<Option<Triple>> {
        validate_pattern(subject, predicate)?;
        Ok(self
            .graph
            .iter()
            .find(|t| t.matches(subject, predicate, object))
            .cloned())
    }

    fn get_all_matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Result<Vec<Triple>> {
        validate_pattern(subject, predicate)?;
        Ok(self.graph.query(subject, predicate, object))
    }

    fn add_triple(&mut self, triple: &Triple) -> Result<()> {
        self.ensure_live()?;
        if !self.graph.insert(triple.clone()) {
            return Err(OxowlError::TripleAlreadyExists);
        }
        Ok(())
    }

    fn add_triple_unchecked(&mut self, triple: &Triple) -> Result<()> {
        self.ensure_live()?;
        self.graph.insert(triple.clone());
        Ok(())
    }

    fn delete_triple(&mut self, triple: &Triple) -> Result<()> {
        self.ensure_live()?;
        if !self.graph.remove(triple) {
            return Err(OxowlError::TripleDoesNotExist);
        }
        Ok(())
    }

    fn delete_triple_unchecked(&mut self, triple: &Triple) -> Result<()> {
        self.ensure_live()?;
        self.graph.remove(triple);
        Ok(())
    }

    fn drop_store(&mut self) -> Result<()> {
        tracing::debug!(uri = %self.uri, "dropping in-memory store");
        self.graph.clear();
        self.uri.clear();
        self.dropped = true;
        Ok(())
    }

    fn serialize_to_turtle(&self, writer: &mut dyn Write, pretty: bool) -> Result<()> {
        let triples: Vec<Triple> = self.graph.iter().cloned().collect();
        if pretty {
            let base = Term::resource(self.uri.as_str());
            let imports: Vec<String> = self
                .graph
                .query(Some(&base), Some(&vocab::owl::IMPORTS), None)
                .into_iter()
                .map(|t| t.object.value().to_string())
                .collect();
            turtle::write_pretty(&self.uri, &imports, &triples, writer)
        } else {
            turtle::write_dump(&triples, writer)
        }
    }

    fn len(&self) -> Result<usize> {
        Ok(self.graph.len())
    }
}
