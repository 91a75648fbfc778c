//! RDFS datatype entities.

use std::collections::BTreeMap;

use crate::model::{Term, Triple};
use crate::ontology::resource::{annotation_triples, fold_annotation};
use crate::ontology::OntologyResource;
use crate::vocab;

/// A datatype declared by an ontology (strings, integers, custom types).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyDatatype {
    pub uri: String,
    pub label: BTreeMap<String, String>,
    pub comment: BTreeMap<String, String>,
}

impl OntologyResource for OntologyDatatype {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn to_triples(&self) -> Vec<Triple> {
        let subject = Term::resource(self.uri.as_str());
        let mut triples = vec![Triple {
            subject: subject.clone(),
            predicate: vocab::rdf::TYPE.clone(),
            object: vocab::rdfs::DATATYPE.clone(),
        }];
        triples.extend(annotation_triples(&subject, &self.label, &self.comment));
        triples
    }
}

impl OntologyDatatype {
    pub(crate) fn from_triples(uri: &str, triples: &[Triple]) -> Self {
        let mut datatype = OntologyDatatype {
            uri: uri.to_string(),
            ..Default::default()
        };
        for triple in triples {
            if triple.predicate == *vocab::rdfs::LABEL {
                fold_annotation(&mut datatype.label, &triple.object);
            } else if triple.predicate == *vocab::rdfs::COMMENT {
                fold_annotation(&mut datatype.comment, &triple.object);
            }
        }
        datatype
    }
}
