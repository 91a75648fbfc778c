//! Shared behaviour of ontology entities.

use std::collections::BTreeMap;

use crate::model::{Term, Triple};
use crate::vocab;

/// A class, object property, data property, datatype or individual viewed as
/// a generic resource that can be written to a store.
pub trait OntologyResource {
    /// Returns the URI identifying the resource.
    fn uri(&self) -> &str;

    /// Converts the resource into its full triple set.
    fn to_triples(&self) -> Vec<Triple>;
}

/// Builds the literal term for a label or comment; an empty language tag
/// yields a plain literal.
pub(crate) fn annotation_term(value: &str, lang: &str) -> Term {
    if lang.is_empty() {
        Term::literal(value)
    } else {
        Term::literal_with_language(value, lang)
    }
}

/// Emits one triple per target URI under a fixed predicate.
pub(crate) fn relation_triples(
    subject: &Term,
    predicate: &Term,
    targets: &[String],
) -> Vec<Triple> {
    targets
        .iter()
        .map(|uri| Triple {
            subject: subject.clone(),
            predicate: predicate.clone(),
            object: Term::resource(uri.as_str()),
        })
        .collect()
}

/// Emits the rdfs:label and rdfs:comment triples for language-keyed maps.
pub(crate) fn annotation_triples(
    subject: &Term,
    label: &BTreeMap<String, String>,
    comment: &BTreeMap<String, String>,
) -> Vec<Triple> {
    let mut triples = Vec::with_capacity(label.len() + comment.len());
    for (lang, text) in label {
        triples.push(Triple {
            subject: subject.clone(),
            predicate: vocab::rdfs::LABEL.clone(),
            object: annotation_term(text, lang),
        });
    }
    for (lang, text) in comment {
        triples.push(Triple {
            subject: subject.clone(),
            predicate: vocab::rdfs::COMMENT.clone(),
            object: annotation_term(text, lang),
        });
    }
    triples
}

/// Folds a label or comment triple's object into a language-keyed map.
pub(crate) fn fold_annotation(map: &mut BTreeMap<String, String>, object: &Term) {
    map.insert(object.language().to_string(), object.value().to_string());
}
