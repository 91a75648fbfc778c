//! OWL class entities.

use std::collections::BTreeMap;

use crate::model::{Term, Triple};
use crate::ontology::resource::{annotation_triples, fold_annotation, relation_triples};
use crate::ontology::OntologyResource;
use crate::vocab;

/// A class from an ontology.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyClass {
    pub uri: String,
    pub equivalent_to: Vec<String>,
    pub sub_class_of: Vec<String>,
    pub disjoint_with: Vec<String>,
    /// Labels keyed by language tag; the empty key is the untagged label.
    pub label: BTreeMap<String, String>,
    /// Comments keyed by language tag.
    pub comment: BTreeMap<String, String>,
}

impl OntologyResource for OntologyClass {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn to_triples(&self) -> Vec<Triple> {
        let subject = Term::resource(self.uri.as_str());
        let mut triples = vec![Triple {
            subject: subject.clone(),
            predicate: vocab::rdf::TYPE.clone(),
            object: vocab::owl::CLASS.clone(),
        }];
        triples.extend(relation_triples(
            &subject,
            &vocab::owl::EQUIVALENT_CLASS,
            &self.equivalent_to,
        ));
        triples.extend(relation_triples(
            &subject,
            &vocab::rdfs::SUB_CLASS_OF,
            &self.sub_class_of,
        ));
        triples.extend(relation_triples(
            &subject,
            &vocab::owl::DISJOINT_WITH,
            &self.disjoint_with,
        ));
        triples.extend(annotation_triples(&subject, &self.label, &self.comment));
        triples
    }
}

impl OntologyClass {
    /// Rebuilds a class from all triples rooted at its URI. The caller has
    /// already checked the owl:Class marker.
    pub(crate) fn from_triples(uri: &str, triples: &[Triple]) -> Self {
        let mut class = OntologyClass {
            uri: uri.to_string(),
            ..Default::default()
        };
        for triple in triples {
            let object = &triple.object;
            if triple.predicate == *vocab::owl::EQUIVALENT_CLASS {
                class.equivalent_to.push(object.value().to_string());
            } else if triple.predicate == *vocab::rdfs::SUB_CLASS_OF {
                class.sub_class_of.push(object.value().to_string());
            } else if triple.predicate == *vocab::owl::DISJOINT_WITH {
                class.disjoint_with.push(object.value().to_string());
            } else if triple.predicate == *vocab::rdfs::LABEL {
                fold_annotation(&mut class.label, object);
            } else if triple.predicate == *vocab::rdfs::COMMENT {
                fold_annotation(&mut class.comment, object);
            }
        }
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triples_and_back_preserve_every_attribute() {
        let class = OntologyClass {
            uri: "http://ex.org/zoo#Animal".into(),
            equivalent_to: vec!["http://ex.org/bio#Creature".into()],
            sub_class_of: vec!["http://ex.org/zoo#LivingThing".into()],
            disjoint_with: vec!["http://ex.org/zoo#Plant".into()],
            label: BTreeMap::from([
                (String::new(), "Animal".to_string()),
                ("de".to_string(), "Tier".to_string()),
            ]),
            comment: BTreeMap::from([("en".to_string(), "Any animal.".to_string())]),
        };

        let triples = class.to_triples();
        assert_eq!(triples.len(), 7);
        assert!(triples.contains(&Triple {
            subject: Term::resource("http://ex.org/zoo#Animal"),
            predicate: vocab::rdf::TYPE.clone(),
            object: vocab::owl::CLASS.clone(),
        }));

        let rebuilt = OntologyClass::from_triples(&class.uri, &triples);
        assert_eq!(rebuilt, class);
    }
}
