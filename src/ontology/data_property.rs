//! OWL data property entities.

use std::collections::BTreeMap;

use crate::model::{Term, Triple};
use crate::ontology::resource::{annotation_triples, fold_annotation, relation_triples};
use crate::ontology::OntologyResource;
use crate::vocab;

/// A data property from an ontology, relating individuals to literal values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyDataProperty {
    pub uri: String,
    pub equivalent_to: Vec<String>,
    pub sub_property_of: Vec<String>,
    pub domains: Vec<String>,
    pub ranges: Vec<String>,
    pub disjoint_with: Vec<String>,
    pub is_functional: bool,
    pub label: BTreeMap<String, String>,
    pub comment: BTreeMap<String, String>,
}

impl OntologyResource for OntologyDataProperty {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn to_triples(&self) -> Vec<Triple> {
        let subject = Term::resource(self.uri.as_str());
        let mut triples = vec![Triple {
            subject: subject.clone(),
            predicate: vocab::rdf::TYPE.clone(),
            object: vocab::owl::DATATYPE_PROPERTY.clone(),
        }];
        triples.extend(relation_triples(
            &subject,
            &vocab::owl::EQUIVALENT_PROPERTY,
            &self.equivalent_to,
        ));
        triples.extend(relation_triples(
            &subject,
            &vocab::rdfs::SUB_PROPERTY_OF,
            &self.sub_property_of,
        ));
        triples.extend(relation_triples(
            &subject,
            &vocab::rdfs::DOMAIN,
            &self.domains,
        ));
        triples.extend(relation_triples(&subject, &vocab::rdfs::RANGE, &self.ranges));
        triples.extend(relation_triples(
            &subject,
            &vocab::owl::PROPERTY_DISJOINT_WITH,
            &self.disjoint_with,
        ));
        if self.is_functional {
            triples.push(Triple {
                subject: subject.clone(),
                predicate: vocab::rdf::TYPE.clone(),
                object: vocab::owl::FUNCTIONAL_PROPERTY.clone(),
            });
        }
        triples.extend(annotation_triples(&subject, &self.label, &self.comment));
        triples
    }
}

impl OntologyDataProperty {
    pub(crate) fn from_triples(uri: &str, triples: &[Triple]) -> Self {
        let mut prop = OntologyDataProperty {
            uri: uri.to_string(),
            ..Default::default()
        };
        for triple in triples {
            let object = &triple.object;
            if triple.predicate == *vocab::rdf::TYPE {
                if object == &*vocab::owl::FUNCTIONAL_PROPERTY {
                    prop.is_functional = true;
                }
            } else if triple.predicate == *vocab::owl::EQUIVALENT_PROPERTY {
                prop.equivalent_to.push(object.value().to_string());
            } else if triple.predicate == *vocab::rdfs::SUB_PROPERTY_OF {
                prop.sub_property_of.push(object.value().to_string());
            } else if triple.predicate == *vocab::rdfs::DOMAIN {
                prop.domains.push(object.value().to_string());
            } else if triple.predicate == *vocab::rdfs::RANGE {
                prop.ranges.push(object.value().to_string());
            } else if triple.predicate == *vocab::owl::PROPERTY_DISJOINT_WITH {
                prop.disjoint_with.push(object.value().to_string());
            } else if triple.predicate == *vocab::rdfs::LABEL {
                fold_annotation(&mut prop.label, object);
            } else if triple.predicate == *vocab::rdfs::COMMENT {
                fold_annotation(&mut prop.comment, object);
            }
        }
        prop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_triples() {
        let prop = OntologyDataProperty {
            uri: "http://ex.org/zoo#weight".into(),
            sub_property_of: vec!["http://ex.org/zoo#measurement".into()],
            domains: vec!["http://ex.org/zoo#Animal".into()],
            ranges: vec!["http://www.w3.org/2001/XMLSchema#decimal".into()],
            is_functional: true,
            comment: BTreeMap::from([("en".to_string(), "Weight in kg.".to_string())]),
            ..Default::default()
        };
        let rebuilt = OntologyDataProperty::from_triples(&prop.uri, &prop.to_triples());
        assert_eq!(rebuilt, prop);
    }
}
