//! OWL object property entities.

use std::collections::BTreeMap;

use crate::model::{Term, Triple};
use crate::ontology::resource::{annotation_triples, fold_annotation, relation_triples};
use crate::ontology::OntologyResource;
use crate::vocab;

/// An object property from an ontology, relating individuals to individuals.
///
/// The characteristic flags each correspond to one rdf:type triple against
/// the matching OWL property class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyObjectProperty {
    pub uri: String,
    pub equivalent_to: Vec<String>,
    pub sub_property_of: Vec<String>,
    pub inverse_of: Vec<String>,
    pub domains: Vec<String>,
    pub ranges: Vec<String>,
    pub disjoint_with: Vec<String>,
    pub is_functional: bool,
    pub is_inverse_functional: bool,
    pub is_transitive: bool,
    pub is_symmetric: bool,
    pub is_asymmetric: bool,
    pub is_reflexive: bool,
    pub is_irreflexive: bool,
    pub label: BTreeMap<String, String>,
    pub comment: BTreeMap<String, String>,
}

/// The characteristic flags and their OWL property classes.
fn characteristics(prop: &OntologyObjectProperty) -> [(bool, &'static Term); 7] {
    [
        (prop.is_functional, &vocab::owl::FUNCTIONAL_PROPERTY),
        (
            prop.is_inverse_functional,
            &vocab::owl::INVERSE_FUNCTIONAL_PROPERTY,
        ),
        (prop.is_transitive, &vocab::owl::TRANSITIVE_PROPERTY),
        (prop.is_symmetric, &vocab::owl::SYMMETRIC_PROPERTY),
        (prop.is_asymmetric, &vocab::owl::ASYMMETRIC_PROPERTY),
        (prop.is_reflexive, &vocab::owl::REFLEXIVE_PROPERTY),
        (prop.is_irreflexive, &vocab::owl::IRREFLEXIVE_PROPERTY),
    ]
}

impl OntologyResource for OntologyObjectProperty {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn to_triples(&self) -> Vec<Triple> {
        let subject = Term::resource(self.uri.as_str());
        let mut triples = vec![Triple {
            subject: subject.clone(),
            predicate: vocab::rdf::TYPE.clone(),
            object: vocab::owl::OBJECT_PROPERTY.clone(),
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
            &vocab::owl::INVERSE_OF,
            &self.inverse_of,
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
        for (set, class) in characteristics(self) {
            if set {
                triples.push(Triple {
                    subject: subject.clone(),
                    predicate: vocab::rdf::TYPE.clone(),
                    object: (*class).clone(),
                });
            }
        }
        triples.extend(annotation_triples(&subject, &self.label, &self.comment));
        triples
    }
}

impl OntologyObjectProperty {
    pub(crate) fn from_triples(uri: &str, triples: &[Triple]) -> Self {
        let mut prop = OntologyObjectProperty {
            uri: uri.to_string(),
            ..Default::default()
        };
        for triple in triples {
            let object = &triple.object;
            if triple.predicate == *vocab::rdf::TYPE {
                if object == &*vocab::owl::FUNCTIONAL_PROPERTY {
                    prop.is_functional = true;
                } else if object == &*vocab::owl::INVERSE_FUNCTIONAL_PROPERTY {
                    prop.is_inverse_functional = true;
                } else if object == &*vocab::owl::TRANSITIVE_PROPERTY {
                    prop.is_transitive = true;
                } else if object == &*vocab::owl::SYMMETRIC_PROPERTY {
                    prop.is_symmetric = true;
                } else if object == &*vocab::owl::ASYMMETRIC_PROPERTY {
                    prop.is_asymmetric = true;
                } else if object == &*vocab::owl::REFLEXIVE_PROPERTY {
                    prop.is_reflexive = true;
                } else if object == &*vocab::owl::IRREFLEXIVE_PROPERTY {
                    prop.is_irreflexive = true;
                }
            } else if triple.predicate == *vocab::owl::EQUIVALENT_PROPERTY {
                prop.equivalent_to.push(object.value().to_string());
            } else if triple.predicate == *vocab::rdfs::SUB_PROPERTY_OF {
                prop.sub_property_of.push(object.value().to_string());
            } else if triple.predicate == *vocab::owl::INVERSE_OF {
                prop.inverse_of.push(object.value().to_string());
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
    fn characteristic_flags_map_to_type_triples() {
        let prop = OntologyObjectProperty {
            uri: "http://ex.org/zoo#eats".into(),
            is_functional: true,
            is_transitive: true,
            ..Default::default()
        };
        let triples = prop.to_triples();
        // marker plus two characteristic classes
        assert_eq!(triples.len(), 3);
        assert!(triples
            .iter()
            .all(|t| t.predicate == *vocab::rdf::TYPE));

        let rebuilt = OntologyObjectProperty::from_triples(&prop.uri, &triples);
        assert_eq!(rebuilt, prop);
    }

    #[test]
    fn relations_and_annotations_survive_reconstruction() {
        let prop = OntologyObjectProperty {
            uri: "http://ex.org/zoo#eats".into(),
            equivalent_to: vec!["http://ex.org/bio#consumes".into()],
            sub_property_of: vec!["http://ex.org/zoo#interactsWith".into()],
            inverse_of: vec!["http://ex.org/zoo#eatenBy".into()],
            domains: vec!["http://ex.org/zoo#Animal".into()],
            ranges: vec!["http://ex.org/zoo#Food".into()],
            disjoint_with: vec!["http://ex.org/zoo#avoids".into()],
            label: BTreeMap::from([("en".to_string(), "eats".to_string())]),
            ..Default::default()
        };
        let rebuilt = OntologyObjectProperty::from_triples(&prop.uri, &prop.to_triples());
        assert_eq!(rebuilt, prop);
    }
}
