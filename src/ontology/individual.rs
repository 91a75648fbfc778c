//! OWL named individual entities.

use std::collections::BTreeMap;

use crate::model::{Term, Triple};
use crate::ontology::resource::{annotation_triples, relation_triples};
use crate::ontology::{GenericLiteral, OntologyResource};
use crate::vocab;

/// A named individual from an ontology.
///
/// Beyond the fixed vocabulary, an individual carries arbitrary assertions:
/// object properties point at other resources, data properties carry typed
/// literal values. Both are keyed by property URI and multi-valued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyIndividual {
    pub uri: String,
    /// Class memberships, excluding the owl:NamedIndividual marker.
    pub types: Vec<String>,
    pub same_individual_as: Vec<String>,
    pub object_properties: BTreeMap<String, Vec<String>>,
    pub data_properties: BTreeMap<String, Vec<GenericLiteral>>,
    pub label: BTreeMap<String, String>,
    pub comment: BTreeMap<String, String>,
}

impl OntologyIndividual {
    /// Appends a target to an object property assertion.
    pub fn add_object_property(&mut self, property: impl Into<String>, target: impl Into<String>) {
        self.object_properties
            .entry(property.into())
            .or_default()
            .push(target.into());
    }

    /// Appends a literal value to a data property assertion.
    pub fn add_data_property(&mut self, property: impl Into<String>, value: GenericLiteral) {
        self.data_properties
            .entry(property.into())
            .or_default()
            .push(value);
    }

    pub(crate) fn from_triples(uri: &str, triples: &[Triple]) -> Self {
        let mut indiv = OntologyIndividual {
            uri: uri.to_string(),
            ..Default::default()
        };
        for triple in triples {
            match classify(triple) {
                Assertion::IndividualMarker => {}
                Assertion::Type(class_uri) => indiv.types.push(class_uri.to_string()),
                Assertion::Label { lang, text } => {
                    indiv.label.insert(lang.to_string(), text.to_string());
                }
                Assertion::Comment { lang, text } => {
                    indiv.comment.insert(lang.to_string(), text.to_string());
                }
                Assertion::SameAs(other) => indiv.same_individual_as.push(other.to_string()),
                Assertion::ObjectProperty { property, target } => {
                    indiv.add_object_property(property, target);
                }
                Assertion::DataProperty { property, literal } => {
                    indiv.add_data_property(property, literal);
                }
            }
        }
        indiv
    }
}

impl OntologyResource for OntologyIndividual {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn to_triples(&self) -> Vec<Triple> {
        let subject = Term::resource(self.uri.as_str());
        let mut triples = vec![Triple {
            subject: subject.clone(),
            predicate: vocab::rdf::TYPE.clone(),
            object: vocab::owl::NAMED_INDIVIDUAL.clone(),
        }];
        triples.extend(relation_triples(&subject, &vocab::rdf::TYPE, &self.types));
        triples.extend(relation_triples(
            &subject,
            &vocab::owl::SAME_AS,
            &self.same_individual_as,
        ));
        for (property, targets) in &self.object_properties {
            triples.extend(relation_triples(
                &subject,
                &Term::resource(property.as_str()),
                targets,
            ));
        }
        for (property, values) in &self.data_properties {
            for value in values {
                triples.push(Triple {
                    subject: subject.clone(),
                    predicate: Term::resource(property.as_str()),
                    object: value.term().clone(),
                });
            }
        }
        triples.extend(annotation_triples(&subject, &self.label, &self.comment));
        triples
    }
}

/// How one triple rooted at an individual contributes to the entity.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Assertion<'a> {
    /// The owl:NamedIndividual marker itself.
    IndividualMarker,
    Type(&'a str),
    Label { lang: &'a str, text: &'a str },
    Comment { lang: &'a str, text: &'a str },
    SameAs(&'a str),
    ObjectProperty { property: &'a str, target: &'a str },
    DataProperty {
        property: &'a str,
        literal: GenericLiteral,
    },
}

/// Dispatches a triple by predicate and object shape.
pub(crate) fn classify(triple: &Triple) -> Assertion<'_> {
    let object = &triple.object;
    if triple.predicate == *vocab::rdf::TYPE {
        if object == &*vocab::owl::NAMED_INDIVIDUAL {
            return Assertion::IndividualMarker;
        }
        return Assertion::Type(object.value());
    }
    if triple.predicate == *vocab::rdfs::LABEL {
        return Assertion::Label {
            lang: object.language(),
            text: object.value(),
        };
    }
    if triple.predicate == *vocab::rdfs::COMMENT {
        return Assertion::Comment {
            lang: object.language(),
            text: object.value(),
        };
    }
    if triple.predicate == *vocab::owl::SAME_AS {
        return Assertion::SameAs(object.value());
    }
    if object.is_resource() {
        return Assertion::ObjectProperty {
            property: triple.predicate.value(),
            target: object.value(),
        };
    }
    Assertion::DataProperty {
        property: triple.predicate.value(),
        literal: GenericLiteral::from_literal_term(object.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::resource::annotation_term;

    fn subject() -> Term {
        Term::resource("http://ex.org/zoo#lion")
    }

    #[test]
    fn classify_dispatches_by_predicate_and_shape() {
        let marker = Triple {
            subject: subject(),
            predicate: vocab::rdf::TYPE.clone(),
            object: vocab::owl::NAMED_INDIVIDUAL.clone(),
        };
        assert_eq!(classify(&marker), Assertion::IndividualMarker);

        let membership = Triple {
            subject: subject(),
            predicate: vocab::rdf::TYPE.clone(),
            object: Term::resource("http://ex.org/zoo#Animal"),
        };
        assert_eq!(
            classify(&membership),
            Assertion::Type("http://ex.org/zoo#Animal")
        );

        let label = Triple {
            subject: subject(),
            predicate: vocab::rdfs::LABEL.clone(),
            object: annotation_term("Löwe", "de"),
        };
        assert_eq!(
            classify(&label),
            Assertion::Label {
                lang: "de",
                text: "Löwe"
            }
        );

        let relation = Triple {
            subject: subject(),
            predicate: Term::resource("http://ex.org/zoo#eats"),
            object: Term::resource("http://ex.org/zoo#gazelle"),
        };
        assert_eq!(
            classify(&relation),
            Assertion::ObjectProperty {
                property: "http://ex.org/zoo#eats",
                target: "http://ex.org/zoo#gazelle"
            }
        );

        let value = Triple {
            subject: subject(),
            predicate: Term::resource("http://ex.org/zoo#weight"),
            object: GenericLiteral::integer(190).term().clone(),
        };
        assert_eq!(
            classify(&value),
            Assertion::DataProperty {
                property: "http://ex.org/zoo#weight",
                literal: GenericLiteral::integer(190)
            }
        );
    }

    #[test]
    fn round_trips_through_triples() {
        let mut indiv = OntologyIndividual {
            uri: "http://ex.org/zoo#lion".into(),
            types: vec!["http://ex.org/zoo#Animal".into()],
            same_individual_as: vec!["http://ex.org/other#leo".into()],
            label: BTreeMap::from([("de".to_string(), "Löwe".to_string())]),
            ..Default::default()
        };
        indiv.add_object_property("http://ex.org/zoo#eats", "http://ex.org/zoo#gazelle");
        indiv.add_object_property("http://ex.org/zoo#eats", "http://ex.org/zoo#zebra");
        indiv.add_data_property("http://ex.org/zoo#weight", GenericLiteral::integer(190));

        let triples = indiv.to_triples();
        assert_eq!(triples.len(), 7);
        let rebuilt = OntologyIndividual::from_triples(&indiv.uri, &triples);
        assert_eq!(rebuilt, indiv);
    }
}
