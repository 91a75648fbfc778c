//! Subject-predicate-object triples and pattern matching.

use std::fmt;

use crate::model::Term;
use crate::{OxowlError, Result};

/// A subject-predicate-object fact.
///
/// Subject and predicate are resource terms; the object may be a resource or
/// a literal. Equality is full structural equality: a store holds a set of
/// triples with no identity beyond value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    /// Creates a new triple, validating the term shapes.
    ///
    /// # Errors
    ///
    /// Fails with [`OxowlError::Validation`] if the subject or predicate is
    /// not a resource, or the object is neither a resource nor a literal.
    pub fn new(subject: Term, predicate: Term, object: Term) -> Result<Triple> {
        if !subject.is_resource() {
            return Err(OxowlError::Validation(format!(
                "subject '{subject}' is not a resource"
            )));
        }
        if !predicate.is_resource() {
            return Err(OxowlError::Validation(format!(
                "predicate '{predicate}' is not a resource"
            )));
        }
        if !object.is_resource() && !object.is_literal() {
            return Err(OxowlError::Validation(format!(
                "object '{object}' is not a resource or literal"
            )));
        }
        Ok(Triple {
            subject,
            predicate,
            object,
        })
    }

    /// Checks the triple against a pattern. `None` fields act as wildcards
    /// matching any term.
    pub fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> bool {
        subject.is_none_or(|s| *s == self.subject)
            && predicate.is_none_or(|p| *p == self.predicate)
            && object.is_none_or(|o| *o == self.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal() -> Term {
        Term::resource("https://example.org/zoo#Animal")
    }

    #[test]
    fn valid_triples_are_constructed() {
        let with_resource = Triple::new(
            animal(),
            Term::resource("http://www.w3.org/2000/01/rdf-schema#subClassOf"),
            Term::resource("https://example.org/zoo#LivingThing"),
        );
        assert!(with_resource.is_ok());

        let with_literal = Triple::new(
            animal(),
            Term::resource("http://www.w3.org/2000/01/rdf-schema#label"),
            Term::literal_with_language("Tier", "de"),
        );
        assert!(with_literal.is_ok());
    }

    #[test]
    fn literal_subject_or_predicate_is_rejected() {
        let err = Triple::new(Term::literal("x"), animal(), animal()).unwrap_err();
        assert!(matches!(err, OxowlError::Validation(_)));

        let err = Triple::new(animal(), Term::literal("x"), animal()).unwrap_err();
        assert!(matches!(err, OxowlError::Validation(_)));
    }

    #[test]
    fn pattern_matching_honours_wildcards() {
        let triple = Triple {
            subject: animal(),
            predicate: Term::resource("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
            object: Term::resource("http://www.w3.org/2002/07/owl#Class"),
        };
        assert!(triple.matches(None, None, None));
        assert!(triple.matches(Some(&animal()), None, None));
        assert!(!triple.matches(Some(&Term::resource("https://example.org/zoo#Plant")), None, None));
        assert!(triple.matches(
            None,
            None,
            Some(&Term::resource("http://www.w3.org/2002/07/owl#Class"))
        ));
    }
}
