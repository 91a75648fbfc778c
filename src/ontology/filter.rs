//! OR-of-AND pattern filter for selecting individuals.

use crate::model::Term;
use crate::ontology::GenericLiteral;
use crate::vocab;

/// One subject-wildcarded pattern: all subjects carrying
/// `(?, predicate, object)` satisfy it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FilterPattern {
    pub predicate: Term,
    pub object: Term,
}

/// A filter over individuals: a list of AND-groups combined with OR.
///
/// Every constraint is a triple pattern with the subject wildcarded. The
/// `or_with_*` constructors open a new AND-group; the `and_with_*` variants
/// append to the last group. Each call returns a new filter and leaves the
/// receiver untouched, so a previously captured filter never changes.
///
/// ```rust
/// use oxowl::IndividualFilter;
///
/// // (type Predator AND eats gazelle) OR type Scavenger
/// let filter = IndividualFilter::new()
///     .or_with_class("http://ex.org/zoo#Predator")
///     .and_with_object_property("http://ex.org/zoo#eats", "http://ex.org/zoo#gazelle")
///     .or_with_class("http://ex.org/zoo#Scavenger");
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndividualFilter {
    groups: Vec<Vec<FilterPattern>>,
}

impl IndividualFilter {
    /// Creates an empty filter, which matches every individual.
    pub fn new() -> Self {
        IndividualFilter::default()
    }

    /// Checks if the filter carries no constraints.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn groups(&self) -> &[Vec<FilterPattern>] {
        &self.groups
    }

    fn or(&self, pattern: FilterPattern) -> Self {
        let mut next = self.clone();
        next.groups.push(vec![pattern]);
        next
    }

    fn and(&self, pattern: FilterPattern) -> Self {
        let mut next = self.clone();
        match next.groups.last_mut() {
            Some(group) => group.push(pattern),
            None => next.groups.push(vec![pattern]),
        }
        next
    }

    /// Starts a new AND-group requiring membership in the given class.
    pub fn or_with_class(&self, class_uri: &str) -> Self {
        self.or(class_pattern(class_uri))
    }

    /// Adds a class membership requirement to the last AND-group.
    pub fn and_with_class(&self, class_uri: &str) -> Self {
        self.and(class_pattern(class_uri))
    }

    /// Starts a new AND-group requiring an object property assertion.
    pub fn or_with_object_property(&self, property_uri: &str, target_uri: &str) -> Self {
        self.or(object_property_pattern(property_uri, target_uri))
    }

    /// Adds an object property requirement to the last AND-group.
    pub fn and_with_object_property(&self, property_uri: &str, target_uri: &str) -> Self {
        self.and(object_property_pattern(property_uri, target_uri))
    }

    /// Starts a new AND-group requiring a data property assertion.
    pub fn or_with_data_property(&self, property_uri: &str, value: &GenericLiteral) -> Self {
        self.or(data_property_pattern(property_uri, value))
    }

    /// Adds a data property requirement to the last AND-group.
    pub fn and_with_data_property(&self, property_uri: &str, value: &GenericLiteral) -> Self {
        self.and(data_property_pattern(property_uri, value))
    }
}

fn class_pattern(class_uri: &str) -> FilterPattern {
    FilterPattern {
        predicate: vocab::rdf::TYPE.clone(),
        object: Term::resource(class_uri),
    }
}

fn object_property_pattern(property_uri: &str, target_uri: &str) -> FilterPattern {
    FilterPattern {
        predicate: Term::resource(property_uri),
        object: Term::resource(target_uri),
    }
}

fn data_property_pattern(property_uri: &str, value: &GenericLiteral) -> FilterPattern {
    FilterPattern {
        predicate: Term::resource(property_uri),
        object: value.term().clone(),
    }
}
