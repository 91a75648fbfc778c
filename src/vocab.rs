//! Common RDF vocabularies and namespaces.
//!
//! Process-wide immutable lookup terms, initialized once on first use and
//! never mutated thereafter.

use crate::model::Term;
use std::sync::LazyLock;

/// RDF vocabulary namespace
pub mod rdf {
    use super::*;

    /// The RDF namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type predicate
    pub static TYPE: LazyLock<Term> = LazyLock::new(|| Term::resource(format!("{NAMESPACE}type")));
}

/// RDFS vocabulary namespace
pub mod rdfs {
    use super::*;

    /// The RDFS namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:label predicate
    pub static LABEL: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}label")));

    /// rdfs:comment predicate
    pub static COMMENT: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}comment")));

    /// rdfs:subClassOf predicate
    pub static SUB_CLASS_OF: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}subClassOf")));

    /// rdfs:subPropertyOf predicate
    pub static SUB_PROPERTY_OF: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}subPropertyOf")));

    /// rdfs:domain predicate
    pub static DOMAIN: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}domain")));

    /// rdfs:range predicate
    pub static RANGE: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}range")));

    /// rdfs:Datatype class
    pub static DATATYPE: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}Datatype")));
}

/// OWL vocabulary namespace
pub mod owl {
    use super::*;

    /// The OWL namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";

    /// owl:Ontology class
    pub static ONTOLOGY: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}Ontology")));

    /// owl:versionInfo predicate
    pub static VERSION_INFO: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}versionInfo")));

    /// owl:imports predicate
    pub static IMPORTS: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}imports")));

    /// owl:Class class
    pub static CLASS: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}Class")));

    /// owl:equivalentClass predicate
    pub static EQUIVALENT_CLASS: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}equivalentClass")));

    /// owl:disjointWith predicate
    pub static DISJOINT_WITH: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}disjointWith")));

    /// owl:ObjectProperty class
    pub static OBJECT_PROPERTY: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}ObjectProperty")));

    /// owl:DatatypeProperty class
    pub static DATATYPE_PROPERTY: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}DatatypeProperty")));

    /// owl:equivalentProperty predicate
    pub static EQUIVALENT_PROPERTY: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}equivalentProperty")));

    /// owl:propertyDisjointWith predicate
    pub static PROPERTY_DISJOINT_WITH: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}propertyDisjointWith")));

    /// owl:inverseOf predicate
    pub static INVERSE_OF: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}inverseOf")));

    /// owl:NamedIndividual class
    pub static NAMED_INDIVIDUAL: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}NamedIndividual")));

    /// owl:sameAs predicate
    pub static SAME_AS: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}sameAs")));

    /// owl:FunctionalProperty class
    pub static FUNCTIONAL_PROPERTY: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}FunctionalProperty")));

    /// owl:InverseFunctionalProperty class
    pub static INVERSE_FUNCTIONAL_PROPERTY: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}InverseFunctionalProperty")));

    /// owl:TransitiveProperty class
    pub static TRANSITIVE_PROPERTY: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}TransitiveProperty")));

    /// owl:SymmetricProperty class
    pub static SYMMETRIC_PROPERTY: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}SymmetricProperty")));

    /// owl:AsymmetricProperty class
    pub static ASYMMETRIC_PROPERTY: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}AsymmetricProperty")));

    /// owl:ReflexiveProperty class
    pub static REFLEXIVE_PROPERTY: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}ReflexiveProperty")));

    /// owl:IrreflexiveProperty class
    pub static IRREFLEXIVE_PROPERTY: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}IrreflexiveProperty")));
}

/// XML Schema datatypes vocabulary namespace
pub mod xsd {
    use super::*;

    /// The XSD namespace IRI
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string datatype
    pub static STRING: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}string")));

    /// xsd:integer datatype
    pub static INTEGER: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}integer")));

    /// xsd:decimal datatype
    pub static DECIMAL: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}decimal")));

    /// xsd:boolean datatype
    pub static BOOLEAN: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}boolean")));

    /// xsd:anyURI datatype
    pub static ANY_URI: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}anyURI")));

    /// xsd:dateTime datatype
    pub static DATE_TIME: LazyLock<Term> =
        LazyLock::new(|| Term::resource(format!("{NAMESPACE}dateTime")));
}
