//! Typed literal values and their XSD lexical codecs.

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::model::Term;
use crate::vocab;
use crate::{OxowlError, Result};

/// A literal term together with its recorded datatype URI.
///
/// Generic literals are what individuals carry as data property values. The
/// typed constructors produce the standard lexical form for their datatype;
/// the `as_*` accessors convert back and fail with
/// [`OxowlError::LiteralTypeMismatch`] when the recorded datatype disagrees.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenericLiteral {
    term: Term,
}

impl GenericLiteral {
    /// Wraps a literal term. Resource terms are rejected.
    pub fn from_term(term: Term) -> Result<Self> {
        if !term.is_literal() {
            return Err(OxowlError::Validation(format!(
                "term '{term}' is not a literal"
            )));
        }
        Ok(GenericLiteral { term })
    }

    /// Wraps a term already known to be a literal.
    pub(crate) fn from_literal_term(term: Term) -> Self {
        GenericLiteral { term }
    }

    /// Returns the underlying term.
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// Returns the lexical value.
    pub fn value(&self) -> &str {
        self.term.value()
    }

    /// Returns the recorded datatype URI, or empty if none.
    pub fn datatype(&self) -> &str {
        self.term.datatype()
    }

    pub fn string(value: impl Into<String>) -> Self {
        GenericLiteral {
            term: Term::literal_with_datatype(value, vocab::xsd::STRING.value()),
        }
    }

    pub fn integer(value: i64) -> Self {
        GenericLiteral {
            term: Term::literal_with_datatype(value.to_string(), vocab::xsd::INTEGER.value()),
        }
    }

    /// Encodes with six fractional digits, the lexical form emitted for
    /// xsd:decimal values.
    pub fn decimal(value: f64) -> Self {
        GenericLiteral {
            term: Term::literal_with_datatype(format!("{value:.6}"), vocab::xsd::DECIMAL.value()),
        }
    }

    pub fn boolean(value: bool) -> Self {
        GenericLiteral {
            term: Term::literal_with_datatype(value.to_string(), vocab::xsd::BOOLEAN.value()),
        }
    }

    pub fn any_uri(value: impl Into<String>) -> Self {
        GenericLiteral {
            term: Term::literal_with_datatype(value, vocab::xsd::ANY_URI.value()),
        }
    }

    /// Encodes in RFC 3339 form, the lexical form of xsd:dateTime.
    pub fn date_time(value: DateTime<FixedOffset>) -> Self {
        GenericLiteral {
            term: Term::literal_with_datatype(
                value.to_rfc3339_opts(SecondsFormat::Secs, true),
                vocab::xsd::DATE_TIME.value(),
            ),
        }
    }

    fn expect_datatype(&self, datatype: &Term) -> Result<()> {
        if self.datatype() != datatype.value() {
            return Err(OxowlError::LiteralTypeMismatch);
        }
        Ok(())
    }

    pub fn as_string(&self) -> Result<String> {
        self.expect_datatype(&vocab::xsd::STRING)?;
        Ok(self.value().to_string())
    }

    pub fn as_integer(&self) -> Result<i64> {
        self.expect_datatype(&vocab::xsd::INTEGER)?;
        self.value()
            .parse()
            .map_err(|_| OxowlError::Parse(format!("invalid xsd:integer value '{}'", self.value())))
    }

    pub fn as_decimal(&self) -> Result<f64> {
        self.expect_datatype(&vocab::xsd::DECIMAL)?;
        self.value()
            .parse()
            .map_err(|_| OxowlError::Parse(format!("invalid xsd:decimal value '{}'", self.value())))
    }

    pub fn as_boolean(&self) -> Result<bool> {
        self.expect_datatype(&vocab::xsd::BOOLEAN)?;
        match self.value() {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            other => Err(OxowlError::Parse(format!(
                "invalid xsd:boolean value '{other}'"
            ))),
        }
    }

    pub fn as_any_uri(&self) -> Result<String> {
        self.expect_datatype(&vocab::xsd::ANY_URI)?;
        Ok(self.value().to_string())
    }

    pub fn as_date_time(&self) -> Result<DateTime<FixedOffset>> {
        self.expect_datatype(&vocab::xsd::DATE_TIME)?;
        DateTime::parse_from_rfc3339(self.value()).map_err(|err| {
            OxowlError::Parse(format!(
                "invalid xsd:dateTime value '{}': {err}",
                self.value()
            ))
        })
    }
}

impl std::fmt::Display for GenericLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.term.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_constructors_round_trip() {
        assert_eq!(GenericLiteral::string("lion").as_string().unwrap(), "lion");
        assert_eq!(GenericLiteral::integer(-42).as_integer().unwrap(), -42);
        assert_eq!(GenericLiteral::boolean(true).as_boolean().unwrap(), true);
        assert_eq!(
            GenericLiteral::any_uri("http://ex.org/a").as_any_uri().unwrap(),
            "http://ex.org/a"
        );

        let dt = DateTime::parse_from_rfc3339("2021-03-04T05:06:07+01:00").unwrap();
        assert_eq!(GenericLiteral::date_time(dt).as_date_time().unwrap(), dt);
    }

    #[test]
    fn decimal_uses_six_fractional_digits() {
        let lit = GenericLiteral::decimal(2.5);
        assert_eq!(lit.value(), "2.500000");
        assert_eq!(lit.as_decimal().unwrap(), 2.5);
    }

    #[test]
    fn mismatched_datatype_is_rejected() {
        let lit = GenericLiteral::string("42");
        assert!(matches!(
            lit.as_integer(),
            Err(OxowlError::LiteralTypeMismatch)
        ));
        assert!(matches!(
            lit.as_boolean(),
            Err(OxowlError::LiteralTypeMismatch)
        ));
    }

    #[test]
    fn malformed_lexical_forms_fail_to_parse() {
        let bad_int = GenericLiteral::from_term(Term::literal_with_datatype(
            "four",
            "http://www.w3.org/2001/XMLSchema#integer",
        ))
        .unwrap();
        assert!(matches!(bad_int.as_integer(), Err(OxowlError::Parse(_))));

        let bad_bool = GenericLiteral::from_term(Term::literal_with_datatype(
            "yes",
            "http://www.w3.org/2001/XMLSchema#boolean",
        ))
        .unwrap();
        assert!(matches!(bad_bool.as_boolean(), Err(OxowlError::Parse(_))));
    }

    #[test]
    fn boolean_accepts_alternate_lexical_forms() {
        let boolean = |text: &str| {
            GenericLiteral::from_term(Term::literal_with_datatype(
                text,
                "http://www.w3.org/2001/XMLSchema#boolean",
            ))
            .unwrap()
            .as_boolean()
        };
        for text in ["1", "t", "T", "true", "TRUE", "True"] {
            assert!(boolean(text).unwrap(), "text: {text:?}");
        }
        for text in ["0", "f", "F", "false", "FALSE", "False"] {
            assert!(!boolean(text).unwrap(), "text: {text:?}");
        }
    }

    #[test]
    fn resource_terms_are_rejected() {
        assert!(matches!(
            GenericLiteral::from_term(Term::resource("http://ex.org/a")),
            Err(OxowlError::Validation(_))
        ));
    }
}
