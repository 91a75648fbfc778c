//! Atomic term values for subject, predicate and object slots.

use std::fmt;

/// An RDF term: a resource (URI) or a literal value.
///
/// A literal carries at most one of a language tag or a datatype URI. The
/// canonical text encoding is the N-Triples form: `<uri>` for resources and
/// `"value"`, `"value"@lang` or `"value"^^<datatype>` for literals. Encoding
/// round-trips through [`Term::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A resource identified by its URI.
    Resource { uri: String },
    /// A literal value with an optional language tag or datatype URI.
    Literal {
        value: String,
        language: Option<String>,
        datatype: Option<String>,
    },
}

impl Term {
    /// Creates a resource term.
    pub fn resource(uri: impl Into<String>) -> Self {
        Term::Resource { uri: uri.into() }
    }

    /// Creates a plain literal term.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// Creates a language-tagged literal term. An empty language tag yields
    /// a plain literal.
    pub fn literal_with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        let language = language.into();
        Term::Literal {
            value: value.into(),
            language: if language.is_empty() {
                None
            } else {
                Some(language)
            },
            datatype: None,
        }
    }

    /// Creates a typed literal term. An empty datatype URI yields a plain
    /// literal.
    pub fn literal_with_datatype(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        let datatype = datatype.into();
        Term::Literal {
            value: value.into(),
            language: None,
            datatype: if datatype.is_empty() {
                None
            } else {
                Some(datatype)
            },
        }
    }

    /// Decodes a term from its canonical text encoding.
    ///
    /// Returns `None` for malformed text, including the empty string and
    /// literals carrying both a language tag and a datatype suffix (the two
    /// are mutually exclusive in this model).
    pub fn parse(text: &str) -> Option<Term> {
        if text.len() <= 2 {
            return None;
        }
        if let Some(inner) = text.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
            if inner.is_empty() {
                return None;
            }
            return Some(Term::resource(inner));
        }
        let body = text.strip_prefix('"')?;
        // "value"^^<datatype>
        if let Some(pos) = body.rfind("\"^^<") {
            let (value, rest) = body.split_at(pos);
            let datatype = rest.strip_prefix("\"^^<")?.strip_suffix('>')?;
            if datatype.is_empty() || value.contains("\"@") {
                return None;
            }
            return Some(Term::literal_with_datatype(value, datatype));
        }
        // "value"@lang
        if let Some(pos) = body.rfind("\"@") {
            let (value, rest) = body.split_at(pos);
            let language = rest.strip_prefix("\"@")?;
            let well_formed = !language.is_empty()
                && language
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-');
            if !well_formed {
                return None;
            }
            return Some(Term::literal_with_language(value, language));
        }
        // "value"
        let value = body.strip_suffix('"')?;
        if value.contains('"') {
            return None;
        }
        Some(Term::literal(value))
    }

    /// Returns true if the term is a resource.
    pub fn is_resource(&self) -> bool {
        matches!(self, Term::Resource { .. })
    }

    /// Returns true if the term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    /// Returns the value of the term: the URI for resources, the lexical
    /// value for literals.
    pub fn value(&self) -> &str {
        match self {
            Term::Resource { uri } => uri,
            Term::Literal { value, .. } => value,
        }
    }

    /// Returns the language tag, or the empty string if the term is not a
    /// language-tagged literal.
    pub fn language(&self) -> &str {
        match self {
            Term::Literal {
                language: Some(lang),
                ..
            } => lang,
            _ => "",
        }
    }

    /// Returns the datatype URI, or the empty string if the term is not a
    /// typed literal.
    pub fn datatype(&self) -> &str {
        match self {
            Term::Literal {
                datatype: Some(dt), ..
            } => dt,
            _ => "",
        }
    }

    /// Returns the canonical text encoding of the term.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Resource { uri } => write!(f, "<{uri}>"),
            Term::Literal {
                value,
                language: Some(lang),
                ..
            } => write!(f, "\"{value}\"@{lang}"),
            Term::Literal {
                value,
                datatype: Some(dt),
                ..
            } => write!(f, "\"{value}\"^^<{dt}>"),
            Term::Literal { value, .. } => write!(f, "\"{value}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_round_trip() {
        let term = Term::resource("https://example.org/zoo#Animal");
        assert!(term.is_resource());
        assert!(!term.is_literal());
        assert_eq!(term.value(), "https://example.org/zoo#Animal");
        assert_eq!(term.language(), "");
        assert_eq!(term.datatype(), "");
        assert_eq!(term.encode(), "<https://example.org/zoo#Animal>");
        assert_eq!(Term::parse(&term.encode()), Some(term));
    }

    #[test]
    fn plain_literal_round_trip() {
        let term = Term::literal("hello world");
        assert!(term.is_literal());
        assert_eq!(term.value(), "hello world");
        assert_eq!(term.language(), "");
        assert_eq!(term.datatype(), "");
        assert_eq!(term.encode(), "\"hello world\"");
        assert_eq!(Term::parse(&term.encode()), Some(term));
    }

    #[test]
    fn language_literal_round_trip() {
        let term = Term::literal_with_language("hallo", "de");
        assert_eq!(term.value(), "hallo");
        assert_eq!(term.language(), "de");
        assert_eq!(term.datatype(), "");
        assert_eq!(term.encode(), "\"hallo\"@de");
        assert_eq!(Term::parse(&term.encode()), Some(term));
    }

    #[test]
    fn typed_literal_round_trip() {
        let term = Term::literal_with_datatype("42", "http://www.w3.org/2001/XMLSchema#integer");
        assert_eq!(term.value(), "42");
        assert_eq!(term.language(), "");
        assert_eq!(term.datatype(), "http://www.w3.org/2001/XMLSchema#integer");
        assert_eq!(
            term.encode(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        assert_eq!(Term::parse(&term.encode()), Some(term));
    }

    #[test]
    fn empty_tags_collapse_to_plain_literal() {
        assert_eq!(Term::literal_with_language("v", ""), Term::literal("v"));
        assert_eq!(Term::literal_with_datatype("v", ""), Term::literal("v"));
    }

    #[test]
    fn malformed_text_parses_as_neither() {
        for text in ["", "x", "<>", "plain", "<unclosed", "\"unclosed", "\"\""] {
            assert_eq!(Term::parse(text), None, "text: {text:?}");
        }
    }

    #[test]
    fn dual_language_and_datatype_is_rejected() {
        // Language tags and datatypes are mutually exclusive; text carrying
        // both decodes as neither.
        assert_eq!(
            Term::parse("\"v\"@en^^<http://www.w3.org/2001/XMLSchema#string>"),
            None
        );
    }
}
