//! Turtle emission shared by the storage backends.
//!
//! The non-pretty form is a direct dump of the triple set, one `<s> <p> <o> .`
//! statement per line. The pretty form prepends a prefix block and `@base`
//! line, abbreviates every URI covered by a known prefix and leaves a blank
//! line after each triple.

use std::io::Write;

use crate::model::{Term, Triple};
use crate::vocab;
use crate::Result;

/// Writes the direct Turtle dump of the triple set.
pub(crate) fn write_dump(triples: &[Triple], writer: &mut dyn Write) -> Result<()> {
    for triple in triples {
        writeln!(
            writer,
            "{} {} {} .",
            format_term(&triple.subject, &[]),
            format_term(&triple.predicate, &[]),
            format_term(&triple.object, &[])
        )?;
    }
    Ok(())
}

/// Writes the pretty-printed Turtle form.
///
/// The prefix table is seeded with rdf/rdfs/owl/xsd plus the empty prefix
/// bound to `<base_uri>#`, and extended with one entry per distinct import
/// URI keyed by the import's last path segment (later imports replace an
/// earlier entry with the same key).
pub(crate) fn write_pretty(
    base_uri: &str,
    imports: &[String],
    triples: &[Triple],
    writer: &mut dyn Write,
) -> Result<()> {
    let mut prefixes: Vec<(String, String)> = vec![
        ("rdf".into(), vocab::rdf::NAMESPACE.into()),
        ("rdfs".into(), vocab::rdfs::NAMESPACE.into()),
        ("owl".into(), vocab::owl::NAMESPACE.into()),
        ("xsd".into(), vocab::xsd::NAMESPACE.into()),
        (String::new(), format!("{base_uri}#")),
    ];
    for import in imports {
        let alias = import.rsplit('/').next().unwrap_or("").to_string();
        let namespace = format!("{import}#");
        match prefixes.iter_mut().find(|(a, _)| *a == alias) {
            Some(entry) => entry.1 = namespace,
            None => prefixes.push((alias, namespace)),
        }
    }

    for (alias, namespace) in &prefixes {
        writeln!(writer, "@prefix {alias}: <{namespace}> .")?;
    }
    writeln!(writer, "@base <{base_uri}> .")?;
    writeln!(writer)?;

    for triple in triples {
        writeln!(
            writer,
            "{} {} {} .",
            format_term(&triple.subject, &prefixes),
            format_term(&triple.predicate, &prefixes),
            format_term(&triple.object, &prefixes)
        )?;
        writeln!(writer)?;
    }
    Ok(())
}

fn format_term(term: &Term, prefixes: &[(String, String)]) -> String {
    match term {
        Term::Resource { uri } => abbreviate(uri, prefixes),
        Term::Literal {
            value,
            language: Some(lang),
            ..
        } => format!("{}@{lang}", quote(value)),
        Term::Literal {
            value,
            datatype: Some(dt),
            ..
        } => format!("{}^^{}", quote(value), abbreviate(dt, prefixes)),
        Term::Literal { value, .. } => quote(value),
    }
}

/// Rewrites a bracketed URI into `prefix:suffix` form when a known prefix
/// covers it; the first matching table entry wins.
fn abbreviate(uri: &str, prefixes: &[(String, String)]) -> String {
    for (alias, namespace) in prefixes {
        if let Some(suffix) = uri.strip_prefix(namespace.as_str()) {
            if !suffix.is_empty() {
                return format!("{alias}:{suffix}");
            }
        }
    }
    format!("<{uri}>")
}

fn quote(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    format!("\"{escaped}\"")
}
