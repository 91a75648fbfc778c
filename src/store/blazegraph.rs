//! Remote SPARQL backend for Blazegraph databases.
//!
//! A [`BlazegraphEndpoint`] wraps one database host and its namespace
//! administration API; a [`BlazegraphStore`] binds a named graph inside one
//! namespace to the [`GraphStore`] contract. Every store operation maps to a
//! SPARQL 1.1 query or update against
//! `{host}/bigdata/namespace/{namespace}/sparql`.

use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::model::{Term, Triple};
use crate::store::{turtle, validate_pattern, GraphStore};
use crate::vocab;
use crate::{OxowlError, Result};

impl From<reqwest::Error> for OxowlError {
    fn from(err: reqwest::Error) -> Self {
        OxowlError::Backend(err.to_string())
    }
}

/// Configuration for a [`BlazegraphEndpoint`].
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// User agent presented to the database.
    pub user_agent: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            timeout: Duration::from_secs(30),
            user_agent: concat!("oxowl/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// HTTP client for one Blazegraph host.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BlazegraphEndpoint {
    host: String,
    client: Client,
}

impl BlazegraphEndpoint {
    /// Connects to the given host (e.g. `http://localhost:9999`) with the
    /// default configuration.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        Self::with_config(host, EndpointConfig::default())
    }

    /// Connects to the given host with an explicit configuration.
    pub fn with_config(host: impl Into<String>, config: EndpointConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(BlazegraphEndpoint {
            host: host.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Binds a named graph in a namespace to a [`BlazegraphStore`].
    ///
    /// Neither the namespace nor the graph is checked for existence.
    pub fn store(&self, uri: impl Into<String>, namespace: impl Into<String>) -> BlazegraphStore {
        BlazegraphStore {
            uri: uri.into(),
            namespace: namespace.into(),
            endpoint: self.clone(),
            dropped: false,
        }
    }

    /// Checks whether the database answers its status endpoint.
    pub fn is_online(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}/bigdata/status", self.host))
            .send()?;
        Ok(response.status() == StatusCode::OK)
    }

    /// Lists the namespaces present in the database.
    pub fn namespaces(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!(
                "{}/bigdata/namespace?describe-each-named-graph=false",
                self.host
            ))
            .send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(OxowlError::Backend(format!(
                "failed to query namespaces (HTTP {status})"
            )));
        }
        Ok(parse_namespaces(&response.text()?))
    }

    /// Creates a namespace with the given id.
    ///
    /// The id must not contain special characters or `.`.
    pub fn create_namespace(&self, id: &str) -> Result<()> {
        let payload = namespace_properties(id);
        let response = self
            .client
            .post(format!("{}/bigdata/namespace", self.host))
            .header("Content-Type", "text/plain")
            .body(payload)
            .send()?;
        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(OxowlError::Backend(format!(
                "failed to create namespace '{id}' (HTTP {status})"
            )));
        }
        tracing::debug!(namespace = id, "created blazegraph namespace");
        Ok(())
    }

    /// Removes the namespace with the given id and all graphs in it.
    pub fn drop_namespace(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/bigdata/namespace/{id}", self.host))
            .send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(OxowlError::Backend(format!(
                "failed to delete namespace '{id}' (HTTP {status})"
            )));
        }
        tracing::debug!(namespace = id, "dropped blazegraph namespace");
        Ok(())
    }

    /// Checks whether a namespace with the given id exists.
    pub fn namespace_exists(&self, id: &str) -> Result<bool> {
        Ok(self.namespaces()?.iter().any(|n| n == id))
    }

    /// Inserts a block of Turtle statements into a named graph.
    pub fn insert_turtle_data(&self, namespace: &str, uri: &str, data: &str) -> Result<()> {
        let update = format!("INSERT DATA {{ GRAPH <{uri}> {{ {data} }} }}");
        let status = self.update(namespace, &update)?;
        if status == StatusCode::NOT_FOUND {
            return Err(OxowlError::Backend(format!(
                "namespace '{namespace}' does not exist (HTTP 404)"
            )));
        }
        if status != StatusCode::OK {
            return Err(OxowlError::Backend(format!(
                "failed to insert turtle data into graph '{uri}' (HTTP {status})"
            )));
        }
        Ok(())
    }

    fn sparql_url(&self, namespace: &str) -> String {
        format!("{}/bigdata/namespace/{namespace}/sparql", self.host)
    }

    fn json_query(&self, namespace: &str, query: &str) -> Result<(StatusCode, JsonResultSet)> {
        tracing::trace!(namespace, query, "sparql json query");
        let response = self
            .client
            .post(self.sparql_url(namespace))
            .header(ACCEPT, "application/sparql-results+json")
            .form(&[("query", query)])
            .send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Ok((status, JsonResultSet::default()));
        }
        Ok((status, response.json()?))
    }

    fn turtle_query(&self, namespace: &str, query: &str) -> Result<(StatusCode, Vec<u8>)> {
        tracing::trace!(namespace, query, "sparql turtle query");
        let response = self
            .client
            .post(self.sparql_url(namespace))
            .header(ACCEPT, "application/x-turtle")
            .form(&[("query", query)])
            .send()?;
        let status = response.status();
        Ok((status, response.bytes()?.to_vec()))
    }

    fn update(&self, namespace: &str, update: &str) -> Result<StatusCode> {
        tracing::trace!(namespace, update, "sparql update");
        let response = self
            .client
            .post(self.sparql_url(namespace))
            .form(&[("update", update)])
            .send()?;
        Ok(response.status())
    }
}

fn namespace_properties(id: &str) -> String {
    format!(
        "com.bigdata.rdf.store.AbstractTripleStore.vocabularyClass=com.bigdata.rdf.vocab.core.BigdataCoreVocabulary_v20160317\n\
         com.bigdata.rdf.store.AbstractTripleStore.textIndex=false\n\
         com.bigdata.rdf.store.AbstractTripleStore.axiomsClass=com.bigdata.rdf.axioms.NoAxioms\n\
         com.bigdata.rdf.sail.isolatableIndices=false\n\
         com.bigdata.rdf.store.AbstractTripleStore.justify=false\n\
         com.bigdata.rdf.sail.truthMaintenance=false\n\
         com.bigdata.namespace.{id}.spo.com.bigdata.btree.BTree.branchingFactor=1024\n\
         com.bigdata.rdf.sail.namespace={id}\n\
         com.bigdata.rdf.store.AbstractTripleStore.quads=true\n\
         com.bigdata.namespace.{id}.lex.com.bigdata.btree.BTree.branchingFactor=400\n\
         com.bigdata.rdf.store.AbstractTripleStore.geoSpatial=false\n\
         com.bigdata.rdf.store.AbstractTripleStore.statementIdentifiers=false\n"
    )
}

/// Extracts namespace ids from the namespace listing, which references each
/// namespace through its `/bigdata/namespace/{id}/sparql` endpoint URL.
fn parse_namespaces(body: &str) -> Vec<String> {
    let mut namespaces: Vec<String> = Vec::new();
    for chunk in body.split("/bigdata/namespace/").skip(1) {
        if let Some(end) = chunk.find("/sparql") {
            let id = &chunk[..end];
            if !id.is_empty() && !namespaces.iter().any(|n| n == id) {
                namespaces.push(id.to_string());
            }
        }
    }
    namespaces
}

/// SPARQL 1.1 JSON result set, reduced to the fields the store consumes.
#[derive(Debug, Default, Deserialize)]
struct JsonResultSet {
    #[serde(default)]
    results: JsonResults,
    #[serde(default)]
    boolean: bool,
}

#[derive(Debug, Default, Deserialize)]
struct JsonResults {
    #[serde(default)]
    bindings: Vec<HashMap<String, JsonBinding>>,
}

#[derive(Debug, Default, Deserialize)]
struct JsonBinding {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    value: String,
    #[serde(rename = "xml:lang", default)]
    lang: Option<String>,
    #[serde(default)]
    datatype: Option<String>,
}

fn binding_to_term(binding: &JsonBinding) -> Result<Term> {
    match binding.kind.as_str() {
        "uri" => Ok(Term::resource(binding.value.as_str())),
        "literal" | "typed-literal" => Ok(match (&binding.lang, &binding.datatype) {
            (Some(lang), _) if !lang.is_empty() => {
                Term::literal_with_language(binding.value.as_str(), lang)
            }
            (_, Some(datatype)) if !datatype.is_empty() => {
                Term::literal_with_datatype(binding.value.as_str(), datatype)
            }
            _ => Term::literal(binding.value.as_str()),
        }),
        other => Err(OxowlError::Backend(format!(
            "unsupported result set binding type '{other}'"
        ))),
    }
}

/// Renders a pattern slot as either the bound term or a SPARQL variable.
fn pattern_slot(term: Option<&Term>, var: &str) -> String {
    match term {
        Some(term) => term.encode(),
        None => format!("?{var}"),
    }
}

/// A [`GraphStore`] backed by a named graph in a Blazegraph namespace.
///
/// Suitable for ontologies that do not fit into memory; every operation is
/// one or two HTTP round trips.
#[derive(Debug, Clone)]
pub struct BlazegraphStore {
    uri: String,
    namespace: String,
    endpoint: BlazegraphEndpoint,
    dropped: bool,
}

impl BlazegraphStore {
    fn ensure_live(&self) -> Result<()> {
        if self.dropped {
            return Err(OxowlError::Backend("store has been dropped".into()));
        }
        Ok(())
    }

    fn triple_exists(&self, triple: &Triple) -> Result<bool> {
        let query = format!(
            "ASK WHERE {{ GRAPH <{}> {{ {} {} {} }} }}",
            self.uri,
            triple.subject.encode(),
            triple.predicate.encode(),
            triple.object.encode()
        );
        let (status, result) = self.endpoint.json_query(&self.namespace, &query)?;
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if status != StatusCode::OK {
            return Err(OxowlError::Backend(format!(
                "failed to execute ASK query on namespace '{}' (HTTP {status})",
                self.namespace
            )));
        }
        Ok(result.boolean)
    }

    /// Runs an update that writes a block of statements into the graph and
    /// maps the response status. 404 is absorbed for deletions, where an
    /// absent namespace means there is nothing to delete.
    fn write_statements(&self, verb: &str, triples: &[Triple], absorb_missing: bool) -> Result<()> {
        let mut statements = String::new();
        for triple in triples {
            statements.push_str(&format!("{triple} . "));
        }
        let update = format!("{verb} DATA {{ GRAPH <{}> {{ {statements} }} }}", self.uri);
        let status = self.endpoint.update(&self.namespace, &update)?;
        if status == StatusCode::NOT_FOUND {
            if absorb_missing {
                return Ok(());
            }
            return Err(OxowlError::Backend(format!(
                "namespace '{}' does not exist (HTTP 404)",
                self.namespace
            )));
        }
        if status != StatusCode::OK {
            return Err(OxowlError::Backend(format!(
                "failed to {} triples in graph '{}' on namespace '{}' (HTTP {status})",
                verb.to_lowercase(),
                self.uri,
                self.namespace
            )));
        }
        Ok(())
    }
}

impl GraphStore for BlazegraphStore {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn get_first_match(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Result<Option<Triple>> {
        // TODO: push a LIMIT 1 into the query instead of fetching all matches
        Ok(self
            .get_all_matches(subject, predicate, object)?
            .into_iter()
            .next())
    }

    fn get_all_matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Result<Vec<Triple>> {
        validate_pattern(subject, predicate)?;
        let query = format!(
            "SELECT ?s ?p ?o WHERE {{ GRAPH <{}> {{ {} {} {} . }} }}",
            self.uri,
            pattern_slot(subject, "s"),
            pattern_slot(predicate, "p"),
            pattern_slot(object, "o")
        );
        let (status, result) = self.endpoint.json_query(&self.namespace, &query)?;
        if status != StatusCode::OK {
            return Err(OxowlError::Backend(format!(
                "unexpected status for SPARQL query (HTTP {status}): {query}"
            )));
        }

        let mut triples = Vec::with_capacity(result.results.bindings.len());
        for binding in &result.results.bindings {
            let slot = |fixed: Option<&Term>, var: &str| -> Result<Term> {
                match fixed {
                    Some(term) => Ok(term.clone()),
                    None => {
                        let bound = binding.get(var).ok_or_else(|| {
                            OxowlError::Backend(format!("result row is missing variable '{var}'"))
                        })?;
                        binding_to_term(bound)
                    }
                }
            };
            triples.push(Triple {
                subject: slot(subject, "s")?,
                predicate: slot(predicate, "p")?,
                object: slot(object, "o")?,
            });
        }
        Ok(triples)
    }

    fn add_triple(&mut self, triple: &Triple) -> Result<()> {
        self.ensure_live()?;
        if self.triple_exists(triple)? {
            return Err(OxowlError::TripleAlreadyExists);
        }
        self.add_triple_unchecked(triple)
    }

    fn add_triple_unchecked(&mut self, triple: &Triple) -> Result<()> {
        self.ensure_live()?;
        self.write_statements("INSERT", std::slice::from_ref(triple), false)
    }

    fn add_triples_unchecked(&mut self, triples: &[Triple]) -> Result<()> {
        self.ensure_live()?;
        if triples.is_empty() {
            return Ok(());
        }
        // One round trip for the whole batch.
        self.write_statements("INSERT", triples, false)
    }

    fn delete_triple(&mut self, triple: &Triple) -> Result<()> {
        self.ensure_live()?;
        if !self.triple_exists(triple)? {
            return Err(OxowlError::TripleDoesNotExist);
        }
        self.delete_triple_unchecked(triple)
    }

    fn delete_triple_unchecked(&mut self, triple: &Triple) -> Result<()> {
        self.ensure_live()?;
        self.write_statements("DELETE", std::slice::from_ref(triple), true)
    }

    fn delete_triples_unchecked(&mut self, triples: &[Triple]) -> Result<()> {
        self.ensure_live()?;
        if triples.is_empty() {
            return Ok(());
        }
        self.write_statements("DELETE", triples, true)
    }

    fn delete_all_matches(
        &mut self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Result<()> {
        self.ensure_live()?;
        validate_pattern(subject, predicate)?;
        let update = format!(
            "DELETE WHERE {{ GRAPH <{}> {{ {} {} {} . }} }}",
            self.uri,
            pattern_slot(subject, "s"),
            pattern_slot(predicate, "p"),
            pattern_slot(object, "o")
        );
        let status = self.endpoint.update(&self.namespace, &update)?;
        if status == StatusCode::NOT_FOUND {
            return Ok(());
        }
        if status != StatusCode::OK {
            return Err(OxowlError::Backend(format!(
                "failed to delete triples from graph '{}' on namespace '{}' (HTTP {status})",
                self.uri, self.namespace
            )));
        }
        Ok(())
    }

    fn drop_store(&mut self) -> Result<()> {
        self.ensure_live()?;
        let query = format!("ASK WHERE {{ GRAPH <{}> {{ ?s ?p ?o }} }}", self.uri);
        let (status, result) = self.endpoint.json_query(&self.namespace, &query)?;
        if status == StatusCode::NOT_FOUND || (status == StatusCode::OK && !result.boolean) {
            return Err(OxowlError::Backend(format!(
                "graph '{}' does not exist on namespace '{}'",
                self.uri, self.namespace
            )));
        }
        if status != StatusCode::OK {
            return Err(OxowlError::Backend(format!(
                "failed to query for existence of graph '{}' (HTTP {status})",
                self.uri
            )));
        }

        let update = format!("DROP GRAPH <{}>", self.uri);
        let status = self.endpoint.update(&self.namespace, &update)?;
        if status != StatusCode::OK {
            return Err(OxowlError::Backend(format!(
                "failed to drop graph '{}' on namespace '{}' (HTTP {status})",
                self.uri, self.namespace
            )));
        }
        tracing::debug!(uri = %self.uri, namespace = %self.namespace, "dropped remote store");
        self.uri.clear();
        self.namespace.clear();
        self.dropped = true;
        Ok(())
    }

    fn serialize_to_turtle(&self, writer: &mut dyn Write, pretty: bool) -> Result<()> {
        if !pretty {
            let query = format!(
                "CONSTRUCT {{ ?s ?p ?o }} FROM <{}> WHERE {{ ?s ?p ?o . }}",
                self.uri
            );
            let (status, body) = self.endpoint.turtle_query(&self.namespace, &query)?;
            if status != StatusCode::OK {
                return Err(OxowlError::Backend(format!(
                    "failed to query graph '{}' (HTTP {status})",
                    self.uri
                )));
            }
            writer.write_all(&body)?;
            return Ok(());
        }

        let triples = self.get_all_triples()?;
        let base = Term::resource(self.uri.as_str());
        let imports: Vec<String> = self
            .get_all_matches(Some(&base), Some(&vocab::owl::IMPORTS), None)?
            .into_iter()
            .map(|t| t.object.value().to_string())
            .collect();
        turtle::write_pretty(&self.uri, &imports, &triples, writer)
    }

    fn len(&self) -> Result<usize> {
        let query = format!(
            "SELECT (COUNT(*) as ?n) FROM <{}> WHERE {{ ?s ?p ?o }}",
            self.uri
        );
        let (status, result) = self.endpoint.json_query(&self.namespace, &query)?;
        if status != StatusCode::OK {
            return Err(OxowlError::Backend(format!(
                "failed to execute COUNT query on namespace '{}' (HTTP {status})",
                self.namespace
            )));
        }
        let count = result
            .results
            .bindings
            .first()
            .and_then(|row| row.get("n"))
            .ok_or_else(|| OxowlError::Backend("COUNT query returned no binding".into()))?;
        count
            .value
            .parse()
            .map_err(|_| OxowlError::Parse(format!("invalid COUNT value '{}'", count.value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_namespaces_extracts_ids() {
        let body = r#"
            <http://localhost:9999/bigdata/namespace/kb/sparql> a <x> .
            <http://localhost:9999/bigdata/namespace/zoo/sparql> a <x> .
            <http://localhost:9999/bigdata/namespace/kb/sparql> b <y> .
        "#;
        assert_eq!(parse_namespaces(body), vec!["kb", "zoo"]);
        assert!(parse_namespaces("no endpoints here").is_empty());
    }

    #[test]
    fn namespace_properties_bind_the_id() {
        let payload = namespace_properties("zoo");
        assert!(payload.contains("com.bigdata.rdf.sail.namespace=zoo"));
        assert!(payload.contains("com.bigdata.namespace.zoo.spo"));
        assert!(payload.contains("com.bigdata.rdf.store.AbstractTripleStore.quads=true"));
    }

    #[test]
    fn result_set_decodes_select_bindings() {
        let raw = r#"{
            "head": { "vars": ["s", "o"] },
            "results": { "bindings": [
                { "s": { "type": "uri", "value": "http://ex.org/a" },
                  "o": { "type": "literal", "value": "Lion", "xml:lang": "en" } },
                { "s": { "type": "uri", "value": "http://ex.org/b" },
                  "o": { "type": "typed-literal", "value": "4",
                         "datatype": "http://www.w3.org/2001/XMLSchema#integer" } }
            ] }
        }"#;
        let result: JsonResultSet = serde_json::from_str(raw).unwrap();
        assert_eq!(result.results.bindings.len(), 2);

        let first = &result.results.bindings[0];
        assert_eq!(
            binding_to_term(&first["s"]).unwrap(),
            Term::resource("http://ex.org/a")
        );
        assert_eq!(
            binding_to_term(&first["o"]).unwrap(),
            Term::literal_with_language("Lion", "en")
        );

        let second = &result.results.bindings[1];
        assert_eq!(
            binding_to_term(&second["o"]).unwrap(),
            Term::literal_with_datatype("4", "http://www.w3.org/2001/XMLSchema#integer")
        );
    }

    #[test]
    fn result_set_decodes_ask_response() {
        let result: JsonResultSet = serde_json::from_str(r#"{ "boolean": true }"#).unwrap();
        assert!(result.boolean);
        let result: JsonResultSet = serde_json::from_str(r#"{ "boolean": false }"#).unwrap();
        assert!(!result.boolean);
    }

    #[test]
    fn bnode_bindings_are_rejected() {
        let binding = JsonBinding {
            kind: "bnode".into(),
            value: "t123".into(),
            lang: None,
            datatype: None,
        };
        assert!(matches!(
            binding_to_term(&binding),
            Err(OxowlError::Backend(_))
        ));
    }

    #[test]
    fn pattern_slots_render_terms_or_variables() {
        let term = Term::resource("http://ex.org/a");
        assert_eq!(pattern_slot(Some(&term), "s"), "<http://ex.org/a>");
        assert_eq!(pattern_slot(None, "s"), "?s");
        let literal = Term::literal_with_language("Lion", "en");
        assert_eq!(pattern_slot(Some(&literal), "o"), "\"Lion\"@en");
    }
}
