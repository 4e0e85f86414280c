//! Wire shape of the [SPARQL 1.1 Query Results JSON Format](https://www.w3.org/TR/sparql11-results-json/).
//!
//! The document is read and written as a whole. The serialization side is a
//! passthrough of the standard shape, the export path does not reshape
//! anything.

use crate::{QueryResults, QueryResultsParseError, QuerySolution, QuerySolutions, Term};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct JsonDocument {
    #[serde(default)]
    head: JsonHead,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    boolean: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    results: Option<JsonResults>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonHead {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    vars: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    link: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonResults {
    #[serde(default)]
    bindings: Vec<HashMap<String, JsonTerm>>,
}

/// One RDF term as it appears on the wire.
///
/// `typed-literal` is the alias older endpoints emit for datatyped literals,
/// it is folded into [Term::Literal] on input and never written back.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonTerm {
    Uri {
        value: String,
    },
    Bnode {
        value: String,
    },
    Literal {
        value: String,
        #[serde(
            rename = "xml:lang",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        lang: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
    },
    #[serde(rename = "typed-literal")]
    TypedLiteral { value: String, datatype: String },
}

impl From<JsonTerm> for Term {
    fn from(term: JsonTerm) -> Self {
        match term {
            JsonTerm::Uri { value } => Term::Uri { value },
            JsonTerm::Bnode { value } => Term::BlankNode { value },
            JsonTerm::Literal {
                value,
                lang,
                datatype,
            } => Term::Literal {
                value,
                language: lang,
                datatype,
            },
            JsonTerm::TypedLiteral { value, datatype } => Term::Literal {
                value,
                language: None,
                datatype: Some(datatype),
            },
        }
    }
}

impl From<&Term> for JsonTerm {
    fn from(term: &Term) -> Self {
        match term {
            Term::Uri { value } => JsonTerm::Uri {
                value: value.clone(),
            },
            Term::BlankNode { value } => JsonTerm::Bnode {
                value: value.clone(),
            },
            Term::Literal {
                value,
                language,
                datatype,
            } => JsonTerm::Literal {
                value: value.clone(),
                lang: language.clone(),
                datatype: datatype.clone(),
            },
        }
    }
}

pub(crate) fn parse_document(
    document: JsonDocument,
) -> Result<QueryResults, QueryResultsParseError> {
    if let Some(value) = document.boolean {
        return Ok(QueryResults::Boolean(value));
    }
    let Some(results) = document.results else {
        return Err(QueryResultsParseError::MissingResults);
    };
    let solutions = results
        .bindings
        .into_iter()
        .map(|bindings| {
            bindings
                .into_iter()
                .map(|(name, term)| (name, term.into()))
                .collect::<QuerySolution>()
        })
        .collect();
    Ok(QueryResults::Solutions(QuerySolutions::new(
        document.head.vars,
        solutions,
    )))
}

pub(crate) fn serialize_document(results: &QueryResults) -> serde_json::Result<String> {
    let document = match results {
        QueryResults::Boolean(value) => JsonDocument {
            head: JsonHead::default(),
            boolean: Some(*value),
            results: None,
        },
        QueryResults::Solutions(solutions) => JsonDocument {
            head: JsonHead {
                vars: solutions.variables().to_vec(),
                link: Vec::new(),
            },
            boolean: None,
            results: Some(JsonResults {
                bindings: solutions
                    .solutions()
                    .iter()
                    .map(|solution| {
                        solution
                            .bindings()
                            .map(|(name, term)| (name.to_owned(), term.into()))
                            .collect()
                    })
                    .collect(),
            }),
        },
    };
    serde_json::to_string(&document)
}
