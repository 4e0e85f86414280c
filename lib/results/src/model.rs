use crate::{csv, json, QueryResultsParseError};
use std::collections::HashMap;
use std::io::Read;

/// A single RDF term bound to a variable in one solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Uri {
        value: String,
    },
    BlankNode {
        value: String,
    },
    Literal {
        value: String,
        language: Option<String>,
        datatype: Option<String>,
    },
}

impl Term {
    /// The lexical value of the term, without any type decoration.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Term::Uri { value } | Term::BlankNode { value } | Term::Literal { value, .. } => value,
        }
    }
}

/// One row of a tuple or graph query result.
///
/// Variables that are absent from the row are unbound. Unbound variables are
/// not an error, they serialize as empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySolution {
    bindings: HashMap<String, Term>,
}

impl QuerySolution {
    /// The term bound to `variable`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, variable: &str) -> Option<&Term> {
        self.bindings.get(variable)
    }

    #[inline]
    #[must_use]
    pub fn is_bound(&self, variable: &str) -> bool {
        self.bindings.contains_key(variable)
    }

    /// The lexical value bound to `variable`, the empty string when unbound.
    ///
    /// This is the key the in-memory sort compares on.
    #[inline]
    #[must_use]
    pub fn value_or_default(&self, variable: &str) -> &str {
        self.get(variable).map_or("", Term::value)
    }

    /// Iterates over the bound variables and their terms, in no defined order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.bindings
            .iter()
            .map(|(name, term)| (name.as_str(), term))
    }
}

impl FromIterator<(String, Term)> for QuerySolution {
    fn from_iter<T: IntoIterator<Item = (String, Term)>>(iter: T) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

/// The binding table of a tuple or graph query result.
///
/// Row order is the order the endpoint returned, except after an explicit
/// [sort](Self::sort_ascending). Paging is a display window over the already
/// fetched rows and never affects export, which always covers all rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySolutions {
    variables: Vec<String>,
    solutions: Vec<QuerySolution>,
}

impl QuerySolutions {
    /// The page size the result tables of the client display.
    pub const DEFAULT_PAGE_SIZE: usize = 100;

    pub fn new(variables: Vec<String>, solutions: Vec<QuerySolution>) -> Self {
        Self {
            variables,
            solutions,
        }
    }

    /// The variable names, in projection order.
    #[inline]
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[QuerySolution] {
        &self.solutions
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Sorts the rows by the lexical value of `variable`, smallest first.
    ///
    /// The sort is stable and in place. Unbound variables compare as the
    /// empty string and therefore sort first.
    pub fn sort_ascending(&mut self, variable: &str) {
        self.solutions
            .sort_by(|a, b| a.value_or_default(variable).cmp(b.value_or_default(variable)));
    }

    /// Sorts the rows by the lexical value of `variable`, largest first.
    pub fn sort_descending(&mut self, variable: &str) {
        self.solutions
            .sort_by(|a, b| b.value_or_default(variable).cmp(a.value_or_default(variable)));
    }

    /// The rows of the zero-based page `index`.
    ///
    /// The last page may be shorter than `size`, pages past the end are
    /// empty. A zero `size` is a contract violation.
    #[must_use]
    pub fn page(&self, index: usize, size: usize) -> &[QuerySolution] {
        assert!(size > 0, "page size must be positive");
        let start = index.saturating_mul(size).min(self.solutions.len());
        let end = start.saturating_add(size).min(self.solutions.len());
        &self.solutions[start..end]
    }

    /// The number of pages of `size` rows needed to display all rows.
    #[must_use]
    pub fn page_count(&self, size: usize) -> usize {
        assert!(size > 0, "page size must be positive");
        self.solutions.len().div_ceil(size)
    }
}

/// The outcome of a SPARQL query, freshly built on every execution.
///
/// Tuple (`SELECT`) and graph (`CONSTRUCT`/`DESCRIBE`) results share the
/// binding-table shape, `ASK` yields a single boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResults {
    Solutions(QuerySolutions),
    Boolean(bool),
}

impl QueryResults {
    /// Reads a [SPARQL 1.1 Query Results JSON](https://www.w3.org/TR/sparql11-results-json/) document.
    pub fn from_json_str(data: &str) -> Result<Self, QueryResultsParseError> {
        json::parse_document(serde_json::from_str(data)?)
    }

    /// Reads a [SPARQL 1.1 Query Results JSON](https://www.w3.org/TR/sparql11-results-json/) document.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, QueryResultsParseError> {
        json::parse_document(serde_json::from_slice(data)?)
    }

    /// Reads a [SPARQL 1.1 Query Results JSON](https://www.w3.org/TR/sparql11-results-json/) document.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, QueryResultsParseError> {
        json::parse_document(serde_json::from_reader(reader)?)
    }

    /// Serializes into the [SPARQL 1.1 Query Results CSV format](https://www.w3.org/TR/sparql11-results-csv-tsv/).
    #[must_use]
    pub fn to_csv(&self) -> String {
        csv::serialize_csv(self)
    }

    /// Serializes into the [SPARQL 1.1 Query Results TSV format](https://www.w3.org/TR/sparql11-results-csv-tsv/).
    #[must_use]
    pub fn to_tsv(&self) -> String {
        csv::serialize_tsv(self)
    }

    /// Serializes back into the standard JSON shape, without reshaping.
    pub fn to_json(&self) -> serde_json::Result<String> {
        json::serialize_document(self)
    }
}
