//! Serializers for the [SPARQL 1.1 Query Results CSV and TSV Formats](https://www.w3.org/TR/sparql11-results-csv-tsv/).
//!
//! Both formats are written over the full solution sequence, paging never
//! applies to export. CSV records end with CRLF per the recommendation, TSV
//! lines with LF.

use crate::{QueryResults, QuerySolutions, Term};

pub(crate) fn serialize_csv(results: &QueryResults) -> String {
    match results {
        QueryResults::Boolean(value) => format!("result\r\n{value}\r\n"),
        QueryResults::Solutions(solutions) => serialize_csv_solutions(solutions),
    }
}

fn serialize_csv_solutions(solutions: &QuerySolutions) -> String {
    let mut out = String::new();
    out.push_str(&solutions.variables().join(","));
    out.push_str("\r\n");
    for solution in solutions.solutions() {
        let mut first = true;
        for variable in solutions.variables() {
            if !first {
                out.push(',');
            }
            first = false;
            if let Some(term) = solution.get(variable) {
                write_csv_term(&mut out, term);
            }
        }
        out.push_str("\r\n");
    }
    out
}

/// Quotes a CSV field only when it has to be quoted.
///
/// Blank node labels are emitted verbatim with their `_:` prefix restored,
/// their label alphabet never needs quoting.
fn write_csv_term(out: &mut String, term: &Term) {
    if let Term::BlankNode { value } = term {
        if !value.starts_with("_:") {
            out.push_str("_:");
        }
        out.push_str(value);
        return;
    }
    let value = term.value();
    if value.contains(['"', ',', '\n', '\r']) {
        out.push('"');
        for c in value.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
    } else {
        out.push_str(value);
    }
}

pub(crate) fn serialize_tsv(results: &QueryResults) -> String {
    match results {
        // The boolean header keeps the leading `?`, unlike CSV.
        QueryResults::Boolean(value) => format!("?result\n{value}\n"),
        QueryResults::Solutions(solutions) => serialize_tsv_solutions(solutions),
    }
}

fn serialize_tsv_solutions(solutions: &QuerySolutions) -> String {
    let mut out = String::new();
    out.push_str(&solutions.variables().join("\t"));
    out.push('\n');
    for solution in solutions.solutions() {
        let mut first = true;
        for variable in solutions.variables() {
            if !first {
                out.push('\t');
            }
            first = false;
            if let Some(term) = solution.get(variable) {
                write_tsv_term(&mut out, term);
            }
        }
        out.push('\n');
    }
    out
}

fn write_tsv_term(out: &mut String, term: &Term) {
    match term {
        Term::Uri { value } => {
            out.push('<');
            out.push_str(value);
            out.push('>');
        }
        Term::BlankNode { value } => {
            if !value.starts_with("_:") {
                out.push_str("_:");
            }
            out.push_str(value);
        }
        Term::Literal {
            value,
            language,
            datatype,
        } => {
            out.push('"');
            for c in value.chars() {
                match c {
                    '\t' => out.push_str("\\t"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    c => out.push(c),
                }
            }
            out.push('"');
            if let Some(language) = language {
                out.push('@');
                out.push_str(language);
            } else if let Some(datatype) = datatype {
                out.push_str("^^<");
                out.push_str(datatype);
                out.push('>');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuerySolution;

    fn solutions(variables: &[&str], rows: &[&[(&str, Term)]]) -> QueryResults {
        QueryResults::Solutions(QuerySolutions::new(
            variables.iter().map(|v| (*v).to_owned()).collect(),
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|(name, term)| ((*name).to_owned(), term.clone()))
                        .collect::<QuerySolution>()
                })
                .collect(),
        ))
    }

    fn uri(value: &str) -> Term {
        Term::Uri {
            value: value.to_owned(),
        }
    }

    fn literal(value: &str) -> Term {
        Term::Literal {
            value: value.to_owned(),
            language: None,
            datatype: None,
        }
    }

    #[test]
    fn csv_serializes_rows_in_order() {
        let results = solutions(
            &["s", "p"],
            &[
                &[("s", uri("http://example.com/a")), ("p", literal("one"))],
                &[("s", uri("http://example.com/b")), ("p", literal("two"))],
            ],
        );
        assert_eq!(
            results.to_csv(),
            "s,p\r\nhttp://example.com/a,one\r\nhttp://example.com/b,two\r\n"
        );
    }

    #[test]
    fn csv_quotes_fields_with_embedded_quotes() {
        let results = solutions(&["o"], &[&[("o", literal("he said \"hi\""))]]);
        assert_eq!(results.to_csv(), "o\r\n\"he said \"\"hi\"\"\"\r\n");
    }

    #[test]
    fn csv_quotes_fields_with_separators() {
        let results = solutions(&["o"], &[&[("o", literal("a,b\nc"))]]);
        assert_eq!(results.to_csv(), "o\r\n\"a,b\nc\"\r\n");
    }

    #[test]
    fn csv_prefixes_unlabeled_blank_nodes() {
        let results = solutions(
            &["s", "o"],
            &[&[
                (
                    "s",
                    Term::BlankNode {
                        value: "b0".to_owned(),
                    },
                ),
                (
                    "o",
                    Term::BlankNode {
                        value: "_:b1".to_owned(),
                    },
                ),
            ]],
        );
        assert_eq!(results.to_csv(), "s,o\r\n_:b0,_:b1\r\n");
    }

    #[test]
    fn csv_renders_unbound_variables_as_empty_fields() {
        let results = solutions(
            &["s", "p"],
            &[
                &[("s", uri("http://example.com/a")), ("p", literal("x"))],
                &[("s", uri("http://example.com/b"))],
                &[("p", literal("y"))],
            ],
        );
        assert_eq!(
            results.to_csv(),
            "s,p\r\nhttp://example.com/a,x\r\nhttp://example.com/b,\r\n,y\r\n"
        );
    }

    #[test]
    fn csv_boolean_uses_the_bare_result_header() {
        assert_eq!(QueryResults::Boolean(true).to_csv(), "result\r\ntrue\r\n");
        assert_eq!(QueryResults::Boolean(false).to_csv(), "result\r\nfalse\r\n");
    }

    #[test]
    fn tsv_wraps_uris_in_angle_brackets() {
        let results = solutions(&["s"], &[&[("s", uri("http://ex.org/s"))]]);
        assert_eq!(results.to_tsv(), "s\n<http://ex.org/s>\n");
    }

    #[test]
    fn tsv_renders_language_tagged_literals() {
        let results = solutions(
            &["o"],
            &[&[(
                "o",
                Term::Literal {
                    value: "cat".to_owned(),
                    language: Some("en".to_owned()),
                    datatype: None,
                },
            )]],
        );
        assert_eq!(results.to_tsv(), "o\n\"cat\"@en\n");
    }

    #[test]
    fn tsv_renders_datatyped_literals() {
        let results = solutions(
            &["o"],
            &[&[(
                "o",
                Term::Literal {
                    value: "4".to_owned(),
                    language: None,
                    datatype: Some("http://www.w3.org/2001/XMLSchema#integer".to_owned()),
                },
            )]],
        );
        assert_eq!(
            results.to_tsv(),
            "o\n\"4\"^^<http://www.w3.org/2001/XMLSchema#integer>\n"
        );
    }

    #[test]
    fn tsv_escapes_control_characters_in_literals() {
        let results = solutions(&["o"], &[&[("o", literal("a\tb\nc\rd"))]]);
        assert_eq!(results.to_tsv(), "o\n\"a\\tb\\nc\\rd\"\n");
    }

    #[test]
    fn tsv_renders_unbound_variables_as_empty_fields() {
        let results = solutions(
            &["s", "p"],
            &[&[("s", uri("http://example.com/a"))]],
        );
        assert_eq!(results.to_tsv(), "s\tp\n<http://example.com/a>\t\n");
    }

    #[test]
    fn tsv_boolean_keeps_the_question_mark_header() {
        assert_eq!(QueryResults::Boolean(true).to_tsv(), "?result\ntrue\n");
    }
}
