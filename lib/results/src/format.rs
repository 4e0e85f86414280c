use std::fmt;

/// A query results serialization the export path can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultsFormat {
    /// [SPARQL 1.1 Query Results CSV Format](https://www.w3.org/TR/sparql11-results-csv-tsv/)
    Csv,
    /// [SPARQL 1.1 Query Results TSV Format](https://www.w3.org/TR/sparql11-results-csv-tsv/)
    Tsv,
    /// [SPARQL 1.1 Query Results JSON Format](https://www.w3.org/TR/sparql11-results-json/)
    Json,
}

impl ResultsFormat {
    /// Looks up a format from a file extension like `csv`.
    #[inline]
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            "json" | "srj" => Some(Self::Json),
            _ => None,
        }
    }

    /// Looks up a format from a media type like `text/csv`.
    ///
    /// Media type parameters are ignored.
    #[inline]
    #[must_use]
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type.split(';').next()?.trim();
        match essence {
            "text/csv" => Some(Self::Csv),
            "text/tab-separated-values" => Some(Self::Tsv),
            "application/sparql-results+json" | "application/json" => Some(Self::Json),
            _ => None,
        }
    }

    /// The canonical media type of this format.
    #[inline]
    #[must_use]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Tsv => "text/tab-separated-values; charset=utf-8",
            Self::Json => "application/sparql-results+json",
        }
    }

    #[inline]
    #[must_use]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "srj",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Tsv => "TSV",
            Self::Json => "JSON",
        }
    }
}

impl fmt::Display for ResultsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup() {
        assert_eq!(ResultsFormat::from_extension("csv"), Some(ResultsFormat::Csv));
        assert_eq!(ResultsFormat::from_extension("tsv"), Some(ResultsFormat::Tsv));
        assert_eq!(ResultsFormat::from_extension("srj"), Some(ResultsFormat::Json));
        assert_eq!(ResultsFormat::from_extension("ttl"), None);
    }

    #[test]
    fn canonical_media_types_and_extensions_round_trip() {
        for format in [ResultsFormat::Csv, ResultsFormat::Tsv, ResultsFormat::Json] {
            assert_eq!(
                ResultsFormat::from_media_type(format.media_type()),
                Some(format)
            );
            assert_eq!(
                ResultsFormat::from_extension(format.file_extension()),
                Some(format)
            );
        }
    }

    #[test]
    fn media_type_lookup_ignores_parameters() {
        assert_eq!(
            ResultsFormat::from_media_type("text/csv; charset=utf-8"),
            Some(ResultsFormat::Csv)
        );
        assert_eq!(
            ResultsFormat::from_media_type("application/sparql-results+json"),
            Some(ResultsFormat::Json)
        );
        assert_eq!(ResultsFormat::from_media_type("text/turtle"), None);
    }
}
