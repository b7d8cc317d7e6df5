//! Citation formatting
//!
//! Renders one annotated record into a fixed Markdown blockquote for
//! insertion at the editor cursor. Formatting is pure and total: absent
//! fields get literal fallback text, never an error. The match over
//! [`SourceName`] is exhaustive, so a new source cannot silently inherit
//! another source's template.

use crate::results::{AnnotatedRecord, Record, SourceName};

const UNTITLED: &str = "Untitled";
const UNKNOWN_AUTHORS: &str = "Unknown";

/// Render a citation block. Each block ends with a blank line so consecutive
/// insertions stay separated.
pub fn format_citation(annotated: &AnnotatedRecord) -> String {
    let record = &annotated.record;
    let title = record.title.as_deref().unwrap_or(UNTITLED);
    let url = record.url.as_deref().unwrap_or("");

    match annotated.source {
        SourceName::PubMed | SourceName::ArXiv => {
            let authors = format_authors(record);
            let year = resolve_year(record);
            format!(
                "> **{}**\n> {} ({})\n> [{}]({})\n\n",
                title,
                authors,
                year,
                annotated.source.label(),
                url
            )
        }
        SourceName::Wikipedia => {
            format!("> **{}**\n> [Wikipedia]({})\n\n", title, url)
        }
    }
}

/// Comma-joined author list, or the fallback when none are known.
fn format_authors(record: &Record) -> String {
    if record.authors.is_empty() {
        UNKNOWN_AUTHORS.to_string()
    } else {
        record.authors.join(", ")
    }
}

/// The record's year, else the first four characters of its date, else
/// the empty string.
fn resolve_year(record: &Record) -> String {
    if let Some(year) = &record.year {
        return year.clone();
    }
    match &record.date {
        Some(date) => date.chars().take(4).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotated(record: Record, source: SourceName) -> AnnotatedRecord {
        AnnotatedRecord::new(record, source)
    }

    #[test]
    fn test_total_on_empty_pubmed_record() {
        let citation = format_citation(&annotated(Record::default(), SourceName::PubMed));
        assert_eq!(citation, "> **Untitled**\n> Unknown ()\n> [PubMed]()\n\n");
    }

    #[test]
    fn test_total_on_empty_arxiv_record() {
        let citation = format_citation(&annotated(Record::default(), SourceName::ArXiv));
        assert_eq!(citation, "> **Untitled**\n> Unknown ()\n> [ArXiv]()\n\n");
    }

    #[test]
    fn test_total_on_empty_wikipedia_record() {
        let citation = format_citation(&annotated(Record::default(), SourceName::Wikipedia));
        assert_eq!(citation, "> **Untitled**\n> [Wikipedia]()\n\n");
    }

    #[test]
    fn test_full_pubmed_citation() {
        let record = Record {
            title: Some("CRISPR-Cas9 off-target effects".to_string()),
            authors: vec!["Zhang F".to_string(), "Doudna JA".to_string()],
            year: Some("2021".to_string()),
            url: Some("https://pubmed.test/34001234".to_string()),
            ..Default::default()
        };
        let citation = format_citation(&annotated(record, SourceName::PubMed));
        assert_eq!(
            citation,
            "> **CRISPR-Cas9 off-target effects**\n\
             > Zhang F, Doudna JA (2021)\n\
             > [PubMed](https://pubmed.test/34001234)\n\n"
        );
    }

    #[test]
    fn test_year_derived_from_date() {
        let record = Record {
            date: Some("2023-05-01".to_string()),
            ..Default::default()
        };
        let citation = format_citation(&annotated(record, SourceName::ArXiv));
        assert!(citation.contains("(2023)"));
    }

    #[test]
    fn test_year_wins_over_date() {
        let record = Record {
            year: Some("2019".to_string()),
            date: Some("2023-05-01".to_string()),
            ..Default::default()
        };
        let citation = format_citation(&annotated(record, SourceName::PubMed));
        assert!(citation.contains("(2019)"));
    }

    #[test]
    fn test_short_date_is_used_as_is() {
        let record = Record {
            date: Some("202".to_string()),
            ..Default::default()
        };
        let citation = format_citation(&annotated(record, SourceName::ArXiv));
        assert!(citation.contains("(202)"));
    }

    #[test]
    fn test_wikipedia_ignores_authors_and_year() {
        let record = Record {
            title: Some("Gene drive".to_string()),
            authors: vec!["Someone".to_string()],
            year: Some("2020".to_string()),
            url: Some("https://en.wikipedia.test/wiki/Gene_drive".to_string()),
            ..Default::default()
        };
        let citation = format_citation(&annotated(record, SourceName::Wikipedia));
        assert_eq!(
            citation,
            "> **Gene drive**\n> [Wikipedia](https://en.wikipedia.test/wiki/Gene_drive)\n\n"
        );
    }

    #[test]
    fn test_blocks_stay_separated() {
        let citation = format_citation(&annotated(Record::default(), SourceName::PubMed));
        assert!(citation.ends_with("\n\n"));
    }
}
