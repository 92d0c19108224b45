// src/process/normalize.rs
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use crate::error::{Result, Stage};
use crate::process::load::disambiguate_headers;
use crate::table::Table;

/// Bumped whenever [`RENAMES`] changes.
pub const RENAME_TABLE_VERSION: u32 = 1;

/// Whitespace-stripped source label → canonical label.
pub const RENAMES: &[(&str, &str)] = &[
    ("JobtitleFR", "JobTitleFR"),
    ("JobtitleNL", "JobTitleNL"),
    ("JobId", "JobID"),
    ("Languagerole", "LanguageRole"),
    ("Type.1", "Type1"),
    ("Type.2", "Type2"),
    ("Publicationdate", "PublicationDate"),
    ("Streetname", "StreetName"),
    ("Streetsuffix", "StreetSuffix"),
    ("street_name_with_number", "StreetNameWithNumber"),
];

static RENAME_LOOKUP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| RENAMES.iter().copied().collect());

/// Remove every whitespace character, wherever it sits in the label.
pub fn strip_whitespace(label: &str) -> String {
    label.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Canonical form of one raw label; unknown labels only lose their whitespace.
pub fn canonical_label(label: &str) -> String {
    let stripped = strip_whitespace(label);
    match RENAME_LOOKUP.get(stripped.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => stripped,
    }
}

/// Relabel every column to its canonical name. Cell values are untouched.
///
/// When two columns land on the same canonical name, the later one gets a
/// `.N` suffix, the same way the loader treats repeated labels.
#[instrument(level = "debug", skip(table), fields(version = RENAME_TABLE_VERSION))]
pub fn normalize(table: &Table) -> Table {
    let canonical: Vec<String> = table.headers().iter().map(|h| canonical_label(h)).collect();
    let headers = disambiguate_headers(canonical.clone());
    for ((raw, wanted), label) in table.headers().iter().zip(&canonical).zip(&headers) {
        if wanted != label {
            warn!(
                raw = %raw,
                canonical = %wanted,
                label = %label,
                "canonical label already taken"
            );
        } else if raw != label {
            debug!(raw = %raw, canonical = %label, "renamed column");
        }
    }
    table.with_headers(headers)
}

/// Fail on the first label in `required` the table does not carry.
pub fn ensure_columns(table: &Table, required: &[&str]) -> Result<()> {
    for name in required {
        table.column_index(name, Stage::Normalize)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::export::{write_csv, EXPORT_DELIMITER};
    use crate::process::load::load_table;
    use crate::table::columns;

    fn raw_headers() -> Vec<String> {
        [
            "Job title  FR",
            "Job title NL",
            "Job Id",
            "Language role",
            "Type",
            "Type.1",
            "Type.2",
            "Apply",
            "Publication date",
            "Address",
            "Postal code",
            "Municipality",
            "Geo Shape",
            "Geo Punt",
            "Street name",
            "Number",
            "Street suffix",
            " street_name_with_number",
            "Province",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_source_headers_become_canonical() {
        let table = Table::new(raw_headers(), vec![]);
        let normalized = normalize(&table);
        assert_eq!(
            normalized.headers(),
            [
                columns::JOB_TITLE_FR,
                columns::JOB_TITLE_NL,
                columns::JOB_ID,
                columns::LANGUAGE_ROLE,
                columns::TYPE,
                columns::TYPE_1,
                columns::TYPE_2,
                columns::APPLY,
                columns::PUBLICATION_DATE,
                columns::ADDRESS,
                columns::POSTAL_CODE,
                columns::MUNICIPALITY,
                columns::GEO_SHAPE,
                columns::GEO_PUNT,
                columns::STREET_NAME,
                columns::NUMBER,
                columns::STREET_SUFFIX,
                columns::STREET_NAME_WITH_NUMBER,
                columns::PROVINCE,
            ]
        );
    }

    #[test]
    fn test_double_space_label_is_found_after_normalize() {
        let table = Table::new(
            vec!["Job title  FR".into()],
            vec![vec![Some("Technicien".into())], vec![None]],
        );
        assert!(matches!(
            table.column_index(columns::JOB_TITLE_FR, Stage::Clean),
            Err(PipelineError::ColumnNotFound { .. })
        ));

        let normalized = normalize(&table);
        assert_eq!(normalized.headers(), ["JobTitleFR"]);
        assert!(normalized
            .column_index(columns::JOB_TITLE_FR, Stage::Clean)
            .is_ok());
        assert_eq!(normalized.rows(), table.rows());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut headers = raw_headers();
        headers.push("\tOdd\u{a0}Label \n".into());
        let table = Table::new(headers, vec![]);
        let once = normalize(&table);
        let twice = normalize(&once);
        assert_eq!(once, twice);
        assert!(once.has_column("OddLabel"));
    }

    #[test]
    fn test_colliding_labels_stay_distinct() -> anyhow::Result<()> {
        let table = Table::new(
            vec!["Job Id".into(), "JobID".into(), "Municipality".into()],
            vec![vec![
                Some("101".into()),
                Some("A-101".into()),
                Some("Bruxelles".into()),
            ]],
        );
        let normalized = normalize(&table);
        assert_eq!(normalized.headers(), ["JobID", "JobID.1", "Municipality"]);
        assert_eq!(normalize(&normalized), normalized);

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.csv");
        write_csv(&normalized, &path, EXPORT_DELIMITER)?;
        assert_eq!(load_table(&path, EXPORT_DELIMITER)?, normalized);
        Ok(())
    }

    #[test]
    fn test_canonical_labels_are_fixed_points() {
        for (_, canonical) in RENAMES {
            assert_eq!(canonical_label(canonical), *canonical);
        }
    }

    #[test]
    fn test_ensure_columns_reports_first_missing() {
        let table = normalize(&Table::new(
            vec!["Municipality".into(), "Job title NL".into()],
            vec![],
        ));
        assert!(ensure_columns(&table, &["Municipality", "JobTitleNL"]).is_ok());

        let err = ensure_columns(&table, &columns::REQUIRED).unwrap_err();
        assert_eq!(
            err.to_string(),
            "normalize: column `PublicationDate` not found"
        );
    }
}
