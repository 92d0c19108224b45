// src/export/report.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{info, instrument};

use crate::error::{PipelineError, Result, Stage};
use crate::process::AggregateCount;

/// One chart's worth of data for the plotting layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Ordered points as `(key, count)`.
    pub points: Vec<(String, usize)>,
}

impl ChartSeries {
    /// Horizontal bar chart of postings per job title.
    pub fn titles(counts: &AggregateCount) -> Self {
        Self {
            title: "Demand on different Job Titles".into(),
            x_label: "Number of Job Listings".into(),
            y_label: "Job Titles".into(),
            points: to_points(counts),
        }
    }

    /// Line chart of postings per publication date.
    pub fn timeline(counts: &AggregateCount) -> Self {
        Self {
            title: "Job Postings Over Time".into(),
            x_label: "Date".into(),
            y_label: "Number of Job Listings".into(),
            points: to_points(counts),
        }
    }
}

fn to_points(counts: &AggregateCount) -> Vec<(String, usize)> {
    counts.iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Aggregates of one run, ready to hand to a charting tool.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub municipality: String,
    pub rows: usize,
    pub by_title: ChartSeries,
    pub by_date: ChartSeries,
}

impl Report {
    pub fn new(
        municipality: &str,
        rows: usize,
        by_title: &AggregateCount,
        by_date: &AggregateCount,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            municipality: municipality.to_string(),
            rows,
            by_title: ChartSeries::titles(by_title),
            by_date: ChartSeries::timeline(by_date),
        }
    }
}

/// Pretty-print `report` as JSON, with a trailing newline.
#[instrument(level = "info", skip(report, path), fields(path = %path.as_ref().display()))]
pub fn write_report<P: AsRef<Path>>(report: &Report, path: P) -> Result<()> {
    let path = path.as_ref();
    let access = |source| PipelineError::FileAccess {
        stage: Stage::Export,
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(access)?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, report).map_err(|source| PipelineError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    out.write_all(b"\n").map_err(access)?;
    out.flush().map_err(access)?;

    info!("wrote report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_report_json_shape() -> Result<()> {
        let by_title: AggregateCount = vec![
            ("Planner".to_string(), 3),
            ("Analist".to_string(), 3),
        ]
        .into_iter()
        .collect();
        let by_date: AggregateCount = vec![
            ("2024-07-17".to_string(), 4),
            ("2024-07-01".to_string(), 2),
        ]
        .into_iter()
        .collect();

        let dir = tempdir()?;
        let path = dir.path().join("report.json");
        write_report(&Report::new("Bruxelles", 6, &by_title, &by_date), &path)?;

        let v: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(v["municipality"], "Bruxelles");
        assert_eq!(v["rows"], 6);
        assert_eq!(v["by_title"]["title"], "Demand on different Job Titles");
        assert_eq!(v["by_title"]["x_label"], "Number of Job Listings");
        assert_eq!(v["by_title"]["y_label"], "Job Titles");
        assert_eq!(v["by_date"]["y_label"], "Number of Job Listings");
        assert_eq!(v["by_date"]["x_label"], "Date");
        assert_eq!(v["by_date"]["points"][0][0], "2024-07-01");
        assert_eq!(v["by_date"]["points"][1][1], 4);
        assert!(v["generated_at"].is_string());
        Ok(())
    }
}
