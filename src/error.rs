use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Normalize,
    Filter,
    Clean,
    Export,
    Aggregate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Normalize => "normalize",
            Stage::Filter => "filter",
            Stage::Clean => "clean",
            Stage::Export => "export",
            Stage::Aggregate => "aggregate",
        };
        f.write_str(name)
    }
}

/// Every failure the pipeline can report. All of them abort the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{stage}: cannot access {path:?}: {source}")]
    FileAccess {
        stage: Stage,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("load: malformed row at line {line} of {path:?}: expected {expected} fields, found {found}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{stage}: column `{column}` not found")]
    ColumnNotFound { stage: Stage, column: String },

    #[error("{stage}: csv error in {path:?}: {source}")]
    Csv {
        stage: Stage,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("export: arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("export: parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("export: json error in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::FileAccess { stage, .. }
            | PipelineError::ColumnNotFound { stage, .. }
            | PipelineError::Csv { stage, .. } => *stage,
            PipelineError::MalformedRow { .. } => Stage::Load,
            PipelineError::Arrow(_) | PipelineError::Parquet(_) | PipelineError::Json { .. } => {
                Stage::Export
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_stage_and_subject() {
        let err = PipelineError::ColumnNotFound {
            stage: Stage::Clean,
            column: "JobTitleFR".into(),
        };
        assert_eq!(err.to_string(), "clean: column `JobTitleFR` not found");
        assert_eq!(err.stage(), Stage::Clean);

        let err = PipelineError::MalformedRow {
            path: PathBuf::from("jobs.csv"),
            line: 4,
            expected: 19,
            found: 18,
        };
        assert_eq!(
            err.to_string(),
            "load: malformed row at line 4 of \"jobs.csv\": expected 19 fields, found 18"
        );
        assert_eq!(err.stage(), Stage::Load);
    }
}
