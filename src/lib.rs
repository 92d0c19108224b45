pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod process;
pub mod table;

pub use config::PipelineConfig;
pub use error::{PipelineError, Stage};
pub use pipeline::{run, transform, PipelineOutcome};
pub use table::Table;
