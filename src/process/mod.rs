// src/process/mod.rs
pub mod aggregate;
pub mod clean;
pub mod filter;
pub mod load;
pub mod normalize;

pub use aggregate::{count_by_date, count_by_title, AggregateCount};
pub use clean::{deduplicate, drop_nulls};
pub use filter::{filter_municipality, DEFAULT_MUNICIPALITY};
pub use load::{load_table, SOURCE_DELIMITER};
pub use normalize::{ensure_columns, normalize};
