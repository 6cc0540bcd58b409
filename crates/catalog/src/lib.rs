pub mod client;
pub mod errors;
pub mod fetch;
pub mod filter;
pub mod normalize;
pub mod pipeline;
pub mod sink;
pub mod table;

pub use client::build_catalog_client;
pub use errors::CatalogError;
pub use fetch::{fetch_foundation_models, CatalogQuery};
pub use filter::{active_text_on_demand, Condition, Op, Predicate};
pub use normalize::normalize;
pub use pipeline::run_catalog_export;
pub use sink::write_csv;
pub use table::{Column, FlatRow, FlatTable, ModelSummary};
