pub mod dataset;
pub mod error;
pub mod growth;
pub mod presets;
pub mod types;

pub use dataset::{DatasetConfig, DatasetEntry, Multiplicity, generate, reads_label};
pub use growth::Growth;
pub use types::{Layout, Operation, RecordFamily, bench_name, group_name};
