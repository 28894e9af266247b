//! Measurement harness for the value-vs-boxed layout benchmarks.
//!
//! [`Suite`] drives every family/operation pair through [`measure`], which
//! times an operation to convergence and, when `alloc_tracker::Allocator` is
//! the global allocator, attributes allocations to it. [`report`] renders the
//! results.

pub mod measure;
pub mod report;
pub mod suite;

pub use measure::{AllocsPerOp, MeasureConfig, Measurement, measure};
pub use suite::Suite;

#[cfg(test)]
#[global_allocator]
static ALLOCATOR: alloc_tracker::Allocator<std::alloc::System> = alloc_tracker::Allocator::system();
