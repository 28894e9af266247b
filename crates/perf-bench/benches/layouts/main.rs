//! Criterion benchmarks comparing `Vec<R>` against `Vec<Box<R>>`.
//!
//! Names follow `{Family}_{Operation}/{label}/{layout}`. Allocation totals
//! per benchmark are printed after each group by `alloc_tracker`.

use std::alloc::System;

use alloc_tracker::Allocator;

mod costs;
mod families;

#[global_allocator]
static ALLOCATOR: Allocator<System> = Allocator::system();

criterion::criterion_main! {
    families::benches,
    costs::benches,
}
