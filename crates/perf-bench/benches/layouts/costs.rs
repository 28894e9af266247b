//! Fixed-size cost benchmarks: construction, passing, per-record usage and
//! return-only calls.

use std::hint::black_box;

use alloc_tracker::Session;
use criterion::{BenchmarkId, Criterion, criterion_group};

use common::presets::fixed_entry;
use common::{Layout, Operation, RecordFamily, bench_name, group_name};
use pv_core::read::{bump_first, process_utxo_ref, process_utxo_value, total_amount};
use pv_core::{LargeStruct, Record, Utxo, build_boxed_with, build_values_with};

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets =
        large_struct_construction,
        utxo_construction,
        utxo_slice_passing,
        utxo_usage_cost,
        utxo_return_only,
}

/// Benchmarks `values` and `boxed` under `{Family}_{Operation}/{label}/{layout}`,
/// tracking the allocations of each.
fn bench_pair<V, B>(
    c: &mut Criterion,
    family: RecordFamily,
    operation: Operation,
    label: &str,
    mut values: V,
    mut boxed: B,
) where
    V: FnMut() -> i64,
    B: FnMut() -> i64,
{
    let allocs = Session::new();
    let mut group = c.benchmark_group(group_name(family, operation));

    let allocs_op = allocs.operation(bench_name(family, operation, label, Layout::Values));
    group.bench_function(BenchmarkId::new(label, Layout::Values.label()), |b| {
        b.iter(|| {
            let _span = allocs_op.measure_thread();
            black_box(values());
        });
    });

    let allocs_op = allocs.operation(bench_name(family, operation, label, Layout::Boxed));
    group.bench_function(BenchmarkId::new(label, Layout::Boxed.label()), |b| {
        b.iter(|| {
            let _span = allocs_op.measure_thread();
            black_box(boxed());
        });
    });

    group.finish();
    allocs.print_to_stdout();
}

fn construction<R: Record>(c: &mut Criterion, family: RecordFamily) {
    let operation = Operation::Construction;
    let entry = fixed_entry(family, operation);
    let params = R::params(&entry);
    bench_pair(
        c,
        family,
        operation,
        &entry.label(family.noun()),
        || build_values_with::<R>(entry.count, &params).len() as i64,
        || build_boxed_with::<R>(entry.count, &params).len() as i64,
    );
}

fn large_struct_construction(c: &mut Criterion) {
    construction::<LargeStruct>(c, RecordFamily::LargeStruct);
}

fn utxo_construction(c: &mut Criterion) {
    construction::<Utxo>(c, RecordFamily::Utxo);
}

/// Prebuilt Utxo slices for the call-cost benchmarks.
fn utxo_pair(operation: Operation) -> (String, Vec<Utxo>, Vec<Box<Utxo>>) {
    let family = RecordFamily::Utxo;
    let entry = fixed_entry(family, operation);
    let params = Utxo::params(&entry);
    (
        entry.label(family.noun()),
        build_values_with::<Utxo>(entry.count, &params),
        build_boxed_with::<Utxo>(entry.count, &params),
    )
}

fn utxo_slice_passing(c: &mut Criterion) {
    let operation = Operation::SlicePassing;
    let (label, vals, ptrs) = utxo_pair(operation);
    bench_pair(
        c,
        RecordFamily::Utxo,
        operation,
        &label,
        || total_amount(black_box(&vals)),
        || total_amount(black_box(&ptrs)),
    );
}

fn utxo_usage_cost(c: &mut Criterion) {
    let operation = Operation::UsageCost;
    let (label, vals, ptrs) = utxo_pair(operation);
    bench_pair(
        c,
        RecordFamily::Utxo,
        operation,
        &label,
        || {
            vals.iter()
                .fold(0i64, |acc, u| acc.wrapping_add(process_utxo_value(u.clone())))
        },
        || {
            ptrs.iter()
                .fold(0i64, |acc, u| acc.wrapping_add(process_utxo_ref(u)))
        },
    );
}

fn utxo_return_only(c: &mut Criterion) {
    let operation = Operation::ReturnOnly;
    let (label, mut vals, mut ptrs) = utxo_pair(operation);
    bench_pair(
        c,
        RecordFamily::Utxo,
        operation,
        &label,
        || bump_first(&mut vals).len() as i64,
        || bump_first(&mut ptrs).len() as i64,
    );
}
