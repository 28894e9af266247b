//! Build, iterate and build-then-read sweeps for every record family.

use std::hint::black_box;

use alloc_tracker::Session;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};

use common::presets::{DEFAULT_READS, default_sweep, fixed_entry};
use common::{Layout, Operation, RecordFamily, bench_name, generate, group_name, reads_label};
use pv_core::read::{checksum, read_repeatedly};
use pv_core::{
    AccountResult, MsgTx, OutPoint, Record, TxIn, TxOut, Utxo, build_boxed_with,
    build_values_with,
};

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = out_point, tx_out, tx_in, msg_tx, utxo, account_result,
}

fn out_point(c: &mut Criterion) {
    bench_family::<OutPoint>(c, RecordFamily::OutPoint);
}

fn tx_out(c: &mut Criterion) {
    bench_family::<TxOut>(c, RecordFamily::TxOut);
}

fn tx_in(c: &mut Criterion) {
    bench_family::<TxIn>(c, RecordFamily::TxIn);
}

fn msg_tx(c: &mut Criterion) {
    bench_family::<MsgTx>(c, RecordFamily::MsgTx);
}

fn utxo(c: &mut Criterion) {
    bench_family::<Utxo>(c, RecordFamily::Utxo);
}

fn account_result(c: &mut Criterion) {
    bench_family::<AccountResult>(c, RecordFamily::Account);
}

fn bench_family<R: Record>(c: &mut Criterion, family: RecordFamily) {
    let allocs = Session::new();
    slice_build::<R>(c, &allocs, family);
    slice_iterate::<R>(c, &allocs, family);
    slice_build_and_iterate::<R>(c, &allocs, family);
    allocs.print_to_stdout();
}

fn slice_build<R: Record>(c: &mut Criterion, allocs: &Session, family: RecordFamily) {
    let operation = Operation::SliceBuild;
    let mut group = c.benchmark_group(group_name(family, operation));

    for entry in generate(&default_sweep(family)) {
        let label = entry.label(family.noun());
        // Shared payloads are prepared outside the measured closure.
        let params = R::params(&entry);
        group.throughput(Throughput::Elements(entry.count as u64));

        let allocs_op = allocs.operation(bench_name(family, operation, &label, Layout::Values));
        group.bench_function(BenchmarkId::new(&label, Layout::Values.label()), |b| {
            b.iter(|| {
                let _span = allocs_op.measure_thread();
                black_box(build_values_with::<R>(entry.count, &params));
            });
        });

        let allocs_op = allocs.operation(bench_name(family, operation, &label, Layout::Boxed));
        group.bench_function(BenchmarkId::new(&label, Layout::Boxed.label()), |b| {
            b.iter(|| {
                let _span = allocs_op.measure_thread();
                black_box(build_boxed_with::<R>(entry.count, &params));
            });
        });
    }

    group.finish();
}

fn slice_iterate<R: Record>(c: &mut Criterion, allocs: &Session, family: RecordFamily) {
    let operation = Operation::SliceIterate;
    let mut group = c.benchmark_group(group_name(family, operation));

    for entry in generate(&default_sweep(family)) {
        let label = entry.label(family.noun());
        let params = R::params(&entry);
        let vals = build_values_with::<R>(entry.count, &params);
        let ptrs = build_boxed_with::<R>(entry.count, &params);
        group.throughput(Throughput::Elements(entry.count as u64));

        let allocs_op = allocs.operation(bench_name(family, operation, &label, Layout::Values));
        group.bench_function(BenchmarkId::new(&label, Layout::Values.label()), |b| {
            b.iter(|| {
                let _span = allocs_op.measure_thread();
                black_box(checksum::<R, _>(black_box(&vals)));
            });
        });

        let allocs_op = allocs.operation(bench_name(family, operation, &label, Layout::Boxed));
        group.bench_function(BenchmarkId::new(&label, Layout::Boxed.label()), |b| {
            b.iter(|| {
                let _span = allocs_op.measure_thread();
                black_box(checksum::<R, _>(black_box(&ptrs)));
            });
        });
    }

    group.finish();
}

fn slice_build_and_iterate<R: Record>(c: &mut Criterion, allocs: &Session, family: RecordFamily) {
    let operation = Operation::SliceBuildAndIterate;
    let mut group = c.benchmark_group(group_name(family, operation));

    let entry = fixed_entry(family, operation);
    let params = R::params(&entry);
    let label = entry.label(family.noun());

    for reads in 0..DEFAULT_READS {
        let label = reads_label(&label, reads);

        let allocs_op = allocs.operation(bench_name(family, operation, &label, Layout::Values));
        group.bench_function(BenchmarkId::new(&label, Layout::Values.label()), |b| {
            b.iter(|| {
                let _span = allocs_op.measure_thread();
                let vals = build_values_with::<R>(entry.count, &params);
                black_box(read_repeatedly::<R, _>(&vals, reads));
            });
        });

        let allocs_op = allocs.operation(bench_name(family, operation, &label, Layout::Boxed));
        group.bench_function(BenchmarkId::new(&label, Layout::Boxed.label()), |b| {
            b.iter(|| {
                let _span = allocs_op.measure_thread();
                let ptrs = build_boxed_with::<R>(entry.count, &params);
                black_box(read_repeatedly::<R, _>(&ptrs, reads));
            });
        });
    }

    group.finish();
}
