use alloc_tracker::Session;
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::debug;

/// Controls how long each operation is run for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasureConfig {
    /// A batch that runs at least this long is accepted as the result.
    pub target_time: Duration,
    pub min_iterations: u64,
    /// Upper bound on the batch size, reached before `target_time` for very fast operations.
    pub max_iterations: u64,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        MeasureConfig {
            target_time: Duration::from_secs(1),
            min_iterations: 1,
            max_iterations: 1_000_000_000,
        }
    }
}

/// Per-invocation cost of one benchmarked operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    /// Invocations in the accepted batch.
    pub iterations: u64,
    pub ns_per_op: f64,
    pub bytes_per_op: u64,
    pub allocs_per_op: u64,
}

/// Heap activity of one batch, averaged over its invocations.
///
/// Zero unless the binary installs `alloc_tracker::Allocator` as its global allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllocsPerOp {
    pub bytes: u64,
    pub allocations: u64,
}

impl Measurement {
    fn from_batch(name: String, iterations: u64, elapsed: Duration, allocs: AllocsPerOp) -> Self {
        let iterations = iterations.max(1);
        Measurement {
            name,
            iterations,
            ns_per_op: elapsed.as_nanos() as f64 / iterations as f64,
            bytes_per_op: allocs.bytes,
            allocs_per_op: allocs.allocations,
        }
    }
}

/// Runs `op` in growing batches until one batch lasts at least
/// `config.target_time`, then reports that batch per invocation.
///
/// `op` returns a checksum of the work it did. The harness folds every
/// checksum into an accumulator passed through [`black_box`], which keeps
/// the compiler from discarding the measured work.
pub fn measure<F>(name: impl Into<String>, config: &MeasureConfig, mut op: F) -> Measurement
where
    F: FnMut() -> i64,
{
    let name = name.into();

    // Warm-up, also faults in anything the first call touches.
    black_box(op());

    let mut iterations = config.min_iterations.max(1);
    loop {
        let (elapsed, allocs) = run_batch(&name, iterations, &mut op);
        if elapsed >= config.target_time || iterations >= config.max_iterations {
            let measurement = Measurement::from_batch(name, iterations, elapsed, allocs);
            debug!(
                name = %measurement.name,
                iterations = measurement.iterations,
                ns_per_op = measurement.ns_per_op,
                bytes_per_op = measurement.bytes_per_op,
                allocs_per_op = measurement.allocs_per_op,
                "measured"
            );
            return measurement;
        }
        iterations = predict_iterations(iterations, elapsed, config);
    }
}

/// Times one batch; allocations made on this thread inside the batch are
/// attributed to it through an `alloc_tracker` span.
fn run_batch<F>(name: &str, iterations: u64, op: &mut F) -> (Duration, AllocsPerOp)
where
    F: FnMut() -> i64,
{
    let allocs = Session::new();
    let allocs_op = allocs.operation(name);

    let mut acc = 0i64;
    let elapsed = {
        let _span = allocs_op.measure_thread().iterations(iterations);
        let start = Instant::now();
        for _ in 0..iterations {
            acc = acc.wrapping_add(black_box(op()));
        }
        start.elapsed()
    };
    black_box(acc);

    let per_op = allocs
        .to_report()
        .operations()
        .map(|(_, report)| AllocsPerOp {
            bytes: report.mean_bytes() as u64,
            allocations: report.mean_allocations() as u64,
        })
        .next()
        .unwrap_or_default();
    (elapsed, per_op)
}

/// Next batch size: aim for the target time with 20% headroom, grow by at
/// least one and by at most 100x, and never pass `max_iterations`.
fn predict_iterations(last: u64, elapsed: Duration, config: &MeasureConfig) -> u64 {
    let last = u128::from(last);
    let goal = config.target_time.as_nanos();
    let prev = elapsed.as_nanos().max(1);

    let mut n = goal.saturating_mul(last) / prev;
    n += n / 5;
    n = n.min(last * 100).max(last + 1);
    n.min(u128::from(config.max_iterations)) as u64
}
