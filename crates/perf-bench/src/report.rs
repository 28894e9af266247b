//! Tabular renderings of a run, meant to be diffed between runs.

use csv::{ReaderBuilder, Writer};
use std::io::{Read, Write};

use super::measure::Measurement;

/// Writes one CSV row per measurement with a
/// `name,iterations,ns_per_op,bytes_per_op,allocs_per_op` header.
pub fn write_csv<W: Write>(writer: W, measurements: &[Measurement]) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);
    for m in measurements {
        wtr.serialize(m)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads rows written by [`write_csv`].
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Measurement>, csv::Error> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    rdr.deserialize().collect()
}

/// Markdown table of every measurement.
pub fn markdown(measurements: &[Measurement]) -> String {
    let width = measurements
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(0)
        .max("Benchmark".len());

    let mut s = String::new();
    s.push_str(&format!(
        "| {:<width$} | {:>12} | {:>14} | {:>12} | {:>10} |\n",
        "Benchmark", "Iterations", "ns/op", "B/op", "allocs/op"
    ));
    s.push_str(&format!(
        "|{}|{}|{}|{}|{}|",
        "-".repeat(width + 2),
        "-".repeat(14),
        "-".repeat(16),
        "-".repeat(14),
        "-".repeat(12)
    ));
    for m in measurements {
        s += &format!(
            "\n| {:<width$} | {:>12} | {:>14.1} | {:>12} | {:>10} |",
            m.name, m.iterations, m.ns_per_op, m.bytes_per_op, m.allocs_per_op
        );
    }
    s
}

/// Lines in the Go benchmark output format, which benchstat-style tools parse:
/// `BenchmarkTxOut_SliceBuild/0008-TxOuts-034-Script/0-Values 1000 523.0 ns/op 1024 B/op 9 allocs/op`.
pub fn bench_lines(measurements: &[Measurement]) -> String {
    measurements
        .iter()
        .map(|m| {
            format!(
                "Benchmark{}\t{}\t{:.1} ns/op\t{} B/op\t{} allocs/op",
                m.name, m.iterations, m.ns_per_op, m.bytes_per_op, m.allocs_per_op
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
