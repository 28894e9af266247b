use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::error;

use perf_bench::Measurement;
use perf_bench::report::read_csv;

use super::error::Error;

/// Change of one benchmark between a baseline run and the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct Delta {
    pub name: String,
    /// `current / baseline` time per operation; `None` when the baseline took no time.
    pub time_ratio: Option<f64>,
    pub bytes_diff: i64,
    pub allocs_diff: i64,
}

/// Reads a CSV report written by an earlier run.
pub fn load_baseline(path: &Path) -> Result<Vec<Measurement>, Error> {
    let file = File::open(path).map_err(|e| {
        error!("Failed to read baseline {}: {:?}", path.display(), e);
        Error::IoError(e)
    })?;
    Ok(read_csv(file)?)
}

/// Deltas for every name present in both runs, in the order of `current`.
pub fn compare(baseline: &[Measurement], current: &[Measurement]) -> Vec<Delta> {
    let by_name: HashMap<&str, &Measurement> =
        baseline.iter().map(|m| (m.name.as_str(), m)).collect();

    current
        .iter()
        .filter_map(|cur| {
            let base = by_name.get(cur.name.as_str())?;
            Some(Delta {
                name: cur.name.clone(),
                time_ratio: (base.ns_per_op > 0.0).then(|| cur.ns_per_op / base.ns_per_op),
                bytes_diff: cur.bytes_per_op as i64 - base.bytes_per_op as i64,
                allocs_diff: cur.allocs_per_op as i64 - base.allocs_per_op as i64,
            })
        })
        .collect()
}

/// One line per delta: `name  x1.23  +16 B/op  +1 allocs/op`.
pub fn render(deltas: &[Delta]) -> String {
    deltas
        .iter()
        .map(|d| {
            let ratio = match d.time_ratio {
                Some(r) => format!("x{:.2}", r),
                None => "n/a".to_string(),
            };
            format!(
                "{}\t{}\t{:+} B/op\t{:+} allocs/op",
                d.name, ratio, d.bytes_diff, d.allocs_diff
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod baseline_tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MOCK_CSV_CONTENT: &str = "\
name,iterations,ns_per_op,bytes_per_op,allocs_per_op
Utxo_SliceBuild/8-Utxos-34-Script/0-Values,1000,500.0,1024,4
Utxo_SliceBuild/8-Utxos-34-Script/1-Boxed,800,800.0,1280,12
Utxo_SliceBuild/16-Utxos-68-Script/0-Values,500,0.0,2048,4
";

    fn measurement(name: &str, ns: f64, bytes: u64, allocs: u64) -> Measurement {
        Measurement {
            name: name.to_string(),
            iterations: 1,
            ns_per_op: ns,
            bytes_per_op: bytes,
            allocs_per_op: allocs,
        }
    }

    #[test]
    fn test_load_baseline_success() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(MOCK_CSV_CONTENT.as_bytes())
            .expect("Failed to write mock content");

        let rows = load_baseline(temp_file.path()).expect("baseline should parse");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].name, "Utxo_SliceBuild/8-Utxos-34-Script/1-Boxed");
        assert_eq!(rows[1].allocs_per_op, 12);
    }

    #[test]
    fn test_load_baseline_file_not_found() {
        let result = load_baseline(Path::new("non_existent_file.csv"));

        if let Err(Error::IoError(e)) = result {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected IoError, got: {:?}", result);
        }
    }

    #[test]
    fn test_load_baseline_bad_row() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(b"name,iterations,ns_per_op,bytes_per_op,allocs_per_op\nx,-1,1.0,0,0\n")
            .expect("Failed to write mock content");

        assert!(matches!(
            load_baseline(temp_file.path()),
            Err(Error::CsvError(_))
        ));
    }

    #[test]
    fn test_compare_matches_by_name() {
        let baseline = vec![
            measurement("a/0-Values", 100.0, 64, 1),
            measurement("a/1-Boxed", 0.0, 128, 3),
            measurement("gone/0-Values", 10.0, 0, 0),
        ];
        let current = vec![
            measurement("a/1-Boxed", 50.0, 96, 1),
            measurement("new/0-Values", 10.0, 0, 0),
            measurement("a/0-Values", 150.0, 64, 2),
        ];

        let deltas = compare(&baseline, &current);
        assert_eq!(
            deltas,
            vec![
                Delta {
                    name: "a/1-Boxed".to_string(),
                    time_ratio: None,
                    bytes_diff: -32,
                    allocs_diff: -2,
                },
                Delta {
                    name: "a/0-Values".to_string(),
                    time_ratio: Some(1.5),
                    bytes_diff: 0,
                    allocs_diff: 1,
                },
            ]
        );
    }

    #[test]
    fn test_render() {
        let deltas = vec![Delta {
            name: "a/0-Values".to_string(),
            time_ratio: Some(1.5),
            bytes_diff: 16,
            allocs_diff: -1,
        }];
        assert_eq!(render(&deltas), "a/0-Values\tx1.50\t+16 B/op\t-1 allocs/op");
    }
}
