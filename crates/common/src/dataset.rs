use serde::Deserialize;

use super::growth::Growth;

/// Inputs and outputs per transaction for the transaction family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Multiplicity {
    pub inputs: i64,
    pub outputs: i64,
}

impl Multiplicity {
    pub const DEFAULT: i64 = 2;

    /// Returns `(inputs, outputs)` with non-positive values replaced by [`Self::DEFAULT`].
    pub fn sanitized(&self) -> (usize, usize) {
        (or_default(self.inputs), or_default(self.outputs))
    }
}

fn or_default(v: i64) -> usize {
    if v <= 0 {
        Multiplicity::DEFAULT as usize
    } else {
        usize::try_from(v).unwrap_or(usize::MAX)
    }
}

/// Describes one benchmark sweep.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatasetConfig {
    /// Growth of the primary element count.
    pub count: Growth,
    /// Growth of the per-element payload size, for families that carry one.
    #[serde(default)]
    pub size: Option<Growth>,
    #[serde(default = "default_iterations")]
    pub iterations: i64,
    #[serde(default)]
    pub multiplicity: Option<Multiplicity>,
}

fn default_iterations() -> i64 {
    1
}

/// One row of benchmark parameters for one scale step.
///
/// The `max_*` fields hold the values reached at the last step of the sweep
/// and only control the zero-padding width of [`DatasetEntry::label`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetEntry {
    pub count: usize,
    pub size: Option<usize>,
    pub multiplicity: Option<(usize, usize)>,
    pub max_count: usize,
    pub max_size: Option<usize>,
}

impl DatasetEntry {
    /// A standalone entry whose padding widths equal its own values.
    pub fn fixed(count: usize, size: Option<usize>, multiplicity: Option<(usize, usize)>) -> Self {
        DatasetEntry {
            count,
            size,
            multiplicity,
            max_count: count,
            max_size: size,
        }
    }

    /// Payload size, `0` for families without one.
    pub fn size_or_zero(&self) -> usize {
        self.size.unwrap_or(0)
    }

    /// Renders the sortable label used to group results, e.g.
    /// `"04096-Utxos-0034-Script"` or `"0004-Txs-034-Script-2In-2Out"`.
    pub fn label(&self, noun: &str) -> String {
        let mut label = format!(
            "{:0width$}-{}",
            self.count,
            noun,
            width = digits(self.max_count)
        );
        if let Some(size) = self.size {
            let width = digits(self.max_size.unwrap_or(size));
            label.push_str(&format!("-{:0width$}-Script", size, width = width));
        }
        if let Some((inputs, outputs)) = self.multiplicity {
            label.push_str(&format!("-{}In-{}Out", inputs, outputs));
        }
        label
    }
}

/// Suffix for the repeated-read sweep: `"0128-TxOuts-064-ScriptNReads3"`.
pub fn reads_label(label: &str, reads: usize) -> String {
    format!("{}NReads{}", label, reads)
}

/// Number of decimal digits in `n`; `0` has one digit.
pub fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Generates the ordered entries of a sweep, smallest scale first.
///
/// Never fails: an iteration count below one is treated as one and
/// negative growth output is clamped to zero.
pub fn generate(config: &DatasetConfig) -> Vec<DatasetEntry> {
    let iterations = u32::try_from(config.iterations.max(1)).unwrap_or(u32::MAX);
    let last = iterations - 1;

    let max_count = to_count(config.count.evaluate(last));
    let max_size = config.size.as_ref().map(|g| to_count(g.evaluate(last)));
    let multiplicity = config.multiplicity.map(|m| m.sanitized());

    (0..iterations)
        .map(|i| DatasetEntry {
            count: to_count(config.count.evaluate(i)),
            size: config.size.as_ref().map(|g| to_count(g.evaluate(i))),
            multiplicity,
            max_count,
            max_size,
        })
        .collect()
}

fn to_count(v: i64) -> usize {
    usize::try_from(v).unwrap_or(if v < 0 { 0 } else { usize::MAX })
}
