use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::error::Error;

/// The record shapes the benchmarks are run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordFamily {
    OutPoint,
    TxOut,
    TxIn,
    MsgTx,
    Utxo,
    Account,
    LargeStruct,
}

impl RecordFamily {
    pub const ALL: [RecordFamily; 7] = [
        RecordFamily::OutPoint,
        RecordFamily::TxOut,
        RecordFamily::TxIn,
        RecordFamily::MsgTx,
        RecordFamily::Utxo,
        RecordFamily::Account,
        RecordFamily::LargeStruct,
    ];

    /// Group prefix of benchmark names, e.g. `TxOut` in `TxOut_SliceBuild`.
    pub fn name(self) -> &'static str {
        match self {
            RecordFamily::OutPoint => "OutPoint",
            RecordFamily::TxOut => "TxOut",
            RecordFamily::TxIn => "TxIn",
            RecordFamily::MsgTx => "MsgTx",
            RecordFamily::Utxo => "Utxo",
            RecordFamily::Account => "AccountResult",
            RecordFamily::LargeStruct => "LargeStruct",
        }
    }

    /// Plural noun used inside dataset labels.
    pub fn noun(self) -> &'static str {
        match self {
            RecordFamily::OutPoint => "OutPoints",
            RecordFamily::TxOut => "TxOuts",
            RecordFamily::TxIn => "TxIns",
            RecordFamily::MsgTx => "Txs",
            RecordFamily::Utxo => "Utxos",
            RecordFamily::Account => "Accounts",
            RecordFamily::LargeStruct => "Elements",
        }
    }
}

impl fmt::Display for RecordFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordFamily {
    type Err = Error;

    /// Accepts either the display name (`TxOut`) or the snake_case config key (`tx_out`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        RecordFamily::ALL
            .into_iter()
            .find(|f| normalize(f.name()) == wanted || normalize(&format!("{:?}", f)) == wanted)
            .ok_or_else(|| Error::UnknownFamily(s.to_string()))
    }
}

/// One measured access pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Build the whole sequence from scratch.
    SliceBuild,
    /// Sum fields over a prebuilt sequence.
    SliceIterate,
    /// Build, then read the sequence `n` times.
    SliceBuildAndIterate,
    /// Build a large fixed sequence.
    Construction,
    /// Hand the whole sequence to a non-inlined function.
    SlicePassing,
    /// Hand every element to a non-inlined function.
    UsageCost,
    /// Mutate element zero and return the sequence from a non-inlined function.
    ReturnOnly,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::SliceBuild,
        Operation::SliceIterate,
        Operation::SliceBuildAndIterate,
        Operation::Construction,
        Operation::SlicePassing,
        Operation::UsageCost,
        Operation::ReturnOnly,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::SliceBuild => "SliceBuild",
            Operation::SliceIterate => "SliceIterate",
            Operation::SliceBuildAndIterate => "SliceBuildAndIterate",
            Operation::Construction => "Construction",
            Operation::SlicePassing => "SlicePassing",
            Operation::UsageCost => "UsageCost",
            Operation::ReturnOnly => "ReturnOnly",
        }
    }

    /// Whether this operation is defined for `family`.
    pub fn supports(self, family: RecordFamily) -> bool {
        match self {
            Operation::SliceBuild | Operation::SliceIterate | Operation::SliceBuildAndIterate => {
                family != RecordFamily::LargeStruct
            }
            Operation::Construction => {
                matches!(family, RecordFamily::Utxo | RecordFamily::LargeStruct)
            }
            Operation::SlicePassing | Operation::UsageCost | Operation::ReturnOnly => {
                family == RecordFamily::Utxo
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Operation::ALL
            .into_iter()
            .find(|op| normalize(op.name()) == wanted)
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}

/// How the records of a sequence are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `Vec<R>`: records inline in one buffer.
    Values,
    /// `Vec<Box<R>>`: one heap allocation per record.
    Boxed,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Values, Layout::Boxed];

    /// Leaf segment of a benchmark name. The numeric prefix keeps values first when sorted.
    pub fn label(self) -> &'static str {
        match self {
            Layout::Values => "0-Values",
            Layout::Boxed => "1-Boxed",
        }
    }
}

/// Top level of a benchmark name: `{Family}_{Operation}`.
pub fn group_name(family: RecordFamily, operation: Operation) -> String {
    format!("{}_{}", family.name(), operation.name())
}

/// Full hierarchical benchmark name: `{Family}_{Operation}/{label}/{layout}`.
pub fn bench_name(family: RecordFamily, operation: Operation, label: &str, layout: Layout) -> String {
    format!("{}/{}/{}", group_name(family, operation), label, layout.label())
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
