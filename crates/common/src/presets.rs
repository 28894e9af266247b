//! Default sweeps and fixed datasets for every family/operation pair.

use super::dataset::{DatasetConfig, DatasetEntry, Multiplicity};
use super::growth::Growth;
use super::types::{Operation, RecordFamily};

/// Scale steps in every default sweep.
pub const SWEEP_ITERATIONS: i64 = 8;

/// Number of repeated-read variants, `NReads0` through `NReads9`.
pub const DEFAULT_READS: usize = 10;

/// A typical P2WPKH output script length.
pub const P2WPKH_SCRIPT_SIZE: usize = 34;

/// Default sweep of `family` for [`Operation::SliceBuild`] and [`Operation::SliceIterate`].
pub fn default_sweep(family: RecordFamily) -> DatasetConfig {
    let script = Some(Growth::linear(P2WPKH_SCRIPT_SIZE as i64));
    let (count, size, multiplicity) = match family {
        RecordFamily::OutPoint | RecordFamily::Account => {
            (Growth::scaled(8, Growth::exponential()), None, None)
        }
        RecordFamily::TxOut | RecordFamily::TxIn | RecordFamily::Utxo => {
            (Growth::scaled(8, Growth::exponential()), script, None)
        }
        RecordFamily::MsgTx => (
            Growth::scaled(4, Growth::exponential()),
            script,
            Some(Multiplicity {
                inputs: 2,
                outputs: 2,
            }),
        ),
        RecordFamily::LargeStruct => (Growth::scaled(1000, Growth::exponential()), None, None),
    };

    DatasetConfig {
        count,
        size,
        iterations: SWEEP_ITERATIONS,
        multiplicity,
    }
}

/// The single dataset used by the fixed-size operations.
pub fn fixed_entry(family: RecordFamily, operation: Operation) -> DatasetEntry {
    match (family, operation) {
        (RecordFamily::LargeStruct, _) => DatasetEntry::fixed(10_000, None, None),
        (RecordFamily::Utxo, Operation::ReturnOnly) => DatasetEntry::fixed(1 << 15, Some(256), None),
        (
            RecordFamily::Utxo,
            Operation::Construction | Operation::SlicePassing | Operation::UsageCost,
        ) => DatasetEntry::fixed(1 << 12, Some(P2WPKH_SCRIPT_SIZE), None),
        (RecordFamily::OutPoint, _) => DatasetEntry::fixed(128, None, None),
        (RecordFamily::Account, _) => DatasetEntry::fixed(256, None, None),
        (RecordFamily::MsgTx, _) => DatasetEntry::fixed(256, Some(64), Some((2, 2))),
        (RecordFamily::TxOut | RecordFamily::TxIn | RecordFamily::Utxo, _) => {
            DatasetEntry::fixed(128, Some(64), None)
        }
    }
}
