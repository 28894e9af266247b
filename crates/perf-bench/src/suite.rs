use std::collections::HashMap;
use tracing::info;

use common::presets::{DEFAULT_READS, default_sweep, fixed_entry};
use common::{
    DatasetConfig, DatasetEntry, Layout, Operation, RecordFamily, bench_name, generate,
    reads_label,
};
use pv_core::read::{
    bump_first, checksum, process_utxo_ref, process_utxo_value, read_repeatedly, total_amount,
};
use pv_core::{
    AccountResult, LargeStruct, MsgTx, OutPoint, Record, TxIn, TxOut, Utxo, build_boxed_with,
    build_values_with,
};

use super::measure::{MeasureConfig, Measurement, measure};

/// Runs family/operation pairs under both layouts.
#[derive(Debug, Clone)]
pub struct Suite {
    measure: MeasureConfig,
    reads: usize,
    sweeps: HashMap<RecordFamily, DatasetConfig>,
}

impl Suite {
    pub fn new(measure: MeasureConfig) -> Self {
        Suite {
            measure,
            reads: DEFAULT_READS,
            sweeps: HashMap::new(),
        }
    }

    /// Sets the number of repeated-read variants (`NReads0` up to `NReads{reads - 1}`).
    pub fn with_reads(mut self, reads: usize) -> Self {
        self.reads = reads;
        self
    }

    /// Replaces the default sweep of `family`.
    pub fn with_sweep(mut self, family: RecordFamily, config: DatasetConfig) -> Self {
        self.sweeps.insert(family, config);
        self
    }

    /// Entries of the sweep used by [`Operation::SliceBuild`] and [`Operation::SliceIterate`].
    pub fn sweep(&self, family: RecordFamily) -> Vec<DatasetEntry> {
        match self.sweeps.get(&family) {
            Some(config) => generate(config),
            None => generate(&default_sweep(family)),
        }
    }

    /// Every measurement of `operation` on `family`, values before boxed for
    /// each dataset. Empty when the pair is not defined.
    pub fn run(&self, family: RecordFamily, operation: Operation) -> Vec<Measurement> {
        if !operation.supports(family) {
            return Vec::new();
        }
        info!(%family, %operation, "Running benchmark");

        match family {
            RecordFamily::OutPoint => self.run_record::<OutPoint>(family, operation),
            RecordFamily::TxOut => self.run_record::<TxOut>(family, operation),
            RecordFamily::TxIn => self.run_record::<TxIn>(family, operation),
            RecordFamily::MsgTx => self.run_record::<MsgTx>(family, operation),
            RecordFamily::Account => self.run_record::<AccountResult>(family, operation),
            RecordFamily::LargeStruct => self.run_record::<LargeStruct>(family, operation),
            RecordFamily::Utxo => match operation {
                Operation::SlicePassing | Operation::UsageCost | Operation::ReturnOnly => {
                    self.run_utxo_calls(operation)
                }
                _ => self.run_record::<Utxo>(family, operation),
            },
        }
    }

    /// Runs every supported pair of the cross product, families outermost.
    pub fn run_all(&self, families: &[RecordFamily], operations: &[Operation]) -> Vec<Measurement> {
        families
            .iter()
            .flat_map(|&family| operations.iter().map(move |&operation| (family, operation)))
            .flat_map(|(family, operation)| self.run(family, operation))
            .collect()
    }

    fn run_record<R: Record>(&self, family: RecordFamily, operation: Operation) -> Vec<Measurement> {
        let mut out = Vec::new();
        match operation {
            Operation::SliceBuild => {
                for entry in self.sweep(family) {
                    out.extend(self.build_pair::<R>(family, operation, &entry));
                }
            }
            Operation::Construction => {
                let entry = fixed_entry(family, operation);
                out.extend(self.build_pair::<R>(family, operation, &entry));
            }
            Operation::SliceIterate => {
                for entry in self.sweep(family) {
                    let params = R::params(&entry);
                    let vals = build_values_with::<R>(entry.count, &params);
                    let ptrs = build_boxed_with::<R>(entry.count, &params);
                    out.extend(self.pair(
                        family,
                        operation,
                        &entry.label(family.noun()),
                        || checksum::<R, _>(&vals),
                        || checksum::<R, _>(&ptrs),
                    ));
                }
            }
            Operation::SliceBuildAndIterate => {
                let entry = fixed_entry(family, operation);
                let params = R::params(&entry);
                let label = entry.label(family.noun());
                for reads in 0..self.reads {
                    out.extend(self.pair(
                        family,
                        operation,
                        &reads_label(&label, reads),
                        || {
                            let vals = build_values_with::<R>(entry.count, &params);
                            read_repeatedly::<R, _>(&vals, reads)
                        },
                        || {
                            let ptrs = build_boxed_with::<R>(entry.count, &params);
                            read_repeatedly::<R, _>(&ptrs, reads)
                        },
                    ));
                }
            }
            Operation::SlicePassing | Operation::UsageCost | Operation::ReturnOnly => {}
        }
        out
    }

    /// Build cost of one entry; the shared params are prepared outside the measured region.
    fn build_pair<R: Record>(
        &self,
        family: RecordFamily,
        operation: Operation,
        entry: &DatasetEntry,
    ) -> [Measurement; 2] {
        let params = R::params(entry);
        self.pair(
            family,
            operation,
            &entry.label(family.noun()),
            || build_values_with::<R>(entry.count, &params).len() as i64,
            || build_boxed_with::<R>(entry.count, &params).len() as i64,
        )
    }

    fn run_utxo_calls(&self, operation: Operation) -> Vec<Measurement> {
        let family = RecordFamily::Utxo;
        let entry = fixed_entry(family, operation);
        let label = entry.label(family.noun());
        let params = Utxo::params(&entry);
        let mut vals = build_values_with::<Utxo>(entry.count, &params);
        let mut ptrs = build_boxed_with::<Utxo>(entry.count, &params);

        let pair = match operation {
            Operation::SlicePassing => self.pair(
                family,
                operation,
                &label,
                || total_amount(&vals),
                || total_amount(&ptrs),
            ),
            Operation::UsageCost => self.pair(
                family,
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
            ),
            Operation::ReturnOnly => self.pair(
                family,
                operation,
                &label,
                || bump_first(&mut vals).len() as i64,
                || bump_first(&mut ptrs).len() as i64,
            ),
            _ => return Vec::new(),
        };
        pair.into()
    }

    fn pair<V, B>(
        &self,
        family: RecordFamily,
        operation: Operation,
        label: &str,
        values: V,
        boxed: B,
    ) -> [Measurement; 2]
    where
        V: FnMut() -> i64,
        B: FnMut() -> i64,
    {
        [
            measure(
                bench_name(family, operation, label, Layout::Values),
                &self.measure,
                values,
            ),
            measure(
                bench_name(family, operation, label, Layout::Boxed),
                &self.measure,
                boxed,
            ),
        ]
    }
}
