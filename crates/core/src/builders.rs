use std::borrow::Cow;
use std::sync::Arc;

use common::DatasetEntry;

use super::records::{
    AccountProperties, AccountResult, AddressType, KeyScope, LARGE_STRUCT_PAYLOAD, LargeStruct,
    MsgTx, OutPoint, TxIn, TxOut, Utxo,
};
use super::traits::{Fill, Record};

/// Builds `entry.count` records stored inline.
pub fn build_values<R: Record>(entry: &DatasetEntry) -> Vec<R> {
    build_values_with(entry.count, &R::params(entry))
}

/// Builds `entry.count` records, each in its own heap allocation.
pub fn build_boxed<R: Record>(entry: &DatasetEntry) -> Vec<Box<R>> {
    build_boxed_with(entry.count, &R::params(entry))
}

/// Like [`build_values`], with the shared params prepared by the caller.
pub fn build_values_with<R: Record>(n: usize, params: &R::Params) -> Vec<R> {
    let mut out = match R::FILL {
        Fill::Presized => Vec::with_capacity(n),
        Fill::Grow => Vec::new(),
    };
    for i in 0..n {
        out.push(R::make(i, params));
    }
    out
}

/// Like [`build_boxed`], with the shared params prepared by the caller.
pub fn build_boxed_with<R: Record>(n: usize, params: &R::Params) -> Vec<Box<R>> {
    let mut out = match R::FILL {
        Fill::Presized => Vec::with_capacity(n),
        Fill::Grow => Vec::new(),
    };
    for i in 0..n {
        out.push(Box::new(R::make(i, params)));
    }
    out
}

/// A script of `size` bytes counting up from zero, shared by every [`Utxo`] of a sequence.
pub fn shared_script(size: usize) -> Arc<[u8]> {
    (0..size).map(|j| j as u8).collect()
}

/// Shape of every transaction in a [`MsgTx`] sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxShape {
    pub inputs: usize,
    pub outputs: usize,
    pub script_size: usize,
}

fn out_point(i: usize) -> OutPoint {
    let mut hash = [0u8; 32];
    hash[0] = (i % 251) as u8;
    OutPoint {
        hash,
        index: i as u32,
    }
}

impl Record for OutPoint {
    type Params = ();

    fn params(_: &DatasetEntry) -> Self::Params {}

    fn make(index: usize, _: &()) -> Self {
        out_point(index)
    }

    fn checksum(&self) -> i64 {
        i64::from(self.index) + i64::from(self.hash[0])
    }
}

impl Record for TxIn {
    /// Signature script length.
    type Params = usize;

    fn params(entry: &DatasetEntry) -> Self::Params {
        entry.size_or_zero()
    }

    fn make(index: usize, script_size: &usize) -> Self {
        TxIn {
            previous_out_point: out_point(index),
            signature_script: vec![0; *script_size],
            witness: Vec::new(),
            sequence: (100_000 + index) as u32,
        }
    }

    fn checksum(&self) -> i64 {
        self.signature_script.len() as i64
            + i64::from(self.sequence)
            + i64::from(self.previous_out_point.index)
            + i64::from(self.previous_out_point.hash[0])
    }
}

impl Record for TxOut {
    /// Public key script length.
    type Params = usize;

    fn params(entry: &DatasetEntry) -> Self::Params {
        entry.size_or_zero()
    }

    fn make(index: usize, script_size: &usize) -> Self {
        TxOut {
            value: 1000 + index as i64,
            pk_script: vec![0; *script_size],
        }
    }

    fn checksum(&self) -> i64 {
        self.value + self.pk_script.len() as i64
    }
}

impl Record for MsgTx {
    type Params = TxShape;

    fn params(entry: &DatasetEntry) -> Self::Params {
        let (inputs, outputs) = entry.multiplicity.unwrap_or((2, 2));
        TxShape {
            inputs,
            outputs,
            script_size: entry.size_or_zero(),
        }
    }

    fn make(index: usize, shape: &TxShape) -> Self {
        MsgTx {
            version: 2,
            tx_in: (0..shape.inputs)
                .map(|j| Box::new(TxIn::make(index + j, &shape.script_size)))
                .collect(),
            tx_out: (0..shape.outputs)
                .map(|k| Box::new(TxOut::make(index + k, &shape.script_size)))
                .collect(),
            lock_time: 0,
        }
    }

    fn checksum(&self) -> i64 {
        let inputs: i64 = self.tx_in.iter().map(|ti| ti.checksum()).sum();
        let outputs: i64 = self.tx_out.iter().map(|to| to.checksum()).sum();
        inputs + outputs
    }
}

impl Record for Utxo {
    type Params = Arc<[u8]>;

    const FILL: Fill = Fill::Grow;

    fn params(entry: &DatasetEntry) -> Self::Params {
        shared_script(entry.size_or_zero())
    }

    fn make(index: usize, pk_script: &Arc<[u8]>) -> Self {
        Utxo {
            out_point: out_point(index),
            amount: 1000 + index as i64,
            pk_script: Arc::clone(pk_script),
            confirmations: (index % 100) as i32,
            spendable: index % 2 == 0,
            address: None,
            account: Cow::Borrowed("default"),
            address_type: AddressType::WitnessPubKey,
            locked: false,
        }
    }

    fn checksum(&self) -> i64 {
        self.amount + self.pk_script.len() as i64 + i64::from(self.confirmations)
    }
}

impl Record for AccountResult {
    type Params = ();

    fn params(_: &DatasetEntry) -> Self::Params {}

    fn make(index: usize, _: &()) -> Self {
        AccountResult {
            properties: AccountProperties {
                account_number: index as u32,
                account_name: format!("acct-{}", index),
                external_key_count: (index % 100) as u32,
                internal_key_count: ((index + 7) % 100) as u32,
                imported_key_count: ((index + 13) % 100) as u32,
                account_pub_key: None,
                master_key_fingerprint: (index as u32).wrapping_mul(3),
                key_scope: KeyScope::default(),
                is_watch_only: index % 2 == 0,
                addr_schema: None,
            },
            total_balance: 1000 + index as i64,
        }
    }

    fn checksum(&self) -> i64 {
        let p = &self.properties;
        self.total_balance
            + i64::from(p.account_number)
            + i64::from(p.external_key_count)
            + i64::from(p.internal_key_count)
            + i64::from(p.imported_key_count)
            + i64::from(p.master_key_fingerprint)
            + p.account_name.len() as i64
            + i64::from(p.is_watch_only)
    }
}

impl Record for LargeStruct {
    type Params = ();

    const FILL: Fill = Fill::Grow;

    fn params(_: &DatasetEntry) -> Self::Params {}

    fn make(index: usize, _: &()) -> Self {
        LargeStruct {
            id: index as i64,
            data: [0; LARGE_STRUCT_PAYLOAD],
        }
    }

    fn checksum(&self) -> i64 {
        self.id + i64::from(self.data[0])
    }
}
