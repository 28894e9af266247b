//! Inert payload types modelled on a Bitcoin wallet library.
//!
//! None of these types carry behaviour. Their field layout only exists to give
//! each benchmark family a realistic size, so that copying a record by value
//! costs roughly what it would in a real wallet.

use std::borrow::Cow;
use std::sync::Arc;

/// A double SHA-256 transaction hash.
pub type Hash = [u8; 32];

/// Reference to an output of a previous transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

/// A transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TxIn {
    pub previous_out_point: OutPoint,
    pub signature_script: Vec<u8>,
    pub witness: Vec<Vec<u8>>,
    pub sequence: u32,
}

/// A transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TxOut {
    pub value: i64,
    pub pk_script: Vec<u8>,
}

/// A full transaction.
///
/// Inputs and outputs are individually boxed in both layouts, so only the
/// storage of the transactions themselves differs between them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MsgTx {
    pub version: i32,
    pub tx_in: Vec<Box<TxIn>>,
    pub tx_out: Vec<Box<TxOut>>,
    pub lock_time: u32,
}

/// Script template of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressType {
    PubKeyHash,
    Script,
    #[default]
    WitnessPubKey,
    WitnessScript,
    TaprootPubKey,
}

/// Unspent output as reported by a wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utxo {
    pub out_point: OutPoint,
    /// Value in satoshis.
    pub amount: i64,
    /// Shared with every other record built from the same dataset entry.
    pub pk_script: Arc<[u8]>,
    pub confirmations: i32,
    pub spendable: bool,
    pub address: Option<String>,
    pub account: Cow<'static, str>,
    pub address_type: AddressType,
    pub locked: bool,
}

/// BIP-44 derivation scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyScope {
    pub purpose: u32,
    pub coin: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountProperties {
    pub account_number: u32,
    pub account_name: String,
    pub external_key_count: u32,
    pub internal_key_count: u32,
    pub imported_key_count: u32,
    pub account_pub_key: Option<Vec<u8>>,
    pub master_key_fingerprint: u32,
    pub key_scope: KeyScope,
    pub is_watch_only: bool,
    pub addr_schema: Option<KeyScope>,
}

/// Account summary with its confirmed balance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountResult {
    pub properties: AccountProperties,
    pub total_balance: i64,
}

/// Bytes of payload in a [`LargeStruct`].
pub const LARGE_STRUCT_PAYLOAD: usize = 256;

/// A record large enough that copying it dominates building a sequence of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargeStruct {
    pub id: i64,
    pub data: [u8; LARGE_STRUCT_PAYLOAD],
}
