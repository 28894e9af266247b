pub mod builders;
pub mod read;
pub mod records;
pub mod traits;

pub use builders::{
    TxShape, build_boxed, build_boxed_with, build_values, build_values_with, shared_script,
};
pub use records::{AccountResult, LargeStruct, MsgTx, OutPoint, TxIn, TxOut, Utxo};
pub use traits::{Fill, Record};
