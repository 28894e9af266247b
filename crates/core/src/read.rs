//! Consumers that read, pass and return record sequences.
//!
//! Every function is generic over `T: Borrow<R>` so the same code reads a
//! `&[R]` and a `&[Box<R>]`; monomorphization gives each layout its own copy.

use std::borrow::{Borrow, BorrowMut};

use super::records::Utxo;
use super::traits::Record;

/// Sums [`Record::checksum`] over every record.
pub fn checksum<R: Record, T: Borrow<R>>(records: &[T]) -> i64 {
    records
        .iter()
        .fold(0i64, |acc, r| acc.wrapping_add(r.borrow().checksum()))
}

/// Reads the whole sequence `reads` times. Zero reads return `0`.
pub fn read_repeatedly<R: Record, T: Borrow<R>>(records: &[T], reads: usize) -> i64 {
    (0..reads).fold(0i64, |acc, _| acc.wrapping_add(checksum::<R, T>(records)))
}

/// Takes the whole sequence as one slice argument. Only the slice reference
/// crosses the call, whatever the layout of its elements.
#[inline(never)]
pub fn total_amount<T: Borrow<Utxo>>(utxos: &[T]) -> i64 {
    utxos
        .iter()
        .fold(0i64, |acc, u| acc.wrapping_add(u.borrow().amount))
}

/// Takes one record by value. Callers holding a `&Utxo` have to clone it.
///
/// The clone is more than a struct copy: it increments the shared
/// `pk_script` refcount, and dropping the argument decrements it again,
/// both atomically. Measured by-value costs include that refcount traffic.
#[inline(never)]
pub fn process_utxo_value(utxo: Utxo) -> i64 {
    utxo.amount + i64::from(utxo.spendable)
}

/// Takes one record by reference.
#[inline(never)]
pub fn process_utxo_ref(utxo: &Utxo) -> i64 {
    utxo.amount + i64::from(utxo.spendable)
}

/// Increments the amount of the first record and hands the same slice back.
///
/// # Panics
/// Panics if `utxos` is empty.
#[inline(never)]
pub fn bump_first<T: BorrowMut<Utxo>>(utxos: &mut [T]) -> &mut [T] {
    utxos[0].borrow_mut().amount += 1;
    utxos
}
