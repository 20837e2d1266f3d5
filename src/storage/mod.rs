//! Storage layer for the expense tracker
//!
//! Transactions come from a [`TransactionSource`]. The only implementation is
//! the in-memory mock; a persistent backend would implement the same trait
//! without touching the filter or summary code.

pub mod mock;

pub use mock::MockTransactionSource;

use crate::models::Transaction;

/// Anything that can list every known transaction
pub trait TransactionSource {
    /// Return a fresh sequence of all transactions, in source order.
    ///
    /// Callers must not rely on getting the same allocation back twice.
    fn list_all(&self) -> Vec<Transaction>;
}

impl<T: TransactionSource + ?Sized> TransactionSource for &T {
    fn list_all(&self) -> Vec<Transaction> {
        (**self).list_all()
    }
}

impl<T: TransactionSource + ?Sized> TransactionSource for Box<T> {
    fn list_all(&self) -> Vec<Transaction> {
        (**self).list_all()
    }
}

impl TransactionSource for Vec<Transaction> {
    fn list_all(&self) -> Vec<Transaction> {
        self.clone()
    }
}
