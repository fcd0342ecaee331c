//! Storage contract for the domain layer.
//!
//! The core only ever reads a slug or inserts a new one, so the contract is a
//! flat key-value store. Implementations live in `crate::infrastructure::store`
//! and a mock is auto-generated via `mockall` for unit tests.

pub mod key_value_store;

pub use key_value_store::{KeyValueStore, StoreError};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
