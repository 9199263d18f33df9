//! In-memory product storage.
//!
//! The store is the only shared mutable state in the service; everything
//! else works on snapshots taken from it.

pub mod product_store;

pub use product_store::ProductStore;
