//! Products domain module.
//!
//! This crate contains business rules for the product catalog, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage): the
//! product model, required-field validation, listing queries, and stats.

pub mod product;
pub mod query;
pub mod stats;

pub use product::{NewProduct, Product, ProductDraft};
pub use query::{DEFAULT_LIMIT, DEFAULT_PAGE, ProductQuery};
pub use stats::category_counts;
