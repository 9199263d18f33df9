use std::sync::RwLock;

use catalog_core::ProductId;
use catalog_products::{NewProduct, Product, ProductDraft};

/// The authoritative in-memory product collection.
///
/// Products are kept in insertion order; listing returns that sequence and
/// lookups are linear scans by id equality. One instance is built per process
/// (or per test) and handed to whoever needs it; there is deliberately no
/// global.
#[derive(Debug, Default)]
pub struct ProductStore {
    inner: RwLock<Vec<Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Build a store already holding `products`, in the given order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: RwLock::new(products),
        }
    }

    /// Snapshot of the full ordered sequence.
    pub fn list(&self) -> Vec<Product> {
        let items = match self.inner.read() {
            Ok(items) => items,
            Err(_) => return vec![],
        };
        items.clone()
    }

    /// Look up one product by id.
    pub fn get(&self, id: &ProductId) -> Option<Product> {
        let items = self.inner.read().ok()?;
        items.iter().find(|p| p.id == *id).cloned()
    }

    /// Append a product with a freshly generated id and return the stored
    /// record.
    pub fn insert(&self, fields: NewProduct) -> Product {
        let product = fields.into_product(ProductId::new());
        if let Ok(mut items) = self.inner.write() {
            items.push(product.clone());
        }
        product
    }

    /// Overwrite the fields present in `patch` on the product with this id.
    ///
    /// Absent fields keep their prior values and the product keeps its
    /// position. Returns the full record after the change, or `None` when
    /// the id is unknown (nothing is mutated in that case).
    pub fn update(&self, id: &ProductId, patch: ProductDraft) -> Option<Product> {
        let mut items = self.inner.write().ok()?;
        let product = items.iter_mut().find(|p| p.id == *id)?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(in_stock) = patch.in_stock {
            product.in_stock = in_stock;
        }

        Some(product.clone())
    }

    /// Remove the product with this id, keeping the relative order of the
    /// rest.
    ///
    /// Returns the removed record, or `None` when the id is unknown (nothing
    /// is mutated in that case).
    pub fn remove(&self, id: &ProductId) -> Option<Product> {
        let mut items = self.inner.write().ok()?;
        let index = items.iter().position(|p| p.id == *id)?;
        Some(items.remove(index))
    }

    /// Number of products currently held.
    pub fn len(&self) -> usize {
        match self.inner.read() {
            Ok(items) => items.len(),
            Err(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
